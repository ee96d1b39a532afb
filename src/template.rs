use crate::plugin::Permission;

const FILESYSTEM_BLOCK: &str = r#"function cmd_filesystem(ctx)
    -- Add your filesystem operations here
end

c2.register_command("/test-fs", cmd_filesystem)
"#;

const HTTP_BLOCK: &str = r#"function cmd_http(ctx)
    -- Add your HTTP operations here
end

c2.register_command("/test-http", cmd_http)
"#;

/// Build the starter init.lua for a plugin.
///
/// Any filesystem permission adds a single `/test-fs` command stub and HTTP
/// adds a `/test-http` stub, always in that order.
pub fn build_init_lua(name: &str, permissions: &[Permission]) -> String {
    let mut content = format!(
        "print(\"{} plugin initialized!\")\n\n",
        escape_lua_string(name)
    );

    if permissions.iter().any(|p| p.is_filesystem()) {
        content.push_str(FILESYSTEM_BLOCK);
    }

    if permissions.contains(&Permission::Http) {
        content.push_str(HTTP_BLOCK);
    }

    content
}

/// Escape text for use inside a double-quoted Lua string literal.
fn escape_lua_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}
