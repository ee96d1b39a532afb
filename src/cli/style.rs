use anstyle::{AnsiColor, Color, Style};

const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const NOTICE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

pub fn success(text: &str) -> String {
    paint(SUCCESS, text)
}

pub fn notice(text: &str) -> String {
    paint(NOTICE, text)
}

pub fn error(text: &str) -> String {
    paint(ERROR, text)
}

fn paint(style: Style, text: &str) -> String {
    if colors_enabled() {
        format!("{}{}{}", style.render(), text, style.render_reset())
    } else {
        text.to_string()
    }
}

/// Honors https://no-color.org
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}
