use crate::Result;

/// What to do about the target plugin directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub proceed: bool,
    pub overwrite: bool,
}

impl Resolution {
    pub const CREATE: Self = Self {
        proceed: true,
        overwrite: false,
    };
    pub const OVERWRITE: Self = Self {
        proceed: true,
        overwrite: true,
    };
    pub const ABORT: Self = Self {
        proceed: false,
        overwrite: false,
    };
}

/// Decide whether generation may continue.
///
/// `confirm` is only asked when the directory already exists. Declining
/// aborts; accepting overwrites the generated files in place.
pub fn resolve<F>(directory_exists: bool, confirm: F) -> Result<Resolution>
where
    F: FnOnce() -> Result<bool>,
{
    if !directory_exists {
        return Ok(Resolution::CREATE);
    }

    if confirm()? {
        Ok(Resolution::OVERWRITE)
    } else {
        Ok(Resolution::ABORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_missing_directory_does_not_ask() {
        let resolution = resolve(false, || panic!("should not prompt")).unwrap();
        assert_eq!(resolution, Resolution::CREATE);
    }

    #[test]
    fn test_existing_directory_declined() {
        let resolution = resolve(true, || Ok(false)).unwrap();
        assert!(!resolution.proceed);
    }

    #[test]
    fn test_existing_directory_accepted() {
        let resolution = resolve(true, || Ok(true)).unwrap();
        assert_eq!(resolution, Resolution::OVERWRITE);
    }

    #[test]
    fn test_interrupt_propagates() {
        let result = resolve(true, || Err(Error::Interrupted));
        assert!(matches!(result, Err(Error::Interrupted)));
    }
}
