//! Core types for path handling.

/// Selects how far a user-supplied path is normalized.
///
/// - **Absolute** paths are cleaned and anchored at the working directory.
///   This is the default for every path argument.
/// - **Relative** paths are cleaned only. Used when creating a link whose
///   target should be stored exactly as the user wrote it.
///
/// # Examples
///
/// ```
/// use slink::path::NormalizeMode;
///
/// assert_eq!(NormalizeMode::from_relative_flag(true), NormalizeMode::Relative);
/// assert_eq!(NormalizeMode::default(), NormalizeMode::Absolute);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalizeMode {
    /// Clean and resolve against the working directory.
    #[default]
    Absolute,

    /// Clean only; relative paths stay relative.
    Relative,
}

impl NormalizeMode {
    /// Pick the mode matching a `--relative` style flag.
    #[must_use]
    pub const fn from_relative_flag(relative: bool) -> Self {
        if relative {
            Self::Relative
        } else {
            Self::Absolute
        }
    }

    /// Whether this mode anchors paths at the working directory.
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_relative_flag() {
        assert_eq!(NormalizeMode::from_relative_flag(false), NormalizeMode::Absolute);
        assert_eq!(NormalizeMode::from_relative_flag(true), NormalizeMode::Relative);
    }

    #[test]
    fn test_is_absolute() {
        assert!(NormalizeMode::Absolute.is_absolute());
        assert!(!NormalizeMode::Relative.is_absolute());
    }
}
