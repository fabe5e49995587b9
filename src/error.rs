//! Setup errors
//!
//! The per-tick paths never fail; everything that can go wrong is caught
//! while a round is being assembled and is fatal for that round.

use std::fmt;

#[derive(Debug)]
pub enum SetupError {
    /// Config or scene JSON could not be parsed
    Parse {
        what: &'static str,
        source: serde_json::Error,
    },
    /// Config or scene file could not be read
    Io {
        path: String,
        source: std::io::Error,
    },
    /// A scene reference the round cannot run without is absent
    MissingReference(&'static str),
    /// A ground segment has unusable geometry
    InvalidSegment { index: usize, width: f32 },
    /// World dimensions are not positive
    InvalidWorld { width: f32, height: f32 },
    /// A tuning value is out of its allowed range
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Parse { what, source } => write!(f, "failed to parse {what}: {source}"),
            SetupError::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            SetupError::MissingReference(name) => {
                write!(f, "scene is missing required reference `{name}`")
            }
            SetupError::InvalidSegment { index, width } => {
                write!(f, "ground segment {index} has invalid width {width}")
            }
            SetupError::InvalidWorld { width, height } => {
                write!(f, "world size {width}x{height} must be positive")
            }
            SetupError::InvalidTuning { field, reason } => {
                write!(f, "tuning value `{field}` {reason}")
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Parse { source, .. } => Some(source),
            SetupError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read a whole config file, tagging failures with the path
pub(crate) fn read_file(path: &std::path::Path) -> Result<String, SetupError> {
    std::fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_missing_reference() {
        let err = SetupError::MissingReference("ground");
        assert_eq!(err.to_string(), "scene is missing required reference `ground`");
    }

    #[test]
    fn test_parse_error_has_source() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = SetupError::Parse {
            what: "tuning",
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to parse tuning"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SetupError::Io { .. }));
    }
}
