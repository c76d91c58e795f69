//! Adapts [`CapoError`] into miette diagnostics for terminal reporting.

use capo::CapoError;
use miette::Diagnostic;
use thiserror::Error;

/// A display-ready diagnostic wrapping a CLI error.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct Reportable {
    message: String,

    #[help]
    help: Option<String>,
}

/// Builds a reportable diagnostic from an error, attaching a usage hint
/// where one exists.
pub fn to_reportable(err: &CapoError) -> Reportable {
    let help = match err {
        CapoError::InvalidInput(_) => Some(
            "positions are comma-separated, lowest-pitch string first, e.g. -1,3,2,0,1,0"
                .to_string(),
        ),
        CapoError::UnknownShape(_) => Some(format!(
            "built-in shapes: {}",
            capo::library::shape_names().join(", ")
        )),
        CapoError::ScaleNotFound { .. } => {
            Some("note and mode must match entries in the reference data".to_string())
        }
        CapoError::Io(_) | CapoError::Data { .. } => None,
    };

    Reportable {
        message: err.to_string(),
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shape_hint_lists_shapes() {
        let err = CapoError::UnknownShape("Z".to_string());
        let reportable = to_reportable(&err);
        assert_eq!(reportable.message, "unknown chord shape `Z`");
        assert!(reportable.help.as_deref().unwrap().contains("Am"));
    }

    #[test]
    fn test_io_has_no_hint() {
        let err = CapoError::Io(std::io::Error::other("boom"));
        assert!(to_reportable(&err).help.is_none());
    }
}
