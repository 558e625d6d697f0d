//! Error types for chartwire.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for chartwire operations.
#[derive(Error, Debug)]
pub enum ChartwireError {
    /// User provided invalid arguments or misused the component registry.
    #[error("{0}")]
    UserError(String),

    /// Installer config could not be read, parsed or validated.
    #[error("invalid installer config: {0}")]
    ConfigError(String),

    /// A chart configuration could not be constructed from the render context.
    #[error("configuration construction failed: {0}")]
    ConstructionFailed(String),

    /// A registered component failed during a render pass.
    #[error("component '{component}' failed to render: {source}")]
    RenderFailed {
        component: String,
        #[source]
        source: Box<ChartwireError>,
    },
}

impl ChartwireError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChartwireError::UserError(_) => exit_codes::USER_ERROR,
            ChartwireError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            ChartwireError::ConstructionFailed(_) => exit_codes::RENDER_FAILURE,
            ChartwireError::RenderFailed { .. } => exit_codes::RENDER_FAILURE,
        }
    }
}

/// Result type alias for chartwire operations.
pub type Result<T> = std::result::Result<T, ChartwireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ChartwireError::UserError("unknown component".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = ChartwireError::ConfigError("bad namespace".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn construction_and_render_errors_share_exit_code() {
        let inner = ChartwireError::ConstructionFailed("bad override".to_string());
        assert_eq!(inner.exit_code(), exit_codes::RENDER_FAILURE);

        let wrapped = ChartwireError::RenderFailed {
            component: "agent-smith".to_string(),
            source: Box::new(inner),
        };
        assert_eq!(wrapped.exit_code(), exit_codes::RENDER_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ChartwireError::ConfigError("namespace must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid installer config: namespace must not be empty"
        );

        let err = ChartwireError::RenderFailed {
            component: "agent-smith".to_string(),
            source: Box::new(ChartwireError::ConstructionFailed("boom".to_string())),
        };
        assert_eq!(
            err.to_string(),
            "component 'agent-smith' failed to render: configuration construction failed: boom"
        );
    }
}
