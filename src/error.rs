use thiserror::Error;

/// Errors raised while building a scene. Both variants signal caller bugs:
/// there is no recovery path, the offending call has to be fixed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SvgError {
    /// An operation was invoked on an element whose tag does not support it.
    #[error("{operation} is not available on <{tag}> elements")]
    CapabilityMismatch {
        operation: &'static str,
        tag: &'static str,
    },

    /// A view-box-relative conversion was asked for a fraction outside [0, 1].
    #[error("percentage {value} is outside the 0..=1 range")]
    PercentOutOfRange { value: f64 },
}
