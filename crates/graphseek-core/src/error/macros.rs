//! Error macros for graphseek

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::SeekError::UsageError($msg.to_string()))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::SeekError::unsupported(
            $context, $value, $supported,
        ))
    };
}

/// Macro for rejecting oracle feedback
#[macro_export]
macro_rules! bail_feedback {
    ($queried:expr, $reason:expr) => {
        return Err($crate::error::SeekError::invalid_feedback(
            $queried, $reason,
        ))
    };
}
