use thiserror::Error;

/// Failure of an exactness, range, or extraction operation on a literal
/// or a numeric value. Every variant maps onto one decode failure
/// category in the binding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("value has a non-zero fractional part")]
    NotIntegral,
    #[error("value is out of range for the destination width")]
    OutOfRange,
    #[error("literal digits are malformed")]
    Malformed,
    #[error("value kind does not match the requested kind")]
    KindMismatch,
}
