use thiserror::Error;

/// Errors raised by [`crate::BigNumber`] construction and division.
///
/// All errors are reported synchronously at the point of detection; no
/// partial value is ever produced alongside one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigNumberError {
    /// Malformed decimal text. The snippet holds the first invalid character
    /// with a few characters of surrounding context, clamped to the input
    /// bounds.
    #[error("For input string: \"{snippet}\"")]
    Format { snippet: String },

    /// A digit-sequence constructor was handed a value outside `0..=9`.
    #[error("invalid decimal digit: {digit}")]
    InvalidDigit { digit: u8 },

    /// A digit-sequence constructor was handed no digits at all; every value
    /// carries at least one digit.
    #[error("empty digit sequence")]
    EmptyDigits,

    /// Attempted division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
