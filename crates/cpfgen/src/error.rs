/// A result type defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `cpfgen` can produce.
///
/// Generation is infallible; every variant here comes from turning untrusted
/// input (text or raw digits) into a [`crate::Cpf`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is neither the 14-character formatted form nor the
    /// 11-character bare form.
    #[error("invalid length: {len}")]
    InvalidLength { len: usize },

    /// A byte that is not allowed at this position (a non-digit where a digit
    /// is expected, or a wrong separator).
    #[error("invalid byte {byte:#04x} at position {position}")]
    InvalidChar { byte: u8, position: usize },

    /// A raw digit outside `0..=9`.
    #[error("digit out of range: {digit}")]
    DigitOutOfRange { digit: u8 },

    /// The trailing check digits do not match the ones computed from the
    /// first nine digits.
    #[error("checksum mismatch: expected {expected:?}, found {found:?}")]
    ChecksumMismatch { expected: [u8; 2], found: [u8; 2] },
}
