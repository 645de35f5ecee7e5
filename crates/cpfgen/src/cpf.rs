use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Number of randomly drawn digits.
pub const BASE_LEN: usize = 9;
/// Total number of digits, check digits included.
pub const CPF_LEN: usize = 11;
/// Length of the `DDD.DDD.DDD-DD` text form.
pub const FORMATTED_LEN: usize = 14;

/// Computes the check digit for `seq`.
///
/// Each digit is weighted by `seq.len() + 1 - i`, so the first digit of a
/// nine-digit sequence gets weight 10 and the last one weight 2. The weighted
/// sum is reduced modulo 11; a remainder of 0 or 1 yields `0`, anything else
/// yields `11 - remainder`.
///
/// ```
/// use cpfgen::check_digit;
///
/// // 210 mod 11 == 1
/// assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 0);
/// // 255 mod 11 == 2
/// assert_eq!(check_digit(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0]), 9);
/// ```
#[must_use]
pub fn check_digit(seq: &[u8]) -> u8 {
    let n = seq.len() + 1;
    let sum: usize = seq
        .iter()
        .enumerate()
        .map(|(i, &d)| (n - i) * usize::from(d))
        .sum();
    match sum % 11 {
        value if value > 1 => (11 - value) as u8,
        _ => 0,
    }
}

/// An 11-digit identifier whose last two digits are check digits of the first
/// nine.
///
/// A `Cpf` can only be built through [`Cpf::from_base`], which computes the
/// check digits, or through validated parsing, so every value upholds the
/// checksum law.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpf {
    digits: [u8; CPF_LEN],
}

impl Cpf {
    /// Builds an identifier from its nine base digits, appending both check
    /// digits.
    ///
    /// Digits above 9 are reduced modulo 10.
    #[must_use]
    pub fn from_base(base: [u8; BASE_LEN]) -> Self {
        let mut digits = [0; CPF_LEN];
        for (slot, d) in digits.iter_mut().zip(base) {
            *slot = d % 10;
        }
        digits[BASE_LEN] = check_digit(&digits[..BASE_LEN]);
        digits[BASE_LEN + 1] = check_digit(&digits[..=BASE_LEN]);
        Self { digits }
    }

    /// Builds an identifier from all eleven digits, verifying the range of each
    /// digit and the trailing check digits.
    ///
    /// # Errors
    /// - [`Error::DigitOutOfRange`] when a digit is above 9
    /// - [`Error::ChecksumMismatch`] when the check digits are wrong
    pub fn from_digits(digits: [u8; CPF_LEN]) -> Result<Self> {
        if let Some(&digit) = digits.iter().find(|&&d| d > 9) {
            return Err(Error::DigitOutOfRange { digit });
        }
        let mut base = [0; BASE_LEN];
        base.copy_from_slice(&digits[..BASE_LEN]);
        let cpf = Self::from_base(base);
        let found = [digits[BASE_LEN], digits[BASE_LEN + 1]];
        if cpf.check_digits() != found {
            return Err(Error::ChecksumMismatch {
                expected: cpf.check_digits(),
                found,
            });
        }
        Ok(cpf)
    }

    /// All eleven digits.
    #[must_use]
    pub const fn digits(&self) -> [u8; CPF_LEN] {
        self.digits
    }

    /// The nine randomly drawn digits.
    #[must_use]
    pub fn base(&self) -> [u8; BASE_LEN] {
        let mut base = [0; BASE_LEN];
        base.copy_from_slice(&self.digits[..BASE_LEN]);
        base
    }

    /// The two trailing check digits.
    #[must_use]
    pub const fn check_digits(&self) -> [u8; 2] {
        [self.digits[BASE_LEN], self.digits[BASE_LEN + 1]]
    }

    /// Parses either the `DDD.DDD.DDD-DD` form or eleven bare digits.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] for any other length
    /// - [`Error::InvalidChar`] for a misplaced separator or non-digit
    /// - [`Error::ChecksumMismatch`] when the check digits are wrong
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let mut digits = [0; CPF_LEN];
        let mut next = 0;
        match bytes.len() {
            FORMATTED_LEN => {
                for (position, &byte) in bytes.iter().enumerate() {
                    match (position, byte) {
                        (3 | 7, b'.') | (11, b'-') => {}
                        (3 | 7 | 11, _) => return Err(Error::InvalidChar { byte, position }),
                        (_, b'0'..=b'9') => {
                            digits[next] = byte - b'0';
                            next += 1;
                        }
                        _ => return Err(Error::InvalidChar { byte, position }),
                    }
                }
            }
            CPF_LEN => {
                for (position, &byte) in bytes.iter().enumerate() {
                    if !byte.is_ascii_digit() {
                        return Err(Error::InvalidChar { byte, position });
                    }
                    digits[position] = byte - b'0';
                }
            }
            len => return Err(Error::InvalidLength { len }),
        }
        Self::from_digits(digits)
    }
}

/// Returns `true` when `s` parses as a checksum-consistent identifier, in
/// either the formatted or the bare form.
#[must_use]
pub fn is_valid_cpf(s: &str) -> bool {
    Cpf::parse(s).is_ok()
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.digits;
        write!(
            f,
            "{}{}{}.{}{}{}.{}{}{}-{}{}",
            d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7], d[8], d[9], d[10]
        )
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cpf").field(&format_args!("{self}")).finish()
    }
}

impl FromStr for Cpf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
