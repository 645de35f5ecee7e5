/// A trait for random sources that return decimal digits.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// # Example
/// ```
/// use cpfgen::DigitSource;
///
/// struct FixedDigit;
/// impl DigitSource for FixedDigit {
///     fn next_digit(&mut self) -> u8 {
///         7
///     }
/// }
///
/// let mut rng = FixedDigit;
/// assert_eq!(rng.next_digit(), 7);
/// ```
pub trait DigitSource {
    /// Returns a uniformly distributed digit in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

impl<R: DigitSource + ?Sized> DigitSource for &mut R {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }
}
