
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{BASE_LEN, Cpf, DigitSource, ThreadRandom};

/// A stateless identifier generator parameterized by its digit source.
///
/// Each call draws nine fresh digits and derives both check digits, so two
/// identifiers produced by the same generator are unrelated apart from sharing
/// the random stream.
///
/// ## Recommended When
/// - You want reproducible identifiers (pair with [`crate::SeededRandom`])
/// - You need many identifiers from one long-lived source
///
/// ## See Also
/// - [`generate_cpf`] for a one-off call with a borrowed source
/// - [`generate_identifier`] for the formatted string straight from the
///   thread-local RNG
pub struct CpfGenerator<R>
where
    R: DigitSource,
{
    rng: R,
}

impl<R> CpfGenerator<R>
where
    R: DigitSource,
{
    /// Creates a new [`CpfGenerator`] drawing digits from `rng`.
    ///
    /// # Example
    /// ```
    /// use cpfgen::{CpfGenerator, ThreadRandom};
    ///
    /// let mut generator = CpfGenerator::new(ThreadRandom);
    /// let cpf = generator.next_cpf();
    /// assert_eq!(cpf.to_string().len(), 14);
    /// ```
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates the next identifier.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_cpf(&mut self) -> Cpf {
        generate_cpf(&mut self.rng)
    }

    /// Consumes the generator, returning its digit source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Default for CpfGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}

impl<R> Iterator for CpfGenerator<R>
where
    R: DigitSource,
{
    type Item = Cpf;

    fn next(&mut self) -> Option<Cpf> {
        Some(self.next_cpf())
    }
}

/// Draws nine digits from `rng` and returns the resulting identifier.
pub fn generate_cpf<R>(rng: &mut R) -> Cpf
where
    R: DigitSource + ?Sized,
{
    let mut base = [0; BASE_LEN];
    for slot in &mut base {
        *slot = rng.next_digit();
    }
    Cpf::from_base(base)
}

/// Generates a formatted identifier (`XXX.XXX.XXX-YY`) from the thread-local
/// RNG.
#[must_use]
pub fn generate_identifier() -> String {
    generate_cpf(&mut ThreadRandom).to_string()
}
