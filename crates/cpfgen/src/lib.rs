//! # cpfgen
//!
//! Random, checksum-consistent identifiers shaped like Brazilian CPF numbers.
//!
//! A [`Cpf`] is 11 decimal digits rendered as `DDD.DDD.DDD-DD`. The first nine
//! digits are drawn from a [`DigitSource`]; the last two are check digits
//! computed with the weighted-sum modulo-11 rule (see [`check_digit`]).
//!
//! ```
//! use cpfgen::{Cpf, CpfGenerator, SeededRandom};
//!
//! let mut generator = CpfGenerator::new(SeededRandom::from_seed(42));
//! let cpf = generator.next_cpf();
//! assert!(cpf.to_string().parse::<Cpf>().is_ok());
//!
//! let fixed = Cpf::from_base([1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(fixed.to_string(), "123.456.789-09");
//! ```
//!
//! [`scan()`] finds formatted identifiers in free text, and [`post_as_get`] with
//! [`GetCheck`] supports replaying form posts as `GET` requests.
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`Cpf`] as its formatted string.
//! - `tracing`: instrument generation with `tracing` spans.

mod cpf;
mod error;
mod generator;
mod getcheck;
mod rand;
mod random_native;
mod scan;
#[cfg(feature = "serde")]
mod serde;

pub use crate::cpf::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::getcheck::*;
pub use crate::rand::*;
pub use crate::random_native::*;
pub use crate::scan::*;
