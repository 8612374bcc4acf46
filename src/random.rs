//! Bounded random primitives.
//!
//! Every generator takes the random source as a parameter (`&mut R` where
//! `R: Rng`). Production runs pass an entropy-seeded `StdRng`; tests pass a
//! `StdRng::seed_from_u64` so outputs are reproducible.
//!
//! ## Ranges
//!
//! All ranges are inclusive on both ends. [`Bounds`] is the validated form:
//! once constructed, `min <= max` holds, so [`Bounds::sample`] cannot fail.
//! [`random_int`] is the unchecked entry point and reports inverted ranges as
//! [`InvalidBounds`].
//!
//! ## Text
//!
//! Random text draws from printable ASCII without the space character
//! (`!` through `~`). Fixture text is therefore full of markup characters
//! (`<`, `&`, `"`), which the renderer escapes.

use crate::types::{BirthDate, Coordinates};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// First character of the random text alphabet (`!`, code point 33).
const TEXT_FIRST: u8 = b'!';
/// Last character of the random text alphabet (`~`, code point 126).
const TEXT_LAST: u8 = b'~';

pub const BIRTH_DAY: Bounds = Bounds { min: 1, max: 31 };
pub const BIRTH_MONTH: Bounds = Bounds { min: 1, max: 12 };
pub const BIRTH_YEAR: Bounds = Bounds {
    min: 1000,
    max: 2000,
};
pub const COORDINATE: Bounds = Bounds { min: 1, max: 300 };

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid range: max {max} is below min {min}")]
pub struct InvalidBounds {
    pub min: u32,
    pub max: u32,
}

/// A config range that is not a valid `[min, max]` pair.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("expected a [min, max] pair, got {0} values")]
    Arity(usize),
    #[error(transparent)]
    Inverted(#[from] InvalidBounds),
}

/// Inclusive integer range with `min <= max`.
///
/// Serialized as a two-element array, `[min, max]`, which is how ranges are
/// written in the generator config. Reading goes through a `Vec` so that
/// arrays of any other length are rejected instead of truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "[u32; 2]")]
pub struct Bounds {
    min: u32,
    max: u32,
}

impl Bounds {
    pub fn new(min: u32, max: u32) -> Result<Self, InvalidBounds> {
        if max < min {
            return Err(InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(self) -> u32 {
        self.min
    }

    pub fn max(self) -> u32 {
        self.max
    }

    /// Cap both ends at `cap`. The result stays non-inverted.
    ///
    /// Used for the short title, whose length may never exceed the long
    /// title it is cut from.
    pub fn capped_at(self, cap: u32) -> Self {
        Self {
            min: self.min.min(cap),
            max: self.max.min(cap),
        }
    }

    /// Draw a uniform value from the range.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

impl TryFrom<Vec<u32>> for Bounds {
    type Error = RangeError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        match *values.as_slice() {
            [min, max] => Ok(Self::new(min, max)?),
            _ => Err(RangeError::Arity(values.len())),
        }
    }
}

impl From<Bounds> for [u32; 2] {
    fn from(bounds: Bounds) -> Self {
        [bounds.min, bounds.max]
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Uniform integer in `[min, max]`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> Result<u32, InvalidBounds> {
    Ok(Bounds::new(min, max)?.sample(rng))
}

/// Exactly `length` characters from the printable ASCII range, space excluded.
pub fn random_text<R: Rng + ?Sized>(rng: &mut R, length: u32) -> String {
    (0..length)
        .map(|_| char::from(rng.gen_range(TEXT_FIRST..=TEXT_LAST)))
        .collect()
}

/// Random text whose length is itself drawn from `length`.
pub fn random_text_in<R: Rng + ?Sized>(rng: &mut R, length: Bounds) -> String {
    let length = length.sample(rng);
    random_text(rng, length)
}

/// Random date with the default day, month and year ranges.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R) -> BirthDate {
    random_date_in(rng, BIRTH_YEAR)
}

/// Random date with day 1–31 and month 1–12, each drawn independently.
///
/// Day and month are not checked against each other: `31-02-1500` is a
/// valid result.
pub fn random_date_in<R: Rng + ?Sized>(rng: &mut R, year: Bounds) -> BirthDate {
    BirthDate {
        day: BIRTH_DAY.sample(rng),
        month: BIRTH_MONTH.sample(rng),
        year: year.sample(rng),
    }
}

/// Four independent values in `[1, 300]`.
pub fn random_coordinates<R: Rng + ?Sized>(rng: &mut R) -> Coordinates {
    random_coordinates_in(rng, COORDINATE)
}

pub fn random_coordinates_in<R: Rng + ?Sized>(rng: &mut R, range: Bounds) -> Coordinates {
    Coordinates([
        range.sample(rng),
        range.sample(rng),
        range.sample(rng),
        range.sample(rng),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::seeded;

    #[test]
    fn bounds_rejects_inverted_range() {
        assert_eq!(Bounds::new(5, 4), Err(InvalidBounds { min: 5, max: 4 }));
        assert!(Bounds::new(4, 4).is_ok());
    }

    #[test]
    fn bounds_from_values_requires_a_pair() {
        let from = |values: &[u32]| Bounds::try_from(values.to_vec());
        assert_eq!(from(&[2, 9]), Ok(Bounds::new(2, 9).unwrap()));
        assert_eq!(from(&[1, 2, 3]), Err(RangeError::Arity(3)));
        assert_eq!(from(&[1]), Err(RangeError::Arity(1)));
        assert_eq!(from(&[]), Err(RangeError::Arity(0)));
        assert_eq!(
            from(&[9, 2]),
            Err(RangeError::Inverted(InvalidBounds { min: 9, max: 2 }))
        );
    }

    #[test]
    fn random_int_stays_inclusive() {
        let mut rng = seeded(1);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let n = random_int(&mut rng, 1, 5).unwrap();
            assert!((1..=5).contains(&n));
            seen_min |= n == 1;
            seen_max |= n == 5;
        }
        assert!(seen_min && seen_max, "both ends must be reachable");
    }

    #[test]
    fn random_int_single_value_range() {
        let mut rng = seeded(2);
        assert_eq!(random_int(&mut rng, 7, 7), Ok(7));
    }

    #[test]
    fn random_int_inverted_is_error() {
        let mut rng = seeded(3);
        assert!(random_int(&mut rng, 10, 9).is_err());
    }

    #[test]
    fn random_text_has_exact_length() {
        let mut rng = seeded(4);
        for len in [0, 1, 15, 100] {
            assert_eq!(random_text(&mut rng, len).chars().count(), len as usize);
        }
    }

    #[test]
    fn random_text_zero_length_is_empty() {
        let mut rng = seeded(5);
        assert_eq!(random_text(&mut rng, 0), "");
    }

    #[test]
    fn random_text_is_printable_ascii_without_space() {
        let mut rng = seeded(6);
        let text = random_text(&mut rng, 5000);
        assert!(text.bytes().all(|b| (33..=126).contains(&b)));
        assert!(!text.contains(' '));
    }

    #[test]
    fn random_date_fields_in_range() {
        let mut rng = seeded(7);
        for _ in 0..1000 {
            let date = random_date(&mut rng);
            assert!((1..=31).contains(&date.day));
            assert!((1..=12).contains(&date.month));
            assert!((1000..=2000).contains(&date.year));
        }
    }

    #[test]
    fn random_coordinates_in_range() {
        let mut rng = seeded(8);
        for _ in 0..1000 {
            let Coordinates(values) = random_coordinates(&mut rng);
            assert!(values.iter().all(|v| (1..=300).contains(v)));
        }
    }

    #[test]
    fn capped_at_never_inverts() {
        let bounds = Bounds::new(1, 10).unwrap();
        assert_eq!(bounds.capped_at(4), Bounds::new(1, 4).unwrap());
        assert_eq!(bounds.capped_at(20), bounds);
        assert_eq!(bounds.capped_at(0), Bounds::new(0, 0).unwrap());
    }

    #[test]
    fn same_seed_same_text() {
        let a = random_text(&mut seeded(42), 64);
        let b = random_text(&mut seeded(42), 64);
        assert_eq!(a, b);
    }
}
