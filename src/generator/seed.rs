//! Seed authoring rules: the range content editors may pick from, parsing of
//! the seed text box, and the "Random" button.

use rand::Rng;

use crate::foundation::{
    core::Seed,
    error::{KeyImageError, KeyImageResult},
};

/// Smallest seed an author may assign.
pub const SEED_MIN: i64 = 0;
/// Largest seed an author may assign.
pub const SEED_MAX: i64 = 9999;

impl Seed {
    /// Validate a seed against the authoring range `[0, 9999]`.
    pub fn authored(v: i64) -> KeyImageResult<Self> {
        if !(SEED_MIN..=SEED_MAX).contains(&v) {
            return Err(KeyImageError::invalid_argument(format!(
                "seed {v} is outside {SEED_MIN}..={SEED_MAX}"
            )));
        }
        Ok(Self(v))
    }

    pub fn is_authored_range(self) -> bool {
        (SEED_MIN..=SEED_MAX).contains(&self.0)
    }
}

/// Interpret the seed text field.
///
/// Blank text clears the field (`None`). Anything else must be a whole
/// decimal integer inside the authoring range.
pub fn parse_seed_input(text: &str) -> KeyImageResult<Option<Seed>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let v: i64 = text.parse().map_err(|_| {
        KeyImageError::invalid_argument(format!("seed '{text}' is not an integer"))
    })?;
    Seed::authored(v).map(Some)
}

/// Fresh seed drawn uniformly from the authoring range.
pub fn random_seed<R: Rng>(rng: &mut R) -> Seed {
    Seed(rng.random_range(SEED_MIN..=SEED_MAX))
}

/// [`random_seed`] using the thread-local generator.
pub fn random_seed_thread() -> Seed {
    random_seed(&mut rand::rng())
}

#[cfg(test)]
#[path = "../../tests/unit/generator/seed.rs"]
mod tests;
