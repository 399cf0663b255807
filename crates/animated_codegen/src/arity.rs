//! Validated generator arity

use std::fmt;

use crate::error::{CodegenError, Result};
use crate::labels::MAX_ARITY;

/// Number of animatable sources a generated overload accepts (`1..=26`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(usize);

impl Arity {
    /// Arity used when none is supplied
    pub const DEFAULT: Arity = Arity(2);

    /// Validate a raw arity as parsed from the command line
    pub fn new(raw: i64) -> Result<Self> {
        if raw <= 0 {
            return Err(CodegenError::NonPositiveArity(raw));
        }
        if raw > MAX_ARITY as i64 {
            return Err(CodegenError::ArityTooLarge {
                arity: raw,
                max: MAX_ARITY,
            });
        }
        Ok(Arity(raw as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of (type, source) combinations: `4^N`
    pub fn combination_count(self) -> u64 {
        1u64 << (2 * self.0)
    }
}

impl Default for Arity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Arity {
    type Error = CodegenError;

    fn try_from(raw: i64) -> Result<Self> {
        Arity::new(raw)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
