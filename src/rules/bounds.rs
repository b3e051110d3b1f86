// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Line length bounds.

use crate::error::RulesError;

/// Minimum and maximum allowed line length.
///
/// Always satisfies `0 < min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// Default minimum header length.
    pub const DEFAULT_MIN: usize = 10;
    /// Default maximum header, body and footer line length.
    pub const DEFAULT_MAX: usize = 100;

    /// Create bounds, rejecting zero or inverted values.
    pub fn new(min: usize, max: usize) -> Result<Self, RulesError> {
        if min == 0 || min >= max {
            return Err(RulesError::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = LengthBounds::new(LengthBounds::DEFAULT_MIN, LengthBounds::DEFAULT_MAX).unwrap();
        assert_eq!(bounds.min(), 10);
        assert_eq!(bounds.max(), 100);
        assert!(bounds.min() < bounds.max());
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(LengthBounds::new(0, 10).is_err());
        assert!(LengthBounds::new(10, 10).is_err());
        assert!(LengthBounds::new(50, 10).is_err());
        assert!(LengthBounds::new(1, 2).is_ok());
    }
}
