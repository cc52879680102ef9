// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Allocation limits for grid construction.

use serde::{Deserialize, Serialize};

use crate::error::{LumaError, Result};
use crate::types::Dimensions;

/// Upper bounds applied before a grid buffer is allocated.
///
/// Missing fields fall back to the defaults when deserializing, so a
/// configuration may override a single bound:
///
/// ```
/// # use lumagrid_core::GridLimits;
/// let limits = GridLimits::from_json(r#"{ "max_width": 640 }"#).unwrap();
/// assert_eq!(limits.max_width, 640);
/// assert_eq!(limits.max_height, GridLimits::default().max_height);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLimits {
    /// Widest grid accepted, in samples.
    pub max_width: usize,
    /// Tallest grid accepted, in samples.
    pub max_height: usize,
    /// Largest total buffer accepted, in bytes.
    pub max_samples: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_width: 1 << 16,
            max_height: 1 << 16,
            // 256 MiB of luminance data.
            max_samples: 1 << 28,
        }
    }
}

impl GridLimits {
    /// No bound beyond what fits in a `usize`.
    pub fn unbounded() -> Self {
        Self {
            max_width: usize::MAX,
            max_height: usize::MAX,
            max_samples: usize::MAX,
        }
    }

    /// Parse limits from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate a requested grid size and return its sample count.
    pub fn check(&self, width: usize, height: usize) -> Result<usize> {
        let dims = Dimensions::new(width, height);
        if width > self.max_width || height > self.max_height {
            return Err(LumaError::InvalidArgument(format!(
                "grid {dims} exceeds the {}x{} limit",
                self.max_width, self.max_height
            )));
        }
        let count = dims.sample_count().ok_or_else(|| {
            LumaError::InvalidArgument(format!("grid {dims} overflows the address space"))
        })?;
        if count > self.max_samples {
            return Err(LumaError::InvalidArgument(format!(
                "grid {dims} needs {count} samples, limit is {}",
                self.max_samples
            )));
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_accepts_empty_and_typical_sizes() {
        let limits = GridLimits::default();
        assert_eq!(limits.check(0, 0).unwrap(), 0);
        assert_eq!(limits.check(1920, 1080).unwrap(), 1920 * 1080);
    }

    #[test]
    fn oversized_axis_is_invalid_argument() {
        let limits = GridLimits {
            max_width: 10,
            ..GridLimits::default()
        };
        let err = limits.check(11, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn sample_budget_is_enforced() {
        let limits = GridLimits {
            max_samples: 99,
            ..GridLimits::default()
        };
        assert!(limits.check(9, 11).is_ok());
        assert!(limits.check(10, 10).is_err());
    }

    #[test]
    fn unbounded_still_rejects_overflow() {
        let err = GridLimits::unbounded().check(usize::MAX, 2).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn json_round_trips_through_serde() {
        let limits = GridLimits {
            max_width: 3,
            max_height: 4,
            max_samples: 12,
        };
        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(GridLimits::from_json(&json).unwrap(), limits);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = GridLimits::from_json("{ max_width: }").unwrap_err();
        assert!(matches!(err, LumaError::Config(_)));
    }
}
