// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for lumagrid.

use thiserror::Error;

use crate::types::CropRect;

/// Top-level error type for all grid operations.
#[derive(Debug, Error)]
pub enum LumaError {
    // -- Range errors --
    #[error("requested {what} is outside the image: {index} (valid range 0..{bound})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        bound: usize,
    },

    #[error("crop rectangle {rect} does not fit within image data ({width}x{height})")]
    CropOutOfBounds {
        rect: CropRect,
        width: usize,
        height: usize,
    },

    // -- Argument errors --
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid limits configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// The two ways a grid operation can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A row index or crop rectangle falls outside the grid.
    OutOfRange,
    /// A buffer, dimension, or configuration value was unusable.
    InvalidArgument,
}

impl LumaError {
    /// Coarse classification for callers that only branch on the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } | Self::CropOutOfBounds { .. } => ErrorKind::OutOfRange,
            Self::InvalidArgument(_) | Self::Config(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LumaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_error_names_index_and_bound() {
        let err = LumaError::OutOfRange {
            what: "row",
            index: 7,
            bound: 4,
        };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            err.to_string(),
            "requested row is outside the image: 7 (valid range 0..4)"
        );
    }

    #[test]
    fn crop_error_is_out_of_range() {
        let err = LumaError::CropOutOfBounds {
            rect: CropRect::new(1, 1, 5, 5),
            width: 4,
            height: 4,
        };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(err.to_string().contains("does not fit within image data"));
    }

    #[test]
    fn config_error_is_invalid_argument() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = LumaError::from(parse);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
