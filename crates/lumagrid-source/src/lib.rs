// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lumagrid-source: Luminance data for the barcode scanning pipeline.
//
// Provides the `LuminanceGrid` value type (row fetch, crop, counter-clockwise
// rotation, inversion), a text renderer for debugging, and conversion to and
// from `image::GrayImage`.

pub mod luminance;

// Re-export the primary types so callers can use `lumagrid_source::LuminanceGrid` etc.
pub use luminance::grid::LuminanceGrid;
pub use lumagrid_core::{CropRect, Dimensions, ErrorKind, GridLimits, LumaError, Result};
