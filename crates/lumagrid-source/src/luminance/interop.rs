// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion between `LuminanceGrid` and the `image` crate's 8-bit luma buffer.
// Both sides are single-channel luminance, so samples are copied unchanged.

use image::GrayImage;
use lumagrid_core::error::{LumaError, Result};
use tracing::debug;

use super::grid::LuminanceGrid;

impl From<&GrayImage> for LuminanceGrid {
    fn from(image: &GrayImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        // `ImageBuffer` guarantees at least `width * height` samples.
        let samples = image.as_raw()[..width * height].to_vec();
        debug!(width, height, "Grid taken from GrayImage");
        LuminanceGrid::from_vec(samples, width, height)
    }
}

impl LuminanceGrid {
    /// Copy the grid into an `image::GrayImage`.
    ///
    /// Fails with [`LumaError::InvalidArgument`] when a dimension does not
    /// fit the `u32` the `image` crate uses.
    pub fn to_gray_image(&self) -> Result<GrayImage> {
        let width = to_u32(self.width(), "width")?;
        let height = to_u32(self.height(), "height")?;
        GrayImage::from_raw(width, height, self.matrix().to_vec()).ok_or_else(|| {
            LumaError::InvalidArgument(format!(
                "sample buffer does not match {}",
                self.dimensions()
            ))
        })
    }
}

fn to_u32(value: usize, axis: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        LumaError::InvalidArgument(format!("grid {axis} {value} exceeds the image crate's u32 range"))
    })
}
