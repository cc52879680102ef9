// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Luminance grid: a row-major buffer of 8-bit grayscale samples with row
// fetch, crop, and quarter-turn rotation. Every transform allocates a new grid.

use lumagrid_core::error::{LumaError, Result};
use lumagrid_core::{CropRect, Dimensions, GridLimits};
use tracing::{debug, instrument};

/// A `width` x `height` grid of luminance samples, 0 (black) to 255 (white).
///
/// Samples are stored row-major without padding: the sample at `(x, y)` lives
/// at index `y * width + x`. A grid owns its buffer exclusively and is never
/// modified after construction; `crop`, `rotate_counter_clockwise`, and
/// `inverted` copy into a fresh grid.
///
/// ```
/// # use lumagrid_source::LuminanceGrid;
/// let grid = LuminanceGrid::from_samples(&[10, 20, 30, 40], 2, 2)?;
/// assert_eq!(grid.row(1, None)?, vec![30, 40]);
/// assert_eq!(grid.rotate_counter_clockwise().matrix(), &[20, 40, 10, 30]);
/// assert_eq!(grid.crop(1, 0, 1, 2)?.matrix(), &[20, 40]);
/// # Ok::<(), lumagrid_source::LumaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LuminanceGrid {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl LuminanceGrid {
    // -- Construction ---------------------------------------------------------

    /// Allocate a zero-filled (all black) grid.
    ///
    /// Any size is accepted as long as `width * height` fits in a `usize`;
    /// use [`with_limits`](Self::with_limits) to bound the allocation.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_limits(width, height, &GridLimits::unbounded())
    }

    /// Allocate a zero-filled grid, checked against `limits`.
    pub fn with_limits(width: usize, height: usize, limits: &GridLimits) -> Result<Self> {
        let count = limits.check(width, height)?;
        Ok(Self::from_vec(vec![0; count], width, height))
    }

    /// Copy the first `width * height` bytes of `buffer` into a new grid.
    ///
    /// Bytes past the grid extent are ignored. A buffer that is too short is
    /// rejected with [`LumaError::InvalidArgument`].
    pub fn from_samples(buffer: &[u8], width: usize, height: usize) -> Result<Self> {
        Self::from_samples_with_limits(buffer, width, height, &GridLimits::unbounded())
    }

    /// Like [`from_samples`](Self::from_samples), checked against `limits`.
    #[instrument(skip(buffer, limits), fields(buffer_len = buffer.len()))]
    pub fn from_samples_with_limits(
        buffer: &[u8],
        width: usize,
        height: usize,
        limits: &GridLimits,
    ) -> Result<Self> {
        let count = limits.check(width, height)?;
        if buffer.len() < count {
            debug!(needed = count, "Sample buffer too short");
            return Err(LumaError::InvalidArgument(format!(
                "sample buffer holds {} bytes, a {width}x{height} grid needs {count}",
                buffer.len()
            )));
        }
        Ok(Self::from_vec(buffer[..count].to_vec(), width, height))
    }

    /// Wrap a buffer whose length is already known to be `width * height`.
    pub(crate) fn from_vec(samples: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(Some(samples.len()), width.checked_mul(height));
        Self {
            width,
            height,
            samples,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// The full row-major sample buffer (row stride is `width`).
    pub fn matrix(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the grid and return its sample buffer.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Borrow row `y` without copying.
    pub fn row_slice(&self, y: usize) -> Result<&[u8]> {
        self.check_row(y)?;
        let start = y * self.width;
        Ok(&self.samples[start..start + self.width])
    }

    /// Fetch row `y` as an owned buffer.
    ///
    /// When `reuse` is at least `width` bytes long it is overwritten in place
    /// and handed back with its length unchanged, so only the first `width`
    /// bytes hold the row. Otherwise a buffer of exactly `width` bytes is
    /// allocated.
    pub fn row(&self, y: usize, reuse: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let source = self.row_slice(y)?;
        match reuse {
            Some(mut buffer) if buffer.len() >= self.width => {
                buffer[..self.width].copy_from_slice(source);
                Ok(buffer)
            }
            _ => Ok(source.to_vec()),
        }
    }

    /// Copy row `y` into the front of a caller-owned scratch buffer.
    pub fn row_into(&self, y: usize, dest: &mut [u8]) -> Result<()> {
        let source = self.row_slice(y)?;
        let dest_len = dest.len();
        let target = dest.get_mut(..self.width).ok_or_else(|| {
            LumaError::InvalidArgument(format!(
                "row buffer holds {dest_len} bytes, rows are {} wide",
                self.width
            ))
        })?;
        target.copy_from_slice(source);
        Ok(())
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        let width = self.width;
        (0..self.height).map(move |y| &self.samples[y * width..(y + 1) * width])
    }

    fn check_row(&self, y: usize) -> Result<()> {
        if y >= self.height {
            return Err(LumaError::OutOfRange {
                what: "row",
                index: y,
                bound: self.height,
            });
        }
        Ok(())
    }

    // -- Capabilities ---------------------------------------------------------

    /// Rotation is always available for an owned grid.
    pub const fn is_rotate_supported(&self) -> bool {
        true
    }

    /// Cropping is always available for an owned grid.
    pub const fn is_crop_supported(&self) -> bool {
        true
    }

    // -- Transformations (borrow self, return new Self) -----------------------

    /// Rotate the grid by 90 degrees counter-clockwise.
    ///
    /// The result is `height` wide and `width` tall. The sample at
    /// `(x, y)` moves to `(y, width - x - 1)`.
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn rotate_counter_clockwise(&self) -> Self {
        let rotated_dims = self.dimensions().transposed();
        let mut rotated = vec![0u8; self.samples.len()];
        for (y_old, row) in self.rows().enumerate() {
            for (x_old, &sample) in row.iter().enumerate() {
                let y_new = rotated_dims.height - x_old - 1;
                rotated[y_new * rotated_dims.width + y_old] = sample;
            }
        }
        debug!(rotated = %rotated_dims, "Rotation complete");
        Self::from_vec(rotated, rotated_dims.width, rotated_dims.height)
    }

    /// Copy out the `width` x `height` region whose top-left corner is at
    /// (`left`, `top`).
    ///
    /// Fails with [`LumaError::CropOutOfBounds`] when the rectangle extends
    /// past the right or bottom edge.
    pub fn crop(&self, left: usize, top: usize, width: usize, height: usize) -> Result<Self> {
        self.crop_rect(CropRect::new(left, top, width, height))
    }

    /// [`crop`](Self::crop) taking a [`CropRect`].
    #[instrument(skip(self, rect), fields(rect = %rect))]
    pub fn crop_rect(&self, rect: CropRect) -> Result<Self> {
        if !rect.fits_within(self.dimensions()) {
            debug!(grid = %self.dimensions(), "Crop rectangle outside grid");
            return Err(LumaError::CropOutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            });
        }

        let cropped_dims = rect.dimensions();
        let mut cropped = Vec::with_capacity(cropped_dims.width * cropped_dims.height);
        for y in rect.top..rect.top + rect.height {
            let start = y * self.width + rect.left;
            cropped.extend_from_slice(&self.samples[start..start + rect.width]);
        }
        debug!(samples = cropped.len(), "Crop complete");
        Ok(Self::from_vec(cropped, cropped_dims.width, cropped_dims.height))
    }

    /// A new grid with every sample mirrored around mid-gray (`255 - v`).
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn inverted(&self) -> Self {
        let samples = self.samples.iter().map(|&v| u8::MAX - v).collect();
        Self::from_vec(samples, self.width, self.height)
    }
}
