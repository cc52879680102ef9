// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Luminance module: grid storage and transforms, text rendering, `image` interop.

pub mod grid;
pub mod interop;
pub mod render;

pub use grid::LuminanceGrid;
