// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lumagrid: Core types, size limits, and error definitions shared across crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::GridLimits;
pub use error::{ErrorKind, LumaError, Result};
pub use types::*;
