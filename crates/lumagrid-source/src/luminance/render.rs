// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text rendering of a luminance grid, four shades per character cell.

use std::fmt::{self, Write};

use super::grid::LuminanceGrid;

/// Character used for a sample, darkest to lightest.
fn shade(sample: u8) -> char {
    match sample {
        0x00..0x40 => '#',
        0x40..0x80 => '+',
        0x80..0xC0 => '.',
        _ => ' ',
    }
}

/// One line per row, terminated by `\n`.
impl fmt::Display for LuminanceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &sample in row {
                f.write_char(shade(sample))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
