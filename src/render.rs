// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ASCII pictures of arrangements.
//!
//! Two-dimensional grids draw one row per `y`, with `*` for a counter at
//! `(x, y)` and `.` for an empty cell. Three-dimensional grids draw, for each
//! `y`, the `z` slices side by side, each followed by two spaces. Other
//! dimensions fall back to the arrangement's text form.
//!
//! ```
//! use unique_distance::geometry::{Arrangement, GridConfig};
//! use unique_distance::render::Picture;
//!
//! let grid = GridConfig::new(2, 3);
//! let a = Arrangement::from_coords(&[&[0, 0], &[0, 1], &[1, 2]]);
//! assert_eq!(Picture::new(&grid, &a).to_string(), "*..\n*..\n.*.\n\n");
//! ```

use crate::geometry::{Arrangement, GridConfig, Point};
use std::fmt;

/// Display adapter drawing an arrangement on its grid.
#[derive(Debug, Clone, Copy)]
pub struct Picture<'a> {
    config: &'a GridConfig,
    arrangement: &'a Arrangement,
}

impl<'a> Picture<'a> {
    pub fn new(config: &'a GridConfig, arrangement: &'a Arrangement) -> Self {
        Self {
            config,
            arrangement,
        }
    }

    fn cell(&self, f: &mut fmt::Formatter<'_>, coords: &[u32]) -> fmt::Result {
        let mark = if self.arrangement.contains(&Point::new(coords)) {
            '*'
        } else {
            '.'
        };
        write!(f, "{}", mark)
    }
}

impl fmt::Display for Picture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.config.width;
        match self.config.dimension {
            2 => {
                for y in 0..width {
                    for x in 0..width {
                        self.cell(f, &[x, y])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f)
            }
            3 => {
                for y in 0..width {
                    for z in 0..width {
                        for x in 0..width {
                            self.cell(f, &[x, y, z])?;
                        }
                        write!(f, "  ")?;
                    }
                    writeln!(f)?;
                }
                writeln!(f)
            }
            _ => writeln!(f, "{}", self.arrangement),
        }
    }
}
