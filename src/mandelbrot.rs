// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Mandelbrot set by escape time.
//!
//! Each pixel is a constant c.  Starting from zero we repeatedly square
//! and add c; points whose orbit stays bounded belong to the set and
//! are painted black, and the rest are painted a shade of blue that
//! brightens the longer the orbit took to get away.

use crate::color::Color;
use crate::complex::{Complex, ComplexExt};
use crate::render::Fractal;

/// Blue channel of the fastest escape.
const BLUE_FLOOR: f64 = 100.0;
/// Spread of the blue gradient above the floor.
const BLUE_RANGE: f64 = 155.0;

/// Escape-time evaluator for z <- z^2 + c.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MandelbrotEvaluator {
    /// Upper bound on iterations per sample.
    pub max_iterations: usize,
    /// An orbit whose magnitude exceeds this has escaped.
    pub max_z: f64,
}

impl MandelbrotEvaluator {
    /// An evaluator with the given budget and escape radius.
    pub fn new(max_iterations: usize, max_z: f64) -> Self {
        MandelbrotEvaluator {
            max_iterations,
            max_z,
        }
    }

    /// This is our classic iterator function, which either returns the
    /// (zero-based) iteration at which the orbit of `c` escaped, or
    /// nothing at all if it stayed bounded.
    pub fn escape_time(&self, c: Complex) -> Option<usize> {
        let mut z = Complex::new(0.0, 0.0);
        for i in 0..self.max_iterations {
            z = z * z + c;
            if z.abs() > self.max_z {
                return Some(i);
            }
        }
        None
    }

    /// Black for the interior, otherwise blue from 100 to 255.
    pub fn color_for(&self, escape: Option<usize>) -> Color {
        match escape {
            None => Color::BLACK,
            Some(i) => {
                let ratio = i as f64 / self.max_iterations as f64;
                let blue = (ratio * BLUE_RANGE).floor() + BLUE_FLOOR;
                Color::rgb(0, 0, blue as u8)
            }
        }
    }
}

impl Default for MandelbrotEvaluator {
    fn default() -> Self {
        MandelbrotEvaluator::new(100, 5.0)
    }
}

impl Fractal for MandelbrotEvaluator {
    fn color_at(&self, point: Complex) -> Color {
        self.color_for(self.escape_time(point))
    }
}
