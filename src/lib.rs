#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton basin and Mandelbrot set renderer
//!
//! Both pictures are made the same way.  Each pixel of the image is
//! mapped to a point on the complex plane, some iteration is run from
//! that point, and the way the iteration ends decides the pixel's
//! color.
//!
//! For the Newton basins the iteration is Newton's method on
//! z^3 - 1, and the color says which of the three cube roots of unity
//! the point was drawn to.  For the Mandelbrot set the iteration is
//! z <- z^2 + c, and the color says how quickly, if at all, the orbit
//! ran off toward infinity.
//!
//! Every pixel is independent of every other, so a pass can be spread
//! across threads row by row.  The finished buffer is handed to a
//! `Surface` in one commit.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod buffer;
pub mod color;
pub mod complex;
pub mod config;
pub mod error;
pub mod mandelbrot;
pub mod newton;
pub mod planes;
pub mod render;
pub mod surface;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use complex::{Complex, ComplexExt};
pub use config::{MandelbrotConfig, NewtonConfig, View};
pub use error::RenderError;
pub use mandelbrot::MandelbrotEvaluator;
pub use newton::NewtonSolver;
pub use planes::{Pixel, PlaneMapper};
pub use render::{Fractal, Renderer};
pub use surface::{ImageSurface, MemorySurface, Surface};
