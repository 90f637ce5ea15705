// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised at the edges of a render: building a plane, running
//! the worker pool, and committing to a surface.  The numerical core
//! itself never fails; degenerate inputs just produce odd colors.

use std::io;

/// Everything that can go wrong around a render pass.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The pixel grid or complex window cannot be mapped.
    #[fail(display = "invalid plane: {}", _0)]
    InvalidPlane(String),

    /// A threaded render was asked to run on no threads.
    #[fail(display = "a render needs at least one thread")]
    NoThreads,

    /// A buffer was handed to a surface of a different size.
    #[fail(
        display = "buffer is {}x{} but the surface is {}x{}",
        buffer_width, buffer_height, surface_width, surface_height
    )]
    SizeMismatch {
        /// Width of the offending buffer.
        buffer_width: usize,
        /// Height of the offending buffer.
        buffer_height: usize,
        /// Width the surface expects.
        surface_width: usize,
        /// Height the surface expects.
        surface_height: usize,
    },

    /// One of the render threads panicked.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,

    /// The surface could not be written.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}
