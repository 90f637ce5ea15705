// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render loop.  Every pixel is mapped to a point on the complex
//! plane, handed to a `Fractal` for a color, and written into a pixel
//! buffer.  No pixel depends on any other, so the work can be split
//! across threads by row; either way the finished buffer goes to the
//! surface in a single commit.

use std::sync::Mutex;

use itertools::iproduct;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::complex::Complex;
use crate::error::RenderError;
use crate::planes::{Pixel, PlaneMapper};
use crate::surface::Surface;

/// A pure mapping from a point on the complex plane to a color.
pub trait Fractal {
    /// The color of the sample at `point`.
    fn color_at(&self, point: Complex) -> Color;
}

/// Draws a `Fractal` over a fixed pixel grid and complex window.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    plane: PlaneMapper,
}

impl Renderer {
    /// Requires the width and height of the image and the width and
    /// height of the complex window, centered on the origin, that the
    /// image covers.
    pub fn new(
        pixel_width: usize,
        pixel_height: usize,
        complex_width: f64,
        complex_height: f64,
    ) -> Result<Self, RenderError> {
        PlaneMapper::new(pixel_width, pixel_height, complex_width, complex_height)
            .map(|plane| Renderer { plane })
    }

    /// The pixel/complex mapping this renderer draws with.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    fn check_buffer(&self, buffer: &PixelBuffer) -> Result<(), RenderError> {
        if buffer.width() != self.plane.width() || buffer.height() != self.plane.height() {
            return Err(RenderError::SizeMismatch {
                buffer_width: buffer.width(),
                buffer_height: buffer.height(),
                surface_width: self.plane.width(),
                surface_height: self.plane.height(),
            });
        }
        Ok(())
    }

    /// Fill `buffer` one pixel at a time on the calling thread.
    pub fn render_single_into<F: Fractal>(
        &self,
        fractal: &F,
        buffer: &mut PixelBuffer,
    ) -> Result<(), RenderError> {
        self.check_buffer(buffer)?;
        for (row, column) in iproduct!(0..self.plane.height(), 0..self.plane.width()) {
            let point = self.plane.pixel_to_point(&Pixel(column, row));
            buffer.dot(column, row, fractal.color_at(point));
        }
        Ok(())
    }

    /// The main function for single-threaded rendering.
    pub fn render_single<F: Fractal>(&self, fractal: &F) -> Result<PixelBuffer, RenderError> {
        let mut buffer = PixelBuffer::new(self.plane.width(), self.plane.height());
        self.render_single_into(fractal, &mut buffer)?;
        Ok(buffer)
    }

    /// Fill `buffer` using `threads` workers.  Rows are handed out from
    /// a shared queue, so a slow band of the image doesn't leave the
    /// other workers idle.
    pub fn render_into<F: Fractal + Sync>(
        &self,
        fractal: &F,
        buffer: &mut PixelBuffer,
        threads: usize,
    ) -> Result<(), RenderError> {
        if threads == 0 {
            return Err(RenderError::NoThreads);
        }
        if threads == 1 {
            return self.render_single_into(fractal, buffer);
        }
        self.check_buffer(buffer)?;

        let plane = &self.plane;
        let rows = Mutex::new(buffer.rows_mut());
        let rows = &rows;
        let result = crossbeam::scope(|spawner| {
            for worker in 0..threads {
                spawner.spawn(move |_| {
                    let mut done = 0;
                    loop {
                        // A poisoned queue means another worker died; the
                        // scope will report it.
                        let row = rows.lock().ok().and_then(|mut rows| rows.next());
                        match row {
                            Some(mut row) => {
                                let y = row.y();
                                for x in 0..row.width() {
                                    let point = plane.pixel_to_point(&Pixel(x, y));
                                    row.dot(x, fractal.color_at(point));
                                }
                                done += 1;
                            }
                            None => {
                                break;
                            }
                        }
                    }
                    debug!("worker {} rendered {} rows", worker, done);
                });
            }
        });
        result.map_err(|_| RenderError::WorkerPanicked)
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  Produces exactly the same bytes as
    /// `render_single`.
    pub fn render<F: Fractal + Sync>(
        &self,
        fractal: &F,
        threads: usize,
    ) -> Result<PixelBuffer, RenderError> {
        let mut buffer = PixelBuffer::new(self.plane.width(), self.plane.height());
        self.render_into(fractal, &mut buffer, threads)?;
        Ok(buffer)
    }

    /// One complete drawing session: take a buffer from the surface,
    /// render every pixel into it, and commit it once.
    pub fn draw<F, S>(&self, fractal: &F, surface: &mut S, threads: usize) -> Result<(), RenderError>
    where
        F: Fractal + Sync,
        S: Surface + ?Sized,
    {
        let (width, height) = surface.dimensions();
        info!(
            "rendering {}x{} pixels over a {}x{} window on {} thread(s)",
            width, height, self.plane.complex_plane.0, self.plane.complex_plane.1, threads
        );
        let mut buffer = surface.buffer();
        self.render_into(fractal, &mut buffer, threads)?;
        surface.commit(&buffer)
    }
}
