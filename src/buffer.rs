// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel buffer a render pass writes into.  Four bytes per pixel,
//! RGBA, rows laid out top to bottom.

use std::slice::ChunksMut;

use crate::color::Color;

const CHANNELS: usize = 4;

#[inline]
fn write_pixel(dest: &mut [u8], color: Color) {
    dest.copy_from_slice(&color.to_bytes());
}

/// A dense width x height grid of RGBA pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A buffer of the given size, every byte zero.
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Write one pixel.  The coordinates must lie inside the buffer;
    /// anything else is a bug in the caller and panics.
    #[inline]
    pub fn dot(&mut self, x: usize, y: usize, color: Color) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside the {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        let base = (y * self.width + x) * CHANNELS;
        write_pixel(&mut self.data[base..base + CHANNELS], color);
    }

    /// Read one pixel back, or `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let base = (y * self.width + x) * CHANNELS;
        let p = &self.data[base..base + CHANNELS];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Reset every pixel to the given color.
    pub fn fill(&mut self, color: Color) {
        for pixel in self.data.chunks_mut(CHANNELS) {
            write_pixel(pixel, color);
        }
    }

    /// The raw bytes, ready for a bulk copy.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Split the buffer into independently writable rows, top first.
    pub fn rows_mut(&mut self) -> RowsMut {
        RowsMut {
            chunks: self.data.chunks_mut((self.width * CHANNELS).max(1)),
            width: self.width,
            next: 0,
        }
    }
}

/// Iterator over the rows of a `PixelBuffer`.
#[derive(Debug)]
pub struct RowsMut<'a> {
    chunks: ChunksMut<'a, u8>,
    width: usize,
    next: usize,
}

impl<'a> Iterator for RowsMut<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        let pixels = self.chunks.next()?;
        let y = self.next;
        self.next += 1;
        Some(Row {
            y,
            width: self.width,
            pixels,
        })
    }
}

/// One mutable row of a `PixelBuffer`.
#[derive(Debug)]
pub struct Row<'a> {
    y: usize,
    width: usize,
    pixels: &'a mut [u8],
}

impl<'a> Row<'a> {
    /// Which row of the buffer this is.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Number of pixels in the row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Write one pixel of the row.  Panics past the end of the row.
    #[inline]
    pub fn dot(&mut self, x: usize, color: Color) {
        assert!(x < self.width, "pixel {} is outside a row of {}", x, self.width);
        let base = x * CHANNELS;
        write_pixel(&mut self.pixels[base..base + CHANNELS], color);
    }
}
