// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Display surfaces.  A surface hands out a buffer of its own size and
//! later takes the finished buffer back in one bulk commit.  The
//! renderers never write to a surface pixel by pixel.

use std::path::{Path, PathBuf};

use image::ColorType;

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// Something a completed frame can be committed to.
pub trait Surface {
    /// Width and height in pixels.
    fn dimensions(&self) -> (usize, usize);

    /// A writable buffer matching this surface.
    fn buffer(&self) -> PixelBuffer {
        let (width, height) = self.dimensions();
        PixelBuffer::new(width, height)
    }

    /// Copy the whole buffer to the visible output.
    fn commit(&mut self, buffer: &PixelBuffer) -> Result<(), RenderError>;
}

fn check_size(surface: &dyn Surface, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let (surface_width, surface_height) = surface.dimensions();
    if buffer.width() != surface_width || buffer.height() != surface_height {
        return Err(RenderError::SizeMismatch {
            buffer_width: buffer.width(),
            buffer_height: buffer.height(),
            surface_width,
            surface_height,
        });
    }
    Ok(())
}

/// Writes each committed frame to an image file.  The format follows
/// the file extension, so `.png` is the one to use.
#[derive(Debug)]
pub struct ImageSurface {
    path: PathBuf,
    width: usize,
    height: usize,
}

impl ImageSurface {
    /// A surface that writes `width` x `height` frames to `path`.
    pub fn new<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Self {
        ImageSurface {
            path: path.as_ref().to_path_buf(),
            width,
            height,
        }
    }

    /// Where frames are written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for ImageSurface {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn commit(&mut self, buffer: &PixelBuffer) -> Result<(), RenderError> {
        check_size(&*self, buffer)?;
        debug!("writing {}x{} frame to {}", self.width, self.height, self.path.display());
        image::save_buffer(
            &self.path,
            buffer.as_bytes(),
            self.width as u32,
            self.height as u32,
            ColorType::RGBA(8),
        )?;
        Ok(())
    }
}

/// Keeps the last committed frame in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    width: usize,
    height: usize,
    frame: Option<Vec<u8>>,
    commits: usize,
}

impl MemorySurface {
    /// An empty surface of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        MemorySurface {
            width,
            height,
            frame: None,
            commits: 0,
        }
    }

    /// The bytes of the last commit, if any.
    pub fn frame(&self) -> Option<&[u8]> {
        self.frame.as_ref().map(|f| f.as_slice())
    }

    /// How many times a buffer has been committed.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl Surface for MemorySurface {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn commit(&mut self, buffer: &PixelBuffer) -> Result<(), RenderError> {
        check_size(&*self, buffer)?;
        match self.frame {
            Some(ref mut frame) => frame.copy_from_slice(buffer.as_bytes()),
            None => self.frame = Some(buffer.as_bytes().to_vec()),
        }
        self.commits += 1;
        debug!("commit {} to memory surface", self.commits);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn buffer_matches_the_surface() {
        let surface = MemorySurface::new(7, 5);
        let buffer = surface.buffer();
        assert_eq!((buffer.width(), buffer.height()), (7, 5));
    }

    #[test]
    fn memory_surface_keeps_the_last_frame() {
        let mut surface = MemorySurface::new(2, 1);
        let mut buffer = surface.buffer();
        assert_eq!(surface.frame(), None);

        buffer.dot(0, 0, Color::RED);
        surface.commit(&buffer).unwrap();
        buffer.dot(1, 0, Color::BLUE);
        surface.commit(&buffer).unwrap();

        assert_eq!(surface.commits(), 2);
        assert_eq!(surface.frame(), Some(&[255, 0, 0, 255, 0, 0, 255, 255][..]));
    }

    #[test]
    fn commit_rejects_a_foreign_buffer() {
        let mut surface = MemorySurface::new(2, 2);
        match surface.commit(&PixelBuffer::new(3, 2)) {
            Err(RenderError::SizeMismatch { buffer_width: 3, .. }) => {}
            other => panic!("expected a size mismatch, got {:?}", other),
        }
        assert_eq!(surface.commits(), 0);
    }

    #[test]
    fn image_surface_writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut surface = ImageSurface::new(&path, 3, 2);
        let mut buffer = surface.buffer();
        buffer.fill(Color::GREEN);
        surface.commit(&buffer).unwrap();

        let written = image::open(&path).unwrap().to_rgba();
        assert_eq!(written.dimensions(), (3, 2));
        let raw = written.into_raw();
        let offset = (3 + 2) * 4;
        assert_eq!(&raw[offset..offset + 4], &[0, 255, 0, 255]);
    }

    #[test]
    fn image_surface_reports_unwritable_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");
        let mut surface = ImageSurface::new(path, 1, 1);
        let buffer = surface.buffer();
        assert!(surface.commit(&buffer).is_err());
    }
}
