//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper left, and a rectangle on the complex plane centered on the
//! origin.  Pixel rows run downward while the imaginary axis runs
//! upward, so the mapping flips the vertical axis.
use crate::complex::Complex;
use crate::error::RenderError;

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0 and all values are assumed to be non-negative
/// integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the width and height of the visible window on the complex
/// plane.  The window is always centered on 0+0i.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub f64, pub f64);

/// Describes the x, y of a pixel, x to the right and y downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps points from one to the other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneMapper {
    /// The size of the pixel grid.
    pub integral_plane: IntegralPlane,
    /// The extents of the complex window.
    pub complex_plane: ComplexPlane,
}

impl PlaneMapper {
    /// Constructor.  Takes the pixel grid's width and height and the
    /// complex window's width and height.
    pub fn new(
        pixel_width: usize,
        pixel_height: usize,
        complex_width: f64,
        complex_height: f64,
    ) -> Result<PlaneMapper, RenderError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(RenderError::InvalidPlane(format!(
                "the pixel grid {}x{} is empty",
                pixel_width, pixel_height
            )));
        }

        for (name, extent) in &[("width", complex_width), ("height", complex_height)] {
            if !extent.is_finite() || *extent <= 0.0 {
                return Err(RenderError::InvalidPlane(format!(
                    "the complex {} must be a positive number, not {}",
                    name, extent
                )));
            }
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(pixel_width, pixel_height),
            complex_plane: ComplexPlane(complex_width, complex_height),
        })
    }

    /// Width of the pixel grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the pixel grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// it samples on the complex plane.  Pixels outside the grid are
    /// mapped all the same; that is the caller's lookout.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        let (pw, ph) = (self.integral_plane.0 as f64, self.integral_plane.1 as f64);
        let (cw, ch) = (self.complex_plane.0, self.complex_plane.1);
        Complex::new(
            (pixel.0 as f64 - pw / 2.0) / pw * cw,
            (ph / 2.0 - pixel.1 as f64) / ph * ch,
        )
    }

    /// Given a complex number, map it as closely as possible to a pixel.
    /// Points above or left of the window saturate to zero.
    pub fn point_to_pixel(&self, point: &Complex) -> Pixel {
        let (pw, ph) = (self.integral_plane.0 as f64, self.integral_plane.1 as f64);
        let (cw, ch) = (self.complex_plane.0, self.complex_plane.1);
        let left = point.re / cw * pw + pw / 2.0;
        let top = ph / 2.0 - point.im / ch * ph;
        Pixel(left.round() as usize, top.round() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_empty_grid() {
        assert!(PlaneMapper::new(0, 4, 4.0, 4.0).is_err());
        assert!(PlaneMapper::new(4, 0, 4.0, 4.0).is_err());
    }

    #[test]
    fn planemapper_fails_on_bad_window() {
        assert!(PlaneMapper::new(4, 4, 0.0, 4.0).is_err());
        assert!(PlaneMapper::new(4, 4, 4.0, -1.0).is_err());
        assert!(PlaneMapper::new(4, 4, std::f64::NAN, 4.0).is_err());
        assert!(PlaneMapper::new(4, 4, 4.0, std::f64::INFINITY).is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 3, 4.0, 2.0).unwrap();
        assert_eq!(pm.len(), 12);
        assert!(!pm.is_empty());
    }

    #[test]
    fn center_pixel_is_the_origin() {
        let pm = PlaneMapper::new(640, 480, 5.0, 3.0).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(320, 240)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn pixel_to_point_on_small_grid() {
        let pm = PlaneMapper::new(4, 4, 4.0, 4.0).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 0)), Complex::new(1.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 3)), Complex::new(-2.0, -1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(2.0, -2.0));
    }

    #[test]
    fn axes_are_oriented() {
        let pm = PlaneMapper::new(100, 60, 5.0, 3.0).unwrap();
        let a = pm.pixel_to_point(&Pixel(10, 10));
        let b = pm.pixel_to_point(&Pixel(11, 11));
        assert!(b.re > a.re, "re grows to the right");
        assert!(b.im < a.im, "im shrinks downward");
    }

    #[test]
    fn point_to_pixel_inverts_pixel_to_point() {
        let pm = PlaneMapper::new(1500, 900, 5.0, 3.0).unwrap();
        for &pixel in &[Pixel(0, 0), Pixel(750, 450), Pixel(1499, 899), Pixel(17, 803)] {
            assert_eq!(pm.point_to_pixel(&pm.pixel_to_point(&pixel)), pixel);
        }
    }

    #[test]
    fn point_to_pixel_on_window_corners() {
        let pm = PlaneMapper::new(640, 640, 4.0, 4.0).unwrap();
        assert_eq!(pm.point_to_pixel(&Complex::new(0.0, 0.0)), Pixel(320, 320));
        assert_eq!(pm.point_to_pixel(&Complex::new(-2.0, 2.0)), Pixel(0, 0));
        assert_eq!(pm.point_to_pixel(&Complex::new(2.0, -2.0)), Pixel(640, 640));
    }
}
