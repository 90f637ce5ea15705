//! Startup configuration for the two scenes.  The defaults are the
//! canonical pictures: a square 4x4 window of Newton basins, and the
//! whole Mandelbrot set in a 5x3 window.
use crate::error::RenderError;
use crate::mandelbrot::MandelbrotEvaluator;
use crate::newton::NewtonSolver;
use crate::render::Renderer;

/// The pixel grid and the complex window it covers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct View {
    /// Image width in pixels.
    pub pixel_width: usize,
    /// Image height in pixels.
    pub pixel_height: usize,
    /// Width of the complex window.
    pub complex_width: f64,
    /// Height of the complex window.
    pub complex_height: f64,
}

impl View {
    /// A renderer for this view.
    pub fn renderer(&self) -> Result<Renderer, RenderError> {
        Renderer::new(
            self.pixel_width,
            self.pixel_height,
            self.complex_width,
            self.complex_height,
        )
    }
}

/// Everything needed to draw Newton basins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NewtonConfig {
    /// Canvas and window.
    pub view: View,
    /// Iteration budget per pixel.
    pub max_iterations: usize,
    /// Residual at which a pixel counts as converged.
    pub tolerance: f64,
}

impl NewtonConfig {
    /// The solver these settings describe.
    pub fn solver(&self) -> NewtonSolver {
        NewtonSolver::new(self.max_iterations, self.tolerance)
    }
}

impl Default for NewtonConfig {
    fn default() -> Self {
        NewtonConfig {
            view: View {
                pixel_width: 1500,
                pixel_height: 1500,
                complex_width: 4.0,
                complex_height: 4.0,
            },
            max_iterations: 300,
            tolerance: 1e-6,
        }
    }
}

/// Everything needed to draw the Mandelbrot set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MandelbrotConfig {
    /// Canvas and window.
    pub view: View,
    /// Iteration budget per pixel.
    pub max_iterations: usize,
    /// Escape radius.
    pub max_z: f64,
}

impl MandelbrotConfig {
    /// The evaluator these settings describe.
    pub fn evaluator(&self) -> MandelbrotEvaluator {
        MandelbrotEvaluator::new(self.max_iterations, self.max_z)
    }
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        MandelbrotConfig {
            view: View {
                pixel_width: 1500,
                pixel_height: 900,
                complex_width: 5.0,
                complex_height: 3.0,
            },
            max_iterations: 100,
            max_z: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_solvers() {
        assert_eq!(NewtonConfig::default().solver(), NewtonSolver::default());
        assert_eq!(
            MandelbrotConfig::default().evaluator(),
            MandelbrotEvaluator::default()
        );
    }

    #[test]
    fn default_views_are_valid() {
        let newton = NewtonConfig::default().view.renderer().unwrap();
        assert_eq!(newton.plane().len(), 1500 * 1500);
        let mandelbrot = MandelbrotConfig::default().view.renderer().unwrap();
        assert_eq!(mandelbrot.plane().len(), 1500 * 900);
    }

    #[test]
    fn empty_view_is_rejected() {
        let mut view = NewtonConfig::default().view;
        view.pixel_height = 0;
        assert!(view.renderer().is_err());
    }
}
