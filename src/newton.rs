// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton basins of z^3 - 1.
//!
//! Every pixel is used as the starting guess for Newton's method on
//! the cubic z^3 - 1.  Wherever the iteration ends up, we ask which of
//! the three cube roots of unity it landed nearest to, and paint the
//! pixel that root's color.  The boundaries between the three basins
//! are where all the fractal structure lives.
//!
//! The solver has three ways to stop: the residual |f(z)| drops below
//! the tolerance, the derivative vanishes (only at z = 0), or it runs
//! out of iterations.  It doesn't say which; only the position of the
//! final estimate matters to the classifier.

use crate::color::Color;
use crate::complex::{Complex, ComplexExt};
use crate::render::Fractal;

/// The exact roots of z^3 - 1, in classification order.
pub const ROOTS: [Complex; 3] = [
    Complex { re: 1.0, im: 0.0 },
    Complex {
        re: -0.5,
        im: 0.866_025_403_784_438_6,
    },
    Complex {
        re: -0.5,
        im: -0.866_025_403_784_438_6,
    },
];

/// The color painted for each root, by index into `ROOTS`.
pub const ROOT_COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// z^3 - 1
#[inline]
pub fn f(z: Complex) -> Complex {
    z.power(3) - Complex::new(1.0, 0.0)
}

/// 3z^2
#[inline]
pub fn df(z: Complex) -> Complex {
    z.power(2) * Complex::new(3.0, 0.0)
}

/// Newton's method with a fixed iteration budget and an absolute
/// tolerance on |f(z)|.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NewtonSolver {
    /// Upper bound on Newton steps per sample.
    pub max_iterations: usize,
    /// The iteration stops once |f(z)| falls below this.
    pub tolerance: f64,
}

impl NewtonSolver {
    /// A solver with the given budget and tolerance.
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        NewtonSolver {
            max_iterations,
            tolerance,
        }
    }

    /// Run Newton's method from `start` and return the final estimate.
    ///
    /// The residual is checked at the estimate *before* the step is
    /// applied, so a converged result is the last z whose residual was
    /// within tolerance, not the step after it.
    pub fn solve(&self, start: Complex) -> Complex {
        let mut z = start;
        for _ in 0..self.max_iterations {
            let fz = f(z);
            let dfz = df(z);

            if dfz.re == 0.0 && dfz.im == 0.0 {
                break;
            }

            let next = z - fz / dfz;

            if fz.abs() < self.tolerance {
                break;
            }

            z = next;
        }
        z
    }

    /// Index into `ROOTS` of the root nearest to `z`.  Ties go to the
    /// lower index, and a NaN estimate falls through to index 0.
    pub fn classify(z: Complex) -> usize {
        let mut closest = 0;
        for (i, root) in ROOTS.iter().enumerate() {
            if z.distance2(*root) < z.distance2(ROOTS[closest]) {
                closest = i;
            }
        }
        closest
    }
}

impl Default for NewtonSolver {
    fn default() -> Self {
        NewtonSolver::new(300, 1e-6)
    }
}

impl Fractal for NewtonSolver {
    fn color_at(&self, point: Complex) -> Color {
        ROOT_COLORS[NewtonSolver::classify(self.solve(point))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_are_the_cube_roots_of_unity() {
        assert_eq!(ROOTS[1].im, 3.0_f64.sqrt() / 2.0);
        for root in ROOTS.iter() {
            assert!(f(*root).abs() < 1e-12, "{} is not a root", root);
        }
    }

    #[test]
    fn derivative_matches_the_cubic() {
        assert_eq!(df(Complex::new(1.0, 0.0)), Complex::new(3.0, 0.0));
        assert_eq!(df(Complex::new(0.0, 1.0)), Complex::new(-3.0, 0.0));
    }

    #[test]
    fn exact_root_classifies_as_itself() {
        for (i, root) in ROOTS.iter().enumerate() {
            assert_eq!(root.distance2(*root), 0.0);
            assert_eq!(NewtonSolver::classify(*root), i);
        }
    }

    #[test]
    fn ties_keep_the_earlier_root() {
        // Equidistant from the two complex roots.
        assert_eq!(NewtonSolver::classify(Complex::new(-0.5, 0.0)), 1);
        assert_eq!(NewtonSolver::classify(Complex::new(-3.0, 0.0)), 1);
    }

    #[test]
    fn nan_classifies_as_the_first_root() {
        let nan = Complex::new(std::f64::NAN, std::f64::NAN);
        assert_eq!(NewtonSolver::classify(nan), 0);
    }

    #[test]
    fn zero_derivative_stops_immediately() {
        let solver = NewtonSolver::default();
        let origin = Complex::new(0.0, 0.0);
        assert_eq!(solver.solve(origin), origin);
        assert_eq!(
            solver.color_at(origin),
            ROOT_COLORS[NewtonSolver::classify(origin)]
        );
    }

    #[test]
    fn a_root_is_returned_unchanged() {
        let solver = NewtonSolver::default();
        assert_eq!(solver.solve(ROOTS[0]), ROOTS[0]);
    }

    #[test]
    fn no_iterations_returns_the_start() {
        let solver = NewtonSolver::new(0, 1e-6);
        let start = Complex::new(-2.0, 2.0);
        assert_eq!(solver.solve(start), start);
    }

    #[test]
    fn one_iteration_takes_one_newton_step() {
        let solver = NewtonSolver::new(1, 1e-6);
        let start = Complex::new(2.0, 0.0);
        let expected = start - f(start) / df(start);
        assert_eq!(solver.solve(start), expected);
    }

    #[test]
    fn convergence_is_checked_before_the_step() {
        // The returned estimate is one whose residual was already inside
        // tolerance, and it is not advanced any further.
        let solver = NewtonSolver::default();
        let z = solver.solve(Complex::new(2.0, 0.5));
        assert!(f(z).abs() < solver.tolerance);
        let again = solver.solve(z);
        assert_eq!(again, z);
    }

    #[test]
    fn points_near_a_root_fall_into_its_basin() {
        let solver = NewtonSolver::default();
        assert_eq!(solver.color_at(Complex::new(1.2, 0.1)), Color::RED);
        assert_eq!(solver.color_at(Complex::new(-0.6, 1.0)), Color::GREEN);
        assert_eq!(solver.color_at(Complex::new(-0.6, -1.0)), Color::BLUE);
    }

    #[test]
    fn the_real_axis_is_red() {
        // Starting on the positive real axis Newton's method never leaves it.
        let solver = NewtonSolver::default();
        assert_eq!(solver.color_at(Complex::new(3.0, 0.0)), Color::RED);
        assert_eq!(solver.color_at(Complex::new(0.5, 0.0)), Color::RED);
    }
}
