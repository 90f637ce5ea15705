// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex arithmetic.  Addition, subtraction, multiplication and
//! division come straight from `num::Complex`, whose operators take
//! their operands by value and hand back new values.  Division is the
//! conjugate-over-squared-magnitude form, so a zero divisor quietly
//! produces NaN or infinity rather than an error.
//!
//! The few operations the renderers need that `num` either lacks or
//! computes differently live on the `ComplexExt` trait.

/// The complex value type used throughout the crate.
pub type Complex = num::Complex<f64>;

/// Extra operations on a complex number.
pub trait ComplexExt {
    /// Raise to a non-negative integer power by repeated
    /// multiplication, starting from 1+0i.  `power(0)` is 1+0i.
    fn power(self, n: u32) -> Self;

    /// Squared Euclidean distance to another point.  Only ever used to
    /// compare distances, so the square root is skipped.
    fn distance2(self, other: Self) -> f64;

    /// Euclidean magnitude, `sqrt(re^2 + im^2)`.
    fn abs(self) -> f64;
}

impl ComplexExt for Complex {
    fn power(self, n: u32) -> Self {
        let mut result = Complex::new(1.0, 0.0);
        for _ in 0..n {
            result = result * self;
        }
        result
    }

    #[inline]
    fn distance2(self, other: Self) -> f64 {
        let dr = self.re - other.re;
        let di = self.im - other.im;
        dr * dr + di * di
    }

    #[inline]
    fn abs(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}
