// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A plain RGBA color.  The channels are trusted as given.

use std::fmt;

/// Four independent 8-bit channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel; 255 is fully opaque.
    pub alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// An opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::rgba(red, green, blue, 255)
    }

    /// A color with an explicit alpha.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// The channels in buffer order.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

/// Formats as a CSS color, alpha scaled to 0..1.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            f64::from(self.alpha) / 255.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_defaults_to_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).alpha, 255);
        assert_eq!(Color::BLACK, Color::rgba(0, 0, 0, 255));
    }

    #[test]
    fn bytes_are_in_rgba_order() {
        assert_eq!(Color::rgba(10, 20, 30, 40).to_bytes(), [10, 20, 30, 40]);
    }

    #[test]
    fn displays_as_css() {
        assert_eq!(Color::RED.to_string(), "rgba(255, 0, 0, 1)");
        assert_eq!(Color::rgba(0, 0, 100, 0).to_string(), "rgba(0, 0, 100, 0)");
    }
}
