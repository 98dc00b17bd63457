//! RGB channel selection
//!
//! Channels are numbered R=0, G=1, B=2 throughout the workspace.

use crate::color;

/// Color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel (bits 24-31)
    Red = 0,
    /// Green channel (bits 16-23)
    Green = 1,
    /// Blue channel (bits 8-15)
    Blue = 2,
}

impl Channel {
    /// All channels in processing order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Channel number (R=0, G=1, B=2).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn shift(self) -> u32 {
        match self {
            Channel::Red => color::RED_SHIFT,
            Channel::Green => color::GREEN_SHIFT,
            Channel::Blue => color::BLUE_SHIFT,
        }
    }

    /// Extract this channel from a packed pixel.
    #[inline]
    pub fn extract(self, pixel: u32) -> u8 {
        ((pixel >> self.shift()) & 0xff) as u8
    }

    /// Return `pixel` with this channel replaced by `value`.
    #[inline]
    pub fn replace(self, pixel: u32, value: u8) -> u32 {
        let shift = self.shift();
        (pixel & !(0xff << shift)) | ((value as u32) << shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }

    #[test]
    fn test_replace() {
        let p = color::compose_rgb(1, 2, 3);
        let q = Channel::Red.replace(p, 200);
        assert_eq!(color::extract_rgb(q), (200, 2, 3));
        assert_eq!(Channel::Blue.extract(q), 3);
    }
}
