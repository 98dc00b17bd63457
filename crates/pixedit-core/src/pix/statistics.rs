//! Image statistics operations

use super::{Channel, Pix};
use crate::color;

impl Pix {
    /// Largest value held by any channel of any pixel.
    pub fn max_channel_value(&self) -> u8 {
        self.data()
            .iter()
            .map(|&p| {
                let (r, g, b) = color::extract_rgb(p);
                r.max(g).max(b)
            })
            .max()
            .unwrap_or(0)
    }

    /// Mean value of one channel over the whole image.
    pub fn channel_mean(&self, channel: Channel) -> f64 {
        let sum: u64 = self.data().iter().map(|&p| channel.extract(p) as u64).sum();
        sum as f64 / self.data().len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_channel_value() {
        let mut pm = Pix::new(2, 1).unwrap().to_mut();
        pm.set_rgb(0, 0, 3, 90, 4).unwrap();
        pm.set_rgb(1, 0, 40, 5, 6).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.max_channel_value(), 90);
        assert!((pix.channel_mean(Channel::Blue) - 5.0).abs() < 1e-12);
    }
}
