//! Color engine: scale generation, palette building, contrast evaluation and corpus matching.
//!
//! Everything in here is synchronous and free of shared state. Hosts own a
//! [`palette::PaletteConfig`], mutate it through its validated setters and call
//! [`palette::rebuild`] to obtain a fresh [`palette::Palette`].

pub mod apca;
pub mod contrast;
pub mod error;
pub mod matcher;
pub mod palette;
pub mod scale;
pub mod space;

pub use self::error::ColorError;
pub use self::space::{Color, LchCoords};

/// Round half-up to the given multiplier (`100.0` keeps two decimals).
///
/// Matches the rounding used for displayed values, where `x.5` always rounds towards
/// positive infinity.
#[must_use]
pub fn round_to(value: f64, multiplier: f64) -> f64 {
    (value * multiplier + 0.5).floor() / multiplier
}

/// Round half-up to two decimals.
#[must_use]
pub fn round_to_hundredth(value: f64) -> f64 {
    round_to(value, 100.0)
}

/// Round half-up to one decimal.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    round_to(value, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_to_hundredth(4.495), 4.5);
        assert_eq!(round_to_hundredth(57.9149), 57.91);
        assert_eq!(round_to(-2.5, 1.0), -2.0);
        assert_eq!(round_to(2.5, 1.0), 3.0);
        assert_eq!(round_to_tenth(0.04), 0.0);
    }
}
