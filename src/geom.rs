use serde::{Deserialize, Serialize};

/// 2D point in the document's Y-up logical space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Attribute number formatting: shortest display form, with negative zero
/// collapsed to plain `0`.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_collapses() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn shortest_display_form() {
        assert_eq!(fmt_num(-30.0), "-30");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(10.25), "10.25");
    }

    #[test]
    fn quarter_turn_in_radians() {
        assert!((deg_to_rad(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
