// File: crates/daycount-core/src/color.rs
// Summary: Cell colors and the fixed-hue lightness scale.

use std::fmt;

use crate::scale::LinearScale;

/// Hue used by the default scale (a mid green).
pub const DEFAULT_HUE: u16 = 127;
/// Saturation of every color produced by [`HueScale`], in percent.
pub const SATURATION: f64 = 50.0;
/// Lightness assigned to the least active occupied day, in percent.
pub const PALE_LIGHTNESS: f64 = 80.0;
/// Lightness assigned to the most active day, in percent.
pub const VIVID_LIGHTNESS: f64 = 20.0;
/// Default color for days without elements (`#EAEAEA`).
pub const EMPTY_DAY_COLOR: Color = Color::Rgb(0xEA, 0xEA, 0xEA);

/// Color handed to the renderer. `Display` yields CSS text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { hue: u16, saturation: f64, lightness: f64 },
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn hsl(hue: u16, saturation: f64, lightness: f64) -> Self {
        Color::Hsl { hue, saturation, lightness }
    }

    /// Lightness in percent, when the color carries one.
    pub fn lightness(&self) -> Option<f64> {
        match *self {
            Color::Hsl { lightness, .. } => Some(lightness),
            Color::Rgb(..) => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self { EMPTY_DAY_COLOR }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl { hue, saturation, lightness } => {
                write!(f, "hsl({hue}, {saturation}%, {lightness:.4}%)")
            }
            Color::Rgb(r, g, b) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

/// Boxed `(min, max, n) -> Color` used to color occupied days.
pub type ColorFn = Box<dyn Fn(usize, usize, usize) -> Color + Send + Sync>;

/// Fixed-hue scale: darker with more activity.
///
/// `min` maps to 80% lightness, `max` to 20%. When `min == max` there is no
/// spread to scale over and every occupied day gets the vivid end (20%).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HueScale {
    pub hue: u16,
}

impl HueScale {
    pub const fn new(hue: u16) -> Self { Self { hue } }

    pub fn color_for(&self, min: usize, max: usize, n: usize) -> Color {
        let scale = LinearScale::new((min as f64, max as f64), (PALE_LIGHTNESS, VIVID_LIGHTNESS));
        let lightness = match scale.map(n as f64) {
            Some(l) => l,
            None => {
                log::trace!("flat count range min={min} max={max}; using vivid lightness");
                VIVID_LIGHTNESS
            }
        };
        Color::hsl(self.hue, SATURATION, lightness)
    }
}

impl Default for HueScale {
    fn default() -> Self { Self::new(DEFAULT_HUE) }
}

/// Boxed fixed-hue scale, ready to drop into a configuration.
pub fn hue_scale(hue: u16) -> ColorFn {
    let scale = HueScale::new(hue);
    Box::new(move |min, max, n| scale.color_for(min, max, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_text() {
        assert_eq!(Color::hsl(127, 50.0, 80.0).to_string(), "hsl(127, 50%, 80.0000%)");
        assert_eq!(EMPTY_DAY_COLOR.to_string(), "#EAEAEA");
    }

    #[test]
    fn scale_endpoints() {
        let s = HueScale::default();
        assert_eq!(s.color_for(1, 5, 1).lightness(), Some(80.0));
        assert_eq!(s.color_for(1, 5, 5).lightness(), Some(20.0));
        assert_eq!(s.color_for(0, 10, 5).lightness(), Some(50.0));
    }

    #[test]
    fn flat_range_is_vivid() {
        let c = HueScale::new(200).color_for(3, 3, 3);
        assert_eq!(c, Color::hsl(200, 50.0, 20.0));
    }

    #[test]
    fn boxed_scale_matches_struct() {
        let f = hue_scale(DEFAULT_HUE);
        assert_eq!(f(0, 4, 2), HueScale::default().color_for(0, 4, 2));
    }
}
