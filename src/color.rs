//! Colors of the customers on the rack

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Saturation (in percent) of every customer color
pub const SATURATION: u8 = 70;
/// Lightness (in percent) of every customer color
pub const LIGHTNESS: u8 = 60;


/// A pastel color, written `hsl(<hue>, 70%, 60%)` in CSS
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerColor {
    hue: u16,
}

impl CustomerColor {
    /// Hue, in degrees, in `[0, 360)`
    pub fn hue(&self) -> u16 { self.hue }
    pub fn saturation(&self) -> u8 { SATURATION }
    pub fn lightness(&self) -> u8 { LIGHTNESS }

    pub fn to_css_color(&self) -> csscolorparser::Color {
        csscolorparser::Color::from_hsla(
            self.hue as f64,
            SATURATION as f64 / 100.0,
            LIGHTNESS as f64 / 100.0,
            1.0)
    }

    /// The `#rrggbb` form of this color, for hosts that do not understand HSL
    pub fn to_hex_string(&self) -> String {
        self.to_css_color().to_hex_string()
    }
}

impl Display for CustomerColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, SATURATION, LIGHTNESS)
    }
}


/// Rolling hash over the UTF-16 code units of a name.
///
/// This is the same hash the web front-end uses, so that a customer keeps the same color everywhere:
/// the accumulator is a double, and only the shift works on its 32-bit truncation.
pub fn name_hash(name: &str) -> f64 {
    name.encode_utf16()
        .fold(0.0f64, |hash, unit| {
            let shifted = to_int32(hash).wrapping_shl(5);
            unit as f64 + (shifted as f64 - hash)
        })
}

/// Truncate a double to a signed 32-bit integer, wrapping modulo 2^32
fn to_int32(value: f64) -> i32 {
    if value.is_finite() == false {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32 as i32
}

/// Deterministically pick a color for a customer name.
///
/// Different names may end up with the same hue.
pub fn generate_color_from_name(name: &str) -> CustomerColor {
    let hue = name_hash(name).rem_euclid(360.0) as u16 % 360;
    CustomerColor { hue }
}


/// Remembers the color that has been given to every customer.
///
/// Colors are computed once, then reused. Nothing is ever evicted.
#[derive(Clone, Debug, Default)]
pub struct ColorMap {
    colors: HashMap<String, CustomerColor>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color of this customer, computing it if this is the first time it is requested
    pub fn get_or_assign(&mut self, name: &str) -> CustomerColor {
        if let Some(color) = self.colors.get(name) {
            return *color;
        }

        let color = generate_color_from_name(name);
        log::trace!("Assigning {} to {:?}", color, name);
        self.colors.insert(name.to_string(), color);
        color
    }

    /// Returns the color of this customer, if it has already been assigned
    pub fn get(&self, name: &str) -> Option<CustomerColor> {
        self.colors.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_hues() {
        assert_eq!(name_hash(""), 0.0);
        assert_eq!(name_hash("A"), 65.0);
        assert_eq!(name_hash("Ana"), 65972.0);
        assert_eq!(generate_color_from_name("Ana").hue(), 92);
        assert_eq!(generate_color_from_name("Ana").to_string(), "hsl(92, 70%, 60%)");
        assert_eq!(generate_color_from_name("María").hue(), 322);
        assert_eq!(generate_color_from_name("12.345.678-9").hue(), 260);
    }

    #[test]
    fn test_hash_beyond_32_bits() {
        // The accumulator goes past 2^31 without being truncated
        assert_eq!(name_hash("Pedro Soto"), 3_083_032_107.0);
        assert_eq!(generate_color_from_name("Pedro Soto").hue(), 27);

        // A negative hash still gives a hue in range
        assert_eq!(name_hash("Juan Pérez"), -1_288_768_474.0);
        assert_eq!(generate_color_from_name("Juan Pérez").hue(), 206);
    }

    #[test]
    fn test_to_int32() {
        assert_eq!(to_int32(3_083_032_107.0), -1_211_935_189);
        assert_eq!(to_int32(-1.0), -1);
        assert_eq!(to_int32(4_294_967_296.0 * 3.0 + 5.0), 5);
        assert_eq!(to_int32(f64::NAN), 0);
    }

    #[test]
    fn test_hue_range() {
        let names = [
            "Juan Pérez",
            "María José Fernández Riquelme",
            "12.345.678-9",
            "Ñandú",
            "a very long customer name that certainly makes the hash wrap around several times",
            "🏎️ Team",
        ];
        for name in names.iter() {
            let color = generate_color_from_name(name);
            assert!(color.hue() < 360, "hue of {:?} is {}", name, color.hue());
            assert_eq!(color.saturation(), 70);
            assert_eq!(color.lightness(), 60);
            // Pure function
            assert_eq!(color, generate_color_from_name(name));
        }
    }

    #[test]
    fn test_memoization() {
        let mut map = ColorMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("Juan Pérez"), None);

        let first = map.get_or_assign("Juan Pérez");
        let second = map.get_or_assign("Juan Pérez");
        assert_eq!(first, second);
        assert_eq!(map.get("Juan Pérez"), Some(first));
        assert_eq!(map.len(), 1);

        map.get_or_assign("Ana");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_css_conversion() {
        let color = generate_color_from_name("Ana");
        let parsed = csscolorparser::parse(&color.to_string()).unwrap();
        assert_eq!(parsed.to_hex_string(), color.to_hex_string());
        assert!(color.to_hex_string().starts_with('#'));
    }
}
