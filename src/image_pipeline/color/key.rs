use std::fmt;

/// Canonical uppercase `#RRGGBB` key of an RGB colour.
///
/// Two colours are the same colour exactly when their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorKey(String);

impl ColorKey {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Packed `0xRRGGBB` value, as spreadsheet writers expect it.
    pub fn rgb(&self) -> u32 {
        // Built only by from_rgb, so the hex part is always six valid digits.
        u32::from_str_radix(&self.0[1..], 16).unwrap_or_default()
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
