use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Smallest allowed content font size in px.
pub const MIN_FONT_PX: u32 = 10;
/// Largest allowed content font size in px.
pub const MAX_FONT_PX: u32 = 30;
/// Amount a single shrink/grow step changes the size by.
pub const FONT_STEP_PX: u32 = 2;

const DEFAULT_FONT_PX: u32 = 15;

/// Content font size for a story page.
///
/// Held as a px integer, serialized as the CSS token (`"15px"`) the store
/// has always contained. A malformed stored token falls back to the default
/// rather than failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize(u32);

impl FontSize {
    /// Construct from a px value, clamped into the allowed range.
    pub fn from_px(px: u32) -> Self {
        Self(px.clamp(MIN_FONT_PX, MAX_FONT_PX))
    }

    pub fn px(self) -> u32 {
        self.0
    }

    /// One step smaller, clamped at the minimum.
    pub fn shrunk(self) -> Self {
        Self(self.0.saturating_sub(FONT_STEP_PX).max(MIN_FONT_PX))
    }

    /// One step larger, clamped at the maximum.
    pub fn grown(self) -> Self {
        Self((self.0 + FONT_STEP_PX).min(MAX_FONT_PX))
    }

    /// Parse a CSS px token (`"15px"`, `"15"`); anything else is `None`.
    ///
    /// Computed styles can carry fractional values (`"15.5px"`); those are
    /// rounded to the nearest whole px.
    pub fn parse_css(token: &str) -> Option<Self> {
        let digits = token.trim().trim_end_matches("px").trim();
        if let Ok(px) = digits.parse::<u32>() {
            return Some(Self::from_px(px));
        }
        digits
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| Self::from_px(v.round() as u32))
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_PX)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

// Stored tokens come from the environment's computed style and were never
// validated on write, so an unparsable token must not fail the record (or,
// worse, the whole stored list it sits in): fall back to the default.
impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(FontSize::parse_css(&token).unwrap_or_default())
    }
}
