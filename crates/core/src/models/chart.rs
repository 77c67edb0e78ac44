use serde::{Deserialize, Serialize};

/// A 32-bit ARGB color, packed the same way UI toolkits hand colors to paint
/// objects: `0xAARRGGBB`.
///
/// Serialized as its plain integer value so persisted state stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Color(
            (alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32,
        )
    }

    /// Fully opaque color from RGB channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xFF, red, green, blue)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// One wedge of the pie chart, derived from a single transaction.
///
/// The core computes the angles, the host only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Fill color of the wedge
    pub color: Color,

    /// Transaction name shown when the wedge is tapped
    #[serde(rename = "name")]
    pub label: String,

    /// Start angle in degrees, clockwise from 3 o'clock
    #[serde(rename = "startAngle")]
    pub start_angle: f64,

    /// Angular extent in degrees (never negative)
    #[serde(rename = "sweepAngle")]
    pub sweep_angle: f64,
}

impl PieSlice {
    pub fn new(color: Color, label: impl Into<String>, start_angle: f64, sweep_angle: f64) -> Self {
        Self {
            color,
            label: label.into(),
            start_angle,
            sweep_angle,
        }
    }

    /// End angle in degrees (`start_angle + sweep_angle`).
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Whether `angle` lies strictly inside this wedge.
    /// Boundary angles belong to neither neighbour.
    #[must_use]
    pub fn contains_angle(&self, angle: f64) -> bool {
        angle > self.start_angle && angle < self.end_angle()
    }

    /// Both angles are finite, so the slice survives a JSON round trip.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start_angle.is_finite() && self.sweep_angle.is_finite()
    }
}

/// One column of the category chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    /// Fill color of the column
    pub color: Color,

    /// Raw value; column height is scaled against the chart's maximum
    pub value: f64,

    /// Label of the column
    #[serde(rename = "name")]
    pub label: String,
}

impl CategoryBar {
    pub fn new(color: Color, label: impl Into<String>, value: f64) -> Self {
        Self {
            color,
            value,
            label: label.into(),
        }
    }

    /// The value is finite, so the bar survives a JSON round trip.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}
