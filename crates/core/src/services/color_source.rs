use crate::errors::CoreError;
use crate::models::chart::Color;

/// Supplies the fill color of each new slice or bar.
///
/// Mappers ask for one color per descriptor, in descriptor order.
/// Swap the source to get deterministic colors (tests, themed hosts).
pub trait ColorSource {
    fn next_color(&mut self) -> Result<Color, CoreError>;
}

/// Default policy: fully opaque, uniformly random RGB on every call.
/// Not seeded and not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColorSource;

impl ColorSource for RandomColorSource {
    fn next_color(&mut self) -> Result<Color, CoreError> {
        let mut rgb = [0u8; 3];
        getrandom::getrandom(&mut rgb)
            .map_err(|e| CoreError::ColorSource(format!("Failed to generate random color: {e}")))?;
        Ok(Color::from_rgb(rgb[0], rgb[1], rgb[2]))
    }
}

/// Cycles through a fixed list of colors.
#[derive(Debug, Clone)]
pub struct PaletteColorSource {
    palette: Vec<Color>,
    next: usize,
}

impl PaletteColorSource {
    pub fn new(palette: Vec<Color>) -> Self {
        Self { palette, next: 0 }
    }
}

impl ColorSource for PaletteColorSource {
    fn next_color(&mut self) -> Result<Color, CoreError> {
        if self.palette.is_empty() {
            return Ok(Color::BLACK);
        }
        let color = self.palette[self.next % self.palette.len()];
        self.next = (self.next + 1) % self.palette.len();
        Ok(color)
    }
}
