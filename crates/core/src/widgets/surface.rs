use crate::models::chart::Color;

use super::layout::Rect;

/// Drawing backend supplied by the host UI toolkit.
///
/// Widgets only issue these two primitives; fill style is always solid.
pub trait DrawSurface {
    /// Draw an arc inscribed in `bounds`. Angles are degrees, clockwise from 3 o'clock.
    /// With `use_center` the arc is closed through the center (a pie wedge).
    fn draw_arc(
        &mut self,
        bounds: Rect,
        start_angle: f64,
        sweep_angle: f64,
        use_center: bool,
        color: Color,
    );

    fn draw_rect(&mut self, rect: Rect, color: Color);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Arc {
        bounds: Rect,
        start_angle: f64,
        sweep_angle: f64,
        use_center: bool,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
}

/// Surface that records draw calls instead of painting them.
/// Useful for headless hosts, snapshots and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_arc(
        &mut self,
        bounds: Rect,
        start_angle: f64,
        sweep_angle: f64,
        use_center: bool,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Arc {
            bounds,
            start_angle,
            sweep_angle,
            use_center,
            color,
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }
}
