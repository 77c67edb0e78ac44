use crate::errors::CoreError;
use crate::models::chart::PieSlice;
use crate::models::settings::PieChartConfig;
use crate::models::state::{SavedPieState, ViewStateBundle, SAVED_STATE_VIEW_KEY};
use crate::services::chart_service::FULL_CIRCLE_DEGREES;

use super::layout::{Rect, Size, SizingPolicy};
use super::surface::DrawSurface;

/// Bundle key for the host's own state saved alongside the pie chart.
pub const PIE_INSTANCE_KEY: &str = "instance_key";

/// Wedges are always drawn closed through the center.
const USE_ARC_CENTER: bool = true;

/// Tolerance when checking that a slice list covers the full circle.
const SWEEP_TOLERANCE: f64 = 1e-6;

/// Pie chart widget: one wedge per slice, with tap-to-label hit testing.
#[derive(Debug, Clone, Default)]
pub struct PieChart {
    config: PieChartConfig,
    slices: Vec<PieSlice>,
    size: Size,
    layout_requested: bool,
}

impl PieChart {
    pub fn new(config: PieChartConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    /// Last measured size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the slices and request a new layout pass.
    ///
    /// Slices are trusted as given; a list that does not cover the full
    /// circle (or nothing, for a zero total) is only logged. Slices with a
    /// NaN or infinite angle are dropped, since they cannot be persisted.
    pub fn set_slices(&mut self, mut slices: Vec<PieSlice>) {
        let before = slices.len();
        slices.retain(PieSlice::is_finite);
        if slices.len() != before {
            tracing::warn!(dropped = before - slices.len(), "dropping non-finite pie slices");
        }
        let total: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        if !slices.is_empty()
            && total.abs() > SWEEP_TOLERANCE
            && (total - FULL_CIRCLE_DEGREES).abs() > SWEEP_TOLERANCE
        {
            tracing::warn!(total, "pie slices do not sum to a full circle");
        }
        self.slices = slices;
        self.layout_requested = true;
    }

    /// Returns and clears the pending layout request.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    /// Measure the chart.
    ///
    /// With exact dimensions the pie takes half of the larger side and the
    /// whole smaller side, leaving room for a neighbouring widget.
    /// Otherwise it takes all the space it is given.
    pub fn measure(&mut self, policy: SizingPolicy, available: Size) -> Size {
        self.size = match policy {
            SizingPolicy::SizeToContent => available,
            SizingPolicy::Exact => {
                if available.width > available.height {
                    Size::new(available.width / 2, available.height)
                } else {
                    Size::new(available.width, available.height / 2)
                }
            }
        };
        self.size
    }

    /// Draw every slice as a closed wedge, in slice order.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let bounds = Rect::from_size(self.size);
        for slice in &self.slices {
            surface.draw_arc(
                bounds,
                slice.start_angle,
                slice.sweep_angle,
                USE_ARC_CENTER,
                slice.color,
            );
        }
    }

    /// Angle of a tap relative to the chart center, in degrees within `[0, 360)`.
    #[must_use]
    pub fn tap_angle(&self, x: f64, y: f64) -> f64 {
        let center_x = f64::from(self.size.width / 2);
        let center_y = f64::from(self.size.height / 2);
        normalize_degrees((y - center_y).atan2(x - center_x).to_degrees())
    }

    /// First slice whose open interval `(start, start + sweep)` contains `angle`.
    #[must_use]
    pub fn slice_at_angle(&self, angle: f64) -> Option<&PieSlice> {
        self.slices.iter().find(|slice| slice.contains_angle(angle))
    }

    /// Resolve a tap to the label of the touched slice.
    /// `None` for taps on a boundary or on an empty chart.
    #[must_use]
    pub fn handle_tap(&self, x: f64, y: f64) -> Option<&str> {
        let angle = self.tap_angle(x, y);
        let hit = self.slice_at_angle(angle).map(|slice| slice.label.as_str());
        tracing::trace!(x, y, angle, ?hit, "pie chart tap");
        hit
    }

    // ── State persistence ───────────────────────────────────────────

    /// Encode the current slices.
    pub fn serialize(&self) -> Result<String, CoreError> {
        SavedPieState {
            pieces: self.slices.clone(),
        }
        .to_json()
    }

    /// Replace the slices with a previously serialized set.
    /// A malformed blob is discarded and leaves the chart empty.
    pub fn restore(&mut self, blob: &str) {
        self.slices = match SavedPieState::from_json(blob) {
            Ok(state) => state.pieces,
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed pie chart state");
                Vec::new()
            }
        };
        self.layout_requested = true;
    }

    /// Save the slices together with the host's own state.
    pub fn save_instance_state(
        &self,
        host_state: Option<&str>,
    ) -> Result<ViewStateBundle, CoreError> {
        let mut bundle = ViewStateBundle::new();
        bundle.put_string(SAVED_STATE_VIEW_KEY, self.serialize()?);
        if let Some(host_state) = host_state {
            bundle.put_string(PIE_INSTANCE_KEY, host_state);
        }
        Ok(bundle)
    }

    /// Restore from a saved bundle and hand back the host's own state.
    /// Leaves the slices untouched if the bundle carries none.
    pub fn restore_instance_state(&mut self, bundle: &ViewStateBundle) -> Option<String> {
        if let Some(blob) = bundle.get_string(SAVED_STATE_VIEW_KEY) {
            self.restore(blob);
        }
        bundle.get_string(PIE_INSTANCE_KEY).map(str::to_string)
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_CIRCLE_DEGREES);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= FULL_CIRCLE_DEGREES {
        0.0
    } else {
        wrapped
    }
}
