use crate::errors::CoreError;
use crate::models::chart::CategoryBar;
use crate::models::settings::CategoryChartConfig;
use crate::models::state::{SavedCategoryState, ViewStateBundle, SAVED_STATE_VIEW_KEY};

use super::layout::{Rect, Size, SizingPolicy};
use super::surface::DrawSurface;

/// Bundle key for the host's own state saved alongside the category chart.
pub const CATEGORY_INSTANCE_KEY: &str = "instance_category_key";

/// Category chart widget: bottom-anchored columns scaled to the largest value.
#[derive(Debug, Clone, Default)]
pub struct CategoryChart {
    config: CategoryChartConfig,
    bars: Vec<CategoryBar>,
    max_value: f64,
    size: Size,
    layout_requested: bool,
}

impl CategoryChart {
    pub fn new(config: CategoryChartConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &CategoryChartConfig {
        &self.config
    }

    #[must_use]
    pub fn bars(&self) -> &[CategoryBar] {
        &self.bars
    }

    /// Largest bar value, or 0 for an empty chart.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the bars, recompute the scale and request a new layout pass.
    /// Bars with a NaN or infinite value are dropped, since they cannot be persisted.
    pub fn set_bars(&mut self, mut bars: Vec<CategoryBar>) {
        let before = bars.len();
        bars.retain(CategoryBar::is_finite);
        if bars.len() != before {
            tracing::warn!(dropped = before - bars.len(), "dropping non-finite category bars");
        }
        self.bars = bars;
        self.max_value = max_value(&self.bars);
        self.layout_requested = true;
    }

    /// Returns and clears the pending layout request.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    /// Measure the chart.
    ///
    /// Sized to content, the chart is one configured block width per bar
    /// and the full available height. Exact dimensions are taken as given.
    pub fn measure(&mut self, policy: SizingPolicy, available: Size) -> Size {
        self.size = match policy {
            SizingPolicy::Exact => available,
            SizingPolicy::SizeToContent => {
                let count = u32::try_from(self.bars.len()).unwrap_or(u32::MAX);
                Size::new(self.config.block_width.saturating_mul(count), available.height)
            }
        };
        self.size
    }

    /// Rendered height of every bar: `height * value / max`.
    #[must_use]
    pub fn bar_heights(&self) -> Vec<f64> {
        let height = f64::from(self.size.height);
        self.bars
            .iter()
            .map(|bar| {
                if self.max_value > 0.0 {
                    height * (bar.value / self.max_value)
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Draw bars left to right, anchored to the bottom edge.
    /// The width is split evenly with real division so columns leave no gaps.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        if self.bars.is_empty() {
            return;
        }
        let total_height = f64::from(self.size.height);
        let block_width = f64::from(self.size.width) / self.bars.len() as f64;

        let mut left = 0.0;
        for (bar, bar_height) in self.bars.iter().zip(self.bar_heights()) {
            let rect = Rect::new(left, total_height - bar_height, left + block_width, total_height);
            surface.draw_rect(rect, bar.color);
            left += block_width;
        }
    }

    // ── State persistence ───────────────────────────────────────────

    /// Encode the current bars.
    pub fn serialize(&self) -> Result<String, CoreError> {
        SavedCategoryState {
            charts: self.bars.clone(),
        }
        .to_json()
    }

    /// Replace the bars with a previously serialized set.
    /// A malformed blob is discarded and leaves the chart empty.
    pub fn restore(&mut self, blob: &str) {
        let bars = match SavedCategoryState::from_json(blob) {
            Ok(state) => state.charts,
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed category chart state");
                Vec::new()
            }
        };
        self.set_bars(bars);
    }

    /// Save the bars together with the host's own state.
    pub fn save_instance_state(
        &self,
        host_state: Option<&str>,
    ) -> Result<ViewStateBundle, CoreError> {
        let mut bundle = ViewStateBundle::new();
        bundle.put_string(SAVED_STATE_VIEW_KEY, self.serialize()?);
        if let Some(host_state) = host_state {
            bundle.put_string(CATEGORY_INSTANCE_KEY, host_state);
        }
        Ok(bundle)
    }

    /// Restore from a saved bundle and hand back the host's own state.
    pub fn restore_instance_state(&mut self, bundle: &ViewStateBundle) -> Option<String> {
        if let Some(blob) = bundle.get_string(SAVED_STATE_VIEW_KEY) {
            self.restore(blob);
        }
        bundle.get_string(CATEGORY_INSTANCE_KEY).map(str::to_string)
    }
}

fn max_value(bars: &[CategoryBar]) -> f64 {
    bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
}
