use serde::{Deserialize, Serialize};

/// Default column width (in pixels) for a size-to-content category chart.
pub const DEFAULT_BLOCK_WIDTH: u32 = 30;

/// Construction-time options of the pie chart widget.
/// Both fields are cosmetic and never affect geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    /// Title shown next to the chart
    #[serde(default)]
    pub label_text: Option<String>,

    /// Secondary caption under the title
    #[serde(default)]
    pub description: Option<String>,
}

/// Construction-time options of the category chart widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChartConfig {
    /// Title shown next to the chart
    #[serde(default)]
    pub label_text: Option<String>,

    /// Cosmetic secondary value shown above the total
    #[serde(default)]
    pub overhead_value: f32,

    /// Width of one column when the chart sizes itself to its content.
    /// Hosts scale this by their display density before passing it in.
    #[serde(default = "default_block_width")]
    pub block_width: u32,
}

fn default_block_width() -> u32 {
    DEFAULT_BLOCK_WIDTH
}

impl Default for CategoryChartConfig {
    fn default() -> Self {
        Self {
            label_text: None,
            overhead_value: 0.0,
            block_width: DEFAULT_BLOCK_WIDTH,
        }
    }
}
