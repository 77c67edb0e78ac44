pub mod errors;
pub mod models;
pub mod services;
pub mod widgets;

use models::{
    settings::{CategoryChartConfig, PieChartConfig},
    state::ViewStateBundle,
    transaction::TransactionRecord,
};
use services::{
    chart_service::ChartService,
    color_source::{ColorSource, RandomColorSource},
    data_loader::TransactionLoader,
};
use widgets::{category_chart::CategoryChart, pie_chart::PieChart};

use errors::CoreError;

/// Bundle key of the pie chart's encoded slices in [`SpendingCharts::save_state`].
pub const PIE_STATE_KEY: &str = "pie_chart";

/// Bundle key of the category chart's encoded bars in [`SpendingCharts::save_state`].
pub const CATEGORY_STATE_KEY: &str = "category_chart";

/// Main entry point for the Spending Charts core library.
/// Holds the loaded transactions, both chart widgets and the color policy.
#[must_use]
pub struct SpendingCharts {
    records: Vec<TransactionRecord>,
    pie: PieChart,
    categories: CategoryChart,
    chart_service: ChartService,
    colors: Box<dyn ColorSource>,
}

impl std::fmt::Debug for SpendingCharts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpendingCharts")
            .field("records", &self.records.len())
            .field("slices", &self.pie.slices().len())
            .field("bars", &self.categories.bars().len())
            .finish()
    }
}

impl SpendingCharts {
    /// Wrap already-loaded transactions, with default widget configs and random colors.
    /// Fails if any record has a negative or non-finite amount or an empty category.
    pub fn new(records: Vec<TransactionRecord>) -> Result<Self, CoreError> {
        TransactionRecord::validate_all(&records)?;
        Ok(Self::build(records))
    }

    fn build(records: Vec<TransactionRecord>) -> Self {
        Self {
            records,
            pie: PieChart::default(),
            categories: CategoryChart::default(),
            chart_service: ChartService::new(),
            colors: Box::new(RandomColorSource),
        }
    }

    /// No transactions: both charts render empty.
    pub fn empty() -> Self {
        Self::build(Vec::new())
    }

    /// Load transactions from a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(Self::build(TransactionLoader::load_from_str(json)?))
    }

    /// Load the sample payload bundled with the library.
    pub fn from_bundled_sample() -> Result<Self, CoreError> {
        Ok(Self::build(TransactionLoader::bundled_sample()?))
    }

    /// Load a payload, falling back to an explicit "no data" state on failure.
    pub fn load_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load transactions, showing no data");
            Self::empty()
        })
    }

    /// Replace the color policy used for subsequently mapped descriptors.
    pub fn with_color_source(mut self, colors: impl ColorSource + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    pub fn with_pie_config(mut self, config: PieChartConfig) -> Self {
        self.pie = PieChart::new(config);
        self
    }

    pub fn with_category_config(mut self, config: CategoryChartConfig) -> Self {
        self.categories = CategoryChart::new(config);
        self
    }

    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Derive fresh slices from the transactions and push them into the pie chart.
    pub fn show_pie(&mut self) -> Result<(), CoreError> {
        let slices = self.chart_service.map_slices(&self.records, self.colors.as_mut())?;
        self.pie.set_slices(slices);
        Ok(())
    }

    /// Derive one bar per transaction and push them into the category chart.
    pub fn show_categories(&mut self) -> Result<(), CoreError> {
        let bars = self.chart_service.map_bars(&self.records, self.colors.as_mut())?;
        self.categories.set_bars(bars);
        Ok(())
    }

    /// Derive one bar per category (amounts summed) and push them into the category chart.
    pub fn show_categories_aggregated(&mut self) -> Result<(), CoreError> {
        let bars = self
            .chart_service
            .aggregate_by_category(&self.records, self.colors.as_mut())?;
        self.categories.set_bars(bars);
        Ok(())
    }

    pub fn pie(&self) -> &PieChart {
        &self.pie
    }

    pub fn pie_mut(&mut self) -> &mut PieChart {
        &mut self.pie
    }

    pub fn category_chart(&self) -> &CategoryChart {
        &self.categories
    }

    pub fn category_chart_mut(&mut self) -> &mut CategoryChart {
        &mut self.categories
    }

    // ── State ───────────────────────────────────────────────────────

    /// Save both charts' descriptors. Raw transactions are not included.
    pub fn save_state(&self) -> Result<ViewStateBundle, CoreError> {
        let mut bundle = ViewStateBundle::new();
        bundle.put_string(PIE_STATE_KEY, self.pie.serialize()?);
        bundle.put_string(CATEGORY_STATE_KEY, self.categories.serialize()?);
        Ok(bundle)
    }

    /// Restore both charts from a bundle produced by [`SpendingCharts::save_state`].
    /// Charts missing from the bundle keep their current descriptors.
    pub fn restore_state(&mut self, bundle: &ViewStateBundle) {
        if let Some(blob) = bundle.get_string(PIE_STATE_KEY) {
            self.pie.restore(blob);
        }
        if let Some(blob) = bundle.get_string(CATEGORY_STATE_KEY) {
            self.categories.restore(blob);
        }
    }
}
