use crate::errors::CoreError;
use crate::models::chart::{CategoryBar, PieSlice};
use crate::models::transaction::TransactionRecord;
use crate::services::color_source::ColorSource;

/// Degrees in a full pie.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// Start angle of the first slice.
pub const DEFAULT_START_ANGLE: f64 = 0.0;

/// Generates chart-ready descriptors from transaction records.
///
/// The core computes all the numbers; the host only renders.
/// - Pie slices: one wedge per transaction, sized by its share of the total
/// - Category bars: one column per transaction, or per category when aggregated
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Map transactions to contiguous pie slices, preserving input order.
    ///
    /// `sweep = amount / total * 360`; each slice starts where the previous
    /// one ended. A zero total yields all-zero sweeps instead of dividing by zero.
    /// Records with a negative or non-finite amount are rejected.
    pub fn map_slices(
        &self,
        records: &[TransactionRecord],
        colors: &mut dyn ColorSource,
    ) -> Result<Vec<PieSlice>, CoreError> {
        TransactionRecord::validate_all(records)?;
        let total: f64 = records.iter().map(|r| r.amount).sum();
        let mut start_angle = DEFAULT_START_ANGLE;
        let mut slices = Vec::with_capacity(records.len());

        for record in records {
            let sweep_angle = sweep_angle(record.amount, total);
            slices.push(PieSlice {
                color: colors.next_color()?,
                label: record.name.clone(),
                start_angle,
                sweep_angle,
            });
            start_angle += sweep_angle;
        }

        if total <= 0.0 && !records.is_empty() {
            tracing::debug!(count = records.len(), "zero total amount, all slices are empty");
        }

        Ok(slices)
    }

    /// Map each transaction to its own bar, preserving input order.
    ///
    /// Transactions sharing a category are NOT merged; see
    /// [`ChartService::aggregate_by_category`] for that.
    pub fn map_bars(
        &self,
        records: &[TransactionRecord],
        colors: &mut dyn ColorSource,
    ) -> Result<Vec<CategoryBar>, CoreError> {
        TransactionRecord::validate_all(records)?;
        records
            .iter()
            .map(|record| {
                Ok(CategoryBar {
                    color: colors.next_color()?,
                    value: record.amount,
                    label: record.name.clone(),
                })
            })
            .collect()
    }

    /// One bar per distinct category, summing amounts.
    /// Bars follow the order in which each category first appears.
    pub fn aggregate_by_category(
        &self,
        records: &[TransactionRecord],
        colors: &mut dyn ColorSource,
    ) -> Result<Vec<CategoryBar>, CoreError> {
        TransactionRecord::validate_all(records)?;
        let mut totals: Vec<(&str, f64)> = Vec::new();
        for record in records {
            match totals.iter_mut().find(|(category, _)| *category == record.category) {
                Some((_, sum)) => *sum += record.amount,
                None => totals.push((record.category.as_str(), record.amount)),
            }
        }

        totals
            .into_iter()
            .map(|(category, value)| {
                Ok(CategoryBar {
                    color: colors.next_color()?,
                    value,
                    label: category.to_string(),
                })
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn sweep_angle(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * FULL_CIRCLE_DEGREES
    } else {
        0.0
    }
}
