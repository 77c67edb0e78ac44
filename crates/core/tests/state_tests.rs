// ═══════════════════════════════════════════════════════════════════
// State Tests — serialize/restore, ViewStateBundle, malformed input
// ═══════════════════════════════════════════════════════════════════

use spending_charts_core::errors::CoreError;
use spending_charts_core::models::chart::{CategoryBar, Color, PieSlice};
use spending_charts_core::models::state::{
    SavedCategoryState, SavedPieState, ViewStateBundle, SAVED_STATE_VIEW_KEY,
};
use spending_charts_core::widgets::category_chart::{CategoryChart, CATEGORY_INSTANCE_KEY};
use spending_charts_core::widgets::pie_chart::{PieChart, PIE_INSTANCE_KEY};

/// Angles that have no short decimal form, to catch precision loss.
fn awkward_slices() -> Vec<PieSlice> {
    let third = 360.0 / 3.0;
    let seventh = 360.0 / 7.0;
    vec![
        PieSlice::new(Color(0xFF12_3456), "Lenta", 0.0, third),
        PieSlice::new(Color(0xFFFF_FFFF), "Shell", third, seventh),
        PieSlice::new(Color(0xFF00_0001), "Apteka", third + seventh, 360.0 - third - seventh),
    ]
}

fn awkward_bars() -> Vec<CategoryBar> {
    vec![
        CategoryBar::new(Color(0xFFAB_CDEF), "Groceries", 1210.5),
        CategoryBar::new(Color(0xFF00_0000), "Fuel", 0.1 + 0.2),
        CategoryBar::new(Color(0xFF80_8080), "Health", 0.0),
    ]
}

// ═══════════════════════════════════════════════════════════════════
// Pie chart state
// ═══════════════════════════════════════════════════════════════════

mod pie_state {
    use super::*;

    #[test]
    fn round_trip_is_lossless() {
        let mut pie = PieChart::default();
        pie.set_slices(awkward_slices());
        let blob = pie.serialize().unwrap();

        let mut restored = PieChart::default();
        restored.restore(&blob);
        assert_eq!(restored.slices(), awkward_slices().as_slice());
    }

    #[test]
    fn round_trip_of_empty_chart() {
        let pie = PieChart::default();
        let blob = pie.serialize().unwrap();
        assert_eq!(blob, r#"{"pieces":[]}"#);

        let mut restored = PieChart::default();
        restored.set_slices(awkward_slices());
        restored.restore(&blob);
        assert!(restored.slices().is_empty());
    }

    #[test]
    fn restore_replaces_existing_slices() {
        let mut source = PieChart::default();
        source.set_slices(awkward_slices()[..1].to_vec());
        let blob = source.serialize().unwrap();

        let mut target = PieChart::default();
        target.set_slices(awkward_slices());
        target.restore(&blob);
        assert_eq!(target.slices().len(), 1);
        assert_eq!(target.slices()[0].label, "Lenta");
    }

    #[test]
    fn malformed_blob_falls_back_to_empty() {
        let mut pie = PieChart::default();
        pie.set_slices(awkward_slices());
        pie.restore("{\"pieces\": [ {\"color\": \"red\"");
        assert!(pie.slices().is_empty());
    }

    #[test]
    fn wrong_shape_falls_back_to_empty() {
        let mut pie = PieChart::default();
        pie.set_slices(awkward_slices());
        pie.restore(r#"{"charts": []}"#);
        assert!(pie.slices().is_empty());
    }

    #[test]
    fn non_finite_slice_is_dropped_before_saving() {
        let mut slices = awkward_slices();
        slices.insert(1, PieSlice::new(Color::BLACK, "Broken", 10.0, f64::NAN));
        let mut pie = PieChart::default();
        pie.set_slices(slices);
        assert_eq!(pie.slices(), awkward_slices().as_slice());

        let blob = pie.serialize().unwrap();
        assert!(!blob.contains("null"));
        let mut restored = PieChart::default();
        restored.restore(&blob);
        assert_eq!(restored.slices(), awkward_slices().as_slice());
    }

    #[test]
    fn strict_decode_reports_error() {
        let err = SavedPieState::from_json("not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn instance_state_carries_host_state() {
        let mut pie = PieChart::default();
        pie.set_slices(awkward_slices());
        let bundle = pie.save_instance_state(Some("host-blob")).unwrap();
        assert!(bundle.contains_key(SAVED_STATE_VIEW_KEY));
        assert_eq!(bundle.get_string(PIE_INSTANCE_KEY), Some("host-blob"));

        let mut restored = PieChart::default();
        let host = restored.restore_instance_state(&bundle);
        assert_eq!(host.as_deref(), Some("host-blob"));
        assert_eq!(restored.slices(), awkward_slices().as_slice());
    }

    #[test]
    fn instance_state_without_host_state() {
        let pie = PieChart::default();
        let bundle = pie.save_instance_state(None).unwrap();
        assert!(!bundle.contains_key(PIE_INSTANCE_KEY));

        let mut restored = PieChart::default();
        assert!(restored.restore_instance_state(&bundle).is_none());
    }

    #[test]
    fn bundle_without_view_key_keeps_slices() {
        let mut pie = PieChart::default();
        pie.set_slices(awkward_slices());
        let host = pie.restore_instance_state(&ViewStateBundle::new());
        assert!(host.is_none());
        assert_eq!(pie.slices().len(), 3);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Category chart state
// ═══════════════════════════════════════════════════════════════════

mod category_state {
    use super::*;

    #[test]
    fn round_trip_is_lossless() {
        let mut chart = CategoryChart::default();
        chart.set_bars(awkward_bars());
        let blob = chart.serialize().unwrap();

        let mut restored = CategoryChart::default();
        restored.restore(&blob);
        assert_eq!(restored.bars(), awkward_bars().as_slice());
    }

    #[test]
    fn restore_recomputes_maximum() {
        let mut chart = CategoryChart::default();
        chart.set_bars(awkward_bars());
        let blob = chart.serialize().unwrap();

        let mut restored = CategoryChart::default();
        restored.restore(&blob);
        assert_eq!(restored.max_value(), 1210.5);
    }

    #[test]
    fn malformed_blob_falls_back_to_empty() {
        let mut chart = CategoryChart::default();
        chart.set_bars(awkward_bars());
        chart.restore("]]");
        assert!(chart.bars().is_empty());
        assert_eq!(chart.max_value(), 0.0);
    }

    #[test]
    fn non_finite_bar_is_dropped_before_saving() {
        let mut bars = awkward_bars();
        bars.push(CategoryBar::new(Color::BLACK, "Broken", f64::INFINITY));
        bars.push(CategoryBar::new(Color::BLACK, "Unknown", f64::NAN));
        let mut chart = CategoryChart::default();
        chart.set_bars(bars);
        assert_eq!(chart.bars(), awkward_bars().as_slice());
        assert_eq!(chart.max_value(), 1210.5);

        let mut restored = CategoryChart::default();
        restored.restore(&chart.serialize().unwrap());
        assert_eq!(restored.bars(), awkward_bars().as_slice());
    }

    #[test]
    fn strict_decode_reports_error() {
        let err = SavedCategoryState::from_json("{").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn instance_state_uses_category_key() {
        let mut chart = CategoryChart::default();
        chart.set_bars(awkward_bars());
        let bundle = chart.save_instance_state(Some("parent")).unwrap();
        assert_eq!(bundle.get_string(CATEGORY_INSTANCE_KEY), Some("parent"));
        assert!(!bundle.contains_key(PIE_INSTANCE_KEY));

        let mut restored = CategoryChart::default();
        assert_eq!(restored.restore_instance_state(&bundle).as_deref(), Some("parent"));
        assert_eq!(restored.bars(), awkward_bars().as_slice());
    }
}

// ═══════════════════════════════════════════════════════════════════
// ViewStateBundle
// ═══════════════════════════════════════════════════════════════════

mod bundle {
    use super::*;

    #[test]
    fn put_and_get() {
        let mut b = ViewStateBundle::new();
        assert!(b.is_empty());
        b.put_string("a", "1");
        b.put_string("a", "2");
        assert_eq!(b.get_string("a"), Some("2"));
        assert!(b.get_string("b").is_none());
    }

    #[test]
    fn json_round_trip() {
        let mut pie = PieChart::default();
        pie.set_slices(awkward_slices());
        let bundle = pie.save_instance_state(Some("host")).unwrap();

        let json = bundle.to_json().unwrap();
        let back = ViewStateBundle::from_json(&json).unwrap();
        assert_eq!(back, bundle);

        let mut restored = PieChart::default();
        restored.restore_instance_state(&back);
        assert_eq!(restored.slices(), awkward_slices().as_slice());
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = ViewStateBundle::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}
