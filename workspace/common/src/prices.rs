//! Price history store contents and the shaping the price chart applies
//! to it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of trailing prices shown when full history is off.
pub const RECENT_WINDOW: usize = 10;

/// Y range used when there is nothing to measure.
pub const DEFAULT_RANGE: AxisRange = AxisRange { min: 0.0, max: 100.0 };

/// Price histories per ticker symbol plus the latest snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBook {
    pub price_history: HashMap<String, Vec<f64>>,
    pub stock_prices: HashMap<String, f64>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self, symbol: &str) -> Option<&[f64]> {
        self.price_history.get(symbol).map(Vec::as_slice)
    }

    pub fn latest(&self, symbol: &str) -> Option<f64> {
        self.stock_prices.get(symbol).copied()
    }

    /// Appends `price` to the symbol's history and makes it the snapshot.
    pub fn record(&mut self, symbol: &str, price: f64) {
        trace!(symbol, price, "Recording price");
        self.price_history
            .entry(symbol.to_string())
            .or_default()
            .push(price);
        self.stock_prices.insert(symbol.to_string(), price);
    }

    /// Symbols with a history, sorted for stable rendering.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.price_history.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn reset(&mut self) {
        self.price_history.clear();
        self.stock_prices.clear();
    }
}

/// One labeled point on the price chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: String,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Turns a price history into chart points.
///
/// With `full_history` every price is labeled `Point 1..n`; otherwise the
/// last [`RECENT_WINDOW`] prices are labeled `T-k` down to `T-0`.
pub fn shape_points(history: &[f64], full_history: bool) -> Vec<PricePoint> {
    let window = if full_history {
        history
    } else {
        &history[history.len().saturating_sub(RECENT_WINDOW)..]
    };

    window
        .iter()
        .enumerate()
        .map(|(index, &price)| PricePoint {
            time: if full_history {
                format!("Point {}", index + 1)
            } else {
                format!("T-{}", window.len() - index - 1)
            },
            price,
        })
        .collect()
}

/// Y-axis range over the non-zero prices, padded by 10% of the span on
/// both sides. For non-negative prices the lower bound is clamped at zero;
/// negative prices are padded without clamping so `min <= max` always holds.
pub fn axis_range(points: &[PricePoint]) -> AxisRange {
    let mut prices = points.iter().map(|p| p.price).filter(|&p| p != 0.0);
    let Some(first) = prices.next() else {
        return DEFAULT_RANGE;
    };
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));

    // A single distinct price has no span to pad; anchor it at zero instead.
    if max == min {
        let padded = max * 1.1;
        return AxisRange {
            min: padded.min(0.0),
            max: padded.max(0.0),
        };
    }

    let padding = (max - min) * 0.1;
    let lower = min - padding;
    AxisRange {
        min: if min >= 0.0 { lower.max(0.0) } else { lower },
        max: max + padding,
    }
}

/// What the price chart depends on. The live snapshot only takes part when
/// live updates are on, so a tick without a history change re-renders
/// nothing otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInputs {
    pub symbol: String,
    pub history: Vec<f64>,
    pub full_history: bool,
    pub live_price: Option<f64>,
}

pub fn chart_inputs(book: &PriceBook, symbol: &str, full_history: bool, live_update: bool) -> ChartInputs {
    ChartInputs {
        symbol: symbol.to_string(),
        history: book.history(symbol).map(<[f64]>::to_vec).unwrap_or_default(),
        full_history,
        live_price: if live_update { book.latest(symbol) } else { None },
    }
}

/// Zero prices mean "not populated yet"; a chart needs at least one real one.
pub fn has_chart_data(points: &[PricePoint]) -> bool {
    points.iter().any(|p| p.price != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(points: &[PricePoint]) -> Vec<&str> {
        points.iter().map(|p| p.time.as_str()).collect()
    }

    #[test]
    fn test_recent_labels_count_down() {
        let points = shape_points(&[10.0, 20.0, 30.0], false);

        assert_eq!(
            points,
            vec![
                PricePoint { time: "T-2".to_string(), price: 10.0 },
                PricePoint { time: "T-1".to_string(), price: 20.0 },
                PricePoint { time: "T-0".to_string(), price: 30.0 },
            ]
        );
    }

    #[test]
    fn test_recent_mode_keeps_last_ten() {
        let history: Vec<f64> = (1..=15).map(f64::from).collect();
        let points = shape_points(&history, false);

        assert_eq!(points.len(), 10);
        assert_eq!(points.first().map(|p| p.price), Some(6.0));
        assert_eq!(points.first().map(|p| p.time.as_str()), Some("T-9"));
        assert_eq!(points.last().map(|p| p.time.as_str()), Some("T-0"));
    }

    #[test]
    fn test_full_history_labels_points() {
        let history: Vec<f64> = (1..=12).map(f64::from).collect();
        let points = shape_points(&history, true);

        assert_eq!(points.len(), 12);
        assert_eq!(labels(&points)[..2], ["Point 1", "Point 2"]);
        assert_eq!(points[11].time, "Point 12");
    }

    #[test]
    fn test_range_ignores_zero_prices() {
        let points = shape_points(&[0.0, 0.0, 5.0], false);

        assert!(has_chart_data(&points));
        assert_eq!(points.len(), 3);
        let range = axis_range(&points);
        assert_eq!(range.min, 0.0);
        assert!((range.max - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_flat_series_anchored_at_zero() {
        let points = shape_points(&[20.0, 20.0, 20.0], true);
        let range = axis_range(&points);

        assert_eq!(range.min, 0.0);
        assert!((range.max - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_pads_span() {
        let points = shape_points(&[100.0, 150.0, 200.0], false);
        let range = axis_range(&points);

        assert!((range.min - 90.0).abs() < 1e-9);
        assert!((range.max - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_lower_bound_clamped() {
        let points = shape_points(&[1.0, 50.0], false);
        let range = axis_range(&points);

        assert_eq!(range.min, 0.0);
        assert!((range.max - 54.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_all_zero_have_no_chart() {
        let empty = shape_points(&[], false);
        let zeros = shape_points(&[0.0, 0.0], true);

        assert!(!has_chart_data(&empty));
        assert!(!has_chart_data(&zeros));
        assert_eq!(axis_range(&empty), DEFAULT_RANGE);
        assert_eq!(axis_range(&zeros), DEFAULT_RANGE);
    }

    #[test]
    fn test_negative_prices_keep_range_ordered() {
        let flat = axis_range(&shape_points(&[-5.0, -5.0], false));
        assert!((flat.min + 5.5).abs() < 1e-9);
        assert_eq!(flat.max, 0.0);

        let spread = axis_range(&shape_points(&[-50.0, -10.0], false));
        assert!(spread.min <= spread.max);
        assert!((spread.min + 54.0).abs() < 1e-9);
        assert!((spread.max + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_change_ignored_without_live_updates() {
        let mut book = PriceBook::new();
        book.record("ACME", 10.0);
        let before = chart_inputs(&book, "ACME", false, false);
        let before_live = chart_inputs(&book, "ACME", false, true);

        // A tick that moves the snapshot without touching the history.
        book.stock_prices.insert("ACME".to_string(), 12.0);

        assert_eq!(chart_inputs(&book, "ACME", false, false), before);
        assert_ne!(chart_inputs(&book, "ACME", false, true), before_live);
        assert_eq!(chart_inputs(&book, "ACME", false, true).live_price, Some(12.0));
    }

    #[test]
    fn test_chart_inputs_follow_history_and_mode() {
        let mut book = PriceBook::new();
        book.record("ACME", 10.0);
        let before = chart_inputs(&book, "ACME", false, false);

        assert_ne!(chart_inputs(&book, "ACME", true, false), before);
        assert_ne!(chart_inputs(&book, "BOLT", false, false), before);

        book.record("ACME", 11.0);
        let after = chart_inputs(&book, "ACME", false, false);
        assert_ne!(after, before);
        assert_eq!(after.history, vec![10.0, 11.0]);
        assert!(chart_inputs(&book, "NOPE", true, true).history.is_empty());
    }

    #[test]
    fn test_price_book_record_and_read() {
        let mut book = PriceBook::new();
        book.record("ACME", 12.5);
        book.record("ACME", 13.0);
        book.record("BOLT", 4.0);

        assert_eq!(book.history("ACME"), Some(&[12.5, 13.0][..]));
        assert_eq!(book.latest("ACME"), Some(13.0));
        assert_eq!(book.history("NOPE"), None);
        assert_eq!(book.symbols(), vec!["ACME", "BOLT"]);

        book.reset();
        assert!(book.symbols().is_empty());
        assert_eq!(book.latest("BOLT"), None);
    }
}
