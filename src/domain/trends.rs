//! Forecasted shipping-cost series and line-chart geometry.

use std::sync::OnceLock;

use time::Month;

use super::entities::{MarketPrediction, TrendPoint};

/// Chart viewport, shared with the SVG renderer.
pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 300.0;
pub const CHART_PADDING: f64 = 40.0;

const FORECAST_YEAR: i32 = 2025;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

static PREDICTIONS: OnceLock<Vec<MarketPrediction>> = OnceLock::new();

/// Forecast series for every market, Jan through Dec 2025.
pub fn prediction_catalog() -> &'static [MarketPrediction] {
    PREDICTIONS.get_or_init(build_predictions).as_slice()
}

pub fn prediction_for(market_id: &str) -> Option<&'static MarketPrediction> {
    prediction_catalog()
        .iter()
        .find(|prediction| prediction.market_id == market_id)
}

fn series(market_id: &str, points: [(f64, f64); 12]) -> MarketPrediction {
    MarketPrediction {
        market_id: market_id.to_string(),
        trends: MONTHS
            .iter()
            .zip(points)
            .map(|(&month, (cost, confidence))| TrendPoint {
                year: FORECAST_YEAR,
                month,
                cost,
                confidence,
            })
            .collect(),
    }
}

fn build_predictions() -> Vec<MarketPrediction> {
    vec![
        series(
            "china",
            [
                (2.7, 0.92),
                (2.8, 0.90),
                (2.6, 0.89),
                (2.4, 0.88),
                (2.3, 0.87),
                (2.2, 0.86),
                (2.4, 0.85),
                (2.5, 0.85),
                (2.6, 0.84),
                (2.7, 0.83),
                (2.8, 0.82),
                (2.9, 0.80),
            ],
        ),
        series(
            "japan",
            [
                (2.1, 0.93),
                (2.2, 0.91),
                (2.1, 0.90),
                (2.0, 0.89),
                (1.9, 0.88),
                (1.8, 0.87),
                (1.9, 0.86),
                (2.0, 0.85),
                (2.1, 0.84),
                (2.2, 0.83),
                (2.3, 0.82),
                (2.4, 0.81),
            ],
        ),
        series(
            "usa",
            [
                (3.1, 0.93),
                (3.2, 0.91),
                (3.1, 0.90),
                (3.0, 0.89),
                (2.9, 0.88),
                (2.8, 0.87),
                (2.9, 0.86),
                (3.0, 0.85),
                (3.1, 0.84),
                (3.2, 0.83),
                (3.3, 0.82),
                (3.4, 0.81),
            ],
        ),
        series(
            "singapore",
            [
                (2.1, 0.93),
                (2.2, 0.91),
                (2.1, 0.90),
                (2.0, 0.89),
                (1.9, 0.88),
                (1.8, 0.87),
                (1.9, 0.86),
                (2.0, 0.85),
                (2.1, 0.84),
                (2.2, 0.83),
                (2.3, 0.82),
                (2.4, 0.81),
            ],
        ),
        series(
            "vietnam",
            [
                (1.6, 0.93),
                (1.7, 0.91),
                (1.6, 0.90),
                (1.5, 0.89),
                (1.5, 0.88),
                (1.4, 0.87),
                (1.5, 0.86),
                (1.6, 0.85),
                (1.6, 0.84),
                (1.7, 0.83),
                (1.8, 0.82),
                (1.8, 0.80),
            ],
        ),
        series(
            "south_korea",
            [
                (2.3, 0.93),
                (2.4, 0.91),
                (2.3, 0.90),
                (2.2, 0.89),
                (2.1, 0.88),
                (2.0, 0.87),
                (2.1, 0.86),
                (2.2, 0.85),
                (2.3, 0.84),
                (2.4, 0.83),
                (2.5, 0.82),
                (2.5, 0.81),
            ],
        ),
        series(
            "thailand",
            [
                (1.7, 0.93),
                (1.8, 0.91),
                (1.7, 0.90),
                (1.6, 0.89),
                (1.6, 0.88),
                (1.5, 0.87),
                (1.6, 0.86),
                (1.7, 0.85),
                (1.7, 0.84),
                (1.8, 0.83),
                (1.9, 0.82),
                (1.9, 0.81),
            ],
        ),
    ]
}

/// One plotted point, in pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub cost: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

/// Everything the SVG renderer needs, precomputed with linear min/max scaling.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub line_path: String,
    pub points: Vec<ChartPoint>,
    pub y_ticks: Vec<AxisTick>,
}

/// Maps a trend series onto the fixed viewport. Needs at least two points
/// for an x scale to exist.
pub fn chart_geometry(trends: &[TrendPoint]) -> Option<ChartGeometry> {
    if trends.len() < 2 {
        return None;
    }

    let inner_width = CHART_WIDTH - CHART_PADDING * 2.0;
    let inner_height = CHART_HEIGHT - CHART_PADDING * 2.0;

    let min_cost = trends.iter().map(|t| t.cost).fold(f64::INFINITY, f64::min);
    let max_cost = trends
        .iter()
        .map(|t| t.cost)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = max_cost - min_cost;

    // Flat series sits on the midline instead of dividing by zero.
    let y_of = |cost: f64| {
        let fraction = if span > 0.0 {
            (cost - min_cost) / span
        } else {
            0.5
        };
        inner_height - fraction * inner_height + CHART_PADDING
    };
    let x_of = |index: usize| index as f64 / (trends.len() - 1) as f64 * inner_width + CHART_PADDING;

    let mut line_path = String::new();
    let mut points = Vec::with_capacity(trends.len());
    for (index, trend) in trends.iter().enumerate() {
        let x = x_of(index);
        let y = y_of(trend.cost);
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            line_path.push(' ');
        }
        line_path.push_str(&format!("{command} {x:.1} {y:.1}"));
        points.push(ChartPoint {
            x,
            y,
            cost: trend.cost,
            label: trend.label(),
        });
    }

    let y_ticks = [min_cost, (min_cost + max_cost) / 2.0, max_cost]
        .into_iter()
        .map(|cost| AxisTick {
            y: y_of(cost),
            label: format!("${cost:.2}"),
        })
        .collect();

    Some(ChartGeometry {
        line_path,
        points,
        y_ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markets::market_catalog;

    #[test]
    fn every_market_has_a_twelve_point_series() {
        for market in market_catalog() {
            let prediction = prediction_for(&market.id)
                .unwrap_or_else(|| panic!("missing series for {}", market.id));
            assert_eq!(prediction.trends.len(), 12);
            assert_eq!(prediction.trends[0].month, Month::January);
            assert_eq!(prediction.trends[11].month, Month::December);
            assert!(prediction
                .trends
                .iter()
                .all(|t| t.cost > 0.0 && (0.0..=1.0).contains(&t.confidence)));
        }
    }

    #[test]
    fn scaling_pins_extremes_to_the_padded_edges() {
        let trends = prediction_for("china").unwrap().trends.as_slice();
        let geometry = chart_geometry(trends).unwrap();

        let min_cost = trends.iter().map(|t| t.cost).fold(f64::INFINITY, f64::min);
        let max_cost = trends
            .iter()
            .map(|t| t.cost)
            .fold(f64::NEG_INFINITY, f64::max);

        for point in &geometry.points {
            assert!((CHART_PADDING..=CHART_WIDTH - CHART_PADDING).contains(&point.x));
            assert!((CHART_PADDING..=CHART_HEIGHT - CHART_PADDING).contains(&point.y));
            if point.cost == max_cost {
                assert!((point.y - CHART_PADDING).abs() < 1e-9);
            }
            if point.cost == min_cost {
                assert!((point.y - (CHART_HEIGHT - CHART_PADDING)).abs() < 1e-9);
            }
        }

        assert_eq!(geometry.points.first().map(|p| p.x), Some(CHART_PADDING));
        assert_eq!(
            geometry.points.last().map(|p| p.x),
            Some(CHART_WIDTH - CHART_PADDING)
        );
    }

    #[test]
    fn path_is_a_single_polyline() {
        let trends = prediction_for("japan").unwrap().trends.as_slice();
        let geometry = chart_geometry(trends).unwrap();
        assert!(geometry.line_path.starts_with("M "));
        assert_eq!(geometry.line_path.matches('L').count(), trends.len() - 1);
    }

    #[test]
    fn flat_series_sits_on_the_midline() {
        let flat: Vec<TrendPoint> = (1..=3)
            .map(|i| TrendPoint {
                year: 2025,
                month: Month::try_from(i).unwrap(),
                cost: 2.0,
                confidence: 0.9,
            })
            .collect();
        let geometry = chart_geometry(&flat).unwrap();
        let midline = CHART_PADDING + (CHART_HEIGHT - CHART_PADDING * 2.0) / 2.0;
        assert!(geometry.points.iter().all(|p| (p.y - midline).abs() < 1e-9));
    }

    #[test]
    fn short_series_has_no_geometry() {
        assert!(chart_geometry(&[]).is_none());
        let single = [TrendPoint {
            year: 2025,
            month: Month::January,
            cost: 2.0,
            confidence: 0.9,
        }];
        assert!(chart_geometry(&single).is_none());
    }
}
