//! Per-consignment export cost computation.

use thiserror::Error;

use super::entities::{CostBreakdown, Market};
use super::markets::find_market;

/// The only error class in the planner: rejected user input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CostError {
    #[error("no market data for \"{0}\"")]
    UnknownMarket(String),
    #[error("quantity must be a positive number of kilograms")]
    InvalidQuantity,
}

/// Computes the full cost breakdown for shipping `quantity_kg` of product
/// to `market`.
pub fn cost_breakdown(market: &Market, quantity_kg: f64) -> Result<CostBreakdown, CostError> {
    if !quantity_kg.is_finite() || quantity_kg <= 0.0 {
        return Err(CostError::InvalidQuantity);
    }

    let base_cost = market.base_price * quantity_kg;
    let shipping_cost = market.shipping.base_rate + market.shipping.per_kg_rate * quantity_kg;
    let tariff_cost = base_cost * market.tariff_rate;
    let regulatory_cost = market.regulations.iter().map(|reg| reg.cost).sum::<f64>();

    Ok(CostBreakdown {
        base_cost,
        shipping_cost,
        tariff_cost,
        regulatory_cost,
        total: base_cost + shipping_cost + tariff_cost + regulatory_cost,
    })
}

/// Breakdown by market identifier, for callers holding only the slug.
pub fn cost_breakdown_for(market_id: &str, quantity_kg: f64) -> Result<CostBreakdown, CostError> {
    let market =
        find_market(market_id).ok_or_else(|| CostError::UnknownMarket(market_id.to_string()))?;
    cost_breakdown(market, quantity_kg)
}

/// Total landed cost only.
pub fn total_cost(market: &Market, quantity_kg: f64) -> Result<f64, CostError> {
    cost_breakdown(market, quantity_kg).map(|breakdown| breakdown.total)
}

/// Parses the quantity text field. Whitespace is tolerated, anything that is
/// not a positive finite number is rejected.
pub fn parse_quantity(input: &str) -> Result<f64, CostError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or(CostError::InvalidQuantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markets::market_catalog;

    #[test]
    fn china_at_100_kg_matches_reference_figures() {
        let breakdown = cost_breakdown_for("china", 100.0).unwrap();
        assert_eq!(breakdown.base_cost, 5000.0);
        assert_eq!(breakdown.shipping_cost, 750.0);
        assert_eq!(breakdown.tariff_cost, 1000.0);
        assert_eq!(breakdown.regulatory_cost, 400.0);
        assert_eq!(breakdown.total, 7150.0);
    }

    #[test]
    fn total_is_sum_of_components_for_every_market() {
        for market in market_catalog() {
            for qty in [1.0, 42.5, 100.0, 2500.0] {
                let b = cost_breakdown(market, qty).unwrap();
                let expected =
                    b.base_cost + b.shipping_cost + b.tariff_cost + b.regulatory_cost;
                assert!((b.total - expected).abs() < 1e-9, "{} at {qty}", market.id);
            }
        }
    }

    #[test]
    fn rejects_non_positive_quantity() {
        assert_eq!(cost_breakdown_for("japan", 0.0), Err(CostError::InvalidQuantity));
        assert_eq!(cost_breakdown_for("japan", -5.0), Err(CostError::InvalidQuantity));
        assert_eq!(
            cost_breakdown_for("japan", f64::NAN),
            Err(CostError::InvalidQuantity)
        );
    }

    #[test]
    fn rejects_unknown_market() {
        assert_eq!(
            cost_breakdown_for("narnia", 10.0),
            Err(CostError::UnknownMarket("narnia".to_string()))
        );
    }

    #[test]
    fn parse_quantity_accepts_positive_numbers_only() {
        assert_eq!(parse_quantity(" 100 "), Ok(100.0));
        assert_eq!(parse_quantity("12.5"), Ok(12.5));
        assert_eq!(parse_quantity(""), Err(CostError::InvalidQuantity));
        assert_eq!(parse_quantity("abc"), Err(CostError::InvalidQuantity));
        assert_eq!(parse_quantity("0"), Err(CostError::InvalidQuantity));
        assert_eq!(parse_quantity("-3"), Err(CostError::InvalidQuantity));
        assert_eq!(parse_quantity("inf"), Err(CostError::InvalidQuantity));
    }
}
