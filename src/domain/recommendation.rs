//! Market scoring and closure-scenario analysis.

use std::collections::HashSet;

use time::Month;

use super::costing::{total_cost, CostError};
use super::entities::{Market, MarketId, MarketRecommendation};
use super::markets::{find_market, market_catalog};

const DEMAND_WEIGHT: f64 = 0.4;
const TARIFF_WEIGHT: f64 = 0.3;
const SEASON_WEIGHT: f64 = 0.3;

const HIGH_DEMAND_LEVEL: u8 = 8;
const FAVORABLE_TARIFF: f64 = 0.15;
const COMPETITIVE_PER_KG: f64 = 2.5;

/// Weighted blend of demand, inverse tariff, and seasonality for `month`.
pub fn score_market(market: &Market, month: Month) -> f64 {
    DEMAND_WEIGHT * market.demand_fraction()
        + TARIFF_WEIGHT * (1.0 - market.tariff_rate)
        + SEASON_WEIGHT * market.seasonal_demand.multiplier(month)
}

/// Top three open, not-closed markets ranked by score, each with its
/// qualitative reasons. A market in `closures` never appears in the result.
pub fn recommend_markets(closures: &HashSet<MarketId>, month: Month) -> Vec<MarketRecommendation> {
    let mut ranked: Vec<MarketRecommendation> = market_catalog()
        .iter()
        .filter(|market| market.is_open() && !closures.contains(&market.id))
        .map(|market| MarketRecommendation {
            market_id: market.id.clone(),
            name: market.name.clone(),
            score: score_market(market, month),
            reasons: recommendation_reasons(market),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
    ranked.truncate(3);
    ranked
}

fn recommendation_reasons(market: &Market) -> Vec<String> {
    let mut reasons = Vec::new();
    if market.demand_level >= HIGH_DEMAND_LEVEL {
        reasons.push("high demand".to_string());
    }
    if market.tariff_rate <= FAVORABLE_TARIFF {
        reasons.push("favorable tariff".to_string());
    }
    if market.shipping.per_kg_rate <= COMPETITIVE_PER_KG {
        reasons.push("competitive shipping".to_string());
    }
    reasons
}

/// One substitute market in a closure scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosureAlternative {
    pub market_id: MarketId,
    pub name: String,
    pub estimated_cost: f64,
    /// Positive means the alternative is more expensive than the closed market.
    pub net_cost_difference: f64,
    pub advantages: Vec<String>,
}

/// Full substitute analysis for one simulated closure.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosureAnalysis {
    pub closed_market_id: MarketId,
    pub closed_market_name: String,
    /// What the consignment would have cost in the closed market.
    pub closed_market_cost: f64,
    /// Remaining candidates sorted by ascending estimated cost.
    pub alternatives: Vec<ClosureAlternative>,
}

/// Builds the substitute analysis for `closed_id` at `quantity_kg`,
/// considering every market that is open and not itself simulated closed.
pub fn analyze_closure(
    closed_id: &str,
    closures: &HashSet<MarketId>,
    quantity_kg: f64,
) -> Result<ClosureAnalysis, CostError> {
    let closed_market =
        find_market(closed_id).ok_or_else(|| CostError::UnknownMarket(closed_id.to_string()))?;
    let closed_market_cost = total_cost(closed_market, quantity_kg)?;

    let mut alternatives = Vec::new();
    for market in market_catalog() {
        if market.id == closed_id || !market.is_open() || closures.contains(&market.id) {
            continue;
        }
        let estimated_cost = total_cost(market, quantity_kg)?;
        alternatives.push(ClosureAlternative {
            market_id: market.id.clone(),
            name: market.name.clone(),
            estimated_cost,
            net_cost_difference: estimated_cost - closed_market_cost,
            advantages: advantages_for(market),
        });
    }
    alternatives.sort_by(|a, b| a.estimated_cost.partial_cmp(&b.estimated_cost).unwrap());

    Ok(ClosureAnalysis {
        closed_market_id: closed_market.id.clone(),
        closed_market_name: closed_market.name.clone(),
        closed_market_cost,
        alternatives,
    })
}

fn advantages_for(market: &Market) -> Vec<String> {
    let mut advantages = Vec::new();
    if market.shipping.per_kg_rate <= COMPETITIVE_PER_KG {
        advantages.push("Lower shipping costs".to_string());
    }
    if market.tariff_rate <= FAVORABLE_TARIFF {
        advantages.push("Lower tariff rates".to_string());
    }
    if market.regulations.len() <= 1 {
        advantages.push("Simpler regulatory requirements".to_string());
    }
    advantages
}

/// Coarse aggregate impact of a set of closures at a given quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosureImpact {
    /// Sum of total costs across all baseline-open markets.
    pub cost_before: f64,
    /// Same sum with the simulated closures excluded.
    pub cost_after: f64,
}

impl ClosureImpact {
    pub fn lost_volume_cost(&self) -> f64 {
        self.cost_before - self.cost_after
    }
}

pub fn closure_impact(
    closures: &HashSet<MarketId>,
    quantity_kg: f64,
) -> Result<ClosureImpact, CostError> {
    let mut cost_before = 0.0;
    let mut cost_after = 0.0;
    for market in market_catalog() {
        if !market.is_open() {
            continue;
        }
        let total = total_cost(market, quantity_kg)?;
        cost_before += total;
        if !closures.contains(&market.id) {
            cost_after += total;
        }
    }
    Ok(ClosureImpact {
        cost_before,
        cost_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MarketStatus, Regulation, SeasonalDemand, ShippingRates};

    fn market(demand_level: u8, tariff_rate: f64) -> Market {
        Market {
            id: "test".into(),
            name: "Test".into(),
            base_price: 40.0,
            tariff_rate,
            regulations: vec![Regulation {
                name: "Permit".into(),
                cost: 100.0,
                description: String::new(),
            }],
            shipping: ShippingRates {
                base_rate: 400.0,
                per_kg_rate: 2.0,
            },
            status: MarketStatus::open(),
            demand_level,
            seasonal_demand: SeasonalDemand {
                peak: vec![Month::December],
                low: vec![Month::June],
            },
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn score_is_monotonic_in_demand() {
        let mut previous = f64::MIN;
        for demand in 0..=10 {
            let score = score_market(&market(demand, 0.10), Month::March);
            assert!(score > previous);
            previous = score;
        }
    }

    #[test]
    fn score_is_inverse_monotonic_in_tariff() {
        let low_tariff = score_market(&market(5, 0.05), Month::March);
        let high_tariff = score_market(&market(5, 0.25), Month::March);
        assert!(low_tariff > high_tariff);
    }

    #[test]
    fn seasonality_doubles_peak_and_halves_low() {
        let m = market(5, 0.10);
        let neutral = score_market(&m, Month::March);
        let peak = score_market(&m, Month::December);
        let low = score_market(&m, Month::June);
        assert!((peak - neutral - 0.3).abs() < 1e-9); // 0.3 * (2.0 - 1.0)
        assert!((neutral - low - 0.15).abs() < 1e-9); // 0.3 * (1.0 - 0.5)
    }

    #[test]
    fn recommendations_are_top_three_and_sorted() {
        let recs = recommend_markets(&HashSet::new(), Month::March);
        assert_eq!(recs.len(), 3);
        assert!(recs[0].score >= recs[1].score && recs[1].score >= recs[2].score);
    }

    #[test]
    fn closed_markets_never_appear_in_recommendations() {
        let closures: HashSet<MarketId> = ["china".to_string(), "japan".to_string()].into();
        let recs = recommend_markets(&closures, Month::January);
        assert!(recs.iter().all(|rec| !closures.contains(&rec.market_id)));
    }

    #[test]
    fn reasons_follow_the_documented_thresholds() {
        let china = crate::domain::markets::find_market("china").unwrap();
        let reasons = recommendation_reasons(china);
        // demand 9, tariff 0.20, per-kg 2.5
        assert!(reasons.contains(&"high demand".to_string()));
        assert!(!reasons.contains(&"favorable tariff".to_string()));
        assert!(reasons.contains(&"competitive shipping".to_string()));
    }

    #[test]
    fn closure_analysis_excludes_closed_and_sorts_by_cost() {
        let closures: HashSet<MarketId> = ["china".to_string(), "usa".to_string()].into();
        let analysis = analyze_closure("china", &closures, 100.0).unwrap();
        assert_eq!(analysis.closed_market_cost, 7150.0);
        assert!(analysis
            .alternatives
            .iter()
            .all(|alt| alt.market_id != "china" && alt.market_id != "usa"));
        assert!(analysis
            .alternatives
            .windows(2)
            .all(|pair| pair[0].estimated_cost <= pair[1].estimated_cost));
        for alt in &analysis.alternatives {
            let expected = alt.estimated_cost - analysis.closed_market_cost;
            assert!((alt.net_cost_difference - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn closure_impact_drops_exactly_the_closed_market() {
        let quantity = 100.0;
        let closures: HashSet<MarketId> = ["china".to_string()].into();
        let impact = closure_impact(&closures, quantity).unwrap();
        assert!((impact.lost_volume_cost() - 7150.0).abs() < 1e-9);
        let open = closure_impact(&HashSet::new(), quantity).unwrap();
        assert_eq!(open.cost_before, open.cost_after);
    }

    #[test]
    fn invalid_quantity_propagates() {
        assert_eq!(
            closure_impact(&HashSet::new(), 0.0),
            Err(CostError::InvalidQuantity)
        );
        assert!(analyze_closure("china", &HashSet::new(), -1.0).is_err());
    }
}
