//! Compiled-in catalog of export markets. Built once, never mutated.

use std::sync::OnceLock;

use time::Month;

use super::entities::{Market, MarketStatus, Regulation, SeasonalDemand, ShippingRates};

static CATALOG: OnceLock<Vec<Market>> = OnceLock::new();

/// All markets known to the planner, in display order.
pub fn market_catalog() -> &'static [Market] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Looks up a market by its identifier slug.
pub fn find_market(id: &str) -> Option<&'static Market> {
    market_catalog().iter().find(|market| market.id == id)
}

fn regulation(name: &str, cost: f64, description: &str) -> Regulation {
    Regulation {
        name: name.to_string(),
        cost,
        description: description.to_string(),
    }
}

fn build_catalog() -> Vec<Market> {
    use Month::*;

    vec![
        Market {
            id: "china".into(),
            name: "China".into(),
            base_price: 50.0,
            tariff_rate: 0.20,
            regulations: vec![
                regulation(
                    "Health Certificate",
                    250.0,
                    "Required health certification for seafood imports",
                ),
                regulation("Export Permit", 150.0, "Standard export permit"),
            ],
            shipping: ShippingRates {
                base_rate: 500.0,
                per_kg_rate: 2.5,
            },
            status: MarketStatus::open(),
            demand_level: 9,
            seasonal_demand: SeasonalDemand {
                peak: vec![December, January, February],
                low: vec![June, July],
            },
            alternatives: vec!["japan".into(), "singapore".into(), "vietnam".into()],
        },
        Market {
            id: "japan".into(),
            name: "Japan".into(),
            base_price: 45.0,
            tariff_rate: 0.15,
            regulations: vec![regulation(
                "Quality Certification",
                200.0,
                "JAS certification requirement",
            )],
            shipping: ShippingRates {
                base_rate: 450.0,
                per_kg_rate: 2.0,
            },
            status: MarketStatus::open(),
            demand_level: 8,
            seasonal_demand: SeasonalDemand {
                peak: vec![December, January],
                low: vec![August, September],
            },
            alternatives: vec!["south_korea".into(), "singapore".into()],
        },
        Market {
            id: "usa".into(),
            name: "USA".into(),
            base_price: 48.0,
            tariff_rate: 0.10,
            regulations: vec![regulation(
                "FDA Registration",
                300.0,
                "FDA import registration",
            )],
            shipping: ShippingRates {
                base_rate: 600.0,
                per_kg_rate: 3.0,
            },
            status: MarketStatus::open(),
            demand_level: 7,
            seasonal_demand: SeasonalDemand {
                peak: vec![November, December],
                low: vec![February, March],
            },
            alternatives: vec!["japan".into(), "singapore".into()],
        },
        Market {
            id: "singapore".into(),
            name: "Singapore".into(),
            base_price: 42.0,
            tariff_rate: 0.05,
            regulations: vec![regulation(
                "Import License",
                180.0,
                "SFA licence for live seafood imports",
            )],
            shipping: ShippingRates {
                base_rate: 350.0,
                per_kg_rate: 1.8,
            },
            status: MarketStatus::open(),
            demand_level: 6,
            seasonal_demand: SeasonalDemand {
                peak: vec![January, February],
                low: vec![July, August],
            },
            alternatives: vec!["vietnam".into(), "thailand".into()],
        },
        Market {
            id: "vietnam".into(),
            name: "Vietnam".into(),
            base_price: 38.0,
            tariff_rate: 0.15,
            regulations: vec![regulation(
                "Import Permit",
                120.0,
                "NAFIQAD import permit for live crustaceans",
            )],
            shipping: ShippingRates {
                base_rate: 300.0,
                per_kg_rate: 1.5,
            },
            status: MarketStatus::open(),
            demand_level: 5,
            seasonal_demand: SeasonalDemand {
                peak: vec![January, February],
                low: vec![September, October],
            },
            alternatives: vec!["thailand".into(), "singapore".into()],
        },
        Market {
            id: "south_korea".into(),
            name: "South Korea".into(),
            base_price: 44.0,
            tariff_rate: 0.12,
            regulations: vec![
                regulation(
                    "Quarantine Certificate",
                    220.0,
                    "NFQS quarantine inspection certificate",
                ),
                regulation("Import Declaration", 100.0, "Customs import declaration"),
            ],
            shipping: ShippingRates {
                base_rate: 420.0,
                per_kg_rate: 2.2,
            },
            status: MarketStatus::open(),
            demand_level: 7,
            seasonal_demand: SeasonalDemand {
                peak: vec![September, December],
                low: vec![March, April],
            },
            alternatives: vec!["japan".into(), "china".into()],
        },
        Market {
            id: "thailand".into(),
            name: "Thailand".into(),
            base_price: 36.0,
            tariff_rate: 0.18,
            regulations: vec![regulation(
                "Import Permit",
                150.0,
                "Department of Fisheries import permit",
            )],
            shipping: ShippingRates {
                base_rate: 320.0,
                per_kg_rate: 1.6,
            },
            status: MarketStatus::open(),
            demand_level: 4,
            seasonal_demand: SeasonalDemand {
                peak: vec![April],
                low: vec![November],
            },
            alternatives: vec!["vietnam".into(), "singapore".into()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_seven_markets_with_unique_ids() {
        let catalog = market_catalog();
        assert_eq!(catalog.len(), 7);
        let ids: HashSet<_> = catalog.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn alternatives_only_reference_known_markets() {
        for market in market_catalog() {
            for alt in &market.alternatives {
                assert!(find_market(alt).is_some(), "{} -> {alt} unresolved", market.id);
                assert_ne!(alt, &market.id);
            }
        }
    }

    #[test]
    fn rates_and_demand_stay_in_range() {
        for market in market_catalog() {
            assert!(market.base_price > 0.0);
            assert!((0.0..=1.0).contains(&market.tariff_rate));
            assert!(market.demand_level <= 10);
            assert!(market.shipping.base_rate >= 0.0);
            assert!(market.shipping.per_kg_rate >= 0.0);
        }
    }

    #[test]
    fn find_market_misses_unknown_slug() {
        assert!(find_market("atlantis").is_none());
        assert_eq!(find_market("china").map(|m| m.name.as_str()), Some("China"));
    }
}
