use time::Month;

/// Identifier for export markets in the static catalog.
pub type MarketId = String;

/// One export destination with its own pricing, tariff, and regulatory profile.
#[derive(Clone, Debug, PartialEq)]
pub struct Market {
    pub id: MarketId,
    pub name: String,
    /// Base unit price in AUD per kilogram.
    pub base_price: f64,
    /// Tariff as a fraction of the base cost (0.20 = 20%).
    pub tariff_rate: f64,
    /// Ordered list of flat-cost compliance requirements.
    pub regulations: Vec<Regulation>,
    pub shipping: ShippingRates,
    pub status: MarketStatus,
    /// Relative buyer demand on a 0-10 scale.
    pub demand_level: u8,
    pub seasonal_demand: SeasonalDemand,
    /// Markets exporters typically fall back to when this one closes.
    pub alternatives: Vec<MarketId>,
}

impl Market {
    pub fn is_open(&self) -> bool {
        self.status.is_open
    }

    /// Normalized demand in [0, 1] for scoring.
    pub fn demand_fraction(&self) -> f64 {
        f64::from(self.demand_level.min(10)) / 10.0
    }
}

/// A flat-cost compliance requirement attached to a market.
#[derive(Clone, Debug, PartialEq)]
pub struct Regulation {
    pub name: String,
    /// Flat cost in AUD, independent of quantity.
    pub cost: f64,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShippingRates {
    /// Flat rate per consignment in AUD.
    pub base_rate: f64,
    /// Variable rate in AUD per kilogram.
    pub per_kg_rate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketStatus {
    pub is_open: bool,
    /// Human-readable trade restrictions currently in force, if any.
    pub restrictions: Vec<String>,
}

impl MarketStatus {
    pub fn open() -> Self {
        Self {
            is_open: true,
            restrictions: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeasonalDemand {
    pub peak: Vec<Month>,
    pub low: Vec<Month>,
}

impl SeasonalDemand {
    /// Demand multiplier used by the recommender: 2.0 in peak months,
    /// 0.5 in low months, 1.0 otherwise.
    pub fn multiplier(&self, month: Month) -> f64 {
        if self.peak.contains(&month) {
            2.0
        } else if self.low.contains(&month) {
            0.5
        } else {
            1.0
        }
    }
}

/// Per-consignment cost breakdown, recomputed on every interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostBreakdown {
    /// base price x quantity
    pub base_cost: f64,
    /// flat base rate + per-kg rate x quantity
    pub shipping_cost: f64,
    /// base cost x tariff rate
    pub tariff_cost: f64,
    /// sum of flat regulation costs
    pub regulatory_cost: f64,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketRecommendation {
    pub market_id: MarketId,
    pub name: String,
    pub score: f64,
    /// Qualitative reasons ("high demand", "favorable tariff", ...).
    pub reasons: Vec<String>,
}

/// One forecasted shipping-cost point for a market.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub month: Month,
    /// Predicted shipping cost in AUD per kilogram.
    pub cost: f64,
    /// Forecast confidence in [0, 1].
    pub confidence: f64,
}

impl TrendPoint {
    /// Short axis label, e.g. "Jan 25".
    pub fn label(&self) -> String {
        format!("{} {:02}", month_short(self.month), self.year.rem_euclid(100))
    }
}

/// Three-letter month abbreviation for labels.
pub fn month_short(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Twelve months of forecasted shipping costs for one market.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketPrediction {
    pub market_id: MarketId,
    pub trends: Vec<TrendPoint>,
}
