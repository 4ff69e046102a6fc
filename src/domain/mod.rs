//! Domain logic for export-market planning lives here.

pub mod app_state;
pub mod costing;
pub mod entities;
pub mod markets;
pub mod recommendation;
pub mod trends;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use costing::{cost_breakdown, cost_breakdown_for, parse_quantity, total_cost, CostError};
#[allow(unused_imports)]
pub use entities::{
    month_short, CostBreakdown, Market, MarketId, MarketPrediction, MarketRecommendation,
    MarketStatus, Regulation, SeasonalDemand, ShippingRates, TrendPoint,
};
#[allow(unused_imports)]
pub use markets::{find_market, market_catalog};
#[allow(unused_imports)]
pub use recommendation::{
    analyze_closure, closure_impact, recommend_markets, score_market, ClosureAlternative,
    ClosureAnalysis, ClosureImpact,
};
#[allow(unused_imports)]
pub use trends::{
    chart_geometry, prediction_catalog, prediction_for, AxisTick, ChartGeometry, ChartPoint,
    CHART_HEIGHT, CHART_PADDING, CHART_WIDTH,
};
