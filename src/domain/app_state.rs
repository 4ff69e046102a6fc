use serde::{Deserialize, Serialize};

use super::entities::MarketId;

/// In-memory UI state for one session. The market catalog itself is static
/// and lives outside of this.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Last destination picked in the cost calculator.
    pub destination: Option<MarketId>,
    /// Raw quantity text, validated on use.
    pub quantity_input: String,
    /// Markets currently simulated as closed, in toggle order.
    pub simulated_closures: Vec<MarketId>,
    /// Markets plotted on the trend dashboard.
    pub chart_markets: Vec<MarketId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            destination: None,
            quantity_input: "100".to_string(),
            simulated_closures: Vec::new(),
            chart_markets: vec!["china".to_string(), "japan".to_string()],
        }
    }
}

impl AppState {
    pub fn is_closed(&self, market_id: &str) -> bool {
        self.simulated_closures.iter().any(|id| id == market_id)
    }

    /// Flips the simulated closure for `market_id`; returns true when the
    /// market is closed after the toggle.
    pub fn toggle_closure(&mut self, market_id: &str) -> bool {
        if let Some(index) = self
            .simulated_closures
            .iter()
            .position(|id| id == market_id)
        {
            self.simulated_closures.remove(index);
            false
        } else {
            self.simulated_closures.push(market_id.to_string());
            true
        }
    }

    pub fn is_charted(&self, market_id: &str) -> bool {
        self.chart_markets.iter().any(|id| id == market_id)
    }

    pub fn toggle_chart_market(&mut self, market_id: &str) {
        if let Some(index) = self.chart_markets.iter().position(|id| id == market_id) {
            self.chart_markets.remove(index);
        } else {
            self.chart_markets.push(market_id.to_string());
        }
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.destination = persisted.destination;
        if !persisted.quantity_input.is_empty() {
            self.quantity_input = persisted.quantity_input;
        }
        self.simulated_closures = persisted.simulated_closures;
        self.chart_markets = persisted.chart_markets;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            destination: self.destination.clone(),
            quantity_input: self.quantity_input.clone(),
            simulated_closures: self.simulated_closures.clone(),
            chart_markets: self.chart_markets.clone(),
        }
    }
}

/// Snapshot written to the platform config dir between sessions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub destination: Option<MarketId>,
    #[serde(default)]
    pub quantity_input: String,
    #[serde(default)]
    pub simulated_closures: Vec<MarketId>,
    #[serde(default)]
    pub chart_markets: Vec<MarketId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_closure_round_trips() {
        let mut state = AppState::default();
        assert!(state.toggle_closure("china"));
        assert!(state.is_closed("china"));
        assert!(!state.toggle_closure("china"));
        assert!(!state.is_closed("china"));
        assert!(state.simulated_closures.is_empty());
    }

    #[test]
    fn persisted_snapshot_round_trips_through_json() {
        let mut state = AppState::default();
        state.destination = Some("japan".to_string());
        state.quantity_input = "250".to_string();
        state.toggle_closure("china");
        state.toggle_chart_market("usa");

        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();

        let mut fresh = AppState::default();
        fresh.apply_persisted(restored);
        assert_eq!(fresh, state);
    }

    #[test]
    fn empty_persisted_quantity_keeps_the_default() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState::default());
        assert_eq!(state.quantity_input, "100");
    }
}
