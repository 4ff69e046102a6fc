use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{chart_geometry, find_market, market_catalog, prediction_for, AppState},
    ui::{components::trend_chart::TrendChart, theme},
};

/// Per-market line colors, matched across charts and cards.
fn market_color(market_id: &str) -> &'static str {
    match market_id {
        "china" => "#ff6b6b",
        "japan" => "#4dabf7",
        "usa" => "#69db7c",
        "singapore" => "#ffd43b",
        "vietnam" => "#b197fc",
        "south_korea" => "#ffa94d",
        "thailand" => "#63e6be",
        _ => "#94a3b8",
    }
}

#[component]
pub fn TrendsPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let selected = state.with(|st| st.chart_markets.clone());

    let on_toggle = {
        let state = state.clone();
        move |market_id: String| {
            let mut state = state.clone();
            state.with_mut(|st| st.toggle_chart_market(&market_id));
            persist_user_state(&state);
        }
    };

    let toggle_rows: Vec<(String, String, bool)> = market_catalog()
        .iter()
        .map(|market| {
            (
                market.id.clone(),
                market.name.clone(),
                state.with(|st| st.is_charted(&market.id)),
            )
        })
        .collect();

    let charts: Vec<_> = selected
        .iter()
        .filter_map(|id| {
            let market = find_market(id)?;
            let prediction = prediction_for(id)?;
            let geometry = chart_geometry(&prediction.trends)?;
            let latest = prediction.trends.last()?;
            Some((
                market.name.clone(),
                market_color(id).to_string(),
                geometry,
                format!("${:.2} AUD/kg", latest.cost),
                format!("Confidence: {:.0}%", latest.confidence * 100.0),
            ))
        })
        .collect();

    rsx! {
        div { class: "space-y-8",
            section {
                div {
                    h2 { class: "text-xl font-semibold text-slate-100", "Shipping Cost Predictions" }
                    p { class: "text-sm {theme::TEXT_MUTED}",
                        "Forecasted shipping costs per kg across calendar year 2025"
                    }
                }
                div { class: "mt-4 flex flex-wrap gap-2",
                    for (id, name, active) in toggle_rows {
                        ChartToggle {
                            id,
                            name,
                            active,
                            on_toggle: on_toggle.clone(),
                        }
                    }
                }
            }

            if charts.is_empty() {
                p { class: "text-sm {theme::TEXT_MUTED}", "Select at least one market to plot." }
            }

            for (name, color, geometry, _, _) in charts.iter().cloned() {
                div {
                    class: "{theme::PANEL} p-4",
                    TrendChart { market_name: name, color, geometry }
                }
            }

            section {
                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for (name, _, _, latest_cost, confidence) in charts {
                    div {
                        class: "{theme::PANEL} p-4",
                        h3 { class: "text-sm font-semibold text-slate-200", "{name}" }
                        p { class: "text-xs {theme::TEXT_MUTED}", "Latest prediction (Dec 2025)" }
                        p { class: "mt-1 text-xl font-semibold {theme::ACCENT_TEXT}", "{latest_cost}" }
                        p { class: "text-xs {theme::TEXT_MUTED}", "{confidence}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartToggle(id: String, name: String, active: bool, on_toggle: EventHandler<String>) -> Element {
    let class = if active {
        theme::BTN_ACTIVE
    } else {
        theme::BTN_INACTIVE
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_toggle.call(id.clone()),
            "{name}"
        }
    }
}
