use std::collections::HashSet;

use dioxus::prelude::*;
use time::{Month, OffsetDateTime};

use crate::{
    app::persist_user_state,
    domain::{
        analyze_closure, closure_impact, find_market, market_catalog, parse_quantity,
        recommend_markets,
        AppState, ClosureAlternative, ClosureAnalysis, MarketId, MarketRecommendation,
    },
    ui::{
        components::{
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

/// Reference month for seasonal scoring; January when the local clock has no
/// determinable offset.
fn current_month() -> Month {
    OffsetDateTime::now_local()
        .map(|now| now.month())
        .unwrap_or(Month::January)
}

#[component]
pub fn SimulatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let quantity_input = state.with(|st| st.quantity_input.clone());
    let closed_ids = state.with(|st| st.simulated_closures.clone());
    let closures: HashSet<MarketId> = closed_ids.iter().cloned().collect();

    let quantity = parse_quantity(&quantity_input).ok();
    let has_closures = !closures.is_empty();

    let impact = quantity.and_then(|qty| closure_impact(&closures, qty).ok());
    let recommendations = if has_closures {
        recommend_markets(&closures, current_month())
    } else {
        Vec::new()
    };
    let analyses: Vec<ClosureAnalysis> = match quantity {
        Some(qty) => closed_ids
            .iter()
            .filter_map(|id| analyze_closure(id, &closures, qty).ok())
            .collect(),
        None => Vec::new(),
    };

    let toggle_rows: Vec<(MarketId, String, bool)> = market_catalog()
        .iter()
        .map(|market| {
            (
                market.id.clone(),
                market.name.clone(),
                state.with(|st| st.is_closed(&market.id)),
            )
        })
        .collect();

    let on_quantity = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            state.with_mut(|st| st.quantity_input = evt.value());
        }
    };

    let on_toggle = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |market_id: String| {
            if parse_quantity(&state.with(|st| st.quantity_input.clone())).is_err() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Enter a valid quantity before simulating closures.",
                );
                return;
            }
            let mut state = state.clone();
            let now_closed = state.with_mut(|st| st.toggle_closure(&market_id));
            persist_user_state(&state);
            if now_closed {
                let name = find_market(&market_id)
                    .map(|market| market.name.clone())
                    .unwrap_or(market_id);
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    format!("Simulating closure of {name}."),
                );
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "flex flex-wrap items-end gap-4 {theme::PANEL} px-4 py-4",
                div { class: "w-40",
                    label { class: "{theme::LABEL}", "Export Quantity (kg)" }
                    input {
                        class: "mt-1 w-full {theme::INPUT}",
                        inputmode: "decimal",
                        value: quantity_input.clone(),
                        oninput: on_quantity,
                    }
                }
                div { class: "flex-1 min-w-[300px]",
                    p { class: "{theme::LABEL}", "Select markets to close" }
                    div { class: "mt-2 flex flex-wrap gap-2",
                        for (id, name, closed) in toggle_rows {
                            MarketToggle {
                                id,
                                name,
                                closed,
                                on_toggle: on_toggle.clone(),
                            }
                        }
                    }
                }
            }

            if quantity.is_none() {
                p { class: "text-sm text-rose-300",
                    "Quantity must be a positive number of kilograms."
                }
            } else if !has_closures {
                p { class: "text-sm {theme::TEXT_MUTED}",
                    "Close one or more markets to see substitute recommendations and the cost impact."
                }
            }

            if let Some(impact) = impact {
                if has_closures {
                    section {
                        class: "grid gap-4 sm:grid-cols-3",
                        KpiCard {
                            title: "Aggregate Cost Before".to_string(),
                            value: format!("${:.2}", impact.cost_before),
                            description: Some("All open markets at this quantity".to_string()),
                        }
                        KpiCard {
                            title: "Aggregate Cost After".to_string(),
                            value: format!("${:.2}", impact.cost_after),
                            description: Some("Excluding simulated closures".to_string()),
                        }
                        KpiCard {
                            title: "Volume At Risk".to_string(),
                            value: format!("${:.2}", impact.lost_volume_cost()),
                            description: Some("Export cost no longer serviceable".to_string()),
                        }
                    }
                }
            }

            if !recommendations.is_empty() {
                section {
                    class: "space-y-3",
                    h2 { class: "text-sm font-semibold text-slate-200", "Recommended Substitute Markets" }
                    div {
                        class: "grid gap-4 sm:grid-cols-3",
                        for (rank, recommendation) in recommendations.into_iter().enumerate() {
                            RecommendationCard { rank, recommendation }
                        }
                    }
                }
            }

            for analysis in analyses {
                ClosureAnalysisView { analysis }
            }

            if has_closures && quantity.is_some() {
                p { class: "text-xs italic {theme::TEXT_MUTED}",
                    "* Cost comparisons are based on your current export quantity of {quantity_input} kg."
                }
            }
        }
    }
}

#[component]
fn MarketToggle(id: String, name: String, closed: bool, on_toggle: EventHandler<String>) -> Element {
    let class = if closed {
        theme::BTN_CLOSED
    } else {
        theme::BTN_INACTIVE
    };
    let status = if closed { "Closed" } else { "Open" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_toggle.call(id.clone()),
            "{name}: {status}"
        }
    }
}

#[component]
fn RecommendationCard(rank: usize, recommendation: MarketRecommendation) -> Element {
    let position = format!("#{}", rank + 1);
    let score = format!("Score {:.2}", recommendation.score);

    rsx! {
        div {
            class: "{theme::PANEL} p-4",
            div {
                class: "flex items-center justify-between",
                h3 { class: "text-base font-semibold {theme::ACCENT_TEXT}", "{recommendation.name}" }
                span { class: "text-xs {theme::TEXT_MUTED}", "{position}" }
            }
            p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{score}" }
            ul { class: "mt-2 space-y-1",
                for reason in recommendation.reasons {
                    li { class: "text-sm text-slate-300", "✓ {reason}" }
                }
            }
        }
    }
}

#[component]
fn ClosureAnalysisView(analysis: ClosureAnalysis) -> Element {
    let forgone = format!("${:.2} AUD forgone", analysis.closed_market_cost);

    rsx! {
        section {
            class: "space-y-3",
            div {
                class: "rounded-xl border border-amber-500/40 bg-amber-500/10 px-4 py-3",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "text-sm font-semibold text-amber-200",
                        "{analysis.closed_market_name} Market Closure Scenario"
                    }
                    span { class: "text-sm font-semibold text-amber-100", "{forgone}" }
                }
            }
            div {
                class: "grid gap-4 lg:grid-cols-3",
                for alternative in analysis.alternatives {
                    AlternativeCard { alternative }
                }
            }
        }
    }
}

#[component]
fn AlternativeCard(alternative: ClosureAlternative) -> Element {
    let cheaper = alternative.net_cost_difference <= 0.0;
    let delta_class = if cheaper {
        "text-emerald-300"
    } else {
        "text-rose-300"
    };
    let cost = format!("${:.2} AUD", alternative.estimated_cost);
    let delta = format!(
        "{} ${:.2} AUD vs closed market",
        if cheaper { "↓" } else { "↑" },
        alternative.net_cost_difference.abs()
    );

    rsx! {
        div {
            class: "{theme::PANEL} p-4",
            h3 { class: "text-base font-semibold text-slate-100", "{alternative.name}" }
            p { class: "mt-1 text-lg font-semibold {theme::ACCENT_TEXT}", "{cost}" }
            p { class: "text-sm font-semibold {delta_class}", "{delta}" }
            if !alternative.advantages.is_empty() {
                ul { class: "mt-2 space-y-1",
                    for advantage in alternative.advantages {
                        li { class: "text-sm text-slate-300", "✓ {advantage}" }
                    }
                }
            }
        }
    }
}
