use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        cost_breakdown, find_market, market_catalog, month_short, parse_quantity, AppState,
        CostBreakdown,
    },
    ui::{
        components::{
            breakdown_table::BreakdownTable,
            demand_badge::DemandBadge,
            kpi_card::KpiCard,
            regulation_list::RegulationList,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let breakdown = use_signal(|| None::<CostBreakdown>);

    let destination = state.with(|st| st.destination.clone());
    let quantity_input = state.with(|st| st.quantity_input.clone());
    let selected_market = destination.as_deref().and_then(find_market);

    let on_destination = {
        let mut state = state.clone();
        let mut breakdown = breakdown.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            state.with_mut(|st| {
                st.destination = if value.is_empty() { None } else { Some(value) };
            });
            breakdown.set(None);
        }
    };

    let on_quantity = {
        let mut state = state.clone();
        let mut breakdown = breakdown.clone();
        move |evt: FormEvent| {
            state.with_mut(|st| st.quantity_input = evt.value());
            breakdown.set(None);
        }
    };

    let on_calculate = {
        let state = state.clone();
        let toasts = toasts.clone();
        let mut breakdown = breakdown.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let (destination, quantity_input) =
                state.with(|st| (st.destination.clone(), st.quantity_input.clone()));

            let Some(destination) = destination else {
                push_toast(toasts.clone(), ToastKind::Warning, "Select a destination first.");
                return;
            };
            let Some(market) = find_market(&destination) else {
                push_toast(toasts.clone(), ToastKind::Error, "Market data not found.");
                return;
            };
            let quantity = match parse_quantity(&quantity_input) {
                Ok(value) => value,
                Err(err) => {
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                    return;
                }
            };

            match cost_breakdown(market, quantity) {
                Ok(result) => {
                    breakdown.set(Some(result));
                    persist_user_state(&state);
                }
                Err(err) => {
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                }
            }
        }
    };

    let peak_label = selected_market.map(|market| {
        market
            .seasonal_demand
            .peak
            .iter()
            .map(|&month| month_short(month))
            .collect::<Vec<_>>()
            .join(", ")
    });

    rsx! {
        div { class: "space-y-8",
            form {
                class: "flex flex-wrap items-end gap-4 {theme::PANEL} px-4 py-4",
                onsubmit: on_calculate,
                div { class: "flex-1 min-w-[200px]",
                    label { class: "{theme::LABEL}", "Export destination" }
                    select {
                        class: "mt-1 w-full {theme::INPUT}",
                        value: destination.clone().unwrap_or_default(),
                        onchange: on_destination,
                        option { value: "", "Select destination" }
                        for market in market_catalog() {
                            option { value: "{market.id}", "{market.name}" }
                        }
                    }
                }
                div { class: "w-40",
                    label { class: "{theme::LABEL}", "Quantity (kg)" }
                    input {
                        class: "mt-1 w-full {theme::INPUT}",
                        inputmode: "decimal",
                        value: quantity_input,
                        oninput: on_quantity,
                        placeholder: "100",
                    }
                }
                button {
                    class: "{theme::BTN_PRIMARY}",
                    r#type: "submit",
                    "Calculate costs"
                }
            }

            if let Some(result) = breakdown() {
                section {
                    class: "grid gap-4 sm:grid-cols-3",
                    KpiCard {
                        title: "Total Export Cost".to_string(),
                        value: format!("${:.2}", result.total),
                        description: Some("AUD, landed".to_string()),
                    }
                    KpiCard {
                        title: "Tariff Share".to_string(),
                        value: format!("${:.2}", result.tariff_cost),
                        description: selected_market
                            .map(|m| format!("{:.1}% of base cost", m.tariff_rate * 100.0)),
                    }
                    KpiCard {
                        title: "Shipping".to_string(),
                        value: format!("${:.2}", result.shipping_cost),
                        description: selected_market
                            .map(|m| format!("${} flat + ${}/kg", m.shipping.base_rate, m.shipping.per_kg_rate)),
                    }
                }

                section {
                    class: "grid gap-6 lg:grid-cols-[2fr,1fr]",
                    div {
                        class: "space-y-3",
                        h2 { class: "text-sm font-semibold text-slate-200", "Cost Breakdown" }
                        BreakdownTable { breakdown: result }
                    }
                    if let Some(market) = selected_market {
                        div {
                            class: "space-y-3",
                            div {
                                class: "flex items-center justify-between",
                                h2 { class: "text-sm font-semibold text-slate-200", "Required Regulations" }
                                DemandBadge { level: market.demand_level }
                            }
                            RegulationList { regulations: market.regulations.clone() }
                            if let Some(ref peak) = peak_label {
                                p { class: "text-xs {theme::TEXT_MUTED}", "Peak season: {peak}" }
                            }
                        }
                    }
                }
            } else {
                p { class: "text-sm {theme::TEXT_MUTED}",
                    "Pick a destination and quantity to estimate the landed cost of a consignment."
                }
            }
        }
    }
}
