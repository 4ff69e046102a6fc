use dioxus::prelude::*;

use crate::domain::CostBreakdown;
use crate::ui::theme;

/// Cost components of one consignment, two-decimal AUD formatting.
#[component]
pub fn BreakdownTable(breakdown: CostBreakdown) -> Element {
    let rows = [
        ("Base Cost", breakdown.base_cost),
        ("Shipping", breakdown.shipping_cost),
        ("Tariffs", breakdown.tariff_cost),
        ("Regulatory Compliance", breakdown.regulatory_cost),
    ];

    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Cost Component" }
                        th { class: "px-4 py-3 font-medium text-right", "Amount (AUD)" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for (label, amount) in rows {
                        tr {
                            td { class: "px-4 py-3 text-slate-300", "{label}" }
                            td { class: "px-4 py-3 text-right text-slate-100", {format!("${amount:.2}")} }
                        }
                    }
                    tr {
                        class: "bg-slate-900/60 font-semibold",
                        td { class: "px-4 py-3 text-slate-100", "Total" }
                        td { class: "px-4 py-3 text-right {theme::ACCENT_TEXT}",
                            {format!("${:.2}", breakdown.total)}
                        }
                    }
                }
            }
        }
    }
}
