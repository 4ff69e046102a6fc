use dioxus::prelude::*;

use crate::domain::Regulation;
use crate::ui::theme;

#[component]
pub fn RegulationList(regulations: Vec<Regulation>) -> Element {
    if regulations.is_empty() {
        return rsx! {
            p { class: "text-sm {theme::TEXT_MUTED}", "No regulatory requirements on record." }
        };
    }

    rsx! {
        ul {
            class: "space-y-2",
            for regulation in regulations {
                li {
                    class: "{theme::PANEL} px-4 py-3",
                    div {
                        class: "flex items-center justify-between",
                        span { class: "text-sm font-semibold text-slate-200", "{regulation.name}" }
                        span {
                            class: "rounded bg-emerald-500/15 px-2 py-0.5 text-xs font-mono text-emerald-300",
                            {format!("${:.0} AUD", regulation.cost)}
                        }
                    }
                    p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{regulation.description}" }
                }
            }
        }
    }
}
