use dioxus::prelude::*;

/// Badge for the 0-10 demand level scale.
#[component]
pub fn DemandBadge(level: u8) -> Element {
    let (label, color) = match level {
        8..=10 => (
            "High demand",
            "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ),
        5..=7 => (
            "Moderate demand",
            "bg-amber-500/10 text-amber-300 border-amber-500/40",
        ),
        _ => (
            "Low demand",
            "bg-rose-500/10 text-rose-300 border-rose-500/40",
        ),
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{label} ({level}/10)"
        }
    }
}
