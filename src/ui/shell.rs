use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🦞" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-amber-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic",
                                "market planning for rock lobster exporters"
                            }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "💰 Calculator",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Simulator {}),
                            onclick: move |_| { nav.push(Route::Simulator {}); },
                            label: "🚫 Closures",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Trends {}),
                            onclick: move |_| { nav.push(Route::Trends {}); },
                            label: "📈 Trends",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-6 text-xs text-slate-600",
                "{APP_NAME} {version}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[6rem] rounded-lg border border-amber-500/60 bg-amber-500/15 px-4 py-2 font-semibold text-amber-300"
    } else {
        "min-w-[6rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
