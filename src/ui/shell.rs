use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::Mode;
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
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🥚" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "minimum viable carton prices, weekly" }
                        }
                    }

                    // Center: pricing mode switcher.
                    div { class: "flex gap-1 justify-center",
                        ModeButton {
                            active: matches!(current_route, Route::Stable {}),
                            onclick: move |_| { nav.push(Route::Stable {}); },
                            mode: Mode::Stable,
                        }
                        ModeButton {
                            active: matches!(current_route, Route::Mixed {}),
                            onclick: move |_| { nav.push(Route::Mixed {}); },
                            mode: Mode::Mixed,
                        }
                        ModeButton {
                            active: matches!(current_route, Route::Parallel {}),
                            onclick: move |_| { nav.push(Route::Parallel {}); },
                            mode: Mode::Parallel,
                        }
                    }

                    nav { class: "flex items-center gap-3 text-sm justify-end",
                        button {
                            class: if matches!(current_route, Route::Settings {}) {
                                "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
                            } else {
                                "rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
                            },
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            "⚙️ Expenses"
                        }
                        span { class: "text-xs text-slate-600", "{version}" }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn ModeButton(active: bool, onclick: EventHandler<()>, mode: Mode) -> Element {
    let class = match (mode, active) {
        (Mode::Stable, true) => {
            "min-w-[8rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40"
        }
        (Mode::Stable, false) => {
            "min-w-[8rem] rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-emerald-600 hover:text-emerald-400 transition"
        }
        (Mode::Mixed, true) => {
            "min-w-[8rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-amber-500/20 text-amber-300 border border-amber-500/40"
        }
        (Mode::Mixed, false) => {
            "min-w-[8rem] rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-amber-600 hover:text-amber-400 transition"
        }
        (Mode::Parallel, true) => {
            "min-w-[8rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40"
        }
        (Mode::Parallel, false) => {
            "min-w-[8rem] rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-sky-600 hover:text-sky-400 transition"
        }
    };
    let label = format!("{} {}", mode.emoji(), mode.name());

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
