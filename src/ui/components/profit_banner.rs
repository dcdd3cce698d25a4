use dioxus::prelude::*;

use crate::domain::{format_money, round2};

/// Banner comparing the projected profit against the weekly target.
#[component]
pub fn ProfitBanner(projected_profit: f64, min_weekly_profit: f64) -> Element {
    let meets = projected_profit >= min_weekly_profit;
    let (label, icon, theme) = if meets {
        (
            "Profit target met",
            "✅",
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        )
    } else {
        (
            "Profit below target",
            "⚠️",
            "border-rose-500/40 bg-rose-500/10 text-rose-200",
        )
    };

    let delta = round2((projected_profit - min_weekly_profit).abs());
    let detail = if meets {
        format!("Above the weekly target by {}.", format_money(delta))
    } else {
        format!("Short of the weekly target by {}.", format_money(delta))
    };

    rsx! {
        div {
            class: "flex items-center gap-3 rounded-xl border px-4 py-3 {theme}",
            span { class: "text-2xl", "{icon}" }
            div {
                p { class: "text-sm font-semibold", "{label}" }
                p { class: "text-xs opacity-80", "{detail}" }
                p {
                    class: "mt-1 text-xs opacity-60",
                    "Projected {format_money(projected_profit)} vs. target {format_money(min_weekly_profit)}"
                }
            }
        }
    }
}
