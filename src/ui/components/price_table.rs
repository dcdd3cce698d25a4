use dioxus::prelude::*;

use crate::domain::{format_money, PriceBreak, CARTONS_PER_BOX, EGGS_PER_CARTON};

/// Suggested-price grid for the quantities a customer actually orders in.
/// The full-box card is highlighted as the headline quantity.
#[component]
pub fn PriceBreakGrid(breaks: Vec<PriceBreak>) -> Element {
    rsx! {
        div {
            class: "grid gap-3 sm:grid-cols-2 lg:grid-cols-5",
            for break_row in breaks {
                PriceBreakCard { break_row }
            }
        }
    }
}

#[component]
fn PriceBreakCard(break_row: PriceBreak) -> Element {
    let highlight = break_row.cartons == CARTONS_PER_BOX;
    let class = if highlight {
        "rounded-xl border-2 border-amber-500/60 bg-amber-500/10 p-4 text-center"
    } else {
        "rounded-xl border border-slate-800 bg-slate-900/60 p-4 text-center"
    };

    rsx! {
        div {
            class: "{class}",
            p { class: "text-xs font-semibold uppercase tracking-wide text-slate-400", "{quantity_label(break_row.cartons)}" }
            p { class: "mt-2 text-xl font-bold text-slate-100", "{format_money(break_row.price)}" }
            p { class: "mt-1 text-[11px] text-slate-500", "{unit_caption(break_row.cartons)}" }
        }
    }
}

fn quantity_label(cartons: u32) -> String {
    match cartons {
        1 => "1 carton".to_string(),
        6 => "Half box".to_string(),
        12 => "1 box".to_string(),
        n if n % CARTONS_PER_BOX == 0 => format!("{} boxes", n / CARTONS_PER_BOX),
        n => format!("{n} cartons"),
    }
}

fn unit_caption(cartons: u32) -> String {
    if cartons == 1 {
        format!("{EGGS_PER_CARTON} eggs")
    } else {
        format!("{cartons} cartons")
    }
}
