use dioxus::prelude::*;

use crate::{
    domain::{compute_stable, format_money, format_pct, AppState, Mode},
    ui::{
        components::{
            kpi_card::KpiCard,
            price_table::PriceBreakGrid,
            profit_banner::ProfitBanner,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const MODE: Mode = Mode::Stable;

/// Single-type pricing: every carton sells at the same minimum viable price.
#[component]
pub fn StablePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let params = state.with(|st| st.stable);
    let mut price_input = use_signal(|| format!("{:.2}", params.price_per_box));
    let mut boxes_input = use_signal(|| params.weekly_boxes.to_string());

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let price = match price_input().trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => v,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Price per box must be a number greater than zero.",
                    );
                    return;
                }
            };
            let boxes = match boxes_input().trim().parse::<u32>() {
                Ok(v) if v > 0 => v,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Boxes per week must be a whole number greater than zero.",
                    );
                    return;
                }
            };
            state.with_mut(|st| {
                st.stable.price_per_box = price;
                st.stable.weekly_boxes = boxes;
            });
        }
    };

    let on_cancel = {
        let state = state.clone();
        move |_| {
            let params = state.with(|st| st.stable);
            price_input.set(format!("{:.2}", params.price_per_box));
            boxes_input.set(params.weekly_boxes.to_string());
        }
    };

    let result = state.with(|st| {
        compute_stable(st.stable.price_per_box, st.stable.weekly_boxes, &st.config)
    });
    let min_weekly_profit = state.with(|st| st.config.min_weekly_profit);

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border(MODE)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide {theme::accent_text(MODE)}", "Weekly Purchase" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "{theme::label_class(MODE)}", "Purchase price per box" }
                        input {
                            class: "mt-1 w-full {theme::input_class(MODE)}",
                            value: price_input(),
                            oninput: move |evt| price_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class(MODE)}", "Boxes per week" }
                        input {
                            class: "mt-1 w-full {theme::input_class(MODE)}",
                            value: boxes_input(),
                            oninput: move |evt| boxes_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary(MODE)}", onclick: on_apply, "Apply" }
                    button {
                        class: "rounded-lg border border-slate-600 px-4 py-2 text-sm text-slate-200 hover:bg-slate-800",
                        onclick: on_cancel,
                        "Cancel"
                    }
                }
            }

            if let Some(result) = result {
                ProfitBanner {
                    projected_profit: result.total_profit,
                    min_weekly_profit: min_weekly_profit,
                }

                section {
                    class: "grid gap-3 sm:grid-cols-2 lg:grid-cols-4",
                    KpiCard {
                        title: "Min price / carton",
                        value: format_money(result.min_price_per_carton),
                        description: Some("Break-even plus profit target".to_string()),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Weekly cost",
                        value: format_money(result.weekly_cost),
                        description: Some(format!(
                            "{} purchase + {} expenses",
                            format_money(result.purchase_cost),
                            format_money(result.total_weekly_expenses),
                        )),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Required revenue",
                        value: format_money(result.required_revenue),
                        description: Some(format!("Across {} cartons", result.total_cartons)),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Projected profit",
                        value: format_money(result.total_profit),
                        description: Some(format!("Margin {}", format_pct(result.profit_margin_pct))),
                        mode: MODE,
                    }
                }

                section {
                    class: "grid gap-3 sm:grid-cols-2 lg:grid-cols-3",
                    KpiCard {
                        title: "Avg cost / carton",
                        value: format_money(result.avg_cost_per_carton),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Profit / carton",
                        value: format_money(result.profit_per_carton),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Total revenue",
                        value: format_money(result.total_revenue),
                        description: Some("At the minimum viable price".to_string()),
                        mode: MODE,
                    }
                }

                section {
                    h2 { class: "mb-3 text-sm font-semibold uppercase tracking-wide {theme::accent_text(MODE)}", "Suggested Prices" }
                    PriceBreakGrid { breaks: result.price_breaks.clone() }
                }
            } else {
                section {
                    class: "{theme::panel_border(MODE)} p-6 text-sm {theme::text_muted(MODE)}",
                    "Enter a purchase price and weekly box count to see carton pricing."
                }
            }
        }
    }
}
