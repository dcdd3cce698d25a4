use dioxus::prelude::*;

use crate::{
    domain::{compute_parallel, format_money, format_quantity, roster_label, AppState, Mode},
    ui::{
        components::{
            kpi_card::KpiCard,
            profit_banner::ProfitBanner,
            toast::{push_toast, ToastKind, ToastMessage},
            type_table::{TypeRow, TypeTable},
        },
        theme,
    },
};

const MODE: Mode = Mode::Parallel;

/// Parallel pricing: each type keeps its own carton price while all of them
/// share one flat margin that covers expenses and the profit target.
#[component]
pub fn ParallelPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut editing = use_signal(|| Option::<String>::None);
    let mut name_input = use_signal(String::new);
    let mut price_input = use_signal(String::new);
    let mut boxes_input = use_signal(String::new);

    let result = state.with(|st| compute_parallel(&st.parallel_types, &st.config));
    let min_weekly_profit = state.with(|st| st.config.min_weekly_profit);

    let rows = state.with(|st| {
        st.parallel_types
            .types()
            .iter()
            .map(|egg_type| {
                let detail = result
                    .as_ref()
                    .and_then(|r| r.types.iter().find(|b| b.id == egg_type.id))
                    .map(|b| format_money(b.min_price_per_carton))
                    .unwrap_or_else(|| "—".to_string());
                TypeRow {
                    id: egg_type.id.clone(),
                    // This mode labels rows by id, not by the display name.
                    name: roster_label(&egg_type.id),
                    price_per_box: egg_type.purchase_price_per_box,
                    weekly_boxes: egg_type.expected_weekly_boxes,
                    detail,
                }
            })
            .collect::<Vec<_>>()
    });

    let on_edit = {
        let state = state.clone();
        move |id: String| {
            if let Some(egg_type) = state.with(|st| st.parallel_types.get(&id).cloned()) {
                name_input.set(egg_type.display_name);
                price_input.set(format!("{:.2}", egg_type.purchase_price_per_box));
                boxes_input.set(format_quantity(egg_type.expected_weekly_boxes));
                editing.set(Some(id));
            }
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            let outcome = state.with_mut(|st| st.parallel_types.remove(&id));
            match outcome {
                Ok(()) => {
                    if editing() == Some(id) {
                        editing.set(None);
                        name_input.set(String::new());
                        price_input.set(String::new());
                        boxes_input.set(String::new());
                    }
                    push_toast(toasts.clone(), ToastKind::Info, "Removed egg type.");
                }
                Err(err) => push_toast(toasts.clone(), ToastKind::Warning, err.to_string()),
            }
        }
    };

    let on_submit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let price = match price_input().trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    push_toast(toasts.clone(), ToastKind::Error, "Price per box must be numeric.");
                    return;
                }
            };
            let boxes = match boxes_input().trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    push_toast(toasts.clone(), ToastKind::Error, "Boxes per week must be numeric.");
                    return;
                }
            };

            let name = name_input();
            let outcome = state.with_mut(|st| match editing() {
                Some(id) => st.parallel_types.update(&id, &name, price, boxes).map(|_| id),
                None => st.parallel_types.add(&name, price, boxes),
            });
            match outcome {
                Ok(_) => {
                    let verb = if editing().is_some() { "Updated" } else { "Added" };
                    push_toast(toasts.clone(), ToastKind::Success, format!("{verb} egg type."));
                    editing.set(None);
                    name_input.set(String::new());
                    price_input.set(String::new());
                    boxes_input.set(String::new());
                }
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    let on_cancel_edit = move |_| {
        editing.set(None);
        name_input.set(String::new());
        price_input.set(String::new());
        boxes_input.set(String::new());
    };

    let form_title = if editing().is_some() { "Edit Egg Type" } else { "Add Egg Type" };
    let submit_label = if editing().is_some() { "Update" } else { "Add" };

    rsx! {
        div { class: "space-y-8",
            section {
                h2 { class: "mb-3 text-sm font-semibold uppercase tracking-wide {theme::accent_text(MODE)}", "Egg Types" }
                TypeTable {
                    rows,
                    detail_header: "Min price / carton",
                    mode: MODE,
                    on_edit,
                    on_remove,
                }
            }

            section {
                class: "{theme::panel_border(MODE)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide {theme::accent_text(MODE)}", "{form_title}" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    div {
                        label { class: "{theme::label_class(MODE)}", "Name" }
                        input {
                            class: "mt-1 w-full {theme::input_class(MODE)}",
                            value: name_input(),
                            oninput: move |evt| name_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class(MODE)}", "Price / box" }
                        input {
                            class: "mt-1 w-full {theme::input_class(MODE)}",
                            value: price_input(),
                            oninput: move |evt| price_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class(MODE)}", "Boxes / week" }
                        input {
                            class: "mt-1 w-full {theme::input_class(MODE)}",
                            value: boxes_input(),
                            oninput: move |evt| boxes_input.set(evt.value()),
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary(MODE)}", onclick: on_submit, "{submit_label}" }
                    if editing().is_some() {
                        button {
                            class: "rounded-lg border border-slate-600 px-4 py-2 text-sm text-slate-200 hover:bg-slate-800",
                            onclick: on_cancel_edit,
                            "Cancel"
                        }
                    }
                }
            }

            if let Some(result) = result {
                ProfitBanner {
                    projected_profit: result.net_profit,
                    min_weekly_profit: min_weekly_profit,
                }

                section {
                    class: "grid gap-3 sm:grid-cols-2 lg:grid-cols-4",
                    KpiCard {
                        title: "Margin / carton",
                        value: format_money(result.margin_per_carton),
                        description: Some("Flat across every type".to_string()),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Total cartons",
                        value: format_quantity(result.total_cartons),
                        description: Some("Across all types".to_string()),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Weekly cost",
                        value: format_money(result.weekly_cost),
                        description: Some(format!(
                            "{} purchase + {} expenses",
                            format_money(result.total_purchase_cost),
                            format_money(result.total_weekly_expenses),
                        )),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Net profit",
                        value: format_money(result.net_profit),
                        description: Some(format!("On {} revenue", format_money(result.total_revenue))),
                        mode: MODE,
                    }
                }

                section {
                    h2 { class: "mb-3 text-sm font-semibold uppercase tracking-wide {theme::accent_text(MODE)}", "Per-Type Pricing" }
                    div {
                        class: "{theme::table_container(MODE)}",
                        table {
                            class: "min-w-full {theme::table_divider(MODE)} text-sm",
                            thead {
                                class: "{theme::table_header(MODE)} text-left tracking-wide",
                                tr {
                                    th { class: "px-4 py-3 font-medium", "Type" }
                                    th { class: "px-4 py-3 font-medium text-right", "Purchase cost" }
                                    th { class: "px-4 py-3 font-medium text-right", "Cartons" }
                                    th { class: "px-4 py-3 font-medium text-right", "Cost / carton" }
                                    th { class: "px-4 py-3 font-medium text-right", "Min price / carton" }
                                    th { class: "px-4 py-3 font-medium text-right", "Revenue" }
                                    th { class: "px-4 py-3 font-medium text-right", "Profit" }
                                }
                            }
                            tbody {
                                class: "{theme::table_divider(MODE)}",
                                for breakdown in result.types.clone() {
                                    tr {
                                        class: "hover:bg-slate-800/40",
                                        td { class: "px-4 py-3 font-medium {theme::text_secondary(MODE)}", "{roster_label(&breakdown.id)}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{format_money(breakdown.purchase_cost)}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{format_quantity(breakdown.total_cartons)}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{format_money(breakdown.cost_per_carton)}" }
                                        td { class: "px-4 py-3 text-right {theme::accent_text(MODE)}", "{format_money(breakdown.min_price_per_carton)}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{format_money(breakdown.projected_revenue)}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{format_money(breakdown.projected_profit)}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section {
                    h2 { class: "mb-3 text-sm font-semibold uppercase tracking-wide {theme::accent_text(MODE)}", "Quantity Quotes" }
                    div {
                        class: "{theme::table_container(MODE)}",
                        table {
                            class: "min-w-full {theme::table_divider(MODE)} text-sm",
                            thead {
                                class: "{theme::table_header(MODE)} text-left tracking-wide",
                                tr {
                                    th { class: "px-4 py-3 font-medium", "Type" }
                                    th { class: "px-4 py-3 font-medium text-right", "1 carton" }
                                    th { class: "px-4 py-3 font-medium text-right", "Half box" }
                                    th { class: "px-4 py-3 font-medium text-right", "1 box" }
                                    th { class: "px-4 py-3 font-medium text-right", "2 boxes" }
                                }
                            }
                            tbody {
                                class: "{theme::table_divider(MODE)}",
                                for breakdown in result.types.clone() {
                                    tr {
                                        class: "hover:bg-slate-800/40",
                                        td { class: "px-4 py-3 font-medium {theme::text_secondary(MODE)}", "{roster_label(&breakdown.id)}" }
                                        for break_row in breakdown.price_breaks.clone() {
                                            td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{format_money(break_row.price)}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                section {
                    class: "{theme::panel_border(MODE)} p-6 text-sm {theme::text_muted(MODE)}",
                    "Add at least one egg type with a positive price and volume."
                }
            }
        }
    }
}
