use dioxus::prelude::*;

use crate::{
    domain::{compute_mixed, format_money, format_quantity, AppState, Mode},
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

const MODE: Mode = Mode::Mixed;

/// Blended-carton pricing: each carton mixes eggs from every type in the
/// roster and sells at a single price.
#[component]
pub fn MixedPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut editing = use_signal(|| Option::<String>::None);
    let mut name_input = use_signal(String::new);
    let mut price_input = use_signal(String::new);
    let mut boxes_input = use_signal(String::new);

    let result = state.with(|st| compute_mixed(&st.mixed_types, &st.config));
    let min_weekly_profit = state.with(|st| st.config.min_weekly_profit);

    let rows = state.with(|st| {
        st.mixed_types
            .types()
            .iter()
            .map(|egg_type| {
                let detail = result
                    .as_ref()
                    .and_then(|r| r.types.iter().find(|b| b.id == egg_type.id))
                    .map(|b| format!("{} eggs", b.eggs_per_mixed_carton))
                    .unwrap_or_else(|| "—".to_string());
                TypeRow {
                    id: egg_type.id.clone(),
                    name: egg_type.display_name.clone(),
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
            if let Some(egg_type) = state.with(|st| st.mixed_types.get(&id).cloned()) {
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
            let outcome = state.with_mut(|st| st.mixed_types.remove(&id));
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
                Some(id) => st.mixed_types.update(&id, &name, price, boxes).map(|_| id),
                None => st.mixed_types.add(&name, price, boxes),
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
                    detail_header: "Eggs / blended carton",
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
                    projected_profit: result.total_profit,
                    min_weekly_profit: min_weekly_profit,
                }

                section {
                    class: "grid gap-3 sm:grid-cols-2 lg:grid-cols-4",
                    KpiCard {
                        title: "Price / mixed carton",
                        value: format_money(result.price_per_mixed_carton),
                        description: Some("Break-even plus profit target".to_string()),
                        mode: MODE,
                    }
                    KpiCard {
                        title: "Mixed cartons",
                        value: result.total_mixed_cartons.to_string(),
                        description: Some("Capped by the scarcest type".to_string()),
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
                        title: "Projected profit",
                        value: format_money(result.total_profit),
                        description: Some(format!("On {} revenue", format_money(result.total_revenue))),
                        mode: MODE,
                    }
                }

                section {
                    h2 { class: "mb-3 text-sm font-semibold uppercase tracking-wide {theme::accent_text(MODE)}", "Per-Type Usage" }
                    div {
                        class: "{theme::table_container(MODE)}",
                        table {
                            class: "min-w-full {theme::table_divider(MODE)} text-sm",
                            thead {
                                class: "{theme::table_header(MODE)} text-left tracking-wide",
                                tr {
                                    th { class: "px-4 py-3 font-medium", "Type" }
                                    th { class: "px-4 py-3 font-medium text-right", "Cost / egg" }
                                    th { class: "px-4 py-3 font-medium text-right", "Eggs used" }
                                    th { class: "px-4 py-3 font-medium text-right", "Cartons opened" }
                                    th { class: "px-4 py-3 font-medium text-right", "Boxes opened" }
                                    th { class: "px-4 py-3 font-medium text-right", "Eggs left over" }
                                    th { class: "px-4 py-3 font-medium text-right", "Cost of eggs used" }
                                }
                            }
                            tbody {
                                class: "{theme::table_divider(MODE)}",
                                for breakdown in result.types.clone() {
                                    tr {
                                        class: "hover:bg-slate-800/40",
                                        td { class: "px-4 py-3 font-medium {theme::text_secondary(MODE)}", "{breakdown.display_name}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{format_money(breakdown.unit_cost_per_egg)}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{breakdown.eggs_used}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{breakdown.cartons_used}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{breakdown.boxes_used}" }
                                        td { class: "px-4 py-3 text-right {theme::text_secondary(MODE)}", "{breakdown.eggs_leftover:.0}" }
                                        td { class: "px-4 py-3 text-right {theme::accent_text(MODE)}", "{format_money(breakdown.cost_of_eggs_used)}" }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                section {
                    class: "{theme::panel_border(MODE)} p-6 text-sm {theme::text_muted(MODE)}",
                    "Mixed cartons need at least two egg types with positive prices and volumes."
                }
            }
        }
    }
}
