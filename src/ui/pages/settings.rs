use dioxus::prelude::*;

use crate::{
    domain::{
        format_money, AppState, BusinessConfig, CARTONS_PER_BOX, EGGS_PER_BOX, EGGS_PER_CARTON,
    },
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
};

/// Business configuration editor. Edits land in a local draft and only reach
/// the engines when the draft is saved.
#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut draft = use_signal(|| state.with(|st| st.config.clone()));
    let mut min_profit_input =
        use_signal(|| format!("{:.2}", state.with(|st| st.config.min_weekly_profit)));
    let mut expense_name_input = use_signal(String::new);
    let mut expense_amount_input = use_signal(String::new);

    let dirty = state.with(|st| {
        let mut candidate = draft();
        if let Ok(profit) = min_profit_input().trim().parse::<f64>() {
            candidate.min_weekly_profit = profit;
        }
        candidate != st.config
    });

    let expense_rows = draft.with(|d| d.weekly_expenses.clone());
    let draft_total = draft.with(|d| d.total_weekly_expenses());

    let on_add_expense = {
        let toasts = toasts.clone();
        move |_| {
            let amount = match expense_amount_input().trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    push_toast(toasts.clone(), ToastKind::Error, "Expense amount must be numeric.");
                    return;
                }
            };
            let name = expense_name_input();
            let outcome = draft.with_mut(|d| d.set_expense(&name, amount));
            match outcome {
                Ok(()) => {
                    expense_name_input.set(String::new());
                    expense_amount_input.set(String::new());
                }
                Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
            }
        }
    };

    let on_save = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let profit = match min_profit_input().trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => v,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Minimum weekly profit must be a number greater than zero.",
                    );
                    return;
                }
            };
            let mut committed = draft();
            committed.min_weekly_profit = profit;
            draft.set(committed.clone());
            state.with_mut(|st| st.commit_config(committed));
            push_toast(toasts.clone(), ToastKind::Success, "Saved business configuration.");
        }
    };

    let on_cancel = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let live = state.with(|st| st.config.clone());
            min_profit_input.set(format!("{:.2}", live.min_weekly_profit));
            draft.set(live);
            expense_name_input.set(String::new());
            expense_amount_input.set(String::new());
            push_toast(toasts.clone(), ToastKind::Info, "Discarded unsaved changes.");
        }
    };

    let on_reset = {
        let toasts = toasts.clone();
        move |_| {
            let defaults = BusinessConfig::default_config();
            min_profit_input.set(format!("{:.2}", defaults.min_weekly_profit));
            draft.set(defaults);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Draft reset to defaults. Save to apply.",
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Weekly Expenses" }
                    if dirty {
                        span { class: "rounded-full border border-amber-500/40 bg-amber-500/10 px-3 py-1 text-[10px] font-semibold uppercase tracking-wide text-amber-300", "Unsaved changes" }
                    }
                }
                if expense_rows.is_empty() {
                    p { class: "mt-3 text-sm text-slate-400", "No fixed expenses. Every carton only has to cover its purchase cost." }
                } else {
                    ul {
                        class: "mt-3 space-y-2 text-sm text-slate-300",
                        for entry in expense_rows {
                            li { class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 px-3 py-2",
                                span { "{entry.name}" }
                                span { class: "flex items-center gap-3",
                                    span { class: "text-slate-400", "{format_money(entry.amount)}" }
                                    button {
                                        class: "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                                        onclick: {
                                            let name = entry.name.clone();
                                            move |_| {
                                                draft.with_mut(|d| d.remove_expense(&name));
                                            }
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
                p { class: "mt-3 text-xs text-slate-500", "Total {format_money(draft_total)} per week" }

                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Expense name" }
                        input {
                            class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                            value: expense_name_input(),
                            oninput: move |evt| expense_name_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-xs font-semibold uppercase text-slate-500", "Amount per week" }
                        input {
                            class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                            value: expense_amount_input(),
                            oninput: move |evt| expense_amount_input.set(evt.value()),
                        }
                    }
                }
                button {
                    class: "mt-4 rounded-lg border border-indigo-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-indigo-200 hover:bg-indigo-500/10",
                    onclick: on_add_expense,
                    "Add / Update Expense"
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Profit Target" }
                div { class: "mt-4 max-w-xs",
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Minimum weekly profit" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                        value: min_profit_input(),
                        oninput: move |evt| min_profit_input.set(evt.value()),
                    }
                }
                p { class: "mt-2 text-xs text-slate-500", "Every pricing mode builds this profit into its minimum prices." }
            }

            div { class: "flex gap-3",
                button { class: "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400", onclick: on_save, "Save" }
                button { class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800", onclick: on_cancel, "Cancel" }
                button { class: "rounded-lg border border-amber-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-amber-200 hover:bg-amber-500/10", onclick: on_reset, "Reset Defaults" }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-sm text-slate-400",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Packaging Constants" }
                p { class: "mt-2", "A supplier box holds {CARTONS_PER_BOX} cartons of {EGGS_PER_CARTON} eggs each, {EGGS_PER_BOX} eggs in total. These figures are fixed." }
            }
        }
    }
}
