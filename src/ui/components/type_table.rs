use dioxus::prelude::*;

use crate::domain::{format_money, format_quantity, Mode};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct TypeRow {
    pub id: String,
    pub name: String,
    pub price_per_box: f64,
    pub weekly_boxes: f64,
    /// Mode-specific extra column (eggs per blended carton, cartons, ...).
    pub detail: String,
}

#[component]
pub fn TypeTable(
    rows: Vec<TypeRow>,
    detail_header: String,
    mode: Mode,
    on_edit: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "{theme::table_container(mode)}",
            table {
                class: "min-w-full {theme::table_divider(mode)} text-sm",
                thead {
                    class: "{theme::table_header(mode)} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Type" }
                        th { class: "px-4 py-3 font-medium text-right", "Price / box" }
                        th { class: "px-4 py-3 font-medium text-right", "Boxes / week" }
                        th { class: "px-4 py-3 font-medium text-right", "{detail_header}" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "{theme::table_divider(mode)}",
                    for row in rows {
                        TypeRowView {
                            row,
                            mode: mode,
                            on_edit: on_edit.clone(),
                            on_remove: on_remove.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::text_muted(mode)}",
                                colspan: "5",
                                "Add egg types to start pricing."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TypeRowView(
    row: TypeRow,
    mode: Mode,
    on_edit: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let edit_id = row.id.clone();
    let remove_id = row.id.clone();
    let boxes = format_quantity(row.weekly_boxes);
    rsx! {
        tr {
            class: "hover:bg-slate-800/40",
            td {
                class: "px-4 py-3 font-medium {theme::text_secondary(mode)}",
                "{row.name}"
            }
            td { class: "px-4 py-3 text-right {theme::text_secondary(mode)}", "{format_money(row.price_per_box)}" }
            td { class: "px-4 py-3 text-right {theme::text_secondary(mode)}", "{boxes}" }
            td { class: "px-4 py-3 text-right {theme::accent_text(mode)}", "{row.detail}" }
            td {
                class: "px-4 py-3 text-right whitespace-nowrap",
                button {
                    class: "rounded-md border border-slate-600 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "Edit"
                }
                button {
                    class: "ml-2 rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Remove"
                }
            }
        }
    }
}
