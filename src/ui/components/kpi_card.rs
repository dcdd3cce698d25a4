use dioxus::prelude::*;

use crate::domain::Mode;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, mode: Mode) -> Element {
    rsx! {
        div {
            class: "{theme::panel_border(mode)} p-4 shadow-sm",
            h3 { class: "{theme::label_class(mode)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {theme::text_secondary(mode)}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted(mode)}", "{desc}" }
            }
        }
    }
}
