use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{MixedPage, ParallelPage, SettingsPage, StablePage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/stable")]
    Stable {},
    #[route("/mixed")]
    Mixed {},
    #[route("/parallel")]
    Parallel {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Stable() -> Element {
    rsx! { Shell { StablePage {} } }
}

#[component]
pub fn Mixed() -> Element {
    rsx! { Shell { MixedPage {} } }
}

#[component]
pub fn Parallel() -> Element {
    rsx! { Shell { ParallelPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
