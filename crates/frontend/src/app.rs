use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::ClientConfig;
use crate::shared::notifications::{ToastHost, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::load();

    let toaster = Toaster::new(config.toast_timeout_ms);

    provide_context(config);
    provide_context(toaster);
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
        <ToastHost toaster=toaster />
    }
}
