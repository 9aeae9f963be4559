use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::render_page;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // runs once when the layout is created
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { {move || render_page(&ctx.active.get())} }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
