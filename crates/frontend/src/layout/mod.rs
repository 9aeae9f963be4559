pub mod global_context;
pub mod registry;
pub mod sidebar;

use leptos::prelude::*;

/// Application shell:
/// ```text
/// +-----------+------------------------+
/// |  Sidebar  |   active page          |
/// +-----------+------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <div data-zone="left" class="left">
                    {left()}
                </div>
                <div class="app-main">
                    <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
                        {center()}
                    </div>
                </div>
            </div>
        </div>
    }
}
