use leptos::prelude::*;

/// PageHeader component - title with the total record count and page actions
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Total records matching the applied filters
    #[prop(into)]
    total_count: Signal<usize>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <span class="badge badge--primary">{move || total_count.get().to_string()}</span>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
