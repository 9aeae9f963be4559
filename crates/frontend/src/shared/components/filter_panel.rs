use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::crud::hooks::ListHandle;
use crate::shared::crud::resource::Resource;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// FilterPanel component - collapsible filter form with Apply / Clear and the
/// pagination controls of the same list in its header.
///
/// Typing in the inputs only edits pending values; nothing is fetched until
/// "Применить".
#[component]
pub fn FilterPanel<R: Resource>(
    list: ListHandle<R>,

    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    page_size_options: Vec<usize>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };
    let busy = list.loading();
    let dirty = list.filters_dirty();
    let active_filters_count = list.active_filters();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        page=list.page()
                        busy=busy
                        on_page_change=Callback::new(move |page| list.go_to(page))
                        on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                        page_size_options=page_size_options
                    />
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        {children()}
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=move |_| list.apply_filters()
                        >
                            {move || if dirty.get() { "Применить *" } else { "Применить" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=busy
                            on_click=move |_| list.clear_filters()
                        >
                            "Сбросить"
                        </Button>
                    </Flex>
                </div>
            </div>
        </div>
    }
}
