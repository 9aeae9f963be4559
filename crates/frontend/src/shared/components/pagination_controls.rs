use crate::shared::icons::icon;
use contracts::shared::paging::PageDescriptor;
use leptos::prelude::*;

/// "21–25 из 25", or "Нет записей" for an empty result.
pub fn range_label(page: &PageDescriptor) -> String {
    match page.shown_range() {
        Some((from, to)) => format!("{}–{} из {}", from, to, page.total_count),
        None => "Нет записей".to_string(),
    }
}

/// PaginationControls component - first/prev/next/last buttons, page info and
/// page size selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current position, from the list controller
    #[prop(into)]
    page: Signal<PageDescriptor>,

    /// Disables navigation while a request is in flight
    #[prop(into, optional)]
    busy: Signal<bool>,

    /// Callback with the requested (1-based) page
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    let no_prev = move || busy.get() || !page.get().has_prev();
    let no_next = move || busy.get() || !page.get().has_next();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=no_prev
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get().index.saturating_sub(1))
                disabled=no_prev
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = page.get();
                    format!("{} / {} · {}", p.index, p.total_pages.max(1), range_label(&p))
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get().index + 1)
                disabled=no_next
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page.get().total_pages.max(1))
                disabled=no_next
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                disabled=move || busy.get()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page.get().size.to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page.get().size == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(&PageDescriptor::new(3, 10, 25)), "21–25 из 25");
        assert_eq!(range_label(&PageDescriptor::new(1, 10, 0)), "Нет записей");
    }
}
