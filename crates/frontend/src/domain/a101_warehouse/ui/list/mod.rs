use crate::domain::a101_warehouse::ui::details::WarehouseDetails;
use crate::domain::a101_warehouse::Warehouses;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_parts::{DeleteConfirm, EmptyRow, ListAlert, RowActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::input::Input;
use crate::shared::components::ui::select::Select;
use crate::shared::config::ClientConfig;
use crate::shared::crud::hooks::{opt_text, text_opt, CrudHandle};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::notifications::Toaster;
use leptos::prelude::*;
use thaw::*;

fn active_filter_value(value: Option<bool>) -> String {
    match value {
        Some(true) => "true".to_string(),
        Some(false) => "false".to_string(),
        None => String::new(),
    }
}

fn parse_active_filter(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[component]
pub fn WarehouseList() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let toaster = expect_context::<Toaster>();
    let crud = CrudHandle::<Warehouses>::new(&config, toaster);
    let list = crud.list;
    let is_filter_expanded = RwSignal::new(false);
    let active_options = Signal::derive(|| {
        vec![
            ("true".to_string(), "Активные".to_string()),
            ("false".to_string(), "Неактивные".to_string()),
        ]
    });

    list.load();

    view! {
        <div class="page">
            <PageHeader title="Склады" total_count=Signal::derive(move || list.page().get().total_count)>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| crud.open_create()>
                    {icon("plus")}
                    " Новый склад"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.refresh()
                    disabled=list.loading()
                >
                    {icon("refresh")}
                    " Обновить"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel list=list is_expanded=is_filter_expanded page_size_options=config.page_sizes()>
                    <Input
                        label="Поиск"
                        placeholder="Код или наименование"
                        value=list.filter_value(|f| opt_text(&f.search))
                        on_input=list.filter_setter(|f, v| f.search = text_opt(v))
                    />
                    <Select
                        label="Статус"
                        empty_label="Все"
                        value=list.filter_value(|f| active_filter_value(f.is_active))
                        options=active_options
                        on_change=list.filter_setter(|f, v| f.is_active = parse_active_filter(&v))
                    />
                </FilterPanel>

                <ListAlert error=list.error() />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Код"</TableHeaderCell>
                                <TableHeaderCell>"Наименование"</TableHeaderCell>
                                <TableHeaderCell>"Адрес"</TableHeaderCell>
                                <TableHeaderCell>"Статус"</TableHeaderCell>
                                <TableHeaderCell>"Создан"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || !list.items().get().is_empty() fallback=move || view! {
                                <EmptyRow colspan=6 loading=list.loading() />
                            }>
                                <For
                                    each=move || list.items().get()
                                    key=|w| w.id
                                    children=move |w| {
                                        let id = w.id;
                                        let row = w.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{w.code}</TableCell>
                                                <TableCell>{w.name}</TableCell>
                                                <TableCell>{w.address.unwrap_or_else(|| "—".to_string())}</TableCell>
                                                <TableCell>
                                                    {if w.is_active {
                                                        view! { <span class="badge badge--success">"Активен"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Неактивен"</span> }.into_any()
                                                    }}
                                                </TableCell>
                                                <TableCell>{format_datetime_opt(w.created_at.as_deref())}</TableCell>
                                                <TableCell>
                                                    <RowActions
                                                        on_edit=Callback::new(move |_| crud.open_edit(id))
                                                        on_delete=Callback::new(move |_| crud.request_delete(&row))
                                                    />
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </Show>
                        </TableBody>
                    </Table>
                </div>
            </div>

            <WarehouseDetails crud=crud />
            <DeleteConfirm crud=crud />
        </div>
    }
}
