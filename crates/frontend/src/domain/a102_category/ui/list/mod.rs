use crate::domain::a102_category::ui::details::CategoryDetails;
use crate::domain::a102_category::Categories;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_parts::{DeleteConfirm, EmptyRow, ListAlert, RowActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::input::Input;
use crate::shared::config::ClientConfig;
use crate::shared::crud::hooks::{opt_text, text_opt, CrudHandle};
use crate::shared::icons::icon;
use crate::shared::notifications::Toaster;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let toaster = expect_context::<Toaster>();
    let crud = CrudHandle::<Categories>::new(&config, toaster);
    let list = crud.list;
    let is_filter_expanded = RwSignal::new(false);

    list.load();

    view! {
        <div class="page">
            <PageHeader title="Категории товаров" total_count=Signal::derive(move || list.page().get().total_count)>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| crud.open_create()>
                    {icon("plus")}
                    " Новая категория"
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
                        label="Наименование"
                        value=list.filter_value(|f| opt_text(&f.name))
                        on_input=list.filter_setter(|f, v| f.name = text_opt(v))
                    />
                </FilterPanel>

                <ListAlert error=list.error() />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Наименование"</TableHeaderCell>
                                <TableHeaderCell>"Описание"</TableHeaderCell>
                                <TableHeaderCell>"Родитель"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || !list.items().get().is_empty() fallback=move || view! {
                                <EmptyRow colspan=4 loading=list.loading() />
                            }>
                                <For
                                    each=move || list.items().get()
                                    key=|c| c.id
                                    children=move |c| {
                                        let id = c.id;
                                        let row = c.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{c.name}</TableCell>
                                                <TableCell>{c.description.unwrap_or_default()}</TableCell>
                                                <TableCell>{c.parent_name.unwrap_or_else(|| "—".to_string())}</TableCell>
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

            <CategoryDetails crud=crud />
            <DeleteConfirm crud=crud />
        </div>
    }
}
