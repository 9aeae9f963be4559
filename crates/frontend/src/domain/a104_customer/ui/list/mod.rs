use crate::domain::a104_customer::ui::details::CustomerDetails;
use crate::domain::a104_customer::Customers;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_parts::{DeleteConfirm, EmptyRow, ListAlert, RowActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::input::Input;
use crate::shared::config::ClientConfig;
use crate::shared::crud::hooks::{opt_text, text_opt, CrudHandle};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::notifications::Toaster;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let toaster = expect_context::<Toaster>();
    let crud = CrudHandle::<Customers>::new(&config, toaster);
    let list = crud.list;
    let is_filter_expanded = RwSignal::new(false);

    list.load();

    view! {
        <div class="page">
            <PageHeader title="Клиенты" total_count=Signal::derive(move || list.page().get().total_count)>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| crud.open_create()>
                    {icon("plus")}
                    " Новый клиент"
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
                    <Input
                        label="Email"
                        value=list.filter_value(|f| opt_text(&f.email))
                        on_input=list.filter_setter(|f, v| f.email = text_opt(v))
                    />
                    <Input
                        label="Телефон"
                        value=list.filter_value(|f| opt_text(&f.phone))
                        on_input=list.filter_setter(|f, v| f.phone = text_opt(v))
                    />
                </FilterPanel>

                <ListAlert error=list.error() />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Код"</TableHeaderCell>
                                <TableHeaderCell>"Наименование"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Телефон"</TableHeaderCell>
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
                                    key=|c| c.id
                                    children=move |c| {
                                        let id = c.id;
                                        let row = c.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{c.code.unwrap_or_else(|| "—".to_string())}</TableCell>
                                                <TableCell>{c.name}</TableCell>
                                                <TableCell>{c.email.unwrap_or_default()}</TableCell>
                                                <TableCell>{c.phone.unwrap_or_default()}</TableCell>
                                                <TableCell>{format_datetime_opt(c.created_at.as_deref())}</TableCell>
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

            <CustomerDetails crud=crud />
            <DeleteConfirm crud=crud />
        </div>
    }
}
