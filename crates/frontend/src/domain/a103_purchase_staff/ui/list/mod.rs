use crate::domain::a103_purchase_staff::ui::details::{load_categories, PurchaseStaffDetails};
use crate::domain::a103_purchase_staff::PurchaseStaff;
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
use contracts::domain::a102_category::aggregate::CategoryId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchaseStaffList() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let toaster = expect_context::<Toaster>();
    let crud = CrudHandle::<PurchaseStaff>::new(&config, toaster);
    let list = crud.list;
    let categories = load_categories(&config);
    let is_filter_expanded = RwSignal::new(false);

    list.load();

    view! {
        <div class="page">
            <PageHeader title="Закупщики по категориям" total_count=Signal::derive(move || list.page().get().total_count)>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| crud.open_create()>
                    {icon("plus")}
                    " Назначить"
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
                        label="Сотрудник"
                        value=list.filter_value(|f| opt_text(&f.staff_name))
                        on_input=list.filter_setter(|f, v| f.staff_name = text_opt(v))
                    />
                    <Select
                        label="Категория"
                        empty_label="Все"
                        value=list.filter_value(|f| f.category_id.map(|id| id.to_string()).unwrap_or_default())
                        options=categories
                        on_change=list.filter_setter(|f, v| f.category_id = CategoryId::parse(&v))
                    />
                </FilterPanel>

                <ListAlert error=list.error() />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Сотрудник"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Категория"</TableHeaderCell>
                                <TableHeaderCell>"Склад"</TableHeaderCell>
                                <TableHeaderCell>"Назначен"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || !list.items().get().is_empty() fallback=move || view! {
                                <EmptyRow colspan=6 loading=list.loading() />
                            }>
                                <For
                                    each=move || list.items().get()
                                    key=|a| a.id
                                    children=move |a| {
                                        let id = a.id;
                                        let row = a.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>{a.staff_name}</TableCell>
                                                <TableCell>{a.staff_email.unwrap_or_default()}</TableCell>
                                                <TableCell>{a.category_name.unwrap_or_else(|| a.category_id.to_string())}</TableCell>
                                                <TableCell>{a.warehouse_name.unwrap_or_else(|| "Все склады".to_string())}</TableCell>
                                                <TableCell>{format_datetime_opt(a.assigned_at.as_deref())}</TableCell>
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

            <PurchaseStaffDetails crud=crud categories=categories />
            <DeleteConfirm crud=crud />
        </div>
    }
}
