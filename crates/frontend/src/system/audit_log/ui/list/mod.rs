use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_parts::{EmptyRow, ListAlert};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::input::Input;
use crate::shared::components::ui::select::Select;
use crate::shared::config::ClientConfig;
use crate::shared::crud::hooks::{opt_text, text_opt, ListHandle};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::notifications::Toaster;
use crate::system::audit_log::ui::details::AuditLogDetails;
use crate::system::audit_log::AuditLog;
use contracts::system::audit_log::aggregate::{AuditLogEntry, AuditStatus};
use leptos::prelude::*;
use thaw::*;

fn status_options() -> Vec<(String, String)> {
    AuditStatus::ALL
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect()
}

fn status_badge_class(status: AuditStatus) -> &'static str {
    match status {
        AuditStatus::Success => "badge badge--success",
        AuditStatus::Failed => "badge badge--error",
    }
}

#[component]
pub fn AuditLogList() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let toaster = expect_context::<Toaster>();
    let list = ListHandle::<AuditLog>::new(&config, toaster);
    let is_filter_expanded = RwSignal::new(false);
    let selected = RwSignal::new(None::<AuditLogEntry>);

    list.load();

    view! {
        <div class="page">
            <PageHeader title="Журнал аудита" total_count=Signal::derive(move || list.page().get().total_count)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.export()
                    disabled=list.loading()
                >
                    {icon("download")}
                    " Экспорт CSV"
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
                        label="Пользователь"
                        value=list.filter_value(|f| opt_text(&f.user_name))
                        on_input=list.filter_setter(|f, v| f.user_name = text_opt(v))
                    />
                    <Input
                        label="Действие"
                        value=list.filter_value(|f| opt_text(&f.action))
                        on_input=list.filter_setter(|f, v| f.action = text_opt(v))
                    />
                    <Input
                        label="Объект"
                        value=list.filter_value(|f| opt_text(&f.entity))
                        on_input=list.filter_setter(|f, v| f.entity = text_opt(v))
                    />
                    <Select
                        label="Статус"
                        empty_label="Все"
                        value=list.filter_value(|f| f.status.map(|s| s.code().to_string()).unwrap_or_default())
                        options=Signal::derive(status_options)
                        on_change=list.filter_setter(|f, v| f.status = AuditStatus::from_code(&v))
                    />
                    <Input
                        label="С даты"
                        input_type="date"
                        value=list.filter_value(|f| opt_text(&f.date_from))
                        on_input=list.filter_setter(|f, v| f.date_from = text_opt(v))
                        error=list.filter_error("dateFrom")
                    />
                    <Input
                        label="По дату"
                        input_type="date"
                        value=list.filter_value(|f| opt_text(&f.date_to))
                        on_input=list.filter_setter(|f, v| f.date_to = text_opt(v))
                        error=list.filter_error("dateTo")
                    />
                </FilterPanel>

                <ListAlert error=list.error() />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Время"</TableHeaderCell>
                                <TableHeaderCell>"Пользователь"</TableHeaderCell>
                                <TableHeaderCell>"Действие"</TableHeaderCell>
                                <TableHeaderCell>"Объект"</TableHeaderCell>
                                <TableHeaderCell>"Статус"</TableHeaderCell>
                                <TableHeaderCell>"IP-адрес"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || !list.items().get().is_empty() fallback=move || view! {
                                <EmptyRow colspan=6 loading=list.loading() />
                            }>
                                <For
                                    each=move || list.items().get()
                                    key=|e| e.id
                                    children=move |e| {
                                        let row = e.clone();
                                        let entity = match &e.entity_id {
                                            Some(id) => format!("{} #{}", e.entity, id),
                                            None => e.entity.clone(),
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            selected.set(Some(row.clone()));
                                                        }
                                                    >
                                                        {format_datetime(&e.timestamp)}
                                                    </a>
                                                </TableCell>
                                                <TableCell>{e.user_name.unwrap_or_else(|| "—".to_string())}</TableCell>
                                                <TableCell>{e.action}</TableCell>
                                                <TableCell>{entity}</TableCell>
                                                <TableCell>
                                                    <span class=status_badge_class(e.status)>{e.status.label()}</span>
                                                </TableCell>
                                                <TableCell>{e.ip_address.unwrap_or_default()}</TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </Show>
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || selected.get().map(|entry| view! {
                <AuditLogDetails entry=entry on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </div>
    }
}
