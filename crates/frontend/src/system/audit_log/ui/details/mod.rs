use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use contracts::system::audit_log::aggregate::AuditLogEntry;
use leptos::prelude::*;

/// Full view of one journal entry; `details` may be long JSON, so it gets a `<pre>`.
#[component]
pub fn AuditLogDetails(entry: AuditLogEntry, on_close: Callback<()>) -> impl IntoView {
    let title = format!("{} {}", entry.action, entry.entity);
    let dash = || "—".to_string();

    view! {
        <Modal title=title on_close=on_close>
            <dl class="details-grid">
                <dt>"Время"</dt>
                <dd>{format_datetime(&entry.timestamp)}</dd>
                <dt>"Пользователь"</dt>
                <dd>{entry.user_name.clone().unwrap_or_else(dash)}</dd>
                <dt>"Действие"</dt>
                <dd>{entry.action.clone()}</dd>
                <dt>"Объект"</dt>
                <dd>{entry.entity.clone()}</dd>
                <dt>"ID объекта"</dt>
                <dd>{entry.entity_id.clone().unwrap_or_else(dash)}</dd>
                <dt>"Статус"</dt>
                <dd>{entry.status.label()}</dd>
                <dt>"IP-адрес"</dt>
                <dd>{entry.ip_address.clone().unwrap_or_else(dash)}</dd>
            </dl>
            {entry.details.clone().map(|details| view! {
                <pre class="details-pre">{details}</pre>
            })}
        </Modal>
    }
}
