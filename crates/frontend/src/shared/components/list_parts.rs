//! Pieces every resource list page renders the same way.

use crate::shared::crud::hooks::CrudHandle;
use crate::shared::crud::resource::EditableResource;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use leptos::prelude::*;

/// Load error above the table. Rows of the last good load stay visible.
#[component]
pub fn ListAlert(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| view! {
            <div class="alert alert--error">{err}</div>
        })
    }
}

/// "Загрузка..." / "Нет данных" row spanning the whole table.
#[component]
pub fn EmptyRow(
    colspan: u32,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <tr class="table__row table__row--empty">
            <td class="table__cell table__cell--empty" colspan=colspan>
                {move || if loading.get() { "Загрузка..." } else { "Нет данных" }}
            </td>
        </tr>
    }
}

#[component]
pub fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <div class="table__actions">
            <button
                class="button button--icon"
                title="Редактировать"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(());
                }
            >
                {icon("edit")}
            </button>
            <button
                class="button button--icon button--danger"
                title="Удалить"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                {icon("trash")}
            </button>
        </div>
    }
}

/// Delete confirmation of a CRUD page.
#[component]
pub fn DeleteConfirm<R: EditableResource>(crud: CrudHandle<R>) -> impl IntoView {
    let confirm = crud.confirm;
    let message = Signal::derive(move || {
        confirm.with(|d| {
            d.label()
                .map(|label| format!("Удалить «{}»? Действие нельзя отменить.", label))
                .unwrap_or_default()
        })
    });
    let busy = Signal::derive(move || confirm.with(|d| d.in_flight()));

    view! {
        <Show when=move || confirm.with(|d| d.is_open())>
            <ConfirmDialog
                title=format!("Удаление: {}", R::TITLE)
                message=message
                busy=busy
                on_confirm=Callback::new(move |_| crud.confirm_delete())
                on_cancel=Callback::new(move |_| crud.cancel_delete())
            />
        </Show>
    }
}
