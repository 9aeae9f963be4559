use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close (Escape, overlay, close button)
    on_close: Callback<()>,
    /// While true, close requests are ignored
    #[prop(into, optional)]
    busy: Signal<bool>,
    /// Optional footer with action buttons (Save, Cancel, etc.)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let request_close = move || {
        if !busy.get_untracked() {
            on_close.run(());
        }
    };

    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || handle.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| request_close()>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button
                        class="button button--icon modal__close"
                        disabled=move || busy.get()
                        on:click=move |_| request_close()
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}

/// Styled yes/no confirmation shown before destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into, optional)] busy: Signal<bool>,
    #[prop(into, default = "Удалить".to_string())] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label);

    view! {
        <Modal
            title=title
            on_close=on_cancel
            busy=busy
            footer=std::sync::Arc::new(move || {
                view! {
                    <Flex gap=FlexGap::Small justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=busy
                            on_click=move |_| on_cancel.run(())
                        >
                            "Отмена"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=move |_| on_confirm.run(())
                        >
                            {confirm_label.get_value()}
                        </Button>
                    </Flex>
                }
                .into_any()
            })
        >
            <p class="confirm-dialog__message">{move || message.get()}</p>
        </Modal>
    }
}
