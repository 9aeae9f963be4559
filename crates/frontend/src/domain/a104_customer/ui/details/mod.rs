use crate::domain::a104_customer::Customers;
use crate::shared::components::ui::input::Input;
use crate::shared::components::ui::textarea::Textarea;
use crate::shared::crud::hooks::{opt_text, text_opt, CrudHandle};
use crate::shared::crud::modal_controller::ModalMode;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerDetails(crud: CrudHandle<Customers>) -> impl IntoView {
    let modal = crud.modal;
    let submitting = crud.submitting();
    let title = Signal::derive(move || match modal.with(|m| m.mode()) {
        Some(ModalMode::Edit) => "Редактирование клиента".to_string(),
        _ => "Новый клиент".to_string(),
    });

    view! {
        <Show when=move || modal.with(|m| m.is_open())>
            <Modal
                title=title
                busy=submitting
                on_close=Callback::new(move |_| crud.close_modal())
                footer=std::sync::Arc::new(move || view! {
                    <Flex gap=FlexGap::Small justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=submitting
                            on_click=move |_| crud.close_modal()
                        >
                            "Отмена"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=submitting
                            on_click=move |_| crud.submit()
                        >
                            {move || if submitting.get() { "Сохранение..." } else { "Сохранить" }}
                        </Button>
                    </Flex>
                }.into_any())
            >
                {move || modal.with(|m| m.error()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}
                <Input
                    label="Наименование"
                    required=true
                    value=crud.input_value(|i| i.name.clone())
                    on_input=crud.input_setter(|i, v| i.name = v)
                    error=crud.field_error("name")
                    disabled=submitting
                />
                <Input
                    label="Email"
                    input_type="email"
                    value=crud.input_value(|i| opt_text(&i.email))
                    on_input=crud.input_setter(|i, v| i.email = text_opt(v))
                    error=crud.field_error("email")
                    disabled=submitting
                />
                <Input
                    label="Телефон"
                    input_type="tel"
                    value=crud.input_value(|i| opt_text(&i.phone))
                    on_input=crud.input_setter(|i, v| i.phone = text_opt(v))
                    error=crud.field_error("phone")
                    disabled=submitting
                />
                <Textarea
                    label="Адрес"
                    rows=2
                    value=crud.input_value(|i| opt_text(&i.address))
                    on_input=crud.input_setter(|i, v| i.address = text_opt(v))
                    error=crud.field_error("address")
                    disabled=submitting
                />
            </Modal>
        </Show>
    }
}
