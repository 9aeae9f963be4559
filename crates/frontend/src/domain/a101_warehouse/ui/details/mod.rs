use crate::domain::a101_warehouse::Warehouses;
use crate::shared::components::ui::checkbox::Checkbox;
use crate::shared::components::ui::input::Input;
use crate::shared::crud::hooks::{opt_text, text_opt, CrudHandle};
use crate::shared::crud::modal_controller::ModalMode;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Create / edit form of a warehouse, shown while the modal is open.
#[component]
pub fn WarehouseDetails(crud: CrudHandle<Warehouses>) -> impl IntoView {
    let modal = crud.modal;
    let submitting = crud.submitting();
    let title = Signal::derive(move || match modal.with(|m| m.mode()) {
        Some(ModalMode::Edit) => "Редактирование склада".to_string(),
        _ => "Новый склад".to_string(),
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
                    label="Код"
                    required=true
                    value=crud.input_value(|i| i.code.clone())
                    on_input=crud.input_setter(|i, v| i.code = v)
                    error=crud.field_error("code")
                    disabled=submitting
                />
                <Input
                    label="Наименование"
                    required=true
                    value=crud.input_value(|i| i.name.clone())
                    on_input=crud.input_setter(|i, v| i.name = v)
                    error=crud.field_error("name")
                    disabled=submitting
                />
                <Input
                    label="Адрес"
                    value=crud.input_value(|i| opt_text(&i.address))
                    on_input=crud.input_setter(|i, v| i.address = text_opt(v))
                    error=crud.field_error("address")
                    disabled=submitting
                />
                <Checkbox
                    label="Активен"
                    checked=Signal::derive(move || {
                        modal.with(|m| m.input().map(|i| i.is_active).unwrap_or(true))
                    })
                    on_change=Callback::new(move |checked| crud.edit_input(|i| i.is_active = checked))
                    disabled=submitting
                />
            </Modal>
        </Show>
    }
}
