use crate::domain::a101_warehouse::{warehouse_option, Warehouses};
use crate::domain::a102_category::{category_option, Categories};
use crate::domain::a103_purchase_staff::PurchaseStaff;
use crate::shared::components::ui::input::Input;
use crate::shared::components::ui::select::Select;
use crate::shared::config::ClientConfig;
use crate::shared::crud::hooks::{load_options, opt_text, text_opt, CrudHandle};
use crate::shared::crud::modal_controller::ModalMode;
use crate::shared::modal::Modal;
use contracts::domain::a101_warehouse::aggregate::WarehouseId;
use contracts::domain::a102_category::aggregate::CategoryId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchaseStaffDetails(
    crud: CrudHandle<PurchaseStaff>,
    /// Shared with the list filter so both pickers load once
    categories: RwSignal<Vec<(String, String)>>,
) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let warehouses = load_options::<Warehouses>(&config, warehouse_option);
    let modal = crud.modal;
    let submitting = crud.submitting();
    let title = Signal::derive(move || match modal.with(|m| m.mode()) {
        Some(ModalMode::Edit) => "Редактирование назначения".to_string(),
        _ => "Новое назначение".to_string(),
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
                    label="ФИО сотрудника"
                    required=true
                    value=crud.input_value(|i| i.staff_name.clone())
                    on_input=crud.input_setter(|i, v| i.staff_name = v)
                    error=crud.field_error("staffName")
                    disabled=submitting
                />
                <Input
                    label="Email"
                    input_type="email"
                    value=crud.input_value(|i| opt_text(&i.staff_email))
                    on_input=crud.input_setter(|i, v| i.staff_email = text_opt(v))
                    error=crud.field_error("staffEmail")
                    disabled=submitting
                />
                <Select
                    label="Категория"
                    required=true
                    empty_label="Выберите категорию"
                    value=crud.input_value(|i| i.category_id.map(|id| id.to_string()).unwrap_or_default())
                    options=categories
                    on_change=crud.input_setter(|i, v| i.category_id = CategoryId::parse(&v))
                    error=crud.field_error("categoryId")
                    disabled=submitting
                />
                <Select
                    label="Склад"
                    empty_label="Все склады"
                    value=crud.input_value(|i| i.warehouse_id.map(|id| id.to_string()).unwrap_or_default())
                    options=warehouses
                    on_change=crud.input_setter(|i, v| i.warehouse_id = WarehouseId::parse(&v))
                    error=crud.field_error("warehouseId")
                    disabled=submitting
                />
            </Modal>
        </Show>
    }
}

/// Categories for both the filter and the form.
pub fn load_categories(config: &ClientConfig) -> RwSignal<Vec<(String, String)>> {
    load_options::<Categories>(config, category_option)
}
