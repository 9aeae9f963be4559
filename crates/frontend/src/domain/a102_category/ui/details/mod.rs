use crate::domain::a102_category::{category_option, Categories};
use crate::shared::components::ui::input::Input;
use crate::shared::components::ui::select::Select;
use crate::shared::components::ui::textarea::Textarea;
use crate::shared::config::ClientConfig;
use crate::shared::crud::hooks::{opt_text, reload_options, text_opt, CrudHandle};
use crate::shared::crud::modal_controller::ModalMode;
use crate::shared::modal::Modal;
use contracts::domain::a102_category::aggregate::CategoryId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(crud: CrudHandle<Categories>) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let modal = crud.modal;
    let submitting = crud.submitting();
    let title = Signal::derive(move || match modal.with(|m| m.mode()) {
        Some(ModalMode::Edit) => "Редактирование категории".to_string(),
        _ => "Новая категория".to_string(),
    });

    // refetched on every open so categories created meanwhile are offered
    let all_categories = RwSignal::new(Vec::new());
    let is_open = Memo::new(move |_| modal.with(|m| m.is_open()));
    Effect::new(move |_| {
        if is_open.get() {
            reload_options::<Categories>(all_categories, &config, category_option);
        }
    });

    // a category cannot be its own parent
    let parent_options = Signal::derive(move || {
        let own_id = modal.with(|m| {
            m.session()
                .and_then(|s| s.subject.as_ref())
                .map(|c| c.id.to_string())
        });
        all_categories
            .get()
            .into_iter()
            .filter(|(value, _)| Some(value) != own_id.as_ref())
            .collect::<Vec<_>>()
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
                <Textarea
                    label="Описание"
                    value=crud.input_value(|i| opt_text(&i.description))
                    on_input=crud.input_setter(|i, v| i.description = text_opt(v))
                    error=crud.field_error("description")
                    disabled=submitting
                />
                <Select
                    label="Родительская категория"
                    empty_label="Нет (верхний уровень)"
                    value=crud.input_value(|i| i.parent_id.map(|id| id.to_string()).unwrap_or_default())
                    options=parent_options
                    on_change=crud.input_setter(|i, v| i.parent_id = CategoryId::parse(&v))
                    error=crud.field_error("parentId")
                    disabled=submitting
                />
            </Modal>
        </Show>
    }
}
