use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::page_title;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (page key, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Справочники",
            items: vec![
                ("a101_warehouse", "warehouses"),
                ("a102_category", "categories"),
                ("a104_customer", "customers"),
            ],
        },
        MenuGroup {
            label: "Закупки",
            items: vec![("a103_purchase_staff", "staff")],
        },
        MenuGroup {
            label: "Администрирование",
            items: vec![("audit_log", "audit")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-sidebar">
            {menu_groups().into_iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|(key, icon_name)| view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                            on:click=move |_| ctx.open(key)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{page_title(key)}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}
