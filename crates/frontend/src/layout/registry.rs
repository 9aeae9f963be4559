//! Page key -> view. Every key the sidebar can open is listed here.

use crate::domain::a101_warehouse::ui::list::WarehouseList;
use crate::domain::a102_category::ui::list::CategoryList;
use crate::domain::a103_purchase_staff::ui::list::PurchaseStaffList;
use crate::domain::a104_customer::ui::list::CustomerList;
use crate::system::audit_log::ui::list::AuditLogList;
use leptos::prelude::*;

pub fn page_title(key: &str) -> &'static str {
    match key {
        "a101_warehouse" => "Склады",
        "a102_category" => "Категории",
        "a103_purchase_staff" => "Закупщики",
        "a104_customer" => "Клиенты",
        "audit_log" => "Журнал аудита",
        _ => "Неизвестная страница",
    }
}

pub fn render_page(key: &str) -> AnyView {
    match key {
        "a101_warehouse" => view! { <WarehouseList /> }.into_any(),
        "a102_category" => view! { <CategoryList /> }.into_any(),
        "a103_purchase_staff" => view! { <PurchaseStaffList /> }.into_any(),
        "a104_customer" => view! { <CustomerList /> }.into_any(),
        "audit_log" => view! { <AuditLogList /> }.into_any(),
        _ => {
            log::warn!("unknown page key '{}'", key);
            view! {
                <div class="page">
                    <div class="alert alert--error">{format!("Страница «{}» не найдена", key)}</div>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_has_fallback_title() {
        assert_eq!(page_title("a102_category"), "Категории");
        assert_eq!(page_title("u501_import"), "Неизвестная страница");
    }
}
