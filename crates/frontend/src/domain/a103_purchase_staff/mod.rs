pub mod ui;

use crate::shared::crud::resource::{EditableResource, Resource};
use contracts::domain::a103_purchase_staff::aggregate::{
    AssignmentId, PurchaseStaffAssignment, PurchaseStaffDto, PurchaseStaffFilters,
};

/// `/api/purchase-staff`: who buys which category (optionally for one warehouse)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseStaff;

impl Resource for PurchaseStaff {
    type Id = AssignmentId;
    type Item = PurchaseStaffAssignment;
    type Filters = PurchaseStaffFilters;

    const PATH: &'static str = "/api/purchase-staff";
    const TITLE: &'static str = "Назначение закупщика";

    fn id_of(item: &PurchaseStaffAssignment) -> AssignmentId {
        item.id
    }

    fn label_of(item: &PurchaseStaffAssignment) -> String {
        match &item.category_name {
            Some(category) => format!("{} / {}", item.staff_name, category),
            None => item.staff_name.clone(),
        }
    }
}

impl EditableResource for PurchaseStaff {
    type Input = PurchaseStaffDto;

    fn input_from(item: &PurchaseStaffAssignment) -> PurchaseStaffDto {
        PurchaseStaffDto::from(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a102_category::aggregate::CategoryId;
    use uuid::Uuid;

    fn assignment(category_name: Option<&str>) -> PurchaseStaffAssignment {
        PurchaseStaffAssignment {
            id: AssignmentId(Uuid::new_v4()),
            staff_name: "Петрова А.С.".into(),
            staff_email: None,
            category_id: CategoryId(Uuid::new_v4()),
            category_name: category_name.map(str::to_string),
            warehouse_id: None,
            warehouse_name: None,
            assigned_at: None,
        }
    }

    #[test]
    fn test_label_includes_category_when_known() {
        assert_eq!(
            PurchaseStaff::label_of(&assignment(Some("Электроника"))),
            "Петрова А.С. / Электроника"
        );
        assert_eq!(PurchaseStaff::label_of(&assignment(None)), "Петрова А.С.");
    }

    #[test]
    fn test_edit_form_keeps_category() {
        let item = assignment(Some("Электроника"));
        let input = PurchaseStaff::input_from(&item);
        assert_eq!(input.category_id, Some(item.category_id));
        assert_eq!(input.staff_name, item.staff_name);
    }
}
