use crate::domain::a101_warehouse::aggregate::WarehouseId;
use crate::domain::a102_category::aggregate::CategoryId;
use crate::shared::query::{count_some, ListFilters};
use crate::shared::validation::{looks_like_email, non_blank, FieldErrors, FormInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор закрепления закупщика за категорией
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(pub Uuid);

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Закрепление сотрудника отдела закупок за категорией (и, опционально, складом)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseStaffAssignment {
    pub id: AssignmentId,
    pub staff_name: String,
    #[serde(default)]
    pub staff_email: Option<String>,
    pub category_id: CategoryId,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub assigned_at: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseStaffDto {
    pub staff_name: String,
    pub staff_email: Option<String>,
    pub category_id: Option<CategoryId>,
    pub warehouse_id: Option<WarehouseId>,
}

impl From<&PurchaseStaffAssignment> for PurchaseStaffDto {
    fn from(a: &PurchaseStaffAssignment) -> Self {
        Self {
            staff_name: a.staff_name.clone(),
            staff_email: a.staff_email.clone(),
            category_id: Some(a.category_id),
            warehouse_id: a.warehouse_id,
        }
    }
}

impl FormInput for PurchaseStaffDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("staffName", &self.staff_name, "Укажите сотрудника");
        errors.require_some("categoryId", &self.category_id, "Выберите категорию");
        if let Some(email) = non_blank(&self.staff_email) {
            if !looks_like_email(&email) {
                errors.add("staffEmail", "Некорректный email");
            }
        }
        errors.into_result()
    }
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseStaffFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl ListFilters for PurchaseStaffFilters {
    fn normalized(&self) -> Self {
        Self {
            staff_name: non_blank(&self.staff_name),
            category_id: self.category_id,
        }
    }

    fn active_count(&self) -> usize {
        count_some(&[
            non_blank(&self.staff_name).is_some(),
            self.category_id.is_some(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_required() {
        let dto = PurchaseStaffDto {
            staff_name: "Иванов И.И.".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("categoryId"));
        assert!(!errors.contains("staffName"));
    }

    #[test]
    fn test_email_checked_only_when_present() {
        let mut dto = PurchaseStaffDto {
            staff_name: "Петров".into(),
            category_id: Some(CategoryId(Uuid::nil())),
            staff_email: Some("  ".into()),
            warehouse_id: None,
        };
        assert!(dto.validate().is_ok());

        dto.staff_email = Some("petrov".into());
        assert!(dto.validate().unwrap_err().contains("staffEmail"));
    }
}
