use crate::shared::query::{count_some, ListFilters};
use crate::shared::validation::{non_blank, FieldErrors, FormInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор склада (назначается сервером)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(pub Uuid);

impl WarehouseId {
    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }
}

impl fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Склад
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: WarehouseId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса на создание / изменение склада
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseDto {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
}

impl Default for WarehouseDto {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            address: None,
            is_active: true,
        }
    }
}

impl From<&Warehouse> for WarehouseDto {
    fn from(w: &Warehouse) -> Self {
        Self {
            code: w.code.clone(),
            name: w.name.clone(),
            address: w.address.clone(),
            is_active: w.is_active,
        }
    }
}

impl FormInput for WarehouseDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("code", &self.code, "Код обязателен для заполнения");
        errors.require("name", &self.name, "Наименование обязательно для заполнения");
        errors.into_result()
    }
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseFilters {
    /// Поиск по коду или наименованию
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ListFilters for WarehouseFilters {
    fn normalized(&self) -> Self {
        Self {
            search: non_blank(&self.search),
            is_active: self.is_active,
        }
    }

    fn active_count(&self) -> usize {
        let f = self.normalized();
        count_some(&[f.search.is_some(), f.is_active.is_some()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_required_fields() {
        let dto = WarehouseDto {
            code: "  ".into(),
            name: String::new(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("code"));
        assert!(errors.contains("name"));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{"id":"6f1c1c0e-58d4-4e0a-9f5e-0d8b7a7f6e11","code":"W-01","name":"Основной"}"#;
        let w: Warehouse = serde_json::from_str(json).unwrap();
        assert_eq!(w.code, "W-01");
        assert!(w.is_active);
        assert_eq!(w.address, None);
    }

    #[test]
    fn test_filters_active_count_ignores_blank() {
        let filters = WarehouseFilters {
            search: Some("   ".into()),
            is_active: Some(false),
        };
        assert_eq!(filters.active_count(), 1);
        assert_eq!(filters.normalized().search, None);
    }
}
