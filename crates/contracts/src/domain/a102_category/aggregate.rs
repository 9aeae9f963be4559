use crate::shared::query::{count_some, ListFilters};
use crate::shared::validation::{non_blank, FieldErrors, FormInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Категория товаров (может иметь родителя)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    #[serde(default)]
    pub parent_name: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<CategoryId>,
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            parent_id: c.parent_id,
        }
    }
}

impl FormInput for CategoryDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Наименование обязательно для заполнения");
        errors.into_result()
    }
}

// ============================================================================
// Filters
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ListFilters for CategoryFilters {
    fn normalized(&self) -> Self {
        Self {
            name: non_blank(&self.name),
        }
    }

    fn active_count(&self) -> usize {
        count_some(&[non_blank(&self.name).is_some()])
    }
}
