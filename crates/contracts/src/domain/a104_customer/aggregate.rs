use crate::shared::query::{count_some, ListFilters};
use crate::shared::validation::{looks_like_email, non_blank, FieldErrors, FormInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор покупателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub Uuid);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Покупатель
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
        }
    }
}

impl FormInput for CustomerDto {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Наименование обязательно для заполнения");
        if let Some(email) = non_blank(&self.email) {
            if !looks_like_email(&email) {
                errors.add("email", "Некорректный email");
            }
        }
        if let Some(phone) = non_blank(&self.phone) {
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            if digits < 5 {
                errors.add("phone", "Телефон должен содержать не менее 5 цифр");
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
pub struct CustomerFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ListFilters for CustomerFilters {
    fn normalized(&self) -> Self {
        Self {
            name: non_blank(&self.name),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
        }
    }

    fn active_count(&self) -> usize {
        let f = self.normalized();
        count_some(&[f.name.is_some(), f.email.is_some(), f.phone.is_some()])
    }
}
