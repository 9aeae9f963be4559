use crate::shared::query::{count_some, validate_date_range, ListFilters};
use crate::shared::validation::{non_blank, FieldErrors};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLogId(pub Uuid);

impl fmt::Display for AuditLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Результат операции, записанной в журнал
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    Success,
    Failed,
}

impl AuditStatus {
    pub const ALL: [AuditStatus; 2] = [AuditStatus::Success, AuditStatus::Failed];

    pub fn code(&self) -> &'static str {
        match self {
            AuditStatus::Success => "SUCCESS",
            AuditStatus::Failed => "FAILED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::Success => "Успешно",
            AuditStatus::Failed => "Ошибка",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Запись журнала аудита (только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: AuditLogId,
    pub timestamp: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub action: String,
    pub entity: String,
    #[serde(default)]
    pub entity_id: Option<String>,
    pub status: AuditStatus,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AuditStatus>,
    /// YYYY-MM-DD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// YYYY-MM-DD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl ListFilters for AuditLogFilters {
    fn normalized(&self) -> Self {
        Self {
            user_name: non_blank(&self.user_name),
            action: non_blank(&self.action),
            entity: non_blank(&self.entity),
            status: self.status,
            date_from: non_blank(&self.date_from),
            date_to: non_blank(&self.date_to),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_date_range(&mut errors, "dateFrom", &self.date_from, "dateTo", &self.date_to);
        errors.into_result()
    }

    fn active_count(&self) -> usize {
        let f = self.normalized();
        count_some(&[
            f.user_name.is_some(),
            f.action.is_some(),
            f.entity.is_some(),
            f.status.is_some(),
            f.date_from.is_some(),
            f.date_to.is_some(),
        ])
    }
}
