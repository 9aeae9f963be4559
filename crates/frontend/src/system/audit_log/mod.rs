pub mod ui;

use crate::shared::crud::resource::{ExportableResource, Resource};
use contracts::system::audit_log::aggregate::{AuditLogEntry, AuditLogFilters, AuditLogId};

/// `/api/auditlog`: read-only, with CSV export of the filtered journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditLog;

impl Resource for AuditLog {
    type Id = AuditLogId;
    type Item = AuditLogEntry;
    type Filters = AuditLogFilters;

    const PATH: &'static str = "/api/auditlog";
    const TITLE: &'static str = "Запись журнала";

    fn id_of(item: &AuditLogEntry) -> AuditLogId {
        item.id
    }

    fn label_of(item: &AuditLogEntry) -> String {
        format!("{} {}", item.action, item.entity)
    }
}

impl ExportableResource for AuditLog {
    const EXPORT_PATH: &'static str = "/api/auditlog/export";
    const FILE_PREFIX: &'static str = "audit-log";
}
