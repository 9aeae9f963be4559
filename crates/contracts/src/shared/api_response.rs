//! Response envelope returned by every REST endpoint.
//!
//! ```json
//! { "data": [...], "metaData": { "totalItems": 25, ... },
//!   "message": "OK", "success": true, "statusCode": 200 }
//! ```
//!
//! `success` must be checked even on HTTP 200: some failures are reported
//! in-band only.

use crate::shared::failure::Failure;
use crate::shared::paging::{ListPage, PageDescriptor};
use crate::shared::validation::FieldErrors;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(default)]
    pub total_items: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub meta_data: Option<MetaData>,
    #[serde(default)]
    pub message: Option<String>,
    /// Missing flag falls back to the HTTP status
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Per-field messages for validation failures
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

fn is_http_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parses a raw response body and checks both the HTTP status and the
/// in-band `success` flag.
pub fn decode<T: DeserializeOwned>(http_status: u16, body: &str) -> Result<ApiResponse<T>, Failure> {
    let http_ok = is_http_ok(http_status);

    let envelope: ApiResponse<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if http_ok => {
            return Err(Failure::ServerError(format!(
                "Некорректный ответ сервера: {}",
                e
            )));
        }
        Err(_) => {
            let text = body.trim();
            let message = (!text.is_empty()).then(|| text.chars().take(200).collect());
            return Err(Failure::from_status(http_status, message, None));
        }
    };

    let success = envelope.success.unwrap_or(http_ok);
    if http_ok && success {
        return Ok(envelope);
    }

    // In-band failures on HTTP 200 carry their real status in `statusCode`.
    let status = match envelope.status_code {
        Some(code) if code >= 400 => code,
        _ if http_ok => 500,
        _ => http_status,
    };
    Err(Failure::from_status(status, envelope.message, envelope.errors))
}

impl<T> ApiResponse<T> {
    /// Payload of a single-record response.
    pub fn into_data(self) -> Result<T, Failure> {
        self.data
            .ok_or_else(|| Failure::ServerError("Пустой ответ сервера".to_string()))
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Builds a list page; a missing `data` means no rows matched.
    ///
    /// Server-reported page size and index win over the requested ones (the
    /// server may clamp). `total_pages` is always recomputed from the count.
    pub fn into_list_page(self, requested_index: usize, requested_size: usize) -> ListPage<T> {
        let items = self.data.unwrap_or_default();
        let (index, size, total_count) = match self.meta_data {
            Some(meta) => (
                if meta.current_page > 0 { meta.current_page } else { requested_index },
                if meta.page_size > 0 { meta.page_size } else { requested_size },
                meta.total_items,
            ),
            None => (requested_index, requested_size, items.len()),
        };

        ListPage {
            items,
            page: PageDescriptor::new(index, size, total_count),
        }
    }
}
