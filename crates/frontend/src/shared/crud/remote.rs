//! Remote collection client: paged list, get, create, update, delete and
//! export against one REST resource.
//!
//! Every call returns `Result<_, Failure>`; nothing is retried.

use super::resource::{EditableResource, ExportableResource, Resource};
use crate::shared::date_utils::export_file_name;
use crate::shared::export::download_text_file;
use async_trait::async_trait;
use contracts::shared::api_response::{decode, ApiResponse};
use contracts::shared::failure::Failure;
use contracts::shared::paging::ListPage;
use contracts::shared::query::ListFilters;
use contracts::shared::validation::FormInput;
use gloo_net::http::{Request, Response};
use std::marker::PhantomData;

#[async_trait(?Send)]
pub trait ReadCollection<R: Resource> {
    /// `page` and `page_size` are 1-based / at least 1. No match is an empty
    /// page, not an error.
    async fn list(
        &self,
        filters: &R::Filters,
        page: usize,
        page_size: usize,
    ) -> Result<ListPage<R::Item>, Failure>;

    async fn get(&self, id: &R::Id) -> Result<R::Item, Failure>;
}

#[async_trait(?Send)]
pub trait RemoteCollection<R: EditableResource>: ReadCollection<R> {
    async fn create(&self, input: &R::Input) -> Result<R::Item, Failure>;

    async fn update(&self, id: &R::Id, input: &R::Input) -> Result<R::Item, Failure>;

    /// Deleting an already deleted id is reported as a failure.
    async fn delete(&self, id: &R::Id) -> Result<(), Failure>;
}

#[async_trait(?Send)]
pub trait ExportCollection<R: ExportableResource> {
    /// Downloads the filtered collection as delimited text.
    async fn export_as_file(&self, filters: &R::Filters) -> Result<(), Failure>;
}

// ============================================================================
// URL building
// ============================================================================

/// Normalizes and validates filters before they reach the transport.
pub fn prepare_filters<F: ListFilters>(filters: &F) -> Result<F, Failure> {
    let normalized = filters.normalized();
    normalized.validate()?;
    Ok(normalized)
}

fn filters_query<F: ListFilters>(filters: &F) -> Result<String, Failure> {
    let filters = prepare_filters(filters)?;
    serde_qs::to_string(&filters)
        .map_err(|e| Failure::ServerError(format!("Не удалось сформировать запрос: {}", e)))
}

/// `{base}{path}?{filters}&pageIndex={page}&pageSize={size}`
pub fn list_url<F: ListFilters>(
    base: &str,
    path: &str,
    filters: &F,
    page: usize,
    page_size: usize,
) -> Result<String, Failure> {
    let query = filters_query(filters)?;
    let paging = format!("pageIndex={}&pageSize={}", page.max(1), page_size.max(1));
    if query.is_empty() {
        Ok(format!("{}{}?{}", base, path, paging))
    } else {
        Ok(format!("{}{}?{}&{}", base, path, query, paging))
    }
}

pub fn item_url(base: &str, path: &str, id: &impl std::fmt::Display) -> String {
    format!("{}{}/{}", base, path, urlencoding::encode(&id.to_string()))
}

pub fn export_url<F: ListFilters>(base: &str, path: &str, filters: &F) -> Result<String, Failure> {
    let query = filters_query(filters)?;
    if query.is_empty() {
        Ok(format!("{}{}", base, path))
    } else {
        Ok(format!("{}{}?{}", base, path, query))
    }
}

/// Drops rows beyond the page size (the server must not send more).
pub fn enforce_page_size<T>(mut page: ListPage<T>, path: &str) -> ListPage<T> {
    if page.items.len() > page.page.size {
        log::warn!(
            "{}: server returned {} rows for page size {}, truncating",
            path,
            page.items.len(),
            page.page.size
        );
        page.items.truncate(page.page.size);
    }
    page
}

// ============================================================================
// HTTP implementation
// ============================================================================

/// `gloo-net` implementation of the collection traits.
pub struct HttpCollection<R> {
    base: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for HttpCollection<R> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> HttpCollection<R> {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            base: api_base.into(),
            _resource: PhantomData,
        }
    }

    fn item_url(&self, id: &R::Id) -> String {
        item_url(&self.base, R::PATH, id)
    }
}

async fn read_body(response: Result<Response, gloo_net::Error>) -> Result<(u16, String), Failure> {
    let response = response.map_err(|e| {
        log::warn!("request failed: {}", e);
        Failure::network(e)
    })?;
    let status = response.status();
    let body = response.text().await.map_err(Failure::network)?;
    Ok((status, body))
}

fn serialize_error(e: gloo_net::Error) -> Failure {
    Failure::ServerError(format!("Не удалось сформировать запрос: {}", e))
}

#[async_trait(?Send)]
impl<R: Resource> ReadCollection<R> for HttpCollection<R> {
    async fn list(
        &self,
        filters: &R::Filters,
        page: usize,
        page_size: usize,
    ) -> Result<ListPage<R::Item>, Failure> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let url = list_url(&self.base, R::PATH, filters, page, page_size)?;
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await;
        let (status, body) = read_body(response).await?;
        let envelope: ApiResponse<Vec<R::Item>> = decode(status, &body)?;
        Ok(enforce_page_size(envelope.into_list_page(page, page_size), R::PATH))
    }

    async fn get(&self, id: &R::Id) -> Result<R::Item, Failure> {
        let url = self.item_url(id);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await;
        let (status, body) = read_body(response).await?;
        decode::<R::Item>(status, &body)?.into_data()
    }
}

#[async_trait(?Send)]
impl<R: EditableResource> RemoteCollection<R> for HttpCollection<R> {
    async fn create(&self, input: &R::Input) -> Result<R::Item, Failure> {
        input.validate()?;
        let url = format!("{}{}", self.base, R::PATH);
        log::debug!("POST {}", url);

        let request = Request::post(&url)
            .header("Accept", "application/json")
            .json(input)
            .map_err(serialize_error)?;
        let (status, body) = read_body(request.send().await).await?;
        decode::<R::Item>(status, &body)?.into_data()
    }

    async fn update(&self, id: &R::Id, input: &R::Input) -> Result<R::Item, Failure> {
        input.validate()?;
        let url = self.item_url(id);
        log::debug!("PUT {}", url);

        let request = Request::put(&url)
            .header("Accept", "application/json")
            .json(input)
            .map_err(serialize_error)?;
        let (status, body) = read_body(request.send().await).await?;
        decode::<R::Item>(status, &body)?.into_data()
    }

    async fn delete(&self, id: &R::Id) -> Result<(), Failure> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);

        let response = Request::delete(&url)
            .header("Accept", "application/json")
            .send()
            .await;
        let (status, body) = read_body(response).await?;
        decode::<serde_json::Value>(status, &body)?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl<R: ExportableResource> ExportCollection<R> for HttpCollection<R> {
    async fn export_as_file(&self, filters: &R::Filters) -> Result<(), Failure> {
        let url = export_url(&self.base, R::EXPORT_PATH, filters)?;
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "text/csv")
            .send()
            .await;
        let (status, body) = read_body(response).await?;
        if !(200..300).contains(&status) {
            // error bodies still use the JSON envelope
            decode::<serde_json::Value>(status, &body)?;
            return Err(Failure::from_status(status, None, None));
        }

        let file_name = export_file_name(R::FILE_PREFIX, chrono::Utc::now());
        download_text_file(&body, &file_name, "text/csv;charset=utf-8;")
            .map_err(Failure::ServerError)?;
        log::info!("exported {} ({} bytes)", file_name, body.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a101_warehouse::aggregate::WarehouseFilters;
    use contracts::system::audit_log::aggregate::{AuditLogFilters, AuditStatus};

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn test_list_url_without_filters() {
        let url = list_url(BASE, "/api/warehouses", &WarehouseFilters::default(), 1, 10).unwrap();
        assert_eq!(url, "http://localhost:3000/api/warehouses?pageIndex=1&pageSize=10");
    }

    #[test]
    fn test_list_url_skips_blank_filters() {
        let filters = WarehouseFilters {
            search: Some("  ".into()),
            is_active: Some(true),
        };
        let url = list_url(BASE, "/api/warehouses", &filters, 2, 25).unwrap();
        assert_eq!(
            url,
            "http://localhost:3000/api/warehouses?isActive=true&pageIndex=2&pageSize=25"
        );
    }

    #[test]
    fn test_list_url_raises_page_to_one() {
        let url = list_url(BASE, "/api/warehouses", &WarehouseFilters::default(), 0, 0).unwrap();
        assert!(url.ends_with("pageIndex=1&pageSize=1"));
    }

    #[test]
    fn test_invalid_filters_never_reach_transport() {
        let filters = AuditLogFilters {
            date_from: Some("2024-13-45".into()),
            ..Default::default()
        };
        let err = list_url(BASE, "/api/auditlog", &filters, 1, 10).unwrap_err();
        assert!(matches!(err, Failure::Validation(_)));
    }

    #[test]
    fn test_export_url_carries_status() {
        let filters = AuditLogFilters {
            status: Some(AuditStatus::Success),
            ..Default::default()
        };
        let url = export_url(BASE, "/api/auditlog/export", &filters).unwrap();
        assert_eq!(url, "http://localhost:3000/api/auditlog/export?status=SUCCESS");
    }

    #[test]
    fn test_item_url_encodes_id() {
        assert_eq!(item_url(BASE, "/api/x", &"a b"), "http://localhost:3000/api/x/a%20b");
    }

    #[test]
    fn test_enforce_page_size() {
        let page = crate::shared::crud::testing::page_of(0..12, 1, 10, 40);
        let page = enforce_page_size(page, "/api/test");
        assert_eq!(page.items.len(), 10);
    }
}
