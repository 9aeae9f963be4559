//! In-memory resource, collection and sink used by the controller tests.

use super::remote::{ExportCollection, ReadCollection, RemoteCollection};
use super::resource::{EditableResource, ExportableResource, Resource};
use crate::shared::notifications::{NotificationSink, ToastKind};
use async_trait::async_trait;
use contracts::shared::failure::Failure;
use contracts::shared::paging::{ListPage, PageDescriptor};
use contracts::shared::query::{count_some, ListFilters};
use contracts::shared::validation::{non_blank, FieldErrors, FormInput};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::Future;
use std::ops::Range;
use std::pin::Pin;
use std::task::{Context, Poll};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestItem {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ListFilters for TestFilters {
    fn normalized(&self) -> Self {
        Self {
            name: non_blank(&self.name),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.as_deref().is_some_and(|n| n.contains('!')) {
            errors.add("name", "Недопустимый символ");
        }
        errors.into_result()
    }

    fn active_count(&self) -> usize {
        count_some(&[self.name.is_some()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestInput {
    pub name: String,
}

impl FormInput for TestInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Укажите наименование");
        errors.into_result()
    }
}

impl Resource for TestResource {
    type Id = u32;
    type Item = TestItem;
    type Filters = TestFilters;

    const PATH: &'static str = "/api/test";
    const TITLE: &'static str = "Тестовая запись";

    fn id_of(item: &TestItem) -> u32 {
        item.id
    }

    fn label_of(item: &TestItem) -> String {
        item.name.clone()
    }
}

impl EditableResource for TestResource {
    type Input = TestInput;

    fn input_from(item: &TestItem) -> TestInput {
        TestInput {
            name: item.name.clone(),
        }
    }
}

impl ExportableResource for TestResource {
    const EXPORT_PATH: &'static str = "/api/test/export";
    const FILE_PREFIX: &'static str = "test";
}

pub fn item(id: u32, name: &str) -> TestItem {
    TestItem {
        id,
        name: name.to_string(),
    }
}

/// Page of items with ids from `ids`, named "Склад {id}".
pub fn page_of(ids: Range<u32>, index: usize, size: usize, total: usize) -> ListPage<TestItem> {
    ListPage {
        items: ids.map(|id| item(id, &format!("Склад {}", id))).collect(),
        page: PageDescriptor::new(index, size, total),
    }
}

/// Returns `Pending` `n` times (waking itself) before completing.
pub struct YieldNow(pub usize);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Server stand-in backed by a vector.
#[derive(Default)]
pub struct MockCollection {
    pub store: RefCell<Vec<TestItem>>,
    next_id: Cell<u32>,
    calls: RefCell<BTreeMap<&'static str, usize>>,
    /// Yields before answering a list call for the given page
    pub list_delays: RefCell<BTreeMap<usize, usize>>,
    /// Returned (once) by the next call instead of a result
    pub fail_next: RefCell<Option<Failure>>,
    pub exported: RefCell<Vec<TestFilters>>,
}

impl MockCollection {
    pub fn with_items(count: u32) -> Self {
        let mock = Self::default();
        *mock.store.borrow_mut() = (0..count).map(|id| item(id, &format!("Склад {}", id))).collect();
        mock.next_id.set(count);
        mock
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.borrow().get(method).copied().unwrap_or(0)
    }

    fn record(&self, method: &'static str) -> Result<(), Failure> {
        *self.calls.borrow_mut().entry(method).or_insert(0) += 1;
        match self.fail_next.borrow_mut().take() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ReadCollection<TestResource> for MockCollection {
    async fn list(
        &self,
        filters: &TestFilters,
        page: usize,
        page_size: usize,
    ) -> Result<ListPage<TestItem>, Failure> {
        self.record("list")?;
        let delay = self.list_delays.borrow().get(&page).copied().unwrap_or(0);
        YieldNow(delay).await;

        let matching: Vec<TestItem> = self
            .store
            .borrow()
            .iter()
            .filter(|i| filters.name.as_deref().map_or(true, |n| i.name.contains(n)))
            .cloned()
            .collect();
        let items = matching
            .iter()
            .skip((page.max(1) - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();
        Ok(ListPage {
            items,
            page: PageDescriptor::new(page, page_size, matching.len()),
        })
    }

    async fn get(&self, id: &u32) -> Result<TestItem, Failure> {
        self.record("get")?;
        YieldNow(1).await;
        self.store
            .borrow()
            .iter()
            .find(|i| i.id == *id)
            .cloned()
            .ok_or(Failure::NotFound)
    }
}

#[async_trait(?Send)]
impl RemoteCollection<TestResource> for MockCollection {
    async fn create(&self, input: &TestInput) -> Result<TestItem, Failure> {
        self.record("create")?;
        YieldNow(1).await;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = item(id, &input.name);
        self.store.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &u32, input: &TestInput) -> Result<TestItem, Failure> {
        self.record("update")?;
        YieldNow(1).await;
        let mut store = self.store.borrow_mut();
        let existing = store.iter_mut().find(|i| i.id == *id).ok_or(Failure::NotFound)?;
        existing.name = input.name.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &u32) -> Result<(), Failure> {
        self.record("delete")?;
        YieldNow(1).await;
        let mut store = self.store.borrow_mut();
        let before = store.len();
        store.retain(|i| i.id != *id);
        if store.len() == before {
            return Err(Failure::NotFound);
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ExportCollection<TestResource> for MockCollection {
    async fn export_as_file(&self, filters: &TestFilters) -> Result<(), Failure> {
        self.record("export")?;
        self.exported.borrow_mut().push(filters.clone());
        Ok(())
    }
}

/// Collects toasts instead of showing them.
#[derive(Default)]
pub struct RecordingSink {
    pub events: RefCell<Vec<(ToastKind, String)>>,
}

impl RecordingSink {
    pub fn kinds(&self) -> Vec<ToastKind> {
        self.events.borrow().iter().map(|(k, _)| *k).collect()
    }

    pub fn last_message(&self) -> Option<String> {
        self.events.borrow().last().map(|(_, m)| m.clone())
    }
}

impl NotificationSink for RecordingSink {
    fn push(&self, kind: ToastKind, message: String) {
        self.events.borrow_mut().push((kind, message));
    }
}
