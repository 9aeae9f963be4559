//! Async glue between the pure controllers and a collection client.
//!
//! Every state change goes through `StateCell::with_mut`, so the same drivers
//! run against Leptos signals in the app and plain `RefCell`s in tests.

use super::list_controller::{FetchOutcome, FetchRequest, ListController};
use super::modal_controller::{
    DeleteConfirmation, ModalController, SubmitDecision, SubmitOutcome, SubmitTarget,
};
use super::remote::{ExportCollection, ReadCollection, RemoteCollection};
use super::resource::{EditableResource, ExportableResource, Resource};
use crate::shared::notifications::NotificationSink;
use contracts::shared::failure::{Failure, FailureOrigin};
use leptos::prelude::*;
use std::cell::RefCell;

/// Mutable state holder the drivers write through.
///
/// `None` means the holder is gone (e.g. the page was unmounted while a
/// request was in flight); the result is then discarded.
pub trait StateCell<S> {
    fn with_mut<U>(&self, f: impl FnOnce(&mut S) -> U) -> Option<U>;

    fn inspect<U>(&self, f: impl FnOnce(&S) -> U) -> Option<U>;
}

impl<S> StateCell<S> for RefCell<S> {
    fn with_mut<U>(&self, f: impl FnOnce(&mut S) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<U>(&self, f: impl FnOnce(&S) -> U) -> Option<U> {
        Some(f(&self.borrow()))
    }
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn with_mut<U>(&self, f: impl FnOnce(&mut S) -> U) -> Option<U> {
        self.try_update(f)
    }

    fn inspect<U>(&self, f: impl FnOnce(&S) -> U) -> Option<U> {
        self.try_with_untracked(f)
    }
}

/// Runs `request` and any follow-up fetch caused by an out-of-range page.
pub async fn run_fetch<R, C, S>(state: &S, client: &C, request: FetchRequest<R::Filters>)
where
    R: Resource,
    C: ReadCollection<R> + ?Sized,
    S: StateCell<ListController<R>>,
{
    let mut request = request;
    loop {
        let result = client
            .list(&request.filters, request.page, request.page_size)
            .await;
        match state.with_mut(move |c| c.complete(request.token, result)) {
            Some(FetchOutcome::Clamped(next)) => request = next,
            Some(FetchOutcome::Committed) | Some(FetchOutcome::Stale) | None => break,
        }
    }
}

/// Refetches the current page with the applied filters.
pub async fn reload<R, C, S>(state: &S, client: &C)
where
    R: Resource,
    C: ReadCollection<R> + ?Sized,
    S: StateCell<ListController<R>>,
{
    if let Some(request) = state.with_mut(|c| c.refresh()) {
        run_fetch(state, client, request).await;
    }
}

/// Fetches the authoritative record and opens the edit form with it.
///
/// On failure the form stays closed and an error toast is shown.
pub async fn open_edit<R, C, M, N>(modal: &M, client: &C, id: R::Id, notify: &N) -> bool
where
    R: EditableResource,
    C: ReadCollection<R> + ?Sized,
    M: StateCell<ModalController<R>>,
    N: NotificationSink + ?Sized,
{
    match client.get(&id).await {
        Ok(item) => modal.with_mut(|m| m.open_edit(item)).unwrap_or(false),
        Err(failure) => {
            log::warn!("{}: cannot open {} for editing: {}", R::PATH, id, failure);
            notify.error(&format!("Не удалось открыть запись: {}", failure));
            false
        }
    }
}

/// Validates and submits the open form; on success closes it, shows a toast
/// and reloads the list.
pub async fn submit_modal<R, C, M, L, N>(
    modal: &M,
    list: &L,
    client: &C,
    notify: &N,
) -> SubmitOutcome<R::Item>
where
    R: EditableResource,
    C: RemoteCollection<R> + ?Sized,
    M: StateCell<ModalController<R>>,
    L: StateCell<ListController<R>>,
    N: NotificationSink + ?Sized,
{
    let request = match modal.with_mut(|m| m.begin_submit()) {
        Some(SubmitDecision::Dispatch(request)) => request,
        Some(SubmitDecision::Invalid(errors)) => return SubmitOutcome::Invalid(errors),
        Some(SubmitDecision::Ignored) | None => return SubmitOutcome::Ignored,
    };

    let created = request.target == SubmitTarget::Create;
    let result = match &request.target {
        SubmitTarget::Create => client.create(&request.input).await,
        SubmitTarget::Update(id) => client.update(id, &request.input).await,
    };

    let Some(outcome) = modal.with_mut(move |m| m.finish_submit(result)) else {
        return SubmitOutcome::Ignored;
    };

    match &outcome {
        SubmitOutcome::Saved(item) => {
            let label = R::label_of(item);
            if created {
                notify.success(&format!("{} создан(а): {}", R::TITLE, label));
            } else {
                notify.success(&format!("Изменения сохранены: {}", label));
            }
            reload(list, client).await;
        }
        SubmitOutcome::Failed(failure) if failure.origin() != FailureOrigin::Validation => {
            notify.error(&failure.to_string());
        }
        _ => {}
    }
    outcome
}

/// Deletes the record awaiting confirmation.
///
/// Returns `None` when nothing was awaiting confirmation or a delete is
/// already running. The confirmation closes either way.
pub async fn delete_confirmed<R, C, D, L, N>(
    confirm: &D,
    list: &L,
    client: &C,
    notify: &N,
) -> Option<Result<(), Failure>>
where
    R: EditableResource,
    C: RemoteCollection<R> + ?Sized,
    D: StateCell<DeleteConfirmation<R>>,
    L: StateCell<ListController<R>>,
    N: NotificationSink + ?Sized,
{
    let (id, label) = confirm.with_mut(|d| d.confirm()).flatten()?;
    log::debug!("{}: deleting {}", R::PATH, id);

    let result = client.delete(&id).await;
    confirm.with_mut(|d| d.finish());

    match &result {
        Ok(()) => {
            notify.success(&format!("Удалено: {}", label));
            reload(list, client).await;
        }
        Err(failure) => {
            notify.error(&format!("Не удалось удалить «{}»: {}", label, failure));
        }
    }
    Some(result)
}

/// `(value, label)` pairs of the first `limit` records of a collection,
/// for selects that reference another resource.
pub async fn fetch_options<R, C>(
    client: &C,
    limit: usize,
    to_option: fn(&R::Item) -> (String, String),
) -> Result<Vec<(String, String)>, Failure>
where
    R: Resource,
    C: ReadCollection<R> + ?Sized,
{
    let page = client.list(&R::Filters::default(), 1, limit).await?;
    Ok(page.items.iter().map(to_option).collect())
}

/// Exports with the filters currently applied to the list. List state is
/// only read.
pub async fn export_applied<R, C, L, N>(list: &L, client: &C, notify: &N) -> Result<(), Failure>
where
    R: ExportableResource,
    C: ExportCollection<R> + ?Sized,
    L: StateCell<ListController<R>>,
    N: NotificationSink + ?Sized,
{
    let Some(filters) = list.inspect(|c| c.applied_filters()) else {
        return Ok(());
    };
    let result = client.export_as_file(&filters).await;
    match &result {
        Ok(()) => notify.success("Файл выгрузки сформирован"),
        Err(failure) => notify.error(&format!("Ошибка экспорта: {}", failure)),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::list_controller::ListStatus;
    use crate::shared::crud::modal_controller::ModalState;
    use crate::shared::crud::testing::{
        item, MockCollection, RecordingSink, TestInput, TestItem, TestResource,
    };
    use crate::shared::notifications::ToastKind;
    use futures::executor::block_on;
    use futures::join;

    type List = RefCell<ListController<TestResource>>;
    type Modal = RefCell<ModalController<TestResource>>;

    fn loaded_list(mock: &MockCollection) -> List {
        let list = RefCell::new(ListController::new(10));
        let request = list.borrow_mut().begin_fetch();
        block_on(run_fetch(&list, mock, request));
        list
    }

    #[test]
    fn test_signal_reads_from_tasks_do_not_subscribe() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(1_u32);
        let runs = Arc::new(AtomicUsize::new(0));
        let memo = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                state.inspect(|v| *v).unwrap_or_default()
            }
        });

        assert_eq!(memo.get(), 1);
        state.set(2);
        assert_eq!(memo.get(), 1, "a read through StateCell must not track");
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(state.with_mut(|v| *v), Some(2));
    }

    #[test]
    fn test_options_include_record_created_after_first_load() {
        let mock = MockCollection::with_items(2);
        let to_option = |i: &TestItem| (i.id.to_string(), i.name.clone());

        let before = block_on(fetch_options::<TestResource, _>(&mock, 500, to_option)).unwrap();
        assert_eq!(before.len(), 2);

        let created = block_on(mock.create(&TestInput { name: "Новая".into() })).unwrap();
        let after = block_on(fetch_options::<TestResource, _>(&mock, 500, to_option)).unwrap();
        assert_eq!(after.len(), 3);
        assert!(after.contains(&(created.id.to_string(), "Новая".to_string())));
    }

    #[test]
    fn test_initial_load() {
        let mock = MockCollection::with_items(25);
        let list = loaded_list(&mock);
        let c = list.borrow();
        assert_eq!(c.status(), ListStatus::Loaded);
        assert_eq!(c.items().len(), 10);
        assert_eq!(c.pagination().total_count(), 25);
        assert_eq!(c.pagination().total_pages(), 3);
    }

    #[test]
    fn test_last_request_wins_through_driver() {
        let mock = MockCollection::with_items(25);
        let list = loaded_list(&mock);
        mock.list_delays.borrow_mut().insert(2, 3);

        let a = list.borrow_mut().go_to(2).unwrap();
        let b = list.borrow_mut().go_to(3).unwrap();
        block_on(async {
            join!(run_fetch(&list, &mock, a), run_fetch(&list, &mock, b));
        });

        let c = list.borrow();
        let ids: Vec<u32> = c.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![20, 21, 22, 23, 24]);
        assert_eq!(c.pagination().index(), 3);
        assert!(!c.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_rows() {
        let mock = MockCollection::with_items(25);
        let list = loaded_list(&mock);
        *mock.fail_next.borrow_mut() = Some(Failure::network("offline"));
        block_on(reload(&list, &mock));

        let c = list.borrow();
        assert_eq!(c.status(), ListStatus::Errored);
        assert_eq!(c.items().len(), 10);
        assert!(matches!(c.error(), Some(Failure::NetworkUnavailable(_))));
    }

    #[test]
    fn test_duplicate_submit_sends_one_request() {
        let mock = MockCollection::with_items(3);
        let list = loaded_list(&mock);
        let modal: Modal = RefCell::new(ModalController::new());
        let sink = RecordingSink::default();
        modal.borrow_mut().open_create();
        modal.borrow_mut().edit_input(|i| i.name = "Новый склад".into());

        let (first, second) = block_on(async {
            join!(
                submit_modal(&modal, &list, &mock, &sink),
                submit_modal(&modal, &list, &mock, &sink)
            )
        });

        assert!(matches!(first, SubmitOutcome::Saved(_)));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(mock.calls("create"), 1);
        assert_eq!(modal.borrow().state(), ModalState::Closed);
        assert_eq!(list.borrow().pagination().total_count(), 4);
        assert_eq!(sink.kinds(), vec![ToastKind::Success]);
    }

    #[test]
    fn test_blank_required_field_makes_no_call() {
        let mock = MockCollection::with_items(3);
        let list = loaded_list(&mock);
        let modal: Modal = RefCell::new(ModalController::new());
        let sink = RecordingSink::default();
        modal.borrow_mut().open_create();

        let outcome = block_on(submit_modal(&modal, &list, &mock, &sink));
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(mock.calls("create"), 0);
        assert!(modal.borrow().field_error("name").is_some());
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn test_server_failure_keeps_modal_open() {
        let mock = MockCollection::with_items(3);
        let list = loaded_list(&mock);
        let modal: Modal = RefCell::new(ModalController::new());
        let sink = RecordingSink::default();
        modal.borrow_mut().open_create();
        modal.borrow_mut().edit_input(|i| i.name = "Дубль".into());
        *mock.fail_next.borrow_mut() = Some(Failure::ServerError("код уже занят".into()));
        let lists_before = mock.calls("list");

        let outcome = block_on(submit_modal(&modal, &list, &mock, &sink));
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(modal.borrow().state(), ModalState::OpenCreate);
        assert!(modal.borrow().error().unwrap().contains("код уже занят"));
        assert_eq!(mock.calls("list"), lists_before);
        assert_eq!(sink.kinds(), vec![ToastKind::Error]);
    }

    #[test]
    fn test_edit_loads_record_first() {
        let mock = MockCollection::with_items(3);
        let list = loaded_list(&mock);
        let modal: Modal = RefCell::new(ModalController::new());
        let sink = RecordingSink::default();

        assert!(block_on(open_edit(&modal, &mock, 1, &sink)));
        assert_eq!(modal.borrow().state(), ModalState::OpenEdit);
        modal.borrow_mut().edit_input(|i| i.name = "Переименован".into());
        block_on(submit_modal(&modal, &list, &mock, &sink));

        assert_eq!(mock.calls("update"), 1);
        assert_eq!(mock.store.borrow()[1].name, "Переименован");
        assert_eq!(list.borrow().items()[1].name, "Переименован");
    }

    #[test]
    fn test_edit_of_missing_record_is_not_opened() {
        let mock = MockCollection::with_items(3);
        let modal: Modal = RefCell::new(ModalController::new());
        let sink = RecordingSink::default();

        assert!(!block_on(open_edit(&modal, &mock, 99, &sink)));
        assert_eq!(modal.borrow().state(), ModalState::Closed);
        assert_eq!(sink.kinds(), vec![ToastKind::Error]);
    }

    #[test]
    fn test_delete_refreshes_list() {
        let mock = MockCollection::with_items(25);
        let list = loaded_list(&mock);
        let confirm = RefCell::new(DeleteConfirmation::<TestResource>::new());
        let sink = RecordingSink::default();
        let victim = list.borrow().items()[3].clone();
        confirm.borrow_mut().request(&victim);

        let result = block_on(delete_confirmed(&confirm, &list, &mock, &sink));
        assert_eq!(result, Some(Ok(())));
        assert_eq!(sink.kinds(), vec![ToastKind::Success]);
        assert!(sink.last_message().unwrap().contains(&victim.name));
        assert!(!confirm.borrow().is_open());

        let c = list.borrow();
        assert_eq!(c.pagination().total_count(), 24);
        assert!(c.items().iter().all(|i| i.id != victim.id));
    }

    #[test]
    fn test_failed_delete_closes_confirmation() {
        let mock = MockCollection::with_items(5);
        let list = loaded_list(&mock);
        let confirm = RefCell::new(DeleteConfirmation::<TestResource>::new());
        let sink = RecordingSink::default();
        confirm.borrow_mut().request(&item(2, "Склад 2"));
        *mock.fail_next.borrow_mut() = Some(Failure::Unauthorized);
        let lists_before = mock.calls("list");

        let result = block_on(delete_confirmed(&confirm, &list, &mock, &sink));
        assert_eq!(result, Some(Err(Failure::Unauthorized)));
        assert!(!confirm.borrow().is_open());
        assert_eq!(sink.kinds(), vec![ToastKind::Error]);
        assert_eq!(mock.calls("list"), lists_before);
        assert_eq!(list.borrow().items().len(), 5);
    }

    #[test]
    fn test_delete_without_confirmation_does_nothing() {
        let mock = MockCollection::with_items(5);
        let list = loaded_list(&mock);
        let confirm = RefCell::new(DeleteConfirmation::<TestResource>::new());
        let sink = RecordingSink::default();

        assert_eq!(block_on(delete_confirmed(&confirm, &list, &mock, &sink)), None);
        assert_eq!(mock.calls("delete"), 0);
    }

    #[test]
    fn test_deleting_last_row_of_last_page_moves_back() {
        let mock = MockCollection::with_items(21);
        let list = loaded_list(&mock);
        let request = list.borrow_mut().go_to(3).unwrap();
        block_on(run_fetch(&list, &mock, request));
        let confirm = RefCell::new(DeleteConfirmation::<TestResource>::new());
        let sink = RecordingSink::default();
        confirm.borrow_mut().request(&item(20, "Склад 20"));

        block_on(delete_confirmed(&confirm, &list, &mock, &sink));
        let c = list.borrow();
        assert_eq!(c.pagination().index(), 2);
        assert_eq!(c.items().len(), 10);
    }

    #[test]
    fn test_export_uses_applied_filters_and_leaves_list_untouched() {
        let mock = MockCollection::with_items(25);
        let list = loaded_list(&mock);
        list.borrow_mut().edit_filters(|f| f.name = Some("Склад 1".into()));
        let request = list.borrow_mut().apply_filters().unwrap();
        block_on(run_fetch(&list, &mock, request));
        // edited but not applied
        list.borrow_mut().edit_filters(|f| f.name = Some("другое".into()));
        let before = list.borrow().clone();
        let sink = RecordingSink::default();

        block_on(export_applied(&list, &mock, &sink)).unwrap();
        assert_eq!(
            mock.exported.borrow().as_slice(),
            &[before.applied_filters()]
        );
        assert_eq!(*list.borrow(), before);
        assert_eq!(sink.kinds(), vec![ToastKind::Success]);
    }
}
