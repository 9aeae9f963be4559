use super::filter_state::FilterState;
use super::pagination::Pagination;
use super::resource::Resource;
use contracts::shared::failure::Failure;
use contracts::shared::paging::ListPage;
use contracts::shared::validation::FieldErrors;

/// Monotonically increasing id of an issued list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Everything a collection client needs to run one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest<F> {
    pub token: RequestToken,
    pub filters: F,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<F> {
    /// Result written to state
    Committed,
    /// A newer request was issued meanwhile; result dropped
    Stale,
    /// Result written, but the current page no longer exists; run the follow-up
    Clamped(FetchRequest<F>),
}

/// List state for one resource: rows, filters, pagination, status.
///
/// Pure state machine `Idle -> Loading -> {Loaded, Errored}`. Every trigger
/// returns a `FetchRequest`; only the result for the most recently issued
/// token is committed (last-request-wins).
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<R: Resource> {
    filters: FilterState<R::Filters>,
    pagination: Pagination,
    /// Position of the rows in `items`; restored when a fetch fails
    committed: Pagination,
    items: Vec<R::Item>,
    status: ListStatus,
    error: Option<Failure>,
    last_issued: u64,
}

impl<R: Resource> ListController<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: FilterState::new(),
            pagination: Pagination::new(page_size),
            committed: Pagination::new(page_size),
            items: Vec::new(),
            status: ListStatus::Idle,
            error: None,
            last_issued: 0,
        }
    }

    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn filters(&self) -> &FilterState<R::Filters> {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Edits the pending filter set; never triggers a fetch.
    pub fn edit_filters(&mut self, f: impl FnOnce(&mut R::Filters)) {
        self.filters.edit(f);
    }

    /// Issues a fetch for the current applied filters and page.
    pub fn begin_fetch(&mut self) -> FetchRequest<R::Filters> {
        self.last_issued += 1;
        self.status = ListStatus::Loading;
        FetchRequest {
            token: RequestToken(self.last_issued),
            filters: self.filters.applied().clone(),
            page: self.pagination.index(),
            page_size: self.pagination.size(),
        }
    }

    /// Explicit refresh (also used after create / update / delete).
    pub fn refresh(&mut self) -> FetchRequest<R::Filters> {
        self.begin_fetch()
    }

    /// Commits pending filters and goes back to page 1.
    pub fn apply_filters(&mut self) -> Result<FetchRequest<R::Filters>, FieldErrors> {
        self.filters.apply()?;
        self.pagination.reset_index();
        Ok(self.begin_fetch())
    }

    pub fn clear_filters(&mut self) -> FetchRequest<R::Filters> {
        self.filters.clear();
        self.pagination.reset_index();
        self.begin_fetch()
    }

    /// `None` when the clamped page equals the current one.
    pub fn go_to(&mut self, page: usize) -> Option<FetchRequest<R::Filters>> {
        self.pagination.go_to(page).then(|| self.begin_fetch())
    }

    pub fn set_page_size(&mut self, size: usize) -> Option<FetchRequest<R::Filters>> {
        self.pagination.set_page_size(size).then(|| self.begin_fetch())
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.last_issued
    }

    /// Applies a fetch result if `token` is still the latest issued one.
    ///
    /// On error the previous rows stay on screen together with the page
    /// position they were loaded for.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<ListPage<R::Item>, Failure>,
    ) -> FetchOutcome<R::Filters> {
        if !self.is_latest(token) {
            log::debug!(
                "{}: dropping stale list response #{} (latest #{})",
                R::PATH,
                token.0,
                self.last_issued
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.items = page.items;
                self.error = None;
                self.status = ListStatus::Loaded;
                let out_of_range = self.pagination.absorb(&page.page);
                self.committed = self.pagination;
                if out_of_range {
                    log::debug!(
                        "{}: page out of range, reloading page {}",
                        R::PATH,
                        self.pagination.index()
                    );
                    return FetchOutcome::Clamped(self.begin_fetch());
                }
                FetchOutcome::Committed
            }
            Err(failure) => {
                log::warn!("{}: list fetch failed: {}", R::PATH, failure);
                self.error = Some(failure);
                self.status = ListStatus::Errored;
                self.pagination = self.committed;
                FetchOutcome::Committed
            }
        }
    }

    /// Copy of the filters in effect; export uses the same set as the list.
    pub fn applied_filters(&self) -> R::Filters {
        self.filters.applied().clone()
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn filters_dirty(&self) -> bool {
        self.filters.is_dirty()
    }

    pub fn pending_filters(&self) -> &R::Filters {
        self.filters.pending()
    }

    pub fn filter_errors(&self) -> &FieldErrors {
        self.filters.errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::testing::{page_of, TestFilters, TestItem, TestResource};

    fn controller() -> ListController<TestResource> {
        ListController::new(10)
    }

    #[test]
    fn test_initial_state_is_idle() {
        let c = controller();
        assert_eq!(c.status(), ListStatus::Idle);
        assert!(c.items().is_empty());
        assert!(!c.is_loading());
    }

    #[test]
    fn test_fetch_commit_cycle() {
        let mut c = controller();
        let req = c.begin_fetch();
        assert!(c.is_loading());
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 10);

        let outcome = c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));
        assert_eq!(outcome, FetchOutcome::Committed);
        assert_eq!(c.status(), ListStatus::Loaded);
        assert_eq!(c.items().len(), 10);
        assert_eq!(c.pagination().total_pages(), 3);
    }

    #[test]
    fn test_last_request_wins() {
        let mut c = controller();
        let first = c.begin_fetch();
        c.complete(first.token, Ok(page_of(0..10, 1, 10, 25)));

        let a = c.go_to(2).expect("page 2");
        let b = c.go_to(3).expect("page 3");

        // B resolves first, then the older A
        assert_eq!(c.complete(b.token, Ok(page_of(20..25, 3, 10, 25))), FetchOutcome::Committed);
        assert_eq!(c.complete(a.token, Ok(page_of(10..20, 2, 10, 25))), FetchOutcome::Stale);

        let ids: Vec<u32> = c.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![20, 21, 22, 23, 24]);
        assert_eq!(c.pagination().index(), 3);
        assert_eq!(c.status(), ListStatus::Loaded);
    }

    #[test]
    fn test_stale_result_keeps_loading_flag() {
        let mut c = controller();
        let a = c.begin_fetch();
        let _b = c.refresh();
        assert_eq!(c.complete(a.token, Ok(page_of(0..3, 1, 10, 3))), FetchOutcome::Stale);
        assert!(c.is_loading());
        assert!(c.items().is_empty());
    }

    #[test]
    fn test_error_preserves_rows_and_clears_loading() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));

        let req = c.refresh();
        c.complete(req.token, Err(Failure::network("offline")));
        assert_eq!(c.status(), ListStatus::Errored);
        assert!(!c.is_loading());
        assert_eq!(c.items().len(), 10);
        assert!(c.error_message().is_some());

        let req = c.refresh();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));
        assert!(c.error().is_none());
    }

    #[test]
    fn test_failed_page_change_keeps_position_of_rows() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));

        let req = c.go_to(2).expect("page 2");
        assert_eq!(c.pagination().index(), 2);
        c.complete(req.token, Err(Failure::network("offline")));

        let ids: Vec<u32> = c.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<u32>>());
        assert_eq!(c.pagination().index(), 1);
        assert_eq!(c.pagination().shown_range(), Some((1, 10)));
        assert!(c.pagination().has_next());
        assert!(!c.pagination().has_prev());

        let req = c.set_page_size(25).expect("size changed");
        assert_eq!(req.page_size, 25);
        c.complete(req.token, Err(Failure::network("offline")));
        assert_eq!(c.pagination().size(), 10);
        assert_eq!(c.pagination().shown_range(), Some((1, 10)));

        // retry works from the restored position
        let req = c.go_to(2).expect("page 2 again");
        c.complete(req.token, Ok(page_of(10..20, 2, 10, 25)));
        assert_eq!(c.pagination().shown_range(), Some((11, 20)));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));
        c.go_to(3);

        c.edit_filters(|f| f.name = Some("склад".into()));
        assert_eq!(c.pagination().index(), 3, "editing alone must not touch the page");

        let req = c.apply_filters().unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.filters, TestFilters { name: Some("склад".into()) });
        assert_eq!(c.pagination().index(), 1);
    }

    #[test]
    fn test_clear_filters_resets_page() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));
        c.edit_filters(|f| f.name = Some("x".into()));
        c.apply_filters().unwrap();
        c.go_to(2);
        let req = c.clear_filters();
        assert_eq!(req.page, 1);
        assert_eq!(req.filters, TestFilters::default());
    }

    #[test]
    fn test_invalid_filters_issue_no_request() {
        let mut c = controller();
        c.edit_filters(|f| f.name = Some("!".into()));
        let before = c.begin_fetch().token;
        assert!(c.apply_filters().is_err());
        assert!(c.is_latest(before));
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 95)));
        c.go_to(5);
        let req = c.set_page_size(50).expect("size changed");
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 50);
    }

    #[test]
    fn test_go_to_same_page_is_noop() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));
        assert!(c.go_to(1).is_none());
        assert!(c.go_to(4).is_some());
        assert_eq!(c.pagination().index(), 3);
    }

    #[test]
    fn test_warehouse_scenario_page_four_clamps() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 25)));
        assert_eq!(c.pagination().total_pages(), 3);
        let req = c.go_to(4).expect("moves to last page");
        assert_eq!(req.page, 3);
    }

    #[test]
    fn test_out_of_range_page_triggers_follow_up() {
        let mut c = controller();
        let req = c.begin_fetch();
        c.complete(req.token, Ok(page_of(0..10, 1, 10, 21)));
        let req = c.go_to(3).unwrap();
        c.complete(req.token, Ok(page_of(20..21, 3, 10, 21)));

        // the only row on page 3 is deleted elsewhere
        let req = c.refresh();
        match c.complete(req.token, Ok(page_of(0..0, 3, 10, 20))) {
            FetchOutcome::Clamped(next) => {
                assert_eq!(next.page, 2);
                assert!(c.is_latest(next.token));
            }
            other => panic!("expected follow-up, got {:?}", other),
        }
    }

    #[test]
    fn test_items_are_not_reordered() {
        let mut c = controller();
        let req = c.begin_fetch();
        let mut page = page_of(0..3, 1, 10, 3);
        page.items.reverse();
        c.complete(req.token, Ok(page));
        let ids: Vec<u32> = c.items().iter().map(|i: &TestItem| i.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }
}
