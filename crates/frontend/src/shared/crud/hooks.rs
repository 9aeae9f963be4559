//! Leptos handles over the controllers.
//!
//! Each list page builds one `ListHandle` (and a `CrudHandle` when the
//! resource is editable). Handles are `Copy`; every method either updates a
//! signal synchronously or spawns the matching driver.

use super::driver::{
    delete_confirmed, export_applied, fetch_options, open_edit, run_fetch, submit_modal,
};
use super::list_controller::{FetchRequest, ListController};
use super::modal_controller::{DeleteConfirmation, ModalController};
use super::remote::HttpCollection;
use super::resource::{EditableResource, ExportableResource, Resource};
use crate::shared::config::ClientConfig;
use crate::shared::notifications::Toaster;
use contracts::shared::paging::PageDescriptor;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct ListHandle<R: Resource> {
    pub state: RwSignal<ListController<R>>,
    client: StoredValue<HttpCollection<R>>,
    toaster: Toaster,
}

impl<R: Resource> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListHandle<R> {}

impl<R: Resource> ListHandle<R> {
    pub fn new(config: &ClientConfig, toaster: Toaster) -> Self {
        Self {
            state: RwSignal::new(ListController::new(config.default_page_size)),
            client: StoredValue::new(HttpCollection::new(config.api_base.clone())),
            toaster,
        }
    }

    pub fn client(&self) -> HttpCollection<R> {
        self.client.get_value()
    }

    pub fn toaster(&self) -> Toaster {
        self.toaster
    }

    fn dispatch(&self, request: Option<FetchRequest<R::Filters>>) {
        let Some(request) = request else {
            return;
        };
        let state = self.state;
        let client = self.client();
        spawn_local(async move {
            run_fetch(&state, &client, request).await;
        });
    }

    /// First load of the page.
    pub fn load(&self) {
        self.dispatch(self.state.try_update(|c| c.begin_fetch()));
    }

    pub fn refresh(&self) {
        self.dispatch(self.state.try_update(|c| c.refresh()));
    }

    pub fn edit_filters(&self, f: impl FnOnce(&mut R::Filters)) {
        self.state.update(|c| c.edit_filters(f));
    }

    /// Invalid filters stay pending; their errors are shown next to the inputs.
    pub fn apply_filters(&self) {
        let request = self
            .state
            .try_update(|c| c.apply_filters())
            .and_then(Result::ok);
        self.dispatch(request);
    }

    pub fn clear_filters(&self) {
        self.dispatch(self.state.try_update(|c| c.clear_filters()));
    }

    pub fn go_to(&self, page: usize) {
        self.dispatch(self.state.try_update(|c| c.go_to(page)).flatten());
    }

    pub fn set_page_size(&self, size: usize) {
        self.dispatch(self.state.try_update(|c| c.set_page_size(size)).flatten());
    }

    // ---- derived signals for the view ----

    pub fn items(&self) -> Signal<Vec<R::Item>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.items().to_vec()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.error_message()))
    }

    pub fn page(&self) -> Signal<PageDescriptor> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.pagination().descriptor()))
    }

    pub fn active_filters(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.active_filter_count()))
    }

    pub fn filters_dirty(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.filters_dirty()))
    }

    /// Pending (not yet applied) filter value
    pub fn filter_value(
        &self,
        get: impl Fn(&R::Filters) -> String + Send + Sync + 'static,
    ) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|c| get(c.pending_filters())))
    }

    pub fn filter_setter(
        &self,
        set: impl Fn(&mut R::Filters, String) + Send + Sync + 'static,
    ) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| this.edit_filters(|f| set(f, value)))
    }

    pub fn filter_error(&self, field: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.filter_errors().get(field).map(str::to_string)))
    }
}

impl<R: ExportableResource> ListHandle<R> {
    pub fn export(&self) {
        let state = self.state;
        let client = self.client();
        let toaster = self.toaster;
        spawn_local(async move {
            let _ = export_applied(&state, &client, &toaster).await;
        });
    }
}

/// List plus create/edit modal and delete confirmation.
pub struct CrudHandle<R: EditableResource> {
    pub list: ListHandle<R>,
    pub modal: RwSignal<ModalController<R>>,
    pub confirm: RwSignal<DeleteConfirmation<R>>,
}

impl<R: EditableResource> Clone for CrudHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: EditableResource> Copy for CrudHandle<R> {}

impl<R: EditableResource> CrudHandle<R> {
    pub fn new(config: &ClientConfig, toaster: Toaster) -> Self {
        Self {
            list: ListHandle::new(config, toaster),
            modal: RwSignal::new(ModalController::new()),
            confirm: RwSignal::new(DeleteConfirmation::new()),
        }
    }

    pub fn open_create(&self) {
        self.modal.update(|m| {
            m.open_create();
        });
    }

    pub fn open_edit(&self, id: R::Id) {
        let modal = self.modal;
        let client = self.list.client();
        let toaster = self.list.toaster();
        spawn_local(async move {
            open_edit(&modal, &client, id, &toaster).await;
        });
    }

    pub fn edit_input(&self, f: impl FnOnce(&mut R::Input)) {
        self.modal.update(|m| m.edit_input(f));
    }

    pub fn close_modal(&self) {
        self.modal.update(|m| {
            m.close();
        });
    }

    pub fn submit(&self) {
        let modal = self.modal;
        let list = self.list.state;
        let client = self.list.client();
        let toaster = self.list.toaster();
        spawn_local(async move {
            submit_modal(&modal, &list, &client, &toaster).await;
        });
    }

    pub fn submitting(&self) -> Signal<bool> {
        let modal = self.modal;
        Signal::derive(move || modal.with(|m| m.is_submitting()))
    }

    /// Current form value of one field
    pub fn input_value(
        &self,
        get: impl Fn(&R::Input) -> String + Send + Sync + 'static,
    ) -> Signal<String> {
        let modal = self.modal;
        Signal::derive(move || modal.with(|m| m.input().map(&get).unwrap_or_default()))
    }

    pub fn input_setter(
        &self,
        set: impl Fn(&mut R::Input, String) + Send + Sync + 'static,
    ) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| this.edit_input(|i| set(i, value)))
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let modal = self.modal;
        Signal::derive(move || modal.with(|m| m.field_error(field)))
    }

    pub fn request_delete(&self, item: &R::Item) {
        self.confirm.update(|d| d.request(item));
    }

    pub fn cancel_delete(&self) {
        self.confirm.update(|d| d.cancel());
    }

    pub fn confirm_delete(&self) {
        let confirm = self.confirm;
        let list = self.list.state;
        let client = self.list.client();
        let toaster = self.list.toaster();
        spawn_local(async move {
            delete_confirmed(&confirm, &list, &client, &toaster).await;
        });
    }
}

/// How many rows a select of another resource loads.
pub const OPTIONS_LIMIT: usize = 500;

/// `(value, label)` pairs of another resource for a select.
/// A failed load leaves the select empty.
pub fn load_options<R: Resource>(
    config: &ClientConfig,
    to_option: fn(&R::Item) -> (String, String),
) -> RwSignal<Vec<(String, String)>> {
    let options = RwSignal::new(Vec::new());
    reload_options::<R>(options, config, to_option);
    options
}

/// Refetches the options, e.g. after records were added on the same page.
pub fn reload_options<R: Resource>(
    options: RwSignal<Vec<(String, String)>>,
    config: &ClientConfig,
    to_option: fn(&R::Item) -> (String, String),
) {
    let client = HttpCollection::<R>::new(config.api_base.clone());
    spawn_local(async move {
        match fetch_options::<R, _>(&client, OPTIONS_LIMIT, to_option).await {
            Ok(loaded) => {
                let _ = options.try_set(loaded);
            }
            Err(failure) => log::warn!("{}: cannot load options: {}", R::PATH, failure),
        }
    });
}

/// `Option<String>` field as input text.
pub fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Input text back into an optional field; blank means "not set".
pub fn text_opt(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
