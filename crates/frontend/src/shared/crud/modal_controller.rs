use super::resource::{EditableResource, Resource};
use contracts::shared::failure::Failure;
use contracts::shared::validation::{FieldErrors, FormInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
}

/// Observable state of the create/edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    OpenCreate,
    OpenEdit,
    Submitting,
}

/// One open form. Dropped on close or successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession<R: EditableResource> {
    pub mode: ModalMode,
    pub subject: Option<R::Item>,
    pub input: R::Input,
    pub submitting: bool,
    pub field_errors: FieldErrors,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitTarget<Id> {
    Create,
    Update(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest<Id, I> {
    pub target: SubmitTarget<Id>,
    pub input: I,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision<Id, I> {
    /// Validation passed; call create/update with this request
    Dispatch(SubmitRequest<Id, I>),
    /// Closed, or a submit is already in flight
    Ignored,
    /// Client-side validation failed; nothing is sent
    Invalid(FieldErrors),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Saved(T),
    Failed(Failure),
    Ignored,
    Invalid(FieldErrors),
}

/// Create/edit modal for one resource.
///
/// `Closed -> OpenCreate | OpenEdit -> Submitting -> Closed` on success, or
/// back to the open state with the error visible on failure. The controller
/// never touches list rows; the host refreshes the list after `Saved`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalController<R: EditableResource> {
    session: Option<ModalSession<R>>,
}

impl<R: EditableResource> Default for ModalController<R> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<R: EditableResource> ModalController<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&ModalSession<R>> {
        self.session.as_ref()
    }

    pub fn state(&self) -> ModalState {
        match &self.session {
            None => ModalState::Closed,
            Some(s) if s.submitting => ModalState::Submitting,
            Some(s) if s.mode == ModalMode::Create => ModalState::OpenCreate,
            Some(_) => ModalState::OpenEdit,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.submitting)
    }

    pub fn mode(&self) -> Option<ModalMode> {
        self.session.as_ref().map(|s| s.mode)
    }

    pub fn input(&self) -> Option<&R::Input> {
        self.session.as_ref().map(|s| &s.input)
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.session
            .as_ref()
            .and_then(|s| s.field_errors.get(field))
            .map(str::to_string)
    }

    pub fn error(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.error.clone())
    }

    /// Opens an empty form. Ignored while a submit is in flight.
    pub fn open_create(&mut self) -> bool {
        self.open(ModalMode::Create, None, R::Input::default())
    }

    /// Opens the form pre-filled from `item`.
    pub fn open_edit(&mut self, item: R::Item) -> bool {
        let input = R::input_from(&item);
        self.open(ModalMode::Edit, Some(item), input)
    }

    fn open(&mut self, mode: ModalMode, subject: Option<R::Item>, input: R::Input) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.session = Some(ModalSession {
            mode,
            subject,
            input,
            submitting: false,
            field_errors: FieldErrors::new(),
            error: None,
        });
        true
    }

    /// Edits form values; ignored while closed or submitting.
    pub fn edit_input(&mut self, f: impl FnOnce(&mut R::Input)) {
        if let Some(session) = self.session.as_mut().filter(|s| !s.submitting) {
            f(&mut session.input);
        }
    }

    /// Closes the form. Refused while a submit is in flight.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.session = None;
        true
    }

    /// Validates and, if valid, marks the session as submitting.
    pub fn begin_submit(&mut self) -> SubmitDecision<R::Id, R::Input> {
        let Some(session) = self.session.as_mut() else {
            return SubmitDecision::Ignored;
        };
        if session.submitting {
            return SubmitDecision::Ignored;
        }

        if let Err(errors) = session.input.validate() {
            session.field_errors = errors.clone();
            return SubmitDecision::Invalid(errors);
        }

        let target = match (&session.mode, &session.subject) {
            (ModalMode::Edit, Some(subject)) => SubmitTarget::Update(R::id_of(subject)),
            _ => SubmitTarget::Create,
        };
        session.submitting = true;
        session.error = None;
        session.field_errors = FieldErrors::new();
        SubmitDecision::Dispatch(SubmitRequest {
            target,
            input: session.input.clone(),
        })
    }

    /// Records the create/update result.
    pub fn finish_submit(&mut self, result: Result<R::Item, Failure>) -> SubmitOutcome<R::Item> {
        match result {
            Ok(item) => {
                self.session = None;
                SubmitOutcome::Saved(item)
            }
            Err(failure) => {
                if let Some(session) = self.session.as_mut() {
                    session.submitting = false;
                    session.field_errors = failure.field_errors().cloned().unwrap_or_default();
                    session.error = Some(failure.to_string());
                }
                SubmitOutcome::Failed(failure)
            }
        }
    }
}

/// Styled delete confirmation state: which record is about to be deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteConfirmation<R: Resource> {
    target: Option<(R::Id, String)>,
    in_flight: bool,
}

impl<R: Resource> Default for DeleteConfirmation<R> {
    fn default() -> Self {
        Self {
            target: None,
            in_flight: false,
        }
    }
}

impl<R: Resource> DeleteConfirmation<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of the record awaiting confirmation
    pub fn label(&self) -> Option<String> {
        self.target.as_ref().map(|(_, label)| label.clone())
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn request(&mut self, item: &R::Item) {
        if !self.in_flight {
            self.target = Some((R::id_of(item), R::label_of(item)));
        }
    }

    pub fn cancel(&mut self) {
        if !self.in_flight {
            self.target = None;
        }
    }

    /// Confirms; returns the id to delete unless a delete is already running.
    pub fn confirm(&mut self) -> Option<(R::Id, String)> {
        if self.in_flight {
            return None;
        }
        let target = self.target.clone()?;
        self.in_flight = true;
        Some(target)
    }

    /// Closes the confirmation whatever the outcome; a failed delete is not retried.
    pub fn finish(&mut self) {
        self.target = None;
        self.in_flight = false;
    }
}
