use contracts::shared::query::ListFilters;
use contracts::shared::validation::FieldErrors;

/// Two-phase filter values.
///
/// `pending` follows the inputs on every keystroke; only `applied` drives
/// fetches, and it changes only on `apply` or `clear`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<F: ListFilters> {
    pending: F,
    applied: F,
    errors: FieldErrors,
}

impl<F: ListFilters> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            pending: F::default(),
            applied: F::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl<F: ListFilters> FilterState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &F {
        &self.pending
    }

    pub fn applied(&self) -> &F {
        &self.applied
    }

    /// Errors from the last rejected `apply`
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Mutates the pending set only.
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.pending);
    }

    /// Pending differs from what is in effect.
    pub fn is_dirty(&self) -> bool {
        self.pending.normalized() != self.applied
    }

    pub fn active_count(&self) -> usize {
        self.applied.active_count()
    }

    /// Commits the pending set. On validation failure `applied` is untouched.
    ///
    /// Returns whether the applied set changed.
    pub fn apply(&mut self) -> Result<bool, FieldErrors> {
        let candidate = self.pending.normalized();
        if let Err(errors) = candidate.validate() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = FieldErrors::new();
        let changed = candidate != self.applied;
        self.applied = candidate;
        Ok(changed)
    }

    /// Resets both sets. Returns whether the applied set changed.
    pub fn clear(&mut self) -> bool {
        let changed = self.applied != F::default();
        self.pending = F::default();
        self.applied = F::default();
        self.errors = FieldErrors::new();
        changed
    }
}
