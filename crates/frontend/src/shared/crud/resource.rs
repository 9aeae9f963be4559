use contracts::shared::query::ListFilters;
use contracts::shared::validation::FormInput;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// A named backend collection (warehouses, categories, ...).
///
/// Implemented by zero-sized marker types; everything the generic controllers
/// need to know about a resource is carried by the associated types.
pub trait Resource: 'static {
    type Id: Clone + PartialEq + Display + Debug + Send + Sync + 'static;
    type Item: DeserializeOwned + Clone + PartialEq + Debug + Send + Sync + 'static;
    type Filters: ListFilters + Send + Sync + 'static;

    /// Collection endpoint, e.g. `/api/warehouses`
    const PATH: &'static str;

    /// Human readable name of one record, used in messages
    const TITLE: &'static str;

    fn id_of(item: &Self::Item) -> Self::Id;

    /// Short label shown in confirmations and toasts
    fn label_of(item: &Self::Item) -> String;
}

/// Resource that supports create / update / delete.
pub trait EditableResource: Resource {
    type Input: Serialize + FormInput + Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    /// Form values for editing an existing record
    fn input_from(item: &Self::Item) -> Self::Input;
}

/// Resource with a server-side delimited-text export.
pub trait ExportableResource: Resource {
    const EXPORT_PATH: &'static str;

    /// Downloaded file name prefix (timestamp and extension are appended)
    const FILE_PREFIX: &'static str;
}
