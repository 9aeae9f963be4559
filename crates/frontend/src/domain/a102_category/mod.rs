pub mod ui;

use crate::shared::crud::resource::{EditableResource, Resource};
use contracts::domain::a102_category::aggregate::{
    Category, CategoryDto, CategoryFilters, CategoryId,
};

/// `/api/categories`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories;

impl Resource for Categories {
    type Id = CategoryId;
    type Item = Category;
    type Filters = CategoryFilters;

    const PATH: &'static str = "/api/categories";
    const TITLE: &'static str = "Категория";

    fn id_of(item: &Category) -> CategoryId {
        item.id
    }

    fn label_of(item: &Category) -> String {
        item.name.clone()
    }
}

impl EditableResource for Categories {
    type Input = CategoryDto;

    fn input_from(item: &Category) -> CategoryDto {
        CategoryDto::from(item)
    }
}

/// Select option for pickers of other resources.
pub fn category_option(item: &Category) -> (String, String) {
    (item.id.to_string(), item.name.clone())
}
