pub mod ui;

use crate::shared::crud::resource::{EditableResource, Resource};
use contracts::domain::a101_warehouse::aggregate::{
    Warehouse, WarehouseDto, WarehouseFilters, WarehouseId,
};

/// `/api/warehouses`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warehouses;

impl Resource for Warehouses {
    type Id = WarehouseId;
    type Item = Warehouse;
    type Filters = WarehouseFilters;

    const PATH: &'static str = "/api/warehouses";
    const TITLE: &'static str = "Склад";

    fn id_of(item: &Warehouse) -> WarehouseId {
        item.id
    }

    fn label_of(item: &Warehouse) -> String {
        format!("{} ({})", item.name, item.code)
    }
}

impl EditableResource for Warehouses {
    type Input = WarehouseDto;

    fn input_from(item: &Warehouse) -> WarehouseDto {
        WarehouseDto::from(item)
    }
}

/// Select option for pickers of other resources.
pub fn warehouse_option(item: &Warehouse) -> (String, String) {
    (item.id.to_string(), format!("{} ({})", item.name, item.code))
}
