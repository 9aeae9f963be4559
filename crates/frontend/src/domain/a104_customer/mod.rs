pub mod ui;

use crate::shared::crud::resource::{EditableResource, Resource};
use contracts::domain::a104_customer::aggregate::{
    Customer, CustomerDto, CustomerFilters, CustomerId,
};

/// `/api/customers`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customers;

impl Resource for Customers {
    type Id = CustomerId;
    type Item = Customer;
    type Filters = CustomerFilters;

    const PATH: &'static str = "/api/customers";
    const TITLE: &'static str = "Клиент";

    fn id_of(item: &Customer) -> CustomerId {
        item.id
    }

    fn label_of(item: &Customer) -> String {
        item.name.clone()
    }
}

impl EditableResource for Customers {
    type Input = CustomerDto;

    fn input_from(item: &Customer) -> CustomerDto {
        CustomerDto::from(item)
    }
}
