pub mod a101_warehouse;
pub mod a102_category;
pub mod a103_purchase_staff;
pub mod a104_customer;
