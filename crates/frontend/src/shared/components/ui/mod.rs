pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;
