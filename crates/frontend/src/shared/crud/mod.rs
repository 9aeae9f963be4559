//! Generic list / filter / CRUD-modal controller shared by every resource page.
//!
//! The state machines (`filter_state`, `pagination`, `list_controller`,
//! `modal_controller`) are plain Rust and know nothing about Leptos. `driver`
//! runs the async fetch / submit / delete cycles against a collection client,
//! and `hooks` binds all of it to signals for the pages.

pub mod driver;
pub mod filter_state;
pub mod hooks;
pub mod list_controller;
pub mod modal_controller;
pub mod pagination;
pub mod remote;
pub mod resource;

#[cfg(test)]
pub(crate) mod testing;
