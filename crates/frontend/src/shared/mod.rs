pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod modal;
pub mod notifications;
