//! Dioxus components for the DentalCRM sign-in page and dashboard shell.

pub mod components;

pub use components::*;
