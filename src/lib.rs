//! Library entry for Elegance Names exposing core logic for the binary and integration tests.

pub mod api;
pub mod app;
pub mod args;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
