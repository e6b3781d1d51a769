//! The view controller and everything it renders.
//!
//! - [`pages`]: page ids and their header keys
//! - [`render`]: row, card and form fragments plus display formatting
//! - [`chart`]: in-place chart state
//! - [`forms`]: local validation of submitted forms
//! - [`commands`]: user intents
//! - [`controller`]: navigation, loaders and command handling

pub mod chart;
pub mod commands;
pub mod controller;
pub mod forms;
pub mod pages;
pub mod render;

pub use chart::{generate_series, Chart, ChartKind, Charts, Dataset, Period, Series};
pub use commands::Command;
pub use controller::{LoadTicket, ViewController};
pub use forms::FormData;
pub use pages::PageId;
