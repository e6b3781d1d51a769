pub mod api;
pub mod config;
pub mod context;
pub mod demo;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod models;
pub mod notify;
pub mod retry;
pub mod storage;
pub mod view;
