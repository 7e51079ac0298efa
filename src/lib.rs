//! Prodnames
pub mod core;
pub mod data;
pub mod logging;
pub mod naming;
