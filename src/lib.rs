//! Funding Council - monthly performance review for a strategy campaign

pub mod core;
pub mod council;
