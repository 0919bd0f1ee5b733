//!
//! The benchmark history data model.
//!

pub mod history;
pub mod metric;
