pub mod api;
pub mod config;
pub mod test_utils;

pub use api::{HttpRosterApi, RosterApi};
