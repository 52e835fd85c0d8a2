pub mod client;
pub mod dom;
mod handlers;
mod http;
pub mod render;
mod templates;

pub use client::RosterClient;
pub use http::*;
