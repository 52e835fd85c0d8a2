mod event_handler;
mod helpers;
mod page_handler;

pub use event_handler::{click, submit_new_player};
pub(crate) use helpers::*;
pub use page_handler::page;
