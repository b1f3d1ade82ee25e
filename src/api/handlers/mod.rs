//! HTTP request handlers.

mod admin;
mod health;
mod redirect;
mod shorten;

pub use admin::{admin_info_handler, deactivate_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
