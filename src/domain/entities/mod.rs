//! Domain entities.

mod redirect;

pub use redirect::{NewRedirect, RedirectRecord};
