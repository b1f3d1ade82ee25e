//! Request and response DTOs.

pub mod health;
pub mod redirect_info;
pub mod shorten;
