//! PostgreSQL persistence implementations.

mod pg_redirect_repository;

pub use pg_redirect_repository::PgRedirectRepository;
