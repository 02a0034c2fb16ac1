//! Services backing the API routes.

pub mod library;
