//! Pure domain utilities

pub mod route;
