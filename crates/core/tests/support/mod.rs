//! Shared test support for skyledger-core integration tests

pub mod repositories;
