//! Single test binary entry point.
//!
//! All integration-level tests compile into one binary to keep link time
//! down. Structure:
//! - helpers: scene/session builders and store test doubles
//! - unit: single-component tests
//! - integration: multi-component workflow tests

mod helpers;
mod integration;
mod unit;
