//! Single-component unit tests.

mod payload_tests;
mod selection_tests;
mod viewport_tests;
