//! Whole-session workflows driven through screen-space input.

mod editor_workflow_tests;
mod save_load_tests;
