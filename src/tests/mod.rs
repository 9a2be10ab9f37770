//! Test modules for Huaolelo.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Unit tests for configuration and errors
//! - Property-based tests for the dictionary using proptest
//! - Table-driven tests using test-case
//! - Test fixtures and utilities

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
