//! Data structures for Huaolelo.
//!
//! This module contains the dictionary index used to answer membership and
//! completion queries. All implementations follow the project requirements:
//! - No unsafe code
//! - Exclusive ownership of every node, no shared mutable handles
//! - Deterministic, reproducible traversal order

pub mod hua_trie;

// Re-export common data structures
pub use hua_trie::{HuaTrie, TrieNode, Words};
