// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Hua Trie.
//!
//! This module provides the `TrieNode` structure used by the Hua Trie.
//! Each node owns its children outright; there is no shared or aliased
//! structure below the root.

use std::fmt;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// A node in the Hua Trie.
///
/// Each node represents one character position on a path from the root and
/// carries the full text spelled by that path. Terminal nodes mark complete
/// dictionary words.
///
/// Dropping and formatting never recurse, so paths of any depth are safe.
#[derive(Default)]
pub struct TrieNode {
    /// Character on the edge from the parent (`None` for the root)
    character: Option<char>,

    /// Text from the root to this node
    text: String,

    /// Whether `text` is a stored word
    is_terminal: bool,

    /// Owned children in the order their edge character was first inserted
    children: Vec<TrieNode>,

    /// Position of each child in `children`, keyed by edge character
    index: HashMap<char, usize, FnvBuildHasher>,
}

impl TrieNode {
    /// Creates a root node: no character, empty text, not terminal.
    pub fn root() -> Self {
        Self::default()
    }

    fn child_of(parent_text: &str, c: char) -> Self {
        let mut text = String::with_capacity(parent_text.len() + c.len_utf8());
        text.push_str(parent_text);
        text.push(c);

        Self {
            character: Some(c),
            text,
            is_terminal: false,
            children: Vec::new(),
            index: HashMap::default(),
        }
    }

    /// Returns the character on the edge leading into this node.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Returns the text spelled from the root to this node.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether this node ends a stored word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn set_terminal(&mut self, is_terminal: bool) {
        self.is_terminal = is_terminal;
    }

    /// Returns the child reached by `c`, if one exists.
    pub fn child_for(&self, c: char) -> Option<&TrieNode> {
        self.index.get(&c).and_then(|&slot| self.children.get(slot))
    }

    /// Returns the child for `c`, creating it first if it does not exist.
    ///
    /// An existing child is never replaced, so calling this twice with the
    /// same character yields the same node.
    pub fn insert_child(&mut self, c: char) -> &mut TrieNode {
        let existing = self.index.get(&c).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                let slot = self.children.len();
                self.children.push(TrieNode::child_of(&self.text, c));
                self.index.insert(c, slot);
                slot
            }
        };

        &mut self.children[slot]
    }

    /// Returns the characters that have a child, in insertion order.
    pub fn valid_next_characters(&self) -> impl Iterator<Item = char> + '_ {
        self.children.iter().filter_map(|child| child.character)
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode> + '_ {
        self.children.iter()
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach every descendant so each node is dropped with no children
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("character", &self.character)
            .field("text", &self.text)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.valid_next_characters().collect::<String>())
            .finish()
    }
}
