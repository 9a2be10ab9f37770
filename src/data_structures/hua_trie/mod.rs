// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hua Trie Implementation
//!
//! This module provides a prefix tree holding a word dictionary. It answers
//! exact membership queries and returns the shortest stored words that extend
//! a given prefix.
//!
//! # Key Features
//!
//! * Case-insensitive: every word and query is folded to lowercase
//! * Shared prefixes are stored once
//! * O(1) word count
//! * Breadth-first completion search, shortest words first
//!
//! # Ordering of completions
//!
//! Completions come out level by level below the prefix node, so the result
//! never lists a longer word before a shorter one. Within one length class,
//! children are visited in the order their edge character was first inserted
//! under the parent. When the requested count runs out part way through a
//! length class, the words that come earliest in that order are kept.
//!
//! # Concurrency
//!
//! `insert` takes `&mut self` and every query takes `&self`, so the borrow
//! checker enforces one writer or many readers. Callers that share a
//! dictionary across threads wrap it in their own lock.

mod node;

use std::collections::VecDeque;

pub use node::TrieNode;

/// Hua Trie is a case-insensitive word dictionary with prefix completion.
///
/// # Examples
///
/// ```
/// use huaolelo_lib::data_structures::HuaTrie;
///
/// let mut dictionary = HuaTrie::new();
/// assert!(dictionary.insert("Cat"));
/// assert!(dictionary.insert("car"));
/// assert!(!dictionary.insert("CAT"));
///
/// assert!(dictionary.is_word("cat"));
/// assert!(!dictionary.is_word("ca"));
/// assert_eq!(dictionary.predict_completions("ca", 2), vec!["cat", "car"]);
/// ```
#[derive(Debug, Default)]
pub struct HuaTrie {
    /// The root node of the trie (represents the empty string)
    root: TrieNode,

    /// Number of terminal nodes
    size: usize,
}

impl HuaTrie {
    /// Creates a new empty `HuaTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the dictionary.
    ///
    /// The word is folded to lowercase first. Existing nodes along the path are
    /// reused and only the missing suffix is created. The empty string marks the
    /// root itself as a word.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was added, `false` if it was already present.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = normalize(word.as_ref());

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.insert_child(c);
        }

        if node.is_terminal() {
            return false;
        }

        node.set_terminal(true);
        self.size += 1;
        true
    }

    /// Returns the number of distinct words in the dictionary.
    ///
    /// This is a counter, not a traversal, and is unrelated to the node count.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Checks whether `s` is a stored word.
    ///
    /// A string that exists only as a prefix of longer words is not a word.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to check (any case).
    pub fn is_word<S>(&self, s: S) -> bool
    where
        S: AsRef<str>,
    {
        let s = normalize(s.as_ref());
        self.find_node(&s).is_some_and(TrieNode::is_terminal)
    }

    /// Returns up to `num_completions` stored words starting with `prefix`,
    /// shortest first.
    ///
    /// If the prefix is itself a word it is the first result. Every length class
    /// shorter than the longest returned word is returned in full; words from the
    /// last length class are taken in traversal order until the count is met.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The stem to complete (any case).
    /// * `num_completions` - Maximum number of results.
    ///
    /// # Returns
    ///
    /// The completions in non-decreasing length order. Empty if the prefix is
    /// not in the trie or `num_completions` is zero.
    pub fn predict_completions<P>(&self, prefix: P, num_completions: usize) -> Vec<String>
    where
        P: AsRef<str>,
    {
        if num_completions == 0 {
            return Vec::new();
        }

        let prefix = normalize(prefix.as_ref());
        let stem = match self.find_node(&prefix) {
            Some(node) => node,
            None => return Vec::new(),
        };

        let mut completions = Vec::with_capacity(num_completions.min(self.size));

        // A tree has one path to every node, so no visited set is needed
        let mut queue = VecDeque::from([stem]);
        while let Some(node) = queue.pop_front() {
            if node.is_terminal() {
                completions.push(node.text().to_owned());
                if completions.len() == num_completions {
                    break;
                }
            }
            queue.extend(node.children());
        }

        completions
    }

    /// Returns every stored word in pre-order.
    ///
    /// A word is yielded before any word it is a prefix of, and siblings follow
    /// insertion order.
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![&self.root],
        }
    }

    /// Returns the number of nodes in the trie, including the root.
    ///
    /// This walks the whole trie, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Returns the root node for read-only navigation.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follows `s` from the root one character at a time.
    ///
    /// Stops at the first missing edge. The empty string resolves to the root.
    fn find_node(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in s.chars() {
            node = node.child_for(c)?;
        }

        debug_assert_eq!(node.text(), s);
        Some(node)
    }
}

impl<S> Extend<S> for HuaTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for HuaTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}

/// Pre-order iterator over the words of a [`HuaTrie`].
///
/// Created by [`HuaTrie::words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reversed so the first-inserted child is popped first
            self.stack.extend(node.children().rev());
            if node.is_terminal() {
                return Some(node.text());
            }
        }
        None
    }
}

fn normalize(s: &str) -> String {
    s.to_lowercase()
}
