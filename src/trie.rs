// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix tree over the vocabulary.
//!
//! One node per character position, children kept in a `BTreeMap` so that a
//! depth-first walk visits terms in lexicographic order. Nodes are created on
//! first insertion of a path and never removed.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TERMINAL_SET**: the set of terminal paths is exactly the set of terms
//!    ever inserted
//! 2. **LEXICOGRAPHIC_WALK**: `completions` yields terms in ascending order,
//!    each exactly once
//! 3. **PREFIX_BOUNDED**: every term yielded by `completions(p)` starts with `p`
//!
//! # Traversal
//!
//! Enumeration, cloning and dropping use an explicit stack rather than
//! recursion, so very long terms cannot exhaust the call stack. `Debug` prints
//! only the counters for the same reason. `Completions` is lazy: callers that only want
//! the first few suggestions never materialize the rest.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::iter::FusedIterator;

use crate::types::Term;

#[derive(Default)]
struct TrieNode {
    terminal: bool,
    children: BTreeMap<char, TrieNode>,
}

/// The set of distinct terms ever ingested, searchable by prefix.
pub struct PrefixIndex {
    root: TrieNode,
    terms: usize,
    nodes: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// An empty index. The root represents the empty prefix.
    pub fn new() -> Self {
        PrefixIndex {
            root: TrieNode::default(),
            terms: 0,
            nodes: 1,
        }
    }

    /// Add a term, creating nodes along its path as needed.
    ///
    /// Idempotent. Returns `true` if the term was not present before.
    pub fn insert(&mut self, term: &Term) -> bool {
        let mut created = 0;
        let mut node = &mut self.root;
        for c in term.as_str().chars() {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
        }
        self.nodes += created;

        if node.terminal {
            return false;
        }
        // INVARIANT: TERMINAL_SET
        node.terminal = true;
        self.terms += 1;
        true
    }

    /// All stored terms starting with `prefix`, in lexicographic order.
    ///
    /// An unseen prefix gives an empty vector; the empty prefix gives the
    /// whole vocabulary. `prefix` is matched as-is, so pass it through
    /// `normalize` first.
    pub fn enumerate(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix).collect()
    }

    /// Lazy form of [`enumerate`](Self::enumerate): same terms, same order.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        let stack = match self.find_node(prefix) {
            Some(node) => vec![(node, prefix.to_string())],
            None => Vec::new(),
        };
        Completions { stack }
    }

    /// Whether `term` was inserted (not merely a prefix of something that was).
    pub fn contains(&self, term: &str) -> bool {
        self.find_node(term).is_some_and(|node| node.terminal)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("terms", &self.terms)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

/// A node being copied: its source children still to visit, and the copies
/// finished so far.
struct CloneFrame<'a> {
    edge: char,
    terminal: bool,
    pending: btree_map::Iter<'a, char, TrieNode>,
    children: BTreeMap<char, TrieNode>,
}

impl<'a> CloneFrame<'a> {
    fn new(edge: char, source: &'a TrieNode) -> Self {
        CloneFrame {
            edge,
            terminal: source.terminal,
            pending: source.children.iter(),
            children: BTreeMap::new(),
        }
    }
}

// Post-order copy: a node is assembled once all of its children are.
impl Clone for PrefixIndex {
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new('\0', &self.root)];
        let mut root = None;

        while let Some(frame) = stack.last_mut() {
            if let Some((&edge, child)) = frame.pending.next() {
                stack.push(CloneFrame::new(edge, child));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let node = TrieNode {
                terminal: done.terminal,
                children: done.children,
            };
            match stack.last_mut() {
                Some(parent) => {
                    parent.children.insert(done.edge, node);
                }
                None => root = Some(node),
            }
        }

        PrefixIndex {
            root: root.unwrap_or_default(),
            terms: self.terms,
            nodes: self.nodes,
        }
    }
}

// Nested maps drop recursively; flatten first so depth is bounded by the heap.
impl Drop for PrefixIndex {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.root.children)
            .into_values()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Depth-first, pre-order walk below a prefix node.
///
/// Each stack entry carries the full path to its node. Children are pushed in
/// reverse key order so the smallest pops first; a node's own term is yielded
/// before any of its extensions.
#[derive(Clone)]
pub struct Completions<'a> {
    stack: Vec<(&'a TrieNode, String)>,
}

impl fmt::Debug for Completions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completions")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, path)) = self.stack.pop() {
            // INVARIANT: LEXICOGRAPHIC_WALK
            // Children pushed in reverse so the smallest edge is popped first
            for (c, child) in node.children.iter().rev() {
                let mut child_path = String::with_capacity(path.len() + c.len_utf8());
                child_path.push_str(&path);
                child_path.push(*c);
                self.stack.push((child, child_path));
            }
            if node.terminal {
                return Some(path);
            }
        }
        None
    }
}

impl FusedIterator for Completions<'_> {}
