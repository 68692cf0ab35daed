//! Arena-backed binary radix trie over the bits of an IP address.
//!
//! Nodes live in a single `Vec`, and a node's position in that vec *is* its
//! MaxMind "segment id" (§3) — there is no separate allocation or pointer
//! chasing. Children are a small tagged enum rather than a boxed option
//! tree, which keeps a 10⁷-node build to a handful of bytes per node
//! instead of a heap allocation per child link.

use crate::error::{Error, Result};

/// One child slot of a [`TrieNode`].
#[derive(Debug, Clone)]
pub enum Child<L> {
    /// No prefix descends this way.
    Empty,
    /// Points at another node in the same arena, by index.
    Internal(u32),
    /// A data-leaf reference. `origin` is populated only in debug mode, for
    /// pretty-printing (§9); it never affects serialization.
    Leaf { value: L, origin: Option<String> },
}

impl<L> Default for Child<L> {
    fn default() -> Self {
        Child::Empty
    }
}

/// A single trie node. Two per row in the emitted segment table.
#[derive(Debug)]
pub struct TrieNode<L> {
    pub lhs: Child<L>,
    pub rhs: Child<L>,
}

impl<L> Default for TrieNode<L> {
    fn default() -> Self {
        Self {
            lhs: Child::Empty,
            rhs: Child::Empty,
        }
    }
}

/// What was occupying a leaf slot before this insert overwrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite<L> {
    /// The slot was empty; nothing overwritten.
    New,
    /// The slot held a different leaf value (the common "overlapping input" case).
    ReplacedLeaf(L),
    /// The slot held an internal node, whose subtree is now orphaned.
    ReplacedInternal,
}

/// The trie itself: an arena of nodes plus the bit depth examined at the root.
pub struct Trie<L> {
    segments: Vec<TrieNode<L>>,
    /// Bit position of the root: 31 for IPv4, 127 for IPv6 (§3).
    seek_depth: u8,
    debug: bool,
}

impl<L: Copy + PartialEq> Trie<L> {
    /// Create an empty trie with the given root bit depth.
    pub fn new(seek_depth: u8, debug: bool) -> Self {
        Self {
            segments: vec![TrieNode::default()],
            seek_depth,
            debug,
        }
    }

    /// Pre-allocate space for an expected number of internal nodes.
    pub fn with_capacity(seek_depth: u8, debug: bool, capacity: usize) -> Self {
        let mut segments = Vec::with_capacity(capacity.max(1));
        segments.push(TrieNode::default());
        Self {
            segments,
            seek_depth,
            debug,
        }
    }

    /// Number of nodes currently in the arena (the root counts as one).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[TrieNode<L>] {
        &self.segments
    }

    /// Insert a prefix (`address`, MSB-first, `prefix_len` significant bits)
    /// with the given leaf value.
    ///
    /// `address` is always a `u128`; IPv4 callers left-pad by using the
    /// low 32 bits and a `seek_depth` of 31, matching the reference's bit
    /// numbering.
    pub fn insert(
        &mut self,
        address: u128,
        prefix_len: u8,
        value: L,
        origin: impl FnOnce() -> String,
    ) -> Result<Overwrite<L>> {
        let seek_depth = self.seek_depth as i32;
        let mut node_idx = 0usize;

        // First `prefix_len - 1` bits walk internal nodes.
        let last_internal_depth = seek_depth - (prefix_len as i32 - 2);
        let mut d = seek_depth;
        while d >= last_internal_depth {
            let bit = (address >> d) & 1 == 1;
            let child = if bit {
                &mut self.segments[node_idx].rhs
            } else {
                &mut self.segments[node_idx].lhs
            };

            match child {
                Child::Internal(idx) => node_idx = *idx as usize,
                Child::Empty => {
                    let new_idx = self.segments.len() as u32;
                    *child = Child::Internal(new_idx);
                    self.segments.push(TrieNode::default());
                    node_idx = new_idx as usize;
                }
                Child::Leaf { .. } => {
                    return Err(Error::ConflictingPrefix {
                        prefix: origin(),
                    });
                }
            }
            d -= 1;
        }

        let final_bit = (address >> (seek_depth - (prefix_len as i32 - 1))) & 1 == 1;
        let slot = if final_bit {
            &mut self.segments[node_idx].rhs
        } else {
            &mut self.segments[node_idx].lhs
        };

        let outcome = match slot {
            Child::Empty => Overwrite::New,
            Child::Internal(_) => Overwrite::ReplacedInternal,
            Child::Leaf { value, .. } => Overwrite::ReplacedLeaf(*value),
        };

        let origin_label = if self.debug { Some(origin()) } else { None };
        *slot = Child::Leaf {
            value,
            origin: origin_label,
        };

        Ok(outcome)
    }

    /// Pretty-print the trie, one line per segment, mirroring the
    /// reference's `dump()`. Implementation affordance only; never touches
    /// serialization.
    pub fn dump(&self) -> String
    where
        L: std::fmt::Debug,
    {
        let mut out = String::new();
        for (idx, node) in self.segments.iter().enumerate() {
            out.push_str(&format!(
                "{idx} [{}, {}]\n",
                Self::dump_child(&node.lhs),
                Self::dump_child(&node.rhs)
            ));
        }
        out
    }

    fn dump_child(child: &Child<L>) -> String
    where
        L: std::fmt::Debug,
    {
        match child {
            Child::Empty => "--".to_string(),
            Child::Internal(idx) => idx.to_string(),
            Child::Leaf { value, origin } => match origin {
                Some(o) => format!("{value:?} ({o})"),
                None => format!("{value:?}"),
            },
        }
    }
}
