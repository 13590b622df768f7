//! Collision-free placeholder token allocation.

use std::collections::HashSet;

use crate::{Error, Result};

/// The reserved namespace for generated placeholder tokens.
///
/// Tokens are this prefix followed by decimal digits. The prefix is chosen so
/// a token reads as an ordinary plain scalar to the YAML grammar and is never
/// something a user would type; the allocator still defends against
/// collisions with scope identifiers and with text already accumulated.
pub const RESERVED_PREFIX: &str = "__yamlweave_placeholder__";

/// Identifiers already bound in the host scope around a template occurrence.
pub type ScopeIdentifiers = HashSet<String>;

/// Allocates placeholder tokens that collide with nothing in sight.
///
/// The allocator owns its counter; one allocator is threaded by `&mut`
/// through all occurrences of a processing pass so the counter stays
/// monotone across them. Resetting it mid-pass would void the uniqueness
/// guarantee, since candidates are only checked against what has been seen
/// so far.
#[derive(Debug)]
pub struct PlaceholderAllocator {
    next: u64,
}

impl PlaceholderAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Produce a token absent from `scope` and not a substring of `pending`.
    ///
    /// The counter is unbounded for practical purposes; if it ever does run
    /// out this reports [`Error::AllocatorExhausted`] rather than looping
    /// forever.
    pub fn allocate(&mut self, scope: &ScopeIdentifiers, pending: &str) -> Result<String> {
        loop {
            let candidate = format!("{RESERVED_PREFIX}{}", self.next);
            self.next = self
                .next
                .checked_add(1)
                .ok_or(Error::AllocatorExhausted)?;
            if !scope.contains(&candidate) && !pending.contains(&candidate) {
                return Ok(candidate);
            }
        }
    }
}

impl Default for PlaceholderAllocator {
    fn default() -> Self {
        Self::new()
    }
}
