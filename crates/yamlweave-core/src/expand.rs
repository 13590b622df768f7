//! The expansion pipeline for one template occurrence.

use yamlweave_yaml::parse;

use crate::linearize::linearize;
use crate::node::Node;
use crate::placeholder::{PlaceholderAllocator, ScopeIdentifiers};
use crate::reconstruct::reconstruct;
use crate::template::Template;
use crate::Result;

/// Expand one template occurrence into a reconstructed tree.
///
/// Data flows one way: template → linearized text → parsed tree →
/// reconstructed tree. The whole occurrence is processed synchronously; any
/// failure surfaces immediately and nothing is emitted. The allocator is
/// shared across occurrences of the same pass so tokens never repeat within
/// it.
pub fn expand<E: Clone>(
    template: Template<E>,
    scope: &ScopeIdentifiers,
    allocator: &mut PlaceholderAllocator,
) -> Result<Node<E>> {
    tracing::debug!(
        scope_identifiers = scope.len(),
        slots = template.slot_count(),
        "expanding template occurrence"
    );
    let linearized = linearize(template, scope, allocator)?;
    let value = parse(&linearized.text)?;
    reconstruct(value, &linearized.descriptors)
}
