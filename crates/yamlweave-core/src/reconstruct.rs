//! Reversing the substitution after foreign parsing.

use std::collections::{HashMap, HashSet};

use yamlweave_yaml::YamlValue;

use crate::linearize::Descriptor;
use crate::node::{InterpolatedString, MappingEntry, MappingKey, Node};
use crate::partition::{split_placeholders, Partition};
use crate::{Error, Result};

/// Walk a parsed tree and splice expressions back over their placeholders.
///
/// Every string leaf is classified as exactly one placeholder token (whole
/// value becomes the expression), a string containing tokens mixed with
/// literal text (becomes an [`InterpolatedString`]), or an ordinary string
/// (left unchanged). Mapping keys that stop being plain strings flip their
/// entry to a computed key. All other value kinds map across directly.
///
/// Traversal is exhaustive over every reachable leaf; the order does not
/// matter, since each leaf is rewritten independently.
pub fn reconstruct<E: Clone>(
    value: YamlValue,
    descriptors: &HashMap<String, Descriptor<E>>,
) -> Result<Node<E>> {
    let mut used = HashSet::new();
    let node = walk(value, descriptors, &mut used)?;

    if used.len() < descriptors.len() {
        // A placeholder the parser swallowed (inside a comment, say) drops
        // its expression from the output.
        let missing: Vec<&str> = descriptors
            .keys()
            .map(String::as_str)
            .filter(|token| !used.contains(token))
            .collect();
        tracing::debug!(?missing, "descriptors never surfaced in the parsed tree");
    }
    Ok(node)
}

fn walk<'d, E: Clone>(
    value: YamlValue,
    descriptors: &'d HashMap<String, Descriptor<E>>,
    used: &mut HashSet<&'d str>,
) -> Result<Node<E>> {
    match value {
        YamlValue::Null => Ok(Node::Null),
        YamlValue::Bool(b) => Ok(Node::Bool(b)),
        YamlValue::Integer(i) => Ok(Node::Integer(i)),
        YamlValue::Real(r) => Ok(Node::Real(r)),
        YamlValue::String(s) => rebuild_string(&s, descriptors, used),
        YamlValue::Sequence(items) => {
            let items = items
                .into_iter()
                .map(|item| walk(item, descriptors, used))
                .collect::<Result<Vec<_>>>()?;
            Ok(Node::Sequence(items))
        }
        YamlValue::Mapping(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                let key = match rebuild_string(&key, descriptors, used)? {
                    Node::String(s) => MappingKey::Static(s),
                    node => MappingKey::Computed(node),
                };
                out.push(MappingEntry {
                    key,
                    value: walk(value, descriptors, used)?,
                });
            }
            Ok(Node::Mapping(out))
        }
    }
}

/// Rewrite one string leaf.
fn rebuild_string<'d, E: Clone>(
    s: &str,
    descriptors: &'d HashMap<String, Descriptor<E>>,
    used: &mut HashSet<&'d str>,
) -> Result<Node<E>> {
    // Exact match: the whole value is one expression, no string wrapping.
    if let Some(descriptor) = descriptors.get(s) {
        used.insert(descriptor.token.as_str());
        return Ok(Node::Expression(descriptor.expression.clone()));
    }

    let partitions = split_placeholders(s);

    // Token-shaped partitions with a live descriptor get substituted;
    // anything else stays literal text. Resolve up front so literal trimming
    // can consult its neighbors' padding flags.
    let resolved: Vec<Option<&Descriptor<E>>> = partitions
        .iter()
        .map(|partition| match partition {
            Partition::Token(token) => descriptors.get(*token),
            Partition::Literal(_) => None,
        })
        .collect();

    if !resolved.iter().any(Option::is_some) {
        return Ok(Node::String(s.to_owned()));
    }

    let mut fragments = Vec::new();
    let mut expressions = Vec::new();
    let mut current = String::new();

    for (idx, partition) in partitions.iter().enumerate() {
        match resolved[idx] {
            Some(descriptor) => {
                used.insert(descriptor.token.as_str());
                fragments.push(std::mem::take(&mut current));
                expressions.push(descriptor.expression.clone());
            }
            None => {
                let mut text = partition.text();
                // Only synthetic padding is removed; whitespace that existed
                // in the user's template survives byte-identically.
                if let Some(next) = resolved.get(idx + 1).copied().flatten() {
                    if !next.pre_space_preexisting {
                        text = text.strip_suffix(' ').unwrap_or(text);
                    }
                }
                if idx > 0 {
                    if let Some(prev) = resolved[idx - 1] {
                        if !prev.post_space_preexisting {
                            text = text.strip_prefix(' ').unwrap_or(text);
                        }
                    }
                }
                current.push_str(text);
            }
        }
    }
    fragments.push(current);

    if fragments.len() != expressions.len() + 1 {
        return Err(Error::InvariantViolation {
            fragments: fragments.len(),
            expressions: expressions.len(),
        });
    }
    Ok(Node::Interpolated(InterpolatedString {
        fragments,
        expressions,
    }))
}
