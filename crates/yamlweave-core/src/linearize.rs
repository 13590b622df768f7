//! Template linearization: one parseable text from segments and slots.

use std::collections::HashMap;

use crate::placeholder::{PlaceholderAllocator, ScopeIdentifiers};
use crate::template::Template;
use crate::Result;

/// Metadata linking one placeholder token to its originating expression.
///
/// The `*_space_preexisting` flags record whether the text around the
/// token's insertion point already carried whitespace. When they are false,
/// a single synthetic space was inserted on that side to keep the token
/// lexically isolated for the parser, and reconstruction removes exactly
/// that space again.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor<E> {
    pub token: String,
    pub expression: E,
    pub pre_space_preexisting: bool,
    pub post_space_preexisting: bool,
}

/// The result of linearizing one template occurrence.
#[derive(Debug)]
pub struct Linearized<E> {
    /// The parseable text, placeholders included.
    pub text: String,
    /// Descriptor table keyed by token. Lifetime: this occurrence only.
    pub descriptors: HashMap<String, Descriptor<E>>,
}

/// Linearize a template into parseable text, one placeholder per slot.
///
/// Slots are consumed in document order. Each placeholder is padded with a
/// space on any side where the surrounding text does not already end (or
/// begin) with whitespace, so a placeholder can never abut another token in
/// the generated text; the descriptor records which pads were synthetic.
pub fn linearize<E>(
    template: Template<E>,
    scope: &ScopeIdentifiers,
    allocator: &mut PlaceholderAllocator,
) -> Result<Linearized<E>> {
    let (segments, expressions) = template.into_parts();
    let mut segments = segments.into_iter();
    let mut text = segments
        .next()
        .expect("Template guarantees at least one segment");
    let mut descriptors = HashMap::with_capacity(expressions.len());

    for (segment, expression) in segments.zip(expressions) {
        let pre_space_preexisting = text.chars().next_back().is_some_and(char::is_whitespace);
        if !pre_space_preexisting {
            text.push(' ');
        }

        let token = allocator.allocate(scope, &text)?;
        text.push_str(&token);

        let post_space_preexisting = segment.chars().next().is_some_and(char::is_whitespace);
        if !post_space_preexisting {
            text.push(' ');
        }
        text.push_str(&segment);

        descriptors.insert(
            token.clone(),
            Descriptor {
                token,
                expression,
                pre_space_preexisting,
                post_space_preexisting,
            },
        );
    }

    tracing::debug!(text = %text, placeholders = descriptors.len(), "linearized template");
    Ok(Linearized { text, descriptors })
}
