//! # yamlweave-core
//!
//! Bridges a templated YAML document (literal text interleaved with opaque
//! host-language expressions) into a plain-text YAML parser, then
//! reconstructs the parsed tree with the expressions spliced back into their
//! exact positions.
//!
//! Each expression slot is replaced by a generated placeholder token that
//! cannot collide with anything in sight, the resulting text is parsed, and
//! the tree is walked to reverse the substitution: a string that is exactly
//! one token becomes the expression itself, and a string mixing tokens with
//! literal text becomes an interpolated string whose synthetic padding is
//! trimmed away again. Mapping keys that stop being plain strings are
//! flagged as computed so the host can splice them accordingly.
//!
//! The core is generic over the host's expression handle: it never inspects
//! an expression, only moves it. Host integration (finding template
//! occurrences, collecting scope identifiers, splicing the returned tree)
//! lives outside this crate.
//!
//! ## Example
//!
//! ```rust
//! use yamlweave_core::{expand, Node, PlaceholderAllocator, ScopeIdentifiers, Template};
//!
//! // greeting: ${user_name}
//! let template = Template::new(
//!     vec!["greeting: ".to_string(), String::new()],
//!     vec!["user_name"],
//! )
//! .unwrap();
//!
//! let scope = ScopeIdentifiers::new();
//! let mut allocator = PlaceholderAllocator::new();
//! let node = expand(template, &scope, &mut allocator).unwrap();
//!
//! assert_eq!(node.get("greeting"), Some(&Node::Expression("user_name")));
//! ```

mod error;
mod expand;
mod linearize;
mod node;
mod partition;
mod placeholder;
mod reconstruct;
mod template;

pub use error::{Error, Result};
pub use expand::expand;
pub use linearize::{linearize, Descriptor, Linearized};
pub use node::{InterpolatedString, MappingEntry, MappingKey, Node};
pub use partition::{split_placeholders, Partition};
pub use placeholder::{PlaceholderAllocator, ScopeIdentifiers, RESERVED_PREFIX};
pub use reconstruct::reconstruct;
pub use template::Template;
