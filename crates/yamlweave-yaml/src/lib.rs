//! # yamlweave-yaml
//!
//! The YAML boundary of the yamlweave workspace.
//!
//! This crate wraps `yaml-rust2` behind a single `parse` function that turns
//! text into a [`YamlValue`] tree: a plain tagged union of the YAML value
//! kinds with string mapping keys and insertion order preserved. The rest of
//! the workspace never touches `yaml-rust2` directly, so the parser can be
//! swapped without disturbing the splicing core.
//!
//! ## Example
//!
//! ```rust
//! use yamlweave_yaml::parse;
//!
//! let value = parse("title: My Document").unwrap();
//! let title = value.get("title").unwrap();
//! assert_eq!(title.as_str(), Some("My Document"));
//! ```

mod error;
mod parser;
mod value;

pub use error::{Error, Result};
pub use parser::parse;
pub use value::{Mapping, YamlValue};
