#![doc = include_str!("../README.md")]

pub mod anchor;
pub mod block;
pub mod codegen;
pub mod error;
pub mod external;
pub mod magic;
mod plugin;
pub mod resource;
pub mod source_map;

pub use anchor::{Anchor, AnchorTable, InsertInfo};
pub use error::FluentVueError;
pub use external::inject;
pub use fluent_vue_config::{AnchorConfig, ExternalConfig, PluginOptions};
pub use magic::{Generated, MagicString};
pub use plugin::{FluentVuePlugin, PluginContext, TransformOutput};
pub use resource::LocaleResource;
pub use source_map::{SourceMap, to_json, to_url};
