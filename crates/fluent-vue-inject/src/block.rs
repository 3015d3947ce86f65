//! Inline custom block mode.
//!
//! The Vue compiler hands every `<fluent locale="..">` block to the bundler as
//! a virtual module, e.g. `/src/App.vue?vue&type=fluent&index=0&locale=en`,
//! whose code is the raw block text. That module is replaced with a function
//! the compiler calls with the component, which registers the resource.

use crate::codegen::block_module;
use crate::error::FluentVueError;
use crate::resource::check_resource_syntax;

/// Whether `id` is a custom block module of `block_type`.
pub fn is_block_id(id: &str, block_type: &str) -> bool {
    id.contains(&format!("vue&type={}", block_type))
}

/// The `locale` query parameter of `id`, if present and non-empty.
pub fn block_locale(id: &str) -> Option<String> {
    let (_, query) = id.split_once('?')?;

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "locale")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Strips the blank lines some compilers pad block content with.
pub fn trim_block_padding(code: &str) -> &str {
    let mut trimmed = code;

    loop {
        if let Some(rest) = trimmed.strip_prefix('\n') {
            trimmed = rest;
        } else if let Some(rest) = trimmed.strip_prefix("\r\n") {
            trimmed = rest;
        } else {
            break;
        }
    }

    loop {
        if let Some(rest) = trimmed.strip_suffix("\r\n") {
            trimmed = rest;
        } else if let Some(rest) = trimmed.strip_suffix('\n') {
            trimmed = rest;
        } else {
            break;
        }
    }

    trimmed
}

/// Compiles one custom block module.
pub fn transform_block(code: &str, id: &str, check_syntax: bool) -> Result<String, FluentVueError> {
    let locale = block_locale(id).ok_or_else(|| FluentVueError::MissingLocaleAttribute {
        id: id.to_string(),
    })?;

    let source = trim_block_padding(code);

    if check_syntax {
        check_resource_syntax(id, source)?;
    }

    tracing::debug!("Compiled '{}' block of {}", locale, id);
    Ok(block_module(&locale, source))
}
