//! `.ftl` resources: locating them for a component and serving them as
//! modules.

use crate::codegen::resource_module;
use crate::error::FluentVueError;
use crate::plugin::PluginContext;
use fluent_vue_config::ExternalConfig;
use path_slash::PathExt as _;
use std::path::{Path, PathBuf};

/// Suffix of Fluent resource files.
pub const RESOURCE_SUFFIX: &str = ".ftl";

/// A resource that exists for one locale of one component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleResource {
    /// Locale as configured; used as the object key.
    pub locale: String,
    /// Import specifier, with forward slashes.
    pub specifier: String,
}

impl LocaleResource {
    pub fn new(locale: impl Into<String>, specifier: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            specifier: specifier.into(),
        }
    }
}

/// `{ftl_dir}/{locale}/{relative_path}.ftl`
pub fn resource_path(config: &ExternalConfig, locale: &str, relative_path: &str) -> PathBuf {
    config
        .ftl_dir
        .join(locale)
        .join(format!("{}{}", relative_path, RESOURCE_SUFFIX))
}

/// Returns the configured locales that have a resource for the component at
/// `relative_path`, in configuration order.
///
/// Every candidate path is registered as a watch dependency, so creating a
/// missing file later triggers a rebuild.
pub fn probe_resources(
    ctx: &mut dyn PluginContext,
    config: &ExternalConfig,
    relative_path: &str,
) -> Vec<LocaleResource> {
    let mut found = Vec::new();

    for locale in &config.locales {
        let path = resource_path(config, locale, relative_path);
        ctx.add_watch_file(&path);

        let exists = match path.try_exists() {
            Ok(exists) => exists,
            Err(e) => {
                tracing::trace!("Could not stat {}: {}", path.display(), e);
                false
            },
        };

        tracing::trace!("Probed {} (exists: {})", path.display(), exists);

        if exists {
            found.push(LocaleResource::new(
                locale.as_str(),
                path.to_slash_lossy().into_owned(),
            ));
        } else if config.warn_missing {
            let message = format!(
                "Missing Fluent resource for locale '{}': {}",
                locale,
                path.display()
            );
            tracing::warn!("{}", message);
            ctx.warn(&message);
        }
    }

    found
}

/// Serves a `.ftl` id as a module exporting a `FluentResource`.
///
/// Returns `Ok(None)` for other ids, and for files that cannot be read: the
/// locale is then treated as absent. With `warn_missing` the read failure is
/// also reported through `ctx`.
pub fn load_resource(
    ctx: &mut dyn PluginContext,
    id: &str,
    warn_missing: bool,
    check_syntax: bool,
) -> Result<Option<String>, FluentVueError> {
    if !id.ends_with(RESOURCE_SUFFIX) {
        return Ok(None);
    }

    let source = match fs_err::read_to_string(id) {
        Ok(source) => source,
        Err(source) => {
            let failure = FluentVueError::ResourceReadFailure {
                path: PathBuf::from(id),
                source,
            };
            tracing::debug!("{}", failure);
            if warn_missing {
                ctx.warn(&failure.to_string());
            }
            return Ok(None);
        },
    };

    if check_syntax {
        check_resource_syntax(id, &source)?;
    }

    tracing::debug!("Loaded Fluent resource {}", id);
    Ok(Some(resource_module(&source)))
}

/// Fails with every parse error in `source`.
pub fn check_resource_syntax(id: &str, source: &str) -> Result<(), FluentVueError> {
    match fluent_syntax::parser::parse(source) {
        Ok(_) => Ok(()),
        Err((_, errors)) => Err(FluentVueError::ResourceSyntax {
            id: id.to_string(),
            errors: errors
                .iter()
                .map(|error| {
                    format!(
                        "line {}: {:?}",
                        line_number(source, error.pos.start),
                        error.kind
                    )
                })
                .collect(),
        }),
    }
}

fn line_number(source: &str, offset: usize) -> usize {
    source
        .get(..offset)
        .unwrap_or(source)
        .matches('\n')
        .count()
        + 1
}

/// Path of `id` relative to `base_dir`, with forward slashes. `None` when
/// the id lies outside `base_dir`.
pub fn relative_component_path(base_dir: &Path, id: &str) -> Option<String> {
    Path::new(id)
        .strip_prefix(base_dir)
        .ok()
        .map(|relative| relative.to_slash_lossy().into_owned())
}
