use crate::anchor::AnchorTable;
use crate::block::{is_block_id, transform_block};
use crate::error::FluentVueError;
use crate::external::{COMPONENT_SUFFIX, transform_component};
use crate::magic::Generated;
use crate::resource::load_resource;
use crate::source_map::SourceMap;
use fluent_vue_config::PluginOptions;
use std::path::Path;

/// Services the host bundler provides to a running hook.
pub trait PluginContext {
    /// Rebuild the current module when `path` changes or is created.
    fn add_watch_file(&mut self, path: &Path);

    /// Report a non-fatal problem for the current module.
    fn warn(&mut self, message: &str);
}

/// Result of a `transform` hook.
#[derive(Clone, Debug)]
pub struct TransformOutput {
    pub code: String,
    pub map: Option<SourceMap>,
}

impl From<Generated> for TransformOutput {
    fn from(generated: Generated) -> Self {
        Self {
            code: generated.code,
            map: Some(generated.map),
        }
    }
}

/// The bundler plugin, holding only its configuration.
///
/// Hooks return `Ok(None)` for modules the plugin does not handle.
#[derive(Clone, Debug)]
pub struct FluentVuePlugin {
    options: PluginOptions,
    anchors: AnchorTable,
}

impl FluentVuePlugin {
    /// Validates `options` and builds the anchor table.
    pub fn new(options: PluginOptions) -> Result<Self, FluentVueError> {
        options.validate()?;
        let anchors = AnchorTable::with_extra(&options.extra_anchors);
        Ok(Self { options, anchors })
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    /// `load` hook: serves `.ftl` files.
    pub fn load(
        &self,
        ctx: &mut dyn PluginContext,
        id: &str,
    ) -> Result<Option<String>, FluentVueError> {
        let warn_missing = self
            .options
            .external
            .as_ref()
            .is_some_and(|external| external.warn_missing);

        load_resource(ctx, id, warn_missing, self.options.check_syntax)
    }

    /// `transform` hook: custom blocks in inline mode, `.vue` modules in
    /// external mode.
    pub fn transform(
        &self,
        ctx: &mut dyn PluginContext,
        code: &str,
        id: &str,
    ) -> Result<Option<TransformOutput>, FluentVueError> {
        match &self.options.external {
            Some(external) => {
                if !id.ends_with(COMPONENT_SUFFIX) {
                    return Ok(None);
                }

                let generated = transform_component(ctx, &self.anchors, external, code, id)?;
                Ok(generated.map(TransformOutput::from))
            },
            None => {
                if !is_block_id(id, &self.options.block_type) {
                    return Ok(None);
                }

                let code = transform_block(code, id, self.options.check_syntax)?;
                Ok(Some(TransformOutput { code, map: None }))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_vue_config::{AnchorConfig, ConfigError, ExternalConfig};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_plugin_is_send_sync() {
        assert_send_sync::<FluentVuePlugin>();
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = PluginOptions::external(ExternalConfig::new("/a", "/b", ["en!"]));
        let err = FluentVuePlugin::new(options).unwrap_err();
        assert!(matches!(
            err,
            FluentVueError::Config(ConfigError::InvalidLocale { .. })
        ));

        let options = PluginOptions {
            block_type: String::new(),
            ..PluginOptions::default()
        };
        assert!(matches!(
            FluentVuePlugin::new(options),
            Err(FluentVueError::Config(ConfigError::EmptyBlockType))
        ));
    }

    #[test]
    fn test_extra_anchors_from_options() {
        let options = PluginOptions {
            extra_anchors: vec![AnchorConfig {
                anchor: "export default _sfc_main".to_string(),
                target: "_sfc_main".to_string(),
            }],
            ..PluginOptions::external(ExternalConfig::new("/a", "/b", ["en"]))
        };

        let plugin = FluentVuePlugin::new(options).unwrap();
        let last = plugin.anchors().anchors().last().unwrap();
        assert_eq!(last.literal, "export default _sfc_main");
        assert_eq!(last.target, "_sfc_main");
    }
}
