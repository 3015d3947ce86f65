//! External `.ftl` mode: attaching resource files to compiled components.

use crate::anchor::{AnchorTable, InsertInfo};
use crate::codegen::{BindingNames, holder_init, import_statement, locale_assignment};
use crate::error::FluentVueError;
use crate::magic::{Generated, MagicString};
use crate::plugin::PluginContext;
use crate::resource::{LocaleResource, probe_resources, relative_component_path};
use fluent_vue_config::ExternalConfig;

/// Suffix of component modules handled in external mode.
pub const COMPONENT_SUFFIX: &str = ".vue";

/// Splices `resources` into compiled component `code`.
///
/// Imports go to the top of the module. The holder initialization and one
/// assignment per resource go to `info.insert_pos`. With no resources the
/// only change is the holder initialization. Import bindings are unique
/// within the module.
pub fn inject(
    code: &str,
    source_name: &str,
    info: InsertInfo<'_>,
    resources: &[LocaleResource],
) -> Result<Generated, FluentVueError> {
    let mut magic = MagicString::new(code, source_name);
    let mut names = BindingNames::new(code);

    let mut imports = String::new();
    let mut statements = holder_init(info.target);
    for resource in resources {
        let binding = names.claim(&resource.locale);
        imports.push_str(&import_statement(&binding, &resource.specifier));
        statements.push_str(&locale_assignment(info.target, &resource.locale, &binding));
    }

    if !imports.is_empty() {
        magic.prepend(imports);
    }
    magic.append_left(info.insert_pos, statements)?;

    Ok(magic.generate())
}

/// Injects the resources that exist for component `id`.
///
/// Components outside `base_dir` are left alone.
pub fn transform_component(
    ctx: &mut dyn PluginContext,
    anchors: &AnchorTable,
    config: &ExternalConfig,
    code: &str,
    id: &str,
) -> Result<Option<Generated>, FluentVueError> {
    let Some(relative_path) = relative_component_path(&config.base_dir, id) else {
        tracing::debug!(
            "Skipping {}: outside of {}",
            id,
            config.base_dir.display()
        );
        return Ok(None);
    };

    let info = anchors.locate(code)?;
    let resources = probe_resources(ctx, config, &relative_path);

    tracing::debug!(
        "Injecting {} of {} locales into {}",
        resources.len(),
        config.locales.len(),
        id
    );

    inject(code, id, info, &resources).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_map::to_json;

    const SCRIPT: &str = "const script = {};\nscript.__file = \"App.vue\";\nexport default script;\n";

    fn script_info() -> InsertInfo<'static> {
        InsertInfo {
            insert_pos: SCRIPT.find("script.__file").unwrap(),
            target: "script",
        }
    }

    #[test]
    fn test_inject_without_resources() {
        let generated = inject(SCRIPT, "App.vue", script_info(), &[]).unwrap();

        assert_eq!(
            generated.code,
            "const script = {};\nscript.fluent = script.fluent || {};\nscript.__file = \"App.vue\";\nexport default script;\n"
        );
        assert!(!generated.code.contains("import"));
    }

    #[test]
    fn test_inject_with_resources() {
        let resources = [
            LocaleResource::new("en", "/ftl/en/App.vue.ftl"),
            LocaleResource::new("pt-br", "/ftl/pt-br/App.vue.ftl"),
        ];
        let generated = inject(SCRIPT, "App.vue", script_info(), &resources).unwrap();

        insta::assert_snapshot!(generated.code, @r#"
        import en from "/ftl/en/App.vue.ftl";
        import pt_br from "/ftl/pt-br/App.vue.ftl";
        const script = {};
        script.fluent = script.fluent || {};
        script.fluent["en"] = en;
        script.fluent["pt-br"] = pt_br;
        script.__file = "App.vue";
        export default script;
        "#);
    }

    #[test]
    fn test_inject_colliding_locales() {
        let resources = [
            LocaleResource::new("pt-BR", "/ftl/pt-BR/App.vue.ftl"),
            LocaleResource::new("pt_BR", "/ftl/pt_BR/App.vue.ftl"),
        ];
        let generated = inject(SCRIPT, "App.vue", script_info(), &resources).unwrap();

        insta::assert_snapshot!(generated.code, @r#"
        import pt_BR from "/ftl/pt-BR/App.vue.ftl";
        import pt_BR_2 from "/ftl/pt_BR/App.vue.ftl";
        const script = {};
        script.fluent = script.fluent || {};
        script.fluent["pt-BR"] = pt_BR;
        script.fluent["pt_BR"] = pt_BR_2;
        script.__file = "App.vue";
        export default script;
        "#);
    }

    #[test]
    fn test_inject_is_deterministic() {
        let resources = [LocaleResource::new("en", "/ftl/en/App.vue.ftl")];
        let first = inject(SCRIPT, "App.vue", script_info(), &resources).unwrap();
        let second = inject(SCRIPT, "App.vue", script_info(), &resources).unwrap();
        assert_eq!(first.code, second.code);
        assert_eq!(
            to_json(&first.map).unwrap(),
            to_json(&second.map).unwrap()
        );
    }
}
