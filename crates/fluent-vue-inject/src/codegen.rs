//! JavaScript snippets emitted into component modules.

use std::collections::HashSet;

/// Package that provides `FluentResource` at runtime.
pub const FLUENT_BUNDLE_PACKAGE: &str = "@fluent/bundle";

/// Property of the options object that `fluent-vue` reads translations from.
pub const HOLDER_PROPERTY: &str = "fluent";

const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while", "with", "yield",
];

/// Turns a locale into a name usable as a local binding.
///
/// Characters outside `[A-Za-z0-9_$]` become `_`. A leading digit or a
/// reserved word gets a `_` prefix.
pub fn legal_identifier(locale: &str) -> String {
    let identifier: String = locale
        .chars()
        .map(|c| if is_identifier_char(c) { c } else { '_' })
        .collect();

    let starts_with_digit = identifier.starts_with(|c: char| c.is_ascii_digit());
    if identifier.is_empty() {
        "_".to_string()
    } else if starts_with_digit || RESERVED_WORDS.contains(&identifier.as_str()) {
        format!("_{}", identifier)
    } else {
        identifier
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Whether `name` occurs in `code` as a whole identifier.
fn occurs_as_identifier(code: &str, name: &str) -> bool {
    code.match_indices(name).any(|(start, _)| {
        let before = code[..start].chars().next_back();
        let after = code[start + name.len()..].chars().next();
        !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char)
    })
}

/// Import bindings for one module.
///
/// A binding that was already handed out, or that the module already uses as
/// an identifier, gets a numeric suffix.
#[derive(Debug)]
pub struct BindingNames<'a> {
    code: &'a str,
    taken: HashSet<String>,
}

impl<'a> BindingNames<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            taken: HashSet::new(),
        }
    }

    pub fn claim(&mut self, locale: &str) -> String {
        let base = legal_identifier(locale);
        let mut binding = base.clone();
        let mut suffix = 2;
        while self.taken.contains(&binding) || occurs_as_identifier(self.code, &binding) {
            binding = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.taken.insert(binding.clone());
        binding
    }
}

/// Renders `value` as a double quoted JavaScript string literal.
pub fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// `import <binding> from "<specifier>";`
pub fn import_statement(binding: &str, specifier: &str) -> String {
    format!("import {} from {};\n", binding, string_literal(specifier))
}

/// `<target>.fluent = <target>.fluent || {};`
pub fn holder_init(target: &str) -> String {
    format!(
        "{target}.{HOLDER_PROPERTY} = {target}.{HOLDER_PROPERTY} || {{}};\n",
        target = target,
        HOLDER_PROPERTY = HOLDER_PROPERTY
    )
}

/// `<target>.fluent["<locale>"] = <binding>;`
pub fn locale_assignment(target: &str, locale: &str, binding: &str) -> String {
    format!(
        "{}.{}[{}] = {};\n",
        target,
        HOLDER_PROPERTY,
        string_literal(locale),
        binding
    )
}

/// Module served for a `.ftl` file.
pub fn resource_module(source: &str) -> String {
    format!(
        "import {{ FluentResource }} from '{}'\n\nexport default new FluentResource({})\n",
        FLUENT_BUNDLE_PACKAGE,
        string_literal(source)
    )
}

/// Module served for an inline custom block.
pub fn block_module(locale: &str, source: &str) -> String {
    format!(
        "import {{ FluentResource }} from '{package}'

export default function (Component) {{
  const target = Component.options || Component
  target.{holder} = target.{holder} || {{}}
  target.{holder}[{locale}] = new FluentResource({source})
}}
",
        package = FLUENT_BUNDLE_PACKAGE,
        holder = HOLDER_PROPERTY,
        locale = string_literal(locale),
        source = string_literal(source),
    )
}
