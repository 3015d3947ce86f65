//! Insertion point detection over compiled component output.
//!
//! Every supported Vue compiler emits one fixed statement near the end of the
//! module, after the options object is created and before it is exported.
//! Finding that statement's text is enough to know both where new statements
//! can go and which variable holds the options object.

use crate::error::FluentVueError;
use fluent_vue_config::AnchorConfig;
use std::borrow::Cow;

/// One known compiler output shape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Anchor {
    /// Literal text that starts the statement to insert before.
    pub literal: Cow<'static, str>,
    /// Expression naming the options object in scope at that statement.
    pub target: Cow<'static, str>,
    /// Compiler that produces this shape.
    pub frontend: Cow<'static, str>,
}

impl Anchor {
    pub const fn new(literal: &'static str, target: &'static str, frontend: &'static str) -> Self {
        Self {
            literal: Cow::Borrowed(literal),
            target: Cow::Borrowed(target),
            frontend: Cow::Borrowed(frontend),
        }
    }
}

impl From<&AnchorConfig> for Anchor {
    fn from(config: &AnchorConfig) -> Self {
        Self {
            literal: Cow::Owned(config.anchor.clone()),
            target: Cow::Owned(config.target.clone()),
            frontend: Cow::Borrowed("configured"),
        }
    }
}

/// Built-in shapes, most specific first.
pub const DEFAULT_ANCHORS: [Anchor; 4] = [
    Anchor::new(
        "__component__.options.__file",
        "__component__.options",
        "vite-plugin-vue2",
    ),
    Anchor::new("script.__file", "script", "rollup-plugin-vue"),
    // Production builds of rollup-plugin-vue drop `__file`.
    Anchor::new("script.render = render", "script", "rollup-plugin-vue"),
    Anchor::new("_sfc_main.__hmrId", "_sfc_main", "@vitejs/plugin-vue"),
];

/// Where to splice statements into one compiled module.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InsertInfo<'a> {
    /// Byte offset of the anchor statement.
    pub insert_pos: usize,
    /// Expression naming the options object.
    pub target: &'a str,
}

/// Ordered anchor rows; the first row found in the text wins.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnchorTable {
    anchors: Vec<Anchor>,
}

impl Default for AnchorTable {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_ANCHORS.to_vec(),
        }
    }
}

impl AnchorTable {
    /// The built-in rows followed by `extra`.
    pub fn with_extra<'c>(extra: impl IntoIterator<Item = &'c AnchorConfig>) -> Self {
        let mut table = Self::default();
        table.anchors.extend(extra.into_iter().map(Anchor::from));
        table
    }

    /// Appends a row with the lowest priority.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Finds the insertion point in `code`.
    ///
    /// An anchor inside a string literal earlier in the module is matched
    /// like any other occurrence.
    pub fn locate(&self, code: &str) -> Result<InsertInfo<'_>, FluentVueError> {
        self.anchors
            .iter()
            .find_map(|anchor| {
                code.find(anchor.literal.as_ref()).map(|insert_pos| {
                    tracing::debug!(
                        "Matched {} output at offset {} (anchor `{}`)",
                        anchor.frontend,
                        insert_pos,
                        anchor.literal
                    );
                    InsertInfo {
                        insert_pos,
                        target: anchor.target.as_ref(),
                    }
                })
            })
            .ok_or_else(|| FluentVueError::ComponentShapeUnrecognized {
                tried: self
                    .anchors
                    .iter()
                    .map(|anchor| format!("`{}`", anchor.literal))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
