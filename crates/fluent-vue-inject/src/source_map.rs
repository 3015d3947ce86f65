//! Source maps for spliced modules.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sourcemap::SourceMapBuilder;

use crate::error::FluentVueError;

pub use sourcemap::SourceMap;

/// Serializes `map` as Source Map revision 3 JSON.
pub fn to_json(map: &SourceMap) -> Result<String, FluentVueError> {
    let mut buf = Vec::new();
    map.to_writer(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// The map as a `data:` URL for an inline `sourceMappingURL` comment.
pub fn to_url(map: &SourceMap) -> Result<String, FluentVueError> {
    let json = to_json(map)?;
    Ok(format!(
        "data:application/json;charset=utf-8;base64,{}",
        STANDARD.encode(json)
    ))
}

/// Builds a single-source map while text is written out.
///
/// Generated and original positions advance independently: original text
/// moves both and produces a token per character, inserted text moves only
/// the generated side. Columns count UTF-16 code units.
pub(crate) struct HiresMapBuilder {
    builder: SourceMapBuilder,
    source_id: u32,
    generated_line: u32,
    generated_column: u32,
    original_line: u32,
    original_column: u32,
}

impl HiresMapBuilder {
    pub(crate) fn new(source_name: &str, source_content: &str) -> Self {
        let mut builder = SourceMapBuilder::new(None);
        let source_id = builder.add_source(source_name);
        builder.set_source_contents(source_id, Some(source_content));

        Self {
            builder,
            source_id,
            generated_line: 0,
            generated_column: 0,
            original_line: 0,
            original_column: 0,
        }
    }

    pub(crate) fn original(&mut self, chunk: &str) {
        for c in chunk.chars() {
            if c == '\n' {
                self.new_generated_line();
                self.original_line += 1;
                self.original_column = 0;
                continue;
            }

            self.builder.add_raw(
                self.generated_line,
                self.generated_column,
                self.original_line,
                self.original_column,
                Some(self.source_id),
                None,
                false,
            );
            let width = c.len_utf16() as u32;
            self.generated_column += width;
            self.original_column += width;
        }
    }

    pub(crate) fn inserted(&mut self, chunk: &str) {
        for c in chunk.chars() {
            if c == '\n' {
                self.new_generated_line();
            } else {
                self.generated_column += c.len_utf16() as u32;
            }
        }
    }

    pub(crate) fn finish(self) -> SourceMap {
        self.builder.into_sourcemap()
    }

    fn new_generated_line(&mut self) {
        self.generated_line += 1;
        self.generated_column = 0;
    }
}
