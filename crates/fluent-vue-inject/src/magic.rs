//! Insert-only editing of a module with source map output.

use crate::error::FluentVueError;
use crate::source_map::{HiresMapBuilder, SourceMap};

#[derive(Clone, Debug, Eq, PartialEq)]
struct Insertion {
    at: usize,
    text: String,
}

/// Pending insertions over an original text that is never modified.
///
/// Insertions at the same offset come out in the order they were added,
/// except that [`MagicString::prepend`] always goes in front of everything
/// already there.
#[derive(Clone, Debug)]
pub struct MagicString<'a> {
    original: &'a str,
    source_name: String,
    insertions: Vec<Insertion>,
}

/// Text and map produced from a [`MagicString`].
#[derive(Clone, Debug)]
pub struct Generated {
    pub code: String,
    pub map: SourceMap,
}

impl<'a> MagicString<'a> {
    /// `source_name` is recorded as the map's only source.
    pub fn new(original: &'a str, source_name: impl Into<String>) -> Self {
        Self {
            original,
            source_name: source_name.into(),
            insertions: Vec::new(),
        }
    }

    /// Inserts `text` at the very start of the output.
    pub fn prepend(&mut self, text: impl Into<String>) -> &mut Self {
        self.insertions.insert(
            0,
            Insertion {
                at: 0,
                text: text.into(),
            },
        );
        self
    }

    /// Inserts `text` at byte offset `at`, after anything already inserted
    /// there.
    pub fn append_left(
        &mut self,
        at: usize,
        text: impl Into<String>,
    ) -> Result<&mut Self, FluentVueError> {
        if !self.original.is_char_boundary(at) {
            return Err(FluentVueError::InvalidSplicePosition {
                pos: at,
                len: self.original.len(),
            });
        }

        self.insertions.push(Insertion {
            at,
            text: text.into(),
        });
        Ok(self)
    }

    /// Produces the edited text and a per-character source map in one pass.
    pub fn generate(&self) -> Generated {
        let mut insertions: Vec<&Insertion> = self.insertions.iter().collect();
        // Stable, so same-offset insertions keep their order.
        insertions.sort_by_key(|insertion| insertion.at);

        let extra: usize = insertions.iter().map(|insertion| insertion.text.len()).sum();
        let mut code = String::with_capacity(self.original.len() + extra);
        let mut map = HiresMapBuilder::new(&self.source_name, self.original);
        let mut cursor = 0;

        for insertion in insertions {
            let chunk = &self.original[cursor..insertion.at];
            code.push_str(chunk);
            map.original(chunk);

            code.push_str(&insertion.text);
            map.inserted(&insertion.text);

            cursor = insertion.at;
        }

        let rest = &self.original[cursor..];
        code.push_str(rest);
        map.original(rest);

        Generated {
            code,
            map: map.finish(),
        }
    }
}
