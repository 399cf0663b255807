//! Generator driver
//!
//! Renders the header followed by every combination of an arity, in
//! ascending pointer order, separated by blank lines.

use crate::arity::Arity;
use crate::combination::{Combination, Combinations};
use crate::entry::RenderedEntry;
use crate::error::Result;
use crate::style::RenderStyle;

/// Renders overload sets with a fixed style
#[derive(Clone, Debug, Default)]
pub struct Generator {
    style: RenderStyle,
}

impl Generator {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Lazily render every combination of `arity`
    pub fn entries(&self, arity: Arity) -> impl Iterator<Item = RenderedEntry> + '_ {
        Combinations::new(arity).map(move |combo| RenderedEntry::render(combo, &self.style))
    }

    /// Render a single combination
    pub fn render_one(&self, arity: Arity, pointer: u64) -> Result<RenderedEntry> {
        let combo = Combination::decode(arity, pointer)?;
        Ok(RenderedEntry::render(combo, &self.style))
    }

    /// Header: optional preamble, then the import line
    pub fn header(&self) -> String {
        match &self.style.preamble {
            Some(preamble) => format!("{}\n\n{}", preamble.trim_end(), self.style.import),
            None => self.style.import.clone(),
        }
    }

    /// Render the full output for `arity`
    pub fn generate(&self, arity: Arity) -> String {
        tracing::debug!(
            arity = arity.get(),
            combinations = arity.combination_count(),
            "generating overload set"
        );
        self.assemble(self.entries(arity))
    }

    /// Render only the selected combinations, in the given order
    pub fn generate_selected(&self, arity: Arity, pointers: &[u64]) -> Result<String> {
        let entries = pointers
            .iter()
            .map(|&pointer| self.render_one(arity, pointer))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            arity = arity.get(),
            selected = entries.len(),
            "generating selected overloads"
        );
        Ok(self.assemble(entries))
    }

    fn assemble(&self, entries: impl IntoIterator<Item = RenderedEntry>) -> String {
        let mut out = self.header();
        out.push('\n');
        for entry in entries {
            out.push('\n');
            out.push_str(entry.text());
            out.push('\n');
        }
        // Entries are separated by one blank line; the last carries no newline.
        out.pop();
        out
    }
}

/// Render the full output for `arity` with the default style
pub fn generate(arity: Arity) -> String {
    Generator::default().generate(arity)
}
