//! Complete text for one combination

use std::fmt;

use crate::body::pyramid;
use crate::combination::Combination;
use crate::docs::documentation;
use crate::labels::indent_block;
use crate::signature::declaration;
use crate::style::RenderStyle;

/// Documentation, availability annotation, declaration and body of one overload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEntry {
    combination: Combination,
    text: String,
}

impl RenderedEntry {
    pub fn render(combination: Combination, style: &RenderStyle) -> Self {
        let text = format!(
            "{}\n{}\n{} {{\n{}\n}}",
            documentation(&combination, style),
            style.availability,
            declaration(&combination, style),
            indent_block(&pyramid(&combination, style), &style.indent)
        );
        Self { combination, text }
    }

    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for RenderedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arity::Arity;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_vector_binding_entry() {
        // types [Vector], sources [Binding]
        let combo = Combination::decode(Arity::new(1).unwrap(), 0b11).unwrap();
        let entry = RenderedEntry::render(combo, &RenderStyle::default());
        let expected = [
            "/// A container that animates any view based on the given animatable data.",
            "/// - Parameters:",
            "///   - bindingA: Data that animate.",
            "///   - content: A view builder that creates the content to animate.",
            "@available(iOS 13.0, OSX 10.15, tvOS 13.0, watchOS 6.0, *)",
            "public func Animated<A: VectorArithmetic, Content: View>(_ bindingA: Binding<A>, \
             @ViewBuilder content: @escaping (Binding<A>) -> Content) -> some View {",
            "\tAnimated(bindingA) { a in",
            "\t\tcontent(a)",
            "\t}",
            "}",
        ]
        .join("\n");
        assert_eq!(entry.text(), expected);
        assert_eq!(entry.combination().pointer(), 3);
    }
}
