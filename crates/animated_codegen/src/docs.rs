//! Documentation comment rendering

use crate::combination::Combination;
use crate::style::RenderStyle;

/// Render the `///` block placed above a declaration.
pub fn documentation(combination: &Combination, style: &RenderStyle) -> String {
    let mut lines = Vec::with_capacity(combination.arity() + 3);
    lines.push(format!("/// {}", style.summary));
    lines.push("/// - Parameters:".to_string());
    for arg in combination.arguments() {
        lines.push(format!(
            "///   - {}: {}",
            arg.parameter_name(),
            style.parameter_doc
        ));
    }
    lines.push(format!("///   - content: {}", style.content_doc));
    lines.join("\n")
}
