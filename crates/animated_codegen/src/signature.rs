//! Function signature rendering

use crate::combination::Combination;
use crate::style::RenderStyle;

/// `<A: VectorArithmetic, B: Animatable, Content: View>`
pub fn generic_clause(combination: &Combination) -> String {
    let constraints = combination
        .arguments()
        .iter()
        .map(|arg| arg.constraint())
        .collect::<Vec<_>>()
        .join(", ");
    format!("<{constraints}, Content: View>")
}

/// `@escaping (A, Binding<B>) -> Content`
pub fn closure_signature(combination: &Combination) -> String {
    let types = combination
        .arguments()
        .iter()
        .map(|arg| arg.parameter_type())
        .collect::<Vec<_>>()
        .join(", ");
    format!("@escaping ({types}) -> Content")
}

/// `(_ valueA: A, _ bindingB: Binding<B>, @ViewBuilder content: ...) -> some View`
pub fn parameter_list(combination: &Combination) -> String {
    let params = combination
        .arguments()
        .iter()
        .map(|arg| format!("_ {}: {}", arg.parameter_name(), arg.parameter_type()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "({params}, @ViewBuilder content: {}) -> some View",
        closure_signature(combination)
    )
}

/// Full declaration line without the opening brace
pub fn declaration(combination: &Combination, style: &RenderStyle) -> String {
    format!(
        "{} func {}{}{}",
        style.visibility,
        style.function,
        generic_clause(combination),
        parameter_list(combination)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arity::Arity;
    use pretty_assertions::assert_eq;

    #[test]
    fn mixed_two_argument_declaration() {
        let combo = Combination::decode(Arity::new(2).unwrap(), 0b1001).unwrap();
        assert_eq!(
            generic_clause(&combo),
            "<A: VectorArithmetic, B: Animatable, Content: View>"
        );
        assert_eq!(
            declaration(&combo, &RenderStyle::default()),
            "public func Animated<A: VectorArithmetic, B: Animatable, Content: View>\
             (_ valueA: A, _ bindingB: Binding<B>, \
             @ViewBuilder content: @escaping (A, Binding<B>) -> Content) -> some View"
        );
    }

    #[test]
    fn closure_mirrors_source_kinds() {
        let combo = Combination::decode(Arity::new(3).unwrap(), 0b000_101).unwrap();
        assert_eq!(
            closure_signature(&combo),
            "@escaping (Binding<A>, B, Binding<C>) -> Content"
        );
    }
}
