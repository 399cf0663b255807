//! Nested body ("pyramid") rendering
//!
//! Each argument is unwrapped by one call to the single-source primitive and
//! the next argument is handled inside its continuation:
//!
//! ```text
//! Animated(valueA) { a in
//!     Animated(bindingB) { b in
//!         content(a, b)
//!     }
//! }
//! ```

use crate::combination::{ArgumentSpec, Combination};
use crate::labels::{indent_block, var_label};
use crate::style::RenderStyle;

/// `content(a, b, ...)` with one bound name per argument
pub fn content_call(arity: usize) -> String {
    let names = (0..arity)
        .map(|i| var_label(i).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("content({names})")
}

fn wrap_stage(inner: &str, arg: &ArgumentSpec, style: &RenderStyle) -> String {
    format!(
        "{}({}) {{ {} in\n{}\n}}",
        style.function,
        arg.parameter_name(),
        arg.var_label(),
        indent_block(inner, &style.indent)
    )
}

/// Compose the nested calls, outermost first in argument order.
pub fn pyramid(combination: &Combination, style: &RenderStyle) -> String {
    combination
        .arguments()
        .iter()
        .rev()
        .fold(content_call(combination.arity()), |inner, arg| {
            wrap_stage(&inner, arg, style)
        })
}
