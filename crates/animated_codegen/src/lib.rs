//! Animated Code Generator
//!
//! Emits the SwiftUI `Animated` overload set for a given arity: one generic
//! function per combination of argument type constraint
//! (`VectorArithmetic` / `Animatable`) and argument source
//! (plain value / `Binding`), `4^N` functions in total.
//!
//! Each generated function nests `N` calls to the single-source `Animated`
//! primitive, one per argument in order, and finally invokes the caller's
//! content closure with every unwrapped value.
//!
//! # Example
//!
//! ```
//! use animated_codegen::{Arity, Generator};
//!
//! let out = Generator::default().generate(Arity::new(1)?);
//! assert!(out.starts_with("import SwiftUI"));
//! assert_eq!(out.matches("public func Animated").count(), 4);
//! # Ok::<(), animated_codegen::CodegenError>(())
//! ```

pub mod arity;
pub mod body;
pub mod combination;
pub mod docs;
pub mod entry;
pub mod error;
pub mod generator;
pub mod labels;
pub mod signature;
pub mod style;

pub use arity::Arity;
pub use combination::{ArgumentSpec, Combination, Combinations, SourceKind, TypeKind};
pub use entry::RenderedEntry;
pub use error::{CodegenError, Result};
pub use generator::{generate, Generator};
pub use labels::MAX_ARITY;
pub use style::RenderStyle;
