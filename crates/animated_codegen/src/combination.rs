//! Combination enumeration
//!
//! Every overload is identified by a `pointer` in `0..4^N`. The high `N` bits
//! select the type constraint of each argument and the low `N` bits select
//! its source kind. Both halves are read most-significant-bit first, so bit
//! `2N-1` belongs to argument `A`'s type and bit `N-1` to argument `A`'s
//! source.

use crate::arity::Arity;
use crate::error::{CodegenError, Result};
use crate::labels::{type_label, var_label};

/// Constraint placed on an argument's generic type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// `T: Animatable`, interpolated through its `animatableData`
    Animatable,
    /// `T: VectorArithmetic`, interpolated directly
    VectorArithmetic,
}

impl TypeKind {
    fn from_bit(set: bool) -> Self {
        if set {
            TypeKind::VectorArithmetic
        } else {
            TypeKind::Animatable
        }
    }

    fn bit(self) -> bool {
        self == TypeKind::VectorArithmetic
    }

    pub fn protocol(self) -> &'static str {
        match self {
            TypeKind::Animatable => "Animatable",
            TypeKind::VectorArithmetic => "VectorArithmetic",
        }
    }
}

/// How an argument is passed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// One-way plain value
    Value,
    /// Two-way `Binding`
    Binding,
}

impl SourceKind {
    fn from_bit(set: bool) -> Self {
        if set {
            SourceKind::Binding
        } else {
            SourceKind::Value
        }
    }

    fn bit(self) -> bool {
        self == SourceKind::Binding
    }
}

/// One argument position of a generated overload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentSpec {
    pub index: usize,
    pub type_kind: TypeKind,
    pub source_kind: SourceKind,
}

impl ArgumentSpec {
    pub fn type_label(&self) -> char {
        type_label(self.index)
    }

    pub fn var_label(&self) -> char {
        var_label(self.index)
    }

    /// Internal parameter name: `valueA` or `bindingA`
    pub fn parameter_name(&self) -> String {
        match self.source_kind {
            SourceKind::Value => format!("value{}", self.type_label()),
            SourceKind::Binding => format!("binding{}", self.type_label()),
        }
    }

    /// Parameter type, also used for the content closure: `A` or `Binding<A>`
    pub fn parameter_type(&self) -> String {
        match self.source_kind {
            SourceKind::Value => self.type_label().to_string(),
            SourceKind::Binding => format!("Binding<{}>", self.type_label()),
        }
    }

    /// Generic constraint: `A: VectorArithmetic` or `A: Animatable`
    pub fn constraint(&self) -> String {
        format!("{}: {}", self.type_label(), self.type_kind.protocol())
    }
}

/// An ordered set of argument specs identified by its pointer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combination {
    pointer: u64,
    arguments: Vec<ArgumentSpec>,
}

impl Combination {
    /// Decode the argument specs selected by `pointer`
    pub fn decode(arity: Arity, pointer: u64) -> Result<Self> {
        let count = arity.combination_count();
        if pointer >= count {
            return Err(CodegenError::PointerOutOfRange { pointer, count });
        }

        let n = arity.get();
        let arguments = (0..n)
            .map(|index| ArgumentSpec {
                index,
                type_kind: TypeKind::from_bit(pointer & (1u64 << (2 * n - 1 - index)) != 0),
                source_kind: SourceKind::from_bit(pointer & (1u64 << (n - 1 - index)) != 0),
            })
            .collect();

        Ok(Self { pointer, arguments })
    }

    /// Rebuild a pointer from per-argument kinds, the inverse of [`decode`](Self::decode)
    pub fn encode(type_kinds: &[TypeKind], source_kinds: &[SourceKind]) -> u64 {
        debug_assert_eq!(type_kinds.len(), source_kinds.len());
        let high = type_kinds
            .iter()
            .fold(0u64, |acc, kind| (acc << 1) | kind.bit() as u64);
        let low = source_kinds
            .iter()
            .fold(0u64, |acc, kind| (acc << 1) | kind.bit() as u64);
        (high << source_kinds.len()) | low
    }

    pub fn pointer(&self) -> u64 {
        self.pointer
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub fn type_kinds(&self) -> Vec<TypeKind> {
        self.arguments.iter().map(|arg| arg.type_kind).collect()
    }

    pub fn source_kinds(&self) -> Vec<SourceKind> {
        self.arguments.iter().map(|arg| arg.source_kind).collect()
    }
}

/// Iterator over every combination of an arity in ascending pointer order
#[derive(Clone, Debug)]
pub struct Combinations {
    arity: Arity,
    next: u64,
    end: u64,
}

impl Combinations {
    pub fn new(arity: Arity) -> Self {
        Self {
            arity,
            next: 0,
            end: arity.combination_count(),
        }
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let pointer = self.next;
        self.next += 1;
        Combination::decode(self.arity, pointer).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Combinations {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn arity(n: i64) -> Arity {
        Arity::new(n).unwrap()
    }

    #[test]
    fn zero_pointer_is_all_plain_animatable() {
        let combo = Combination::decode(arity(3), 0).unwrap();
        assert!(combo
            .arguments()
            .iter()
            .all(|a| a.type_kind == TypeKind::Animatable && a.source_kind == SourceKind::Value));
    }

    #[test]
    fn bits_read_most_significant_first() {
        // 0b10_01: types [Vector, Animatable], sources [Value, Binding]
        let combo = Combination::decode(arity(2), 0b1001).unwrap();
        assert_eq!(
            combo.type_kinds(),
            vec![TypeKind::VectorArithmetic, TypeKind::Animatable]
        );
        assert_eq!(
            combo.source_kinds(),
            vec![SourceKind::Value, SourceKind::Binding]
        );
    }

    #[test]
    fn encode_inverts_decode() {
        let a = arity(3);
        for combo in Combinations::new(a) {
            let back = Combination::encode(&combo.type_kinds(), &combo.source_kinds());
            assert_eq!(back, combo.pointer());
        }
    }

    #[test]
    fn enumerates_every_assignment_once() {
        let a = arity(3);
        let seen: HashSet<_> = Combinations::new(a)
            .map(|c| (c.type_kinds(), c.source_kinds()))
            .collect();
        assert_eq!(seen.len(), 64);
        assert_eq!(Combinations::new(a).len(), 64);
    }

    #[test]
    fn pointer_out_of_range() {
        assert_eq!(
            Combination::decode(arity(1), 4),
            Err(CodegenError::PointerOutOfRange {
                pointer: 4,
                count: 4
            })
        );
    }

    #[test]
    fn argument_rendering_helpers() {
        let spec = ArgumentSpec {
            index: 1,
            type_kind: TypeKind::VectorArithmetic,
            source_kind: SourceKind::Binding,
        };
        assert_eq!(spec.parameter_name(), "bindingB");
        assert_eq!(spec.parameter_type(), "Binding<B>");
        assert_eq!(spec.constraint(), "B: VectorArithmetic");
        assert_eq!(spec.var_label(), 'b');
    }
}
