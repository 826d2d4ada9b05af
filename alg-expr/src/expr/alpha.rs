//! Alpha-equality and alpha-hashing of expressions.
//!
//! Both are computed in a single left-to-right, depth-first (pre-order) traversal of the tree.
//! At each node, the **head** of the node (everything about it that is not a sub-expression,
//! such as its operator or function name) is compared or hashed first, then the parameters are
//! visited in order.
//!
//! Variables are the only heads that are not compared directly. Equality builds an [`AlphaMap`]
//! from the variables of the left expression to the variables of the right expression as it
//! goes, and hashing numbers variables in the order they are first seen.

use crate::name::{FunctionName, VariableName};
use std::{
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
    mem,
};
use super::{BinaryOpKind, Expr, UnaryOpKind};

/// A one-to-one mapping from the variables of one expression to the variables of another.
///
/// The mapping is built incrementally with [`AlphaMap::unify`]. Once a variable has been mapped,
/// it stays mapped, and no two variables can be mapped to the same target.
#[derive(Debug, Clone, Default)]
pub struct AlphaMap {
    forward: HashMap<VariableName, VariableName>,
    targets: HashSet<VariableName>,
}

impl AlphaMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to map `lhs` to `rhs`.
    ///
    /// Returns true if `lhs` is already mapped to `rhs`, or if neither `lhs` nor `rhs` take part
    /// in the mapping yet (in which case the pair is recorded). Returns false otherwise.
    pub fn unify(&mut self, lhs: &VariableName, rhs: &VariableName) -> bool {
        match self.forward.get(lhs) {
            Some(mapped) => mapped == rhs,
            None => {
                // prevent multiple variables mapping to the same variable, otherwise `a*a+c`
                // would be equal to `a*b+c`
                if !self.targets.insert(rhs.clone()) {
                    return false;
                }
                self.forward.insert(lhs.clone(), rhs.clone());
                true
            },
        }
    }

    /// Returns the variable that `lhs` is mapped to, if any.
    pub fn get(&self, lhs: &VariableName) -> Option<&VariableName> {
        self.forward.get(lhs)
    }

    /// Returns an iterator over the `(lhs, rhs)` pairs of the mapping, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&VariableName, &VariableName)> {
        self.forward.iter()
    }

    /// Returns the number of mapped variables.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns true if no variable is mapped.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// The part of a node that is not a sub-expression.
#[derive(Debug, PartialEq)]
enum Head<'a> {
    Constant(u64),
    Variable(&'a VariableName),
    Placeholder(&'a VariableName),
    Binary(BinaryOpKind),
    Unary(UnaryOpKind),
    Call(&'a FunctionName, usize),
}

/// Bit pattern of a constant, such that `0.0` and `-0.0` are identical and all NaNs are
/// identical.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl Expr {
    fn head(&self) -> Head<'_> {
        match self {
            Self::Constant(value) => Head::Constant(canonical_bits(*value)),
            Self::Variable(name) => Head::Variable(name),
            Self::Placeholder(name) => Head::Placeholder(name),
            Self::Binary(kind, _, _) => Head::Binary(*kind),
            Self::Unary(kind, _) => Head::Unary(*kind),
            Self::Call(name, args) => Head::Call(name, args.len()),
        }
    }

    /// Checks if two expressions are alpha-equal, extending the given variable mapping.
    ///
    /// Variables already present in `map` must line up with the variables they are mapped to;
    /// newly encountered variables are added to it. The mapping is left partially extended if
    /// the expressions turn out to be unequal.
    pub fn alpha_eq_with(&self, other: &Expr, map: &mut AlphaMap) -> bool {
        let heads_match = match (self.head(), other.head()) {
            (Head::Variable(lhs), Head::Variable(rhs))
            | (Head::Placeholder(lhs), Head::Placeholder(rhs)) => map.unify(lhs, rhs),
            (lhs, rhs) => lhs == rhs,
        };

        heads_match
            && self.parameters()
                .into_iter()
                .zip(other.parameters())
                .all(|(lhs, rhs)| lhs.alpha_eq_with(rhs, map))
    }

    /// Feeds the alpha-hash of this expression into `state`, numbering variables through `seen`.
    fn alpha_hash<H: Hasher>(&self, state: &mut H, seen: &mut HashMap<VariableName, usize>) {
        mem::discriminant(self).hash(state);
        match self.head() {
            Head::Variable(name) | Head::Placeholder(name) => {
                let next = seen.len();
                seen.entry(name.clone()).or_insert(next).hash(state);
            },
            Head::Constant(bits) => bits.hash(state),
            Head::Binary(kind) => kind.hash(state),
            Head::Unary(kind) => kind.hash(state),
            Head::Call(name, arity) => {
                name.hash(state);
                arity.hash(state);
            },
        }

        for param in self.parameters() {
            param.alpha_hash(state, seen);
        }
    }
}

/// Checks if two expressions are alpha-equal.
///
/// For more information about alpha-equality, see the [module-level documentation](crate::expr).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.alpha_eq_with(other, &mut AlphaMap::new())
    }
}

/// Alpha-equality is reflexive: constants are compared by [`canonical_bits`], so even `NaN` is
/// equal to itself.
impl Eq for Expr {}

/// Hashes an expression consistently with alpha-equality.
impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alpha_hash(state, &mut HashMap::new());
    }
}
