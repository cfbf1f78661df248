//! Compiled predicates
//!
//! A predicate is a small tagged tree over one entity type: constants,
//! leaf conditions (accessor + comparison), and binary AND / OR nodes.
//! Composition is plain tree construction; every node evaluates against
//! the same `&E`, so combined predicates never need rebinding.

use std::fmt;

use super::accessor::Accessor;
use super::value::FieldValue;

/// Binary comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Equal => "=",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
        }
    }

    /// Applies the operator.
    ///
    /// Equality holds iff both sides are equal, nulls included. Ordering
    /// operators are never satisfied when either side is null.
    pub fn apply(&self, lhs: &FieldValue, rhs: &FieldValue) -> bool {
        match self {
            BinaryOp::Equal => lhs == rhs,
            BinaryOp::NotEqual => lhs != rhs,
            BinaryOp::LessThan => lhs.compare(rhs).is_some_and(|o| o.is_lt()),
            BinaryOp::LessThanOrEqual => lhs.compare(rhs).is_some_and(|o| o.is_le()),
            BinaryOp::GreaterThan => lhs.compare(rhs).is_some_and(|o| o.is_gt()),
            BinaryOp::GreaterThanOrEqual => lhs.compare(rhs).is_some_and(|o| o.is_ge()),
        }
    }
}

/// String methods usable in a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringMethod {
    Contains,
    StartsWith,
    EndsWith,
}

impl StringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringMethod::Contains => "contains",
            StringMethod::StartsWith => "starts with",
            StringMethod::EndsWith => "ends with",
        }
    }

    pub fn apply(&self, haystack: &str, needle: &str) -> bool {
        match self {
            StringMethod::Contains => haystack.contains(needle),
            StringMethod::StartsWith => haystack.starts_with(needle),
            StringMethod::EndsWith => haystack.ends_with(needle),
        }
    }
}

/// What a leaf condition checks on the accessed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// `value <op> literal`
    Binary { op: BinaryOp, literal: FieldValue },
    /// List-valued field contains `literal`
    Membership { literal: String, negate: bool },
    /// String-valued field satisfies `method(literal)`
    StringCall {
        method: StringMethod,
        literal: String,
        negate: bool,
    },
    /// Value is one of `values` (inclusion list)
    AnyOf { values: Vec<FieldValue>, include: bool },
    /// List-valued field contains every one of `values`
    AllOf { values: Vec<String>, include: bool },
}

impl Comparison {
    /// Evaluates the comparison against an accessed value
    pub fn test(&self, value: &FieldValue) -> bool {
        match self {
            Comparison::Binary { op, literal } => op.apply(value, literal),
            Comparison::Membership { literal, negate } => {
                let found = match value {
                    FieldValue::Array(items) => items.iter().any(|item| item == literal),
                    _ => false,
                };
                found != *negate
            }
            Comparison::StringCall {
                method,
                literal,
                negate,
            } => {
                let satisfied = value
                    .as_str()
                    .is_some_and(|haystack| method.apply(haystack, literal));
                satisfied != *negate
            }
            Comparison::AnyOf { values, include } => values.contains(value) == *include,
            Comparison::AllOf { values, include } => {
                let all = match value {
                    FieldValue::Array(items) => values.iter().all(|v| items.contains(v)),
                    _ => false,
                };
                all == *include
            }
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = |negate: bool| if negate { "not " } else { "" };
        match self {
            Comparison::Binary { op, literal } => write!(f, "{} {}", op.symbol(), literal),
            Comparison::Membership { literal, negate } => {
                write!(f, "{}contains {:?}", not(*negate), literal)
            }
            Comparison::StringCall {
                method,
                literal,
                negate,
            } => write!(f, "{}{} {:?}", not(*negate), method.as_str(), literal),
            Comparison::AnyOf { values, include } => {
                write!(f, "{}in [", not(!*include))?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Comparison::AllOf { values, include } => {
                write!(f, "{}contains all {:?}", not(!*include), values)
            }
        }
    }
}

/// A leaf: one accessor checked by one comparison
pub struct Condition<E> {
    pub accessor: Accessor<E>,
    pub comparison: Comparison,
}

impl<E> Condition<E> {
    pub fn test(&self, entity: &E) -> bool {
        self.comparison.test(&self.accessor.get(entity))
    }
}

impl<E> Clone for Condition<E> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            comparison: self.comparison.clone(),
        }
    }
}

impl<E> fmt::Debug for Condition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("accessor", &self.accessor)
            .field("comparison", &self.comparison)
            .finish()
    }
}

/// Boolean predicate over `E`
pub enum Predicate<E> {
    Constant(bool),
    Condition(Condition<E>),
    And(Box<Predicate<E>>, Box<Predicate<E>>),
    Or(Box<Predicate<E>>, Box<Predicate<E>>),
}

impl<E> Predicate<E> {
    /// Matches every entity
    pub fn always_true() -> Self {
        Predicate::Constant(true)
    }

    /// Matches no entity
    pub fn always_false() -> Self {
        Predicate::Constant(false)
    }

    pub fn condition(accessor: Accessor<E>, comparison: Comparison) -> Self {
        Predicate::Condition(Condition {
            accessor,
            comparison,
        })
    }

    /// Conjunction of two predicates. `true` operands are dropped.
    pub fn and(self, other: Predicate<E>) -> Self {
        match (self, other) {
            (Predicate::Constant(true), p) | (p, Predicate::Constant(true)) => p,
            (lhs, rhs) => Predicate::And(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// Disjunction of two predicates. `false` operands are dropped.
    pub fn or(self, other: Predicate<E>) -> Self {
        match (self, other) {
            (Predicate::Constant(false), p) | (p, Predicate::Constant(false)) => p,
            (lhs, rhs) => Predicate::Or(Box::new(lhs), Box::new(rhs)),
        }
    }

    /// Evaluates the predicate against one entity
    pub fn matches(&self, entity: &E) -> bool {
        match self {
            Predicate::Constant(value) => *value,
            Predicate::Condition(condition) => condition.test(entity),
            Predicate::And(lhs, rhs) => lhs.matches(entity) && rhs.matches(entity),
            Predicate::Or(lhs, rhs) => lhs.matches(entity) || rhs.matches(entity),
        }
    }

    /// Returns true if this predicate is the constant `true`
    pub fn is_always_true(&self) -> bool {
        matches!(self, Predicate::Constant(true))
    }

    /// Number of leaf conditions
    pub fn condition_count(&self) -> usize {
        match self {
            Predicate::Constant(_) => 0,
            Predicate::Condition(_) => 1,
            Predicate::And(lhs, rhs) | Predicate::Or(lhs, rhs) => {
                lhs.condition_count() + rhs.condition_count()
            }
        }
    }

    /// Flattens a chain of the same connective into its operands
    fn operands<'a>(&'a self, conjunction: bool, out: &mut Vec<&'a Predicate<E>>) {
        match self {
            Predicate::And(lhs, rhs) if conjunction => {
                lhs.operands(conjunction, out);
                rhs.operands(conjunction, out);
            }
            Predicate::Or(lhs, rhs) if !conjunction => {
                lhs.operands(conjunction, out);
                rhs.operands(conjunction, out);
            }
            other => out.push(other),
        }
    }

    fn fmt_chain(&self, f: &mut fmt::Formatter<'_>, conjunction: bool) -> fmt::Result {
        let mut operands = Vec::new();
        self.operands(conjunction, &mut operands);
        let separator = if conjunction { " AND " } else { " OR " };

        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", separator)?;
            }
            match operand {
                Predicate::And(..) | Predicate::Or(..) => write!(f, "({})", operand)?,
                _ => write!(f, "{}", operand)?,
            }
        }
        Ok(())
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Constant(value) => Predicate::Constant(*value),
            Predicate::Condition(condition) => Predicate::Condition(condition.clone()),
            Predicate::And(lhs, rhs) => Predicate::And(lhs.clone(), rhs.clone()),
            Predicate::Or(lhs, rhs) => Predicate::Or(lhs.clone(), rhs.clone()),
        }
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Predicate::Condition(condition) => f.debug_tuple("Condition").field(condition).finish(),
            Predicate::And(lhs, rhs) => f.debug_tuple("And").field(lhs).field(rhs).finish(),
            Predicate::Or(lhs, rhs) => f.debug_tuple("Or").field(lhs).field(rhs).finish(),
        }
    }
}

impl<E> fmt::Display for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Constant(value) => write!(f, "{}", value),
            Predicate::Condition(condition) => {
                write!(f, "{} {}", condition.accessor.name(), condition.comparison)
            }
            Predicate::And(..) => self.fmt_chain(f, true),
            Predicate::Or(..) => self.fmt_chain(f, false),
        }
    }
}
