//! Symbolic cost expression schema.
//!
//! Performance models return a formula in the problem size `n`, not a
//! number: the framework that calls them substitutes concrete sizes later.
//! The expression is a small tagged tree so downstream tools can inspect
//! and serialize it without re-parsing formula text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A symbolic cost expression over the problem size `n`.
///
/// Combinator constructors ([`CostExpr::add`], [`CostExpr::mul`],
/// [`CostExpr::max`]) fold pairs of constants eagerly; no other
/// simplification is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CostExpr {
    /// The free problem-size variable `n`.
    Size,
    /// A numeric constant (cycles, or a unit coefficient).
    Const(f64),
    /// Sum of two costs.
    Add(Box<CostExpr>, Box<CostExpr>),
    /// Product of two costs.
    Mul(Box<CostExpr>, Box<CostExpr>),
    /// The larger of two costs (e.g. compute- vs memory-bound terms).
    Max(Box<CostExpr>, Box<CostExpr>),
}

impl CostExpr {
    /// The linear-growth expression: the bare size variable `n`.
    pub fn size() -> Self {
        CostExpr::Size
    }

    /// A constant cost.
    pub fn constant(value: f64) -> Self {
        CostExpr::Const(value)
    }

    /// Sum of two expressions, folding constant operands.
    #[must_use]
    pub fn add(self, other: CostExpr) -> Self {
        match (self, other) {
            (CostExpr::Const(a), CostExpr::Const(b)) => CostExpr::Const(a + b),
            (a, b) => CostExpr::Add(Box::new(a), Box::new(b)),
        }
    }

    /// Product of two expressions, folding constant operands.
    #[must_use]
    pub fn mul(self, other: CostExpr) -> Self {
        match (self, other) {
            (CostExpr::Const(a), CostExpr::Const(b)) => CostExpr::Const(a * b),
            (a, b) => CostExpr::Mul(Box::new(a), Box::new(b)),
        }
    }

    /// Maximum of two expressions, folding constant operands.
    #[must_use]
    pub fn max(self, other: CostExpr) -> Self {
        match (self, other) {
            (CostExpr::Const(a), CostExpr::Const(b)) => {
                CostExpr::Const(a.max(b))
            }
            (a, b) => CostExpr::Max(Box::new(a), Box::new(b)),
        }
    }
}

impl fmt::Display for CostExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostExpr::Size => write!(f, "n"),
            CostExpr::Const(v) => write!(f, "{v}"),
            CostExpr::Add(a, b) => write!(f, "({a} + {b})"),
            CostExpr::Mul(a, b) => write!(f, "({a} * {b})"),
            CostExpr::Max(a, b) => write!(f, "max({a}, {b})"),
        }
    }
}
