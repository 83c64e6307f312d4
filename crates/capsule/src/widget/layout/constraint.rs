//! Linear layout relationships.
//!
//! Every laid-out item of the pill button is described by four edge
//! variables. Relationships between items are linear [`Constraint`]s over
//! those variables, built with ordinary arithmetic:
//!
//! ```
//! use capsule::widget::layout::{Constraint, LayoutItem, Strength};
//!
//! let spacing = 8.0;
//! let gap = Constraint::equal(
//!     LayoutItem::TitleGuide.left(),
//!     LayoutItem::Icon.right() + spacing,
//!     "icon to title spacing",
//! );
//! assert!(gap.strength().is_required());
//!
//! let hug = Constraint::equal(LayoutItem::Content.width(), 0.0, "content hugging")
//!     .with_strength(Strength::WEAK);
//! assert!(!hug.strength().is_required());
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// The geometric items a pill button lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutItem {
    /// The button's own frame.
    Button,
    /// The rounded background; always spans the button.
    Background,
    /// The centered region containing every present element.
    Content,
    /// The region containing the title and subtitle.
    TitleGuide,
    Icon,
    Title,
    Subtitle,
}

impl LayoutItem {
    /// Number of items.
    pub const COUNT: usize = 7;

    /// All items in variable order.
    pub const ALL: [LayoutItem; Self::COUNT] = [
        Self::Button,
        Self::Background,
        Self::Content,
        Self::TitleGuide,
        Self::Icon,
        Self::Title,
        Self::Subtitle,
    ];

    /// The variable for one edge of this item.
    pub fn edge(self, edge: Edge) -> Variable {
        Variable { item: self, edge }
    }

    /// Left edge.
    pub fn left(self) -> Expression {
        self.edge(Edge::Left).into()
    }

    /// Top edge.
    pub fn top(self) -> Expression {
        self.edge(Edge::Top).into()
    }

    /// Right edge.
    pub fn right(self) -> Expression {
        self.edge(Edge::Right).into()
    }

    /// Bottom edge.
    pub fn bottom(self) -> Expression {
        self.edge(Edge::Bottom).into()
    }

    /// `right - left`.
    pub fn width(self) -> Expression {
        self.right() - self.left()
    }

    /// `bottom - top`.
    pub fn height(self) -> Expression {
        self.bottom() - self.top()
    }

    /// Horizontal center.
    pub fn center_x(self) -> Expression {
        (self.left() + self.right()) * 0.5
    }

    /// Vertical center.
    pub fn center_y(self) -> Expression {
        (self.top() + self.bottom()) * 0.5
    }
}

/// An edge of a [`LayoutItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// All edges in variable order.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];
}

/// A solver variable: one edge of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub item: LayoutItem,
    pub edge: Edge,
}

impl Variable {
    /// Total number of variables.
    pub const COUNT: usize = LayoutItem::COUNT * 4;

    /// Dense index in `0..Variable::COUNT`.
    pub fn index(self) -> usize {
        self.item as usize * 4 + self.edge as usize
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}.{:?}", self.item, self.edge)
    }
}

/// A linear expression `sum(coefficient * variable) + constant`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    terms: Vec<(Variable, f64)>,
    constant: f64,
}

impl Expression {
    /// A constant expression.
    pub fn constant(value: f64) -> Self {
        Self {
            terms: Vec::new(),
            constant: value,
        }
    }

    /// The terms, with like variables merged and zero coefficients dropped.
    pub fn terms(&self) -> Vec<(Variable, f64)> {
        let mut merged: Vec<(Variable, f64)> = Vec::with_capacity(self.terms.len());
        for &(variable, coefficient) in &self.terms {
            match merged.iter_mut().find(|(v, _)| *v == variable) {
                Some((_, c)) => *c += coefficient,
                None => merged.push((variable, coefficient)),
            }
        }
        merged.retain(|(_, c)| *c != 0.0);
        merged
    }

    /// The constant part.
    pub fn constant_part(&self) -> f64 {
        self.constant
    }

    /// Evaluate against variable values.
    pub fn evaluate(&self, value_of: impl Fn(Variable) -> f64) -> f64 {
        self.terms
            .iter()
            .map(|&(variable, coefficient)| coefficient * value_of(variable))
            .sum::<f64>()
            + self.constant
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Self {
            terms: vec![(variable, 1.0)],
            constant: 0.0,
        }
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Add for Expression {
    type Output = Expression;

    fn add(mut self, rhs: Expression) -> Expression {
        self.terms.extend(rhs.terms);
        self.constant += rhs.constant;
        self
    }
}

impl Add<f64> for Expression {
    type Output = Expression;

    fn add(mut self, rhs: f64) -> Expression {
        self.constant += rhs;
        self
    }
}

impl Sub for Expression {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        self + (-rhs)
    }
}

impl Sub<f64> for Expression {
    type Output = Expression;

    fn sub(self, rhs: f64) -> Expression {
        self + (-rhs)
    }
}

impl Mul<f64> for Expression {
    type Output = Expression;

    fn mul(mut self, rhs: f64) -> Expression {
        for (_, coefficient) in &mut self.terms {
            *coefficient *= rhs;
        }
        self.constant *= rhs;
        self
    }
}

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        self * -1.0
    }
}

/// How an expression relates to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `expression == 0`
    Equal,
    /// `expression <= 0`
    LessOrEqual,
    /// `expression >= 0`
    GreaterOrEqual,
}

/// The priority of a constraint.
///
/// Required constraints must hold exactly. Non-required constraints are
/// satisfied as closely as possible, weighted by their strength.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Strength(f64);

impl Strength {
    pub const REQUIRED: Strength = Strength(f64::INFINITY);
    pub const STRONG: Strength = Strength(1_000_000.0);
    pub const MEDIUM: Strength = Strength(1_000.0);
    pub const WEAK: Strength = Strength(1.0);

    /// Whether the constraint must hold exactly.
    pub fn is_required(self) -> bool {
        self.0.is_infinite()
    }

    /// Error weight for non-required constraints.
    pub fn weight(self) -> f64 {
        self.0
    }
}

/// A linear relationship between layout variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    expression: Expression,
    relation: Relation,
    strength: Strength,
    label: &'static str,
}

impl Constraint {
    fn new(
        lhs: impl Into<Expression>,
        rhs: impl Into<Expression>,
        relation: Relation,
        label: &'static str,
    ) -> Self {
        Self {
            expression: lhs.into() - rhs.into(),
            relation,
            strength: Strength::REQUIRED,
            label,
        }
    }

    /// `lhs == rhs`, required.
    pub fn equal(lhs: impl Into<Expression>, rhs: impl Into<Expression>, label: &'static str) -> Self {
        Self::new(lhs, rhs, Relation::Equal, label)
    }

    /// `lhs <= rhs`, required.
    pub fn at_most(lhs: impl Into<Expression>, rhs: impl Into<Expression>, label: &'static str) -> Self {
        Self::new(lhs, rhs, Relation::LessOrEqual, label)
    }

    /// `lhs >= rhs`, required.
    pub fn at_least(lhs: impl Into<Expression>, rhs: impl Into<Expression>, label: &'static str) -> Self {
        Self::new(lhs, rhs, Relation::GreaterOrEqual, label)
    }

    /// Change the strength.
    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = strength;
        self
    }

    /// `lhs - rhs`.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// A short description used in diagnostics.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the constraint holds for the given values within `tolerance`.
    pub fn is_satisfied(&self, value_of: impl Fn(Variable) -> f64, tolerance: f64) -> bool {
        let value = self.expression.evaluate(value_of);
        match self.relation {
            Relation::Equal => value.abs() <= tolerance,
            Relation::LessOrEqual => value <= tolerance,
            Relation::GreaterOrEqual => value >= -tolerance,
        }
    }
}

/// The full relationship set of one layout pass.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Required constraints only.
    pub fn required(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(|c| c.strength.is_required())
    }

    /// Whether any constraint mentions `item`.
    pub fn mentions(&self, item: LayoutItem) -> bool {
        self.constraints
            .iter()
            .any(|c| c.expression.terms.iter().any(|(v, _)| v.item == item))
    }
}

impl Extend<Constraint> for ConstraintSet {
    fn extend<I: IntoIterator<Item = Constraint>>(&mut self, iter: I) {
        self.constraints.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
