//! Bound layout values: [`Layout`], [`Layout2d`] and the `bind_*` helpers.
//!
//! A layout is a small expression tree over constants and *sources*: the
//! left/top/width/height of another widget or of the parent container. The
//! expression itself is pure; the [`Gui`](crate::gui::Gui) registers the
//! sources it reads in the dependency graph and re-evaluates it whenever one
//! of them changes.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::geometry::{Point, Size};
use crate::tree::WidgetId;

use super::parser::{self, ParseError};

// ---------------------------------------------------------------------------
// Property / Axis
// ---------------------------------------------------------------------------

/// A geometric quantity of a widget that a layout can read or define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Left,
    Top,
    Width,
    Height,
}

impl Property {
    /// All four properties, in field order.
    pub const ALL: [Property; 4] = [Property::Left, Property::Top, Property::Width, Property::Height];

    /// The axis this property lies on.
    pub fn axis(self) -> Axis {
        match self {
            Property::Left | Property::Width => Axis::Horizontal,
            Property::Top | Property::Height => Axis::Vertical,
        }
    }

    /// Property name as written in layout strings.
    pub fn name(self) -> &'static str {
        match self {
            Property::Left => "left",
            Property::Top => "top",
            Property::Width => "width",
            Property::Height => "height",
        }
    }
}

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The extent property along this axis.
    pub fn extent(self) -> Property {
        match self {
            Axis::Horizontal => Property::Width,
            Axis::Vertical => Property::Height,
        }
    }

    /// The perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// The widget a source expression reads from.
///
/// References are weak: a destroyed target simply stops resolving.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// The widget holding the layout.
    This,
    /// The container that owns the widget holding the layout.
    Parent,
    /// A specific widget.
    Widget(WidgetId),
    /// A widget looked up by name among the owner's children, then its
    /// siblings.
    Named(String),
}

impl From<WidgetId> for Target {
    fn from(id: WidgetId) -> Self {
        Target::Widget(id)
    }
}

// ---------------------------------------------------------------------------
// Expr
// ---------------------------------------------------------------------------

/// Binary operator in a layout expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Min,
    Max,
}

impl BinaryOp {
    fn apply(self, lhs: f32, rhs: f32) -> f32 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
            BinaryOp::Min => lhs.min(rhs),
            BinaryOp::Max => lhs.max(rhs),
        }
    }
}

/// Layout expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A fixed value.
    Constant(f32),
    /// Fraction of the parent's dimension on the axis the layout is used for.
    Relative(f32),
    /// A property of another widget.
    Source { target: Target, property: Property },
    /// `-expr`
    Neg(Box<Expr>),
    /// `lhs op rhs`, including `min(lhs, rhs)` and `max(lhs, rhs)`.
    Binary { op: BinaryOp, lhs: Box<Expr>, rhs: Box<Expr> },
}

impl Expr {
    pub(crate) fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    fn evaluate(&self, resolver: &dyn SourceResolver, axis: Axis) -> f32 {
        match self {
            Expr::Constant(value) => *value,
            Expr::Relative(factor) => {
                factor * resolver.resolve(&Target::Parent, axis.extent()).unwrap_or(0.0)
            }
            Expr::Source { target, property } => resolver.resolve(target, *property).unwrap_or(0.0),
            Expr::Neg(inner) => -inner.evaluate(resolver, axis),
            Expr::Binary { op, lhs, rhs } => {
                op.apply(lhs.evaluate(resolver, axis), rhs.evaluate(resolver, axis))
            }
        }
    }

    fn collect_sources(&self, axis: Axis, out: &mut Vec<(Target, Property)>) {
        match self {
            Expr::Constant(_) => {}
            Expr::Relative(_) => out.push((Target::Parent, axis.extent())),
            Expr::Source { target, property } => out.push((target.clone(), *property)),
            Expr::Neg(inner) => inner.collect_sources(axis, out),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_sources(axis, out);
                rhs.collect_sources(axis, out);
            }
        }
    }

    fn map_targets(&mut self, f: &mut impl FnMut(&Target) -> Option<Target>) {
        match self {
            Expr::Source { target, .. } => {
                if let Some(replacement) = f(target) {
                    *target = replacement;
                }
            }
            Expr::Neg(inner) => inner.map_targets(f),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.map_targets(f);
                rhs.map_targets(f);
            }
            Expr::Constant(_) | Expr::Relative(_) => {}
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Relative(factor) => write!(f, "{}%", factor * 100.0),
            Expr::Source { target, property } => match target {
                Target::This => write!(f, "{}", property.name()),
                Target::Parent => write!(f, "&.{}", property.name()),
                Target::Named(name) => write!(f, "{name}.{}", property.name()),
                Target::Widget(id) => write!(f, "{id:?}.{}", property.name()),
            },
            Expr::Neg(inner) => write!(f, "-({inner})"),
            Expr::Binary { op, lhs, rhs } => match op {
                BinaryOp::Add => write!(f, "({lhs} + {rhs})"),
                BinaryOp::Sub => write!(f, "({lhs} - {rhs})"),
                BinaryOp::Mul => write!(f, "({lhs} * {rhs})"),
                BinaryOp::Div => write!(f, "({lhs} / {rhs})"),
                BinaryOp::Min => write!(f, "min({lhs}, {rhs})"),
                BinaryOp::Max => write!(f, "max({lhs}, {rhs})"),
            },
        }
    }
}

/// Resolves source quantities while evaluating a layout.
pub trait SourceResolver {
    /// Current value of `property` on `target`, or `None` when the target
    /// cannot be resolved (destroyed widget, detached parent, unknown name).
    fn resolve(&self, target: &Target, property: Property) -> Option<f32>;
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// A one-dimensional bound layout value.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    expr: Expr,
}

impl Layout {
    /// A constant layout.
    pub fn constant(value: f32) -> Self {
        Self { expr: Expr::Constant(value) }
    }

    /// A fraction of the parent's matching dimension (`0.8` is `"80%"`).
    pub fn relative(factor: f32) -> Self {
        Self { expr: Expr::Relative(factor) }
    }

    /// Wrap an expression tree.
    pub fn from_expr(expr: Expr) -> Self {
        Self { expr }
    }

    /// Parse a layout string such as `"50% - 10"` or `"min(ok.width, 200)"`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input).map(Self::from_expr)
    }

    /// Parse a layout string, degrading a malformed string to `0`.
    ///
    /// The failure is reported through `tracing` instead of being returned.
    pub fn parse_lossy(input: &str) -> Self {
        match Self::parse(input) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::warn!("invalid layout string '{}': {}", input, err);
                Self::constant(0.0)
            }
        }
    }

    /// Parse a plain percentage such as `"80%"`.
    ///
    /// Unlike [`Layout::parse`] this only accepts a single number followed by
    /// `%`.
    pub fn percent(input: &str) -> Result<Self, ParseError> {
        parser::parse_percent(input).map(Self::relative)
    }

    /// The underlying expression.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The value, if this layout does not depend on any source.
    pub fn constant_value(&self) -> Option<f32> {
        match self.expr {
            Expr::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the layout reads any other widget.
    pub fn is_bound(&self) -> bool {
        self.constant_value().is_none()
    }

    /// Evaluate the layout for a property on `axis`.
    pub fn evaluate(&self, resolver: &dyn SourceResolver, axis: Axis) -> f32 {
        self.expr.evaluate(resolver, axis)
    }

    /// Every `(target, property)` the layout reads when used on `axis`.
    pub fn sources(&self, axis: Axis) -> Vec<(Target, Property)> {
        let mut out = Vec::new();
        self.expr.collect_sources(axis, &mut out);
        out
    }

    /// Rewrite targets in place (used to resolve widget names on attach).
    pub(crate) fn map_targets(&mut self, mut f: impl FnMut(&Target) -> Option<Target>) {
        self.expr.map_targets(&mut f);
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::constant(0.0)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr.fmt(f)
    }
}

impl From<f32> for Layout {
    fn from(value: f32) -> Self {
        Self::constant(value)
    }
}

impl From<&str> for Layout {
    fn from(input: &str) -> Self {
        Self::parse_lossy(input)
    }
}

impl From<Expr> for Layout {
    fn from(expr: Expr) -> Self {
        Self::from_expr(expr)
    }
}

impl Add for Layout {
    type Output = Layout;
    fn add(self, rhs: Layout) -> Layout {
        Layout::from_expr(Expr::binary(BinaryOp::Add, self.expr, rhs.expr))
    }
}

impl Sub for Layout {
    type Output = Layout;
    fn sub(self, rhs: Layout) -> Layout {
        Layout::from_expr(Expr::binary(BinaryOp::Sub, self.expr, rhs.expr))
    }
}

impl Mul for Layout {
    type Output = Layout;
    fn mul(self, rhs: Layout) -> Layout {
        Layout::from_expr(Expr::binary(BinaryOp::Mul, self.expr, rhs.expr))
    }
}

impl Mul<f32> for Layout {
    type Output = Layout;
    fn mul(self, rhs: f32) -> Layout {
        self * Layout::constant(rhs)
    }
}

impl Div for Layout {
    type Output = Layout;
    fn div(self, rhs: Layout) -> Layout {
        Layout::from_expr(Expr::binary(BinaryOp::Div, self.expr, rhs.expr))
    }
}

impl Neg for Layout {
    type Output = Layout;
    fn neg(self) -> Layout {
        Layout::from_expr(Expr::Neg(Box::new(self.expr)))
    }
}

// ---------------------------------------------------------------------------
// Layout2d
// ---------------------------------------------------------------------------

/// A pair of layouts, used for positions and sizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout2d {
    pub x: Layout,
    pub y: Layout,
}

impl Layout2d {
    /// Create from two layouts.
    pub fn new(x: impl Into<Layout>, y: impl Into<Layout>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

impl From<(f32, f32)> for Layout2d {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(&str, &str)> for Layout2d {
    fn from((x, y): (&str, &str)) -> Self {
        Self::new(x, y)
    }
}

impl From<(Layout, Layout)> for Layout2d {
    fn from((x, y): (Layout, Layout)) -> Self {
        Self { x, y }
    }
}

impl From<Size> for Layout2d {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<Point> for Layout2d {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

// ---------------------------------------------------------------------------
// bind_* helpers
// ---------------------------------------------------------------------------

fn bind(target: Target, property: Property, factor: f32) -> Layout {
    let source = Expr::Source { target, property };
    if factor == 1.0 {
        Layout::from_expr(source)
    } else {
        Layout::from_expr(Expr::binary(BinaryOp::Mul, source, Expr::Constant(factor)))
    }
}

/// `factor` times the left edge of `target`.
pub fn bind_left(target: impl Into<Target>, factor: f32) -> Layout {
    bind(target.into(), Property::Left, factor)
}

/// `factor` times the top edge of `target`.
pub fn bind_top(target: impl Into<Target>, factor: f32) -> Layout {
    bind(target.into(), Property::Top, factor)
}

/// `factor` times the width of `target`.
pub fn bind_width(target: impl Into<Target>, factor: f32) -> Layout {
    bind(target.into(), Property::Width, factor)
}

/// `factor` times the height of `target`.
pub fn bind_height(target: impl Into<Target>, factor: f32) -> Layout {
    bind(target.into(), Property::Height, factor)
}

/// `factor` times the right edge (`left + width`) of `target`.
pub fn bind_right(target: impl Into<Target>, factor: f32) -> Layout {
    let target = target.into();
    (bind(target.clone(), Property::Left, 1.0) + bind(target, Property::Width, 1.0)) * factor
}

/// `factor` times the bottom edge (`top + height`) of `target`.
pub fn bind_bottom(target: impl Into<Target>, factor: f32) -> Layout {
    let target = target.into();
    (bind(target.clone(), Property::Top, 1.0) + bind(target, Property::Height, 1.0)) * factor
}

/// The position of `target`, scaled per axis.
pub fn bind_position(target: impl Into<Target>, factor: (f32, f32)) -> Layout2d {
    let target = target.into();
    Layout2d { x: bind_left(target.clone(), factor.0), y: bind_top(target, factor.1) }
}

/// The size of `target`, scaled per axis.
pub fn bind_size(target: impl Into<Target>, factor: (f32, f32)) -> Layout2d {
    let target = target.into();
    Layout2d { x: bind_width(target.clone(), factor.0), y: bind_height(target, factor.1) }
}

// ===========================================================================
// Tests
// ===========================================================================
