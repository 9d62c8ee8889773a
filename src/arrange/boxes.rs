//! Box layout: partition a container's main axis among its children.
//!
//! Each child owns a [`LayoutSlot`]. Fixed slots consume exactly their size;
//! ratio slots share whatever is left in proportion to their ratios. The cross
//! axis always spans the whole layout.

use crate::geometry::{Point, Rect, Size, Spacing};
use crate::layout::Axis;

/// Direction in which a box layout stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The axis children are partitioned along.
    pub fn main_axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Horizontal,
            Orientation::Vertical => Axis::Vertical,
        }
    }
}

/// Sizing rule for one child of a box layout.
///
/// A slot with a non-zero `fixed_size` is fixed-governed and its ratio is
/// ignored; otherwise it takes a share of the free space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSlot {
    pub ratio: f32,
    pub fixed_size: f32,
}

impl LayoutSlot {
    /// A ratio-governed slot.
    pub const fn ratio(ratio: f32) -> Self {
        Self { ratio, fixed_size: 0.0 }
    }

    /// A fixed-size slot.
    pub const fn fixed(fixed_size: f32) -> Self {
        Self { ratio: 1.0, fixed_size }
    }

    /// Whether the fixed size governs this slot.
    pub fn is_fixed(&self) -> bool {
        self.fixed_size > 0.0
    }
}

impl Default for LayoutSlot {
    fn default() -> Self {
        Self::ratio(1.0)
    }
}

/// Final position and size computed for one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
}

impl Placement {
    /// The placement as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }
}

/// State of a horizontal or vertical box layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLayout {
    pub orientation: Orientation,
    /// One slot per child, in child order.
    pub slots: Vec<LayoutSlot>,
    /// Gap inserted between consecutive children.
    pub spacing: f32,
}

impl BoxLayout {
    /// An empty layout.
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation, slots: Vec::new(), spacing: 0.0 }
    }

    /// Sum of all fixed sizes, each clamped at zero.
    pub fn fixed_total(&self) -> f32 {
        self.slots.iter().map(|s| s.fixed_size.max(0.0)).sum()
    }

    /// Sum of the ratios of ratio-governed slots.
    pub fn ratio_total(&self) -> f32 {
        self.slots
            .iter()
            .filter(|s| !s.is_fixed())
            .map(|s| s.ratio.max(0.0))
            .sum()
    }

    /// Raw slot rectangles for a layout of size `own`, before any decoration
    /// correction.
    pub fn slot_rects(&self, own: Size) -> Vec<Rect> {
        let axis = self.orientation.main_axis();
        let (main, cross) = match axis {
            Axis::Horizontal => (own.width, own.height),
            Axis::Vertical => (own.height, own.width),
        };

        let gaps = self.spacing * self.slots.len().saturating_sub(1) as f32;
        let free = (main - self.fixed_total() - gaps).max(0.0);
        let ratio_total = self.ratio_total();

        let mut offset = 0.0;
        let mut rects = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let extent = if slot.is_fixed() {
                slot.fixed_size
            } else if ratio_total > 0.0 {
                free * slot.ratio.max(0.0) / ratio_total
            } else {
                0.0
            };

            rects.push(match axis {
                Axis::Horizontal => Rect::new(offset, 0.0, extent, cross),
                Axis::Vertical => Rect::new(0.0, offset, cross, extent),
            });
            offset += extent + self.spacing;
        }
        rects
    }

    /// Placements for a layout of size `own`, given each child's decoration.
    ///
    /// `decorations` must have one entry per slot.
    pub fn arrange(&self, own: Size, decorations: &[Spacing]) -> Vec<Placement> {
        debug_assert_eq!(decorations.len(), self.slots.len());
        self.slot_rects(own)
            .into_iter()
            .zip(decorations)
            .map(|(rect, decoration)| fit_content(rect, *decoration))
            .collect()
    }
}

/// Fit a decorated widget's content into `rect`.
///
/// The decoration is subtracted from the slot and the position shifted by the
/// content offset. If the decoration does not fit, the raw slot is used.
pub fn fit_content(rect: Rect, decoration: Spacing) -> Placement {
    let delta = decoration.total();
    let content = rect.size() - delta;
    if delta == Size::ZERO || content.width < 0.0 || content.height < 0.0 {
        return Placement { position: rect.position(), size: rect.size() };
    }
    Placement { position: rect.position() + decoration.offset(), size: content }
}
