//! Gui: owns the widget tree and keeps every widget's geometry current.
//!
//! All mutation goes through [`Gui`]. Each public call applies its change,
//! queues the work it causes (re-evaluating bound layouts, re-arranging
//! containers) and drains that queue before returning, so callers always
//! observe a settled tree.
//!
//! Container operations live in `container`, box layout tuning in `boxes`,
//! table construction in `table` and the render walk in `draw`.

mod boxes;
mod container;
mod draw;
mod table;

use std::any::type_name;
use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::arrange::{Arrangement, BoxLayout, ItemLayout, Stripe, TableLayout};
use crate::config::GuiConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Size, Spacing};
use crate::layout::{Layout, Layout2d, Property, SourceResolver, Target};
use crate::reactive::{DependencyGraph, Field, Job};
use crate::tree::{WidgetId, WidgetNode, WidgetTree};
use crate::widget::{MonospaceMeasure, TextMeasure, Widget};
use crate::widgets::Group;

pub use container::{ChildRef, RemovedWidget};
pub use draw::{DrawCommand, RenderTarget};
pub use table::Cell;

// ---------------------------------------------------------------------------
// Gui
// ---------------------------------------------------------------------------

/// The layout engine.
///
/// # Examples
///
/// ```
/// use gilt_layout::gui::Gui;
/// use gilt_layout::geometry::Size;
/// use gilt_layout::widgets::{Button, HorizontalLayout};
///
/// let mut gui = Gui::default();
/// let bar = gui.create(HorizontalLayout::new());
/// gui.set_size(bar, (400.0, 50.0)).unwrap();
/// gui.add(gui.root(), bar, Some("bar")).unwrap();
///
/// let ok = gui.create(Button::new("OK"));
/// let cancel = gui.create(Button::new("Cancel"));
/// gui.add(bar, ok, None).unwrap();
/// gui.add(bar, cancel, None).unwrap();
/// assert_eq!(gui.size(ok).unwrap(), Size::new(200.0, 50.0));
///
/// gui.set_size(bar, (600.0, 50.0)).unwrap();
/// assert_eq!(gui.size(cancel).unwrap(), Size::new(300.0, 50.0));
/// ```
pub struct Gui {
    tree: WidgetTree,
    graph: DependencyGraph,
    config: GuiConfig,
    measure: Box<dyn TextMeasure>,
    flushing: bool,
}

impl Gui {
    /// Create a gui measuring text with [`MonospaceMeasure`].
    pub fn new(config: GuiConfig) -> Self {
        let measure = MonospaceMeasure::new(config.text_size);
        Self::with_measure(config, measure)
    }

    /// Create a gui with a host-supplied text measurer.
    pub fn with_measure(config: GuiConfig, measure: impl TextMeasure + 'static) -> Self {
        let root = WidgetNode::new(Box::new(Group::new()), config.viewport, Spacing::ZERO)
            .with_arrangement(Some(Arrangement::Free));
        Self {
            tree: WidgetTree::new(root),
            graph: DependencyGraph::new(),
            config,
            measure: Box::new(measure),
            flushing: false,
        }
    }

    /// The root container. It always exists and spans the viewport.
    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// Read-only view of the widget tree.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn node(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.tree.get(id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.tree.contains(id)
    }

    /// Typed access to a widget's content.
    pub fn widget<T: Widget + 'static>(&self, id: WidgetId) -> Option<&T> {
        self.tree.get(id)?.widget.as_any().downcast_ref::<T>()
    }

    /// Mutate a widget's content, then refresh its size and decoration.
    ///
    /// A widget whose width and height are not bound takes its new preferred
    /// size, unless its parent sizes it. A parent that manages its children
    /// re-arranges.
    pub fn update_widget<T: Widget + 'static, R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R> {
        let node = self.tree.get_mut(id).ok_or_else(|| missing(id))?;
        let widget = node
            .widget
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| LayoutError::invalid(format!("widget is not a {}", type_name::<T>())))?;
        let result = f(widget);

        let decoration = node.widget.decoration(self.measure.as_ref());
        let preferred = node.widget.preferred_size(self.measure.as_ref());
        let unbound = node.bindings.get(Property::Width).is_none()
            && node.bindings.get(Property::Height).is_none();
        node.decoration = decoration;

        let sized_by_parent = self.tree.parent(id).is_some_and(|p| self.sizes_children(p));
        if let Some(size) = preferred.filter(|_| unbound && !sized_by_parent) {
            self.assign(id, Property::Width, size.width);
            self.assign(id, Property::Height, size.height);
        }
        self.rearrange_parent(id);
        self.flush();
        Ok(result)
    }

    // -----------------------------------------------------------------------
    // Creation
    // -----------------------------------------------------------------------

    /// Create a detached widget node sized to its preferred size.
    ///
    /// The node stays unowned until it is added to a container.
    pub fn create(&mut self, widget: impl Widget + 'static) -> WidgetId {
        self.create_boxed(Box::new(widget))
    }

    /// [`Gui::create`] for an already boxed widget, such as one returned by
    /// [`Gui::remove`].
    pub fn create_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let measure = self.measure.as_ref();
        let size = widget.preferred_size(measure).unwrap_or(Size::ZERO);
        let decoration = widget.decoration(measure);
        let arrangement = widget.arrangement(&self.config);
        let widget_type = widget.widget_type().to_owned();
        let id = self.tree.insert(WidgetNode::new(widget, size, decoration).with_arrangement(arrangement));
        debug!(?id, widget_type = %widget_type, "created widget");
        id
    }

    /// Destroy a widget and its subtree, wherever it is.
    ///
    /// Attached widgets are removed from their container first.
    pub fn destroy(&mut self, id: WidgetId) -> Result<RemovedWidget> {
        if id == self.root() {
            return Err(LayoutError::invalid("the root cannot be destroyed"));
        }
        if !self.tree.contains(id) {
            return Err(missing(id));
        }
        let removed = match self.tree.parent(id) {
            Some(parent) => self.unlink(parent, id),
            None => self.drop_subtree(id),
        };
        self.flush();
        removed.ok_or_else(|| missing(id))
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Resize the root container.
    pub fn set_viewport(&mut self, size: Size) {
        let root = self.root();
        self.fix(root, Property::Width, size.width);
        self.fix(root, Property::Height, size.height);
        debug!(width = size.width, height = size.height, "viewport resized");
        self.flush();
    }

    pub fn viewport(&self) -> Size {
        self.tree.get(self.root()).map(WidgetNode::size).unwrap_or(Size::ZERO)
    }

    /// Set the position, either as constants or as bound layouts.
    pub fn set_position(&mut self, id: WidgetId, position: impl Into<Layout2d>) -> Result<()> {
        let Layout2d { x, y } = position.into();
        self.existing(id)?;
        self.bind(id, Property::Left, x);
        self.bind(id, Property::Top, y);
        self.flush();
        Ok(())
    }

    /// Set the size, either as constants or as bound layouts.
    pub fn set_size(&mut self, id: WidgetId, size: impl Into<Layout2d>) -> Result<()> {
        let Layout2d { x, y } = size.into();
        self.existing(id)?;
        self.bind(id, Property::Width, x);
        self.bind(id, Property::Height, y);
        self.flush();
        Ok(())
    }

    /// Set a single property.
    pub fn set_layout(&mut self, id: WidgetId, property: Property, layout: impl Into<Layout>) -> Result<()> {
        self.existing(id)?;
        self.bind(id, property, layout.into());
        self.flush();
        Ok(())
    }

    /// The layout bound to `property`, if it is not a constant.
    pub fn binding(&self, id: WidgetId, property: Property) -> Option<&Layout> {
        self.tree.get(id)?.bindings.get(property)
    }

    /// Position relative to the parent's content area.
    pub fn position(&self, id: WidgetId) -> Result<Point> {
        self.existing(id).map(WidgetNode::position)
    }

    pub fn size(&self, id: WidgetId) -> Result<Size> {
        self.existing(id).map(WidgetNode::size)
    }

    /// Size including decoration.
    pub fn full_size(&self, id: WidgetId) -> Result<Size> {
        self.existing(id).map(WidgetNode::full_size)
    }

    /// Position relative to the root's content area.
    pub fn absolute_position(&self, id: WidgetId) -> Result<Point> {
        let own = self.position(id)?;
        Ok(self
            .tree
            .ancestors(id)
            .into_iter()
            .filter_map(|a| self.tree.get(a))
            .fold(own, |acc, node| acc + node.position))
    }

    // -----------------------------------------------------------------------
    // Internals: lookup
    // -----------------------------------------------------------------------

    fn existing(&self, id: WidgetId) -> Result<&WidgetNode> {
        self.tree.get(id).ok_or_else(|| missing(id))
    }

    fn arrangement(&self, id: WidgetId) -> Option<&Arrangement> {
        self.tree.get(id)?.arrangement.as_ref()
    }

    fn arrangement_mut(&mut self, id: WidgetId) -> Option<&mut Arrangement> {
        self.tree.get_mut(id)?.arrangement.as_mut()
    }

    fn box_layout_mut(&mut self, id: WidgetId) -> Option<&mut BoxLayout> {
        self.arrangement_mut(id)?.box_layout_mut()
    }

    fn table_layout(&self, id: WidgetId) -> Option<&TableLayout> {
        match self.arrangement(id)? {
            Arrangement::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Whether `id` positions its children itself.
    fn is_managed(&self, id: WidgetId) -> bool {
        matches!(self.arrangement(id), Some(a) if *a != Arrangement::Free)
    }

    /// Whether `id` decides the size of its children, not just their place.
    fn sizes_children(&self, id: WidgetId) -> bool {
        matches!(
            self.arrangement(id),
            Some(Arrangement::Box(_) | Arrangement::Row(_) | Arrangement::Table(_))
        )
    }

    /// The widget a layout target currently refers to, seen from `owner`.
    fn resolve_target(&self, owner: WidgetId, target: &Target) -> Option<WidgetId> {
        match target {
            Target::This => self.tree.contains(owner).then_some(owner),
            Target::Parent => self.tree.parent(owner),
            Target::Widget(id) => self.tree.contains(*id).then_some(*id),
            Target::Named(name) => self.find_named(owner, name),
        }
    }

    /// Look `name` up among the children of `owner`, then among its
    /// siblings. Names compare case-insensitively.
    fn find_named(&self, owner: WidgetId, name: &str) -> Option<WidgetId> {
        let named = |c: WidgetId| {
            self.tree
                .get(c)
                .and_then(WidgetNode::name)
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        };
        let siblings = self.tree.parent(owner).map(|p| self.tree.children(p)).unwrap_or(&[]);
        self.tree
            .children(owner)
            .iter()
            .chain(siblings)
            .copied()
            .find(|&c| named(c))
    }

    /// Whether any layout on `id` still refers to a widget by name.
    fn has_named_targets(&self, id: WidgetId) -> bool {
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        Property::ALL.into_iter().any(|property| {
            node.bindings.get(property).is_some_and(|layout| {
                layout
                    .sources(property.axis())
                    .iter()
                    .any(|(target, _)| matches!(target, Target::Named(_)))
            })
        })
    }

    // -----------------------------------------------------------------------
    // Internals: bindings
    // -----------------------------------------------------------------------

    /// Bind `property` to `layout`. Constants are written immediately; bound
    /// layouts subscribe to their sources and are queued for evaluation.
    fn bind(&mut self, id: WidgetId, property: Property, layout: Layout) {
        let Some(node) = self.tree.get_mut(id) else {
            return;
        };
        match layout.constant_value() {
            Some(value) => {
                node.bindings.set(property, None);
                self.graph.unsubscribe(Field::new(id, property));
                self.assign(id, property, value);
            }
            None => {
                node.bindings.set(property, Some(layout));
                self.subscribe(id, property);
                self.graph.enqueue(Job::Resolve(Field::new(id, property)));
            }
        }
    }

    /// Replace any binding on `property` with the constant `value`.
    fn fix(&mut self, id: WidgetId, property: Property, value: f32) {
        if let Some(node) = self.tree.get_mut(id) {
            if node.bindings.set(property, None).is_some() {
                self.graph.unsubscribe(Field::new(id, property));
            }
            self.assign(id, property, value);
        }
    }

    /// (Re)register the sources of the layout bound to `property`.
    fn subscribe(&mut self, id: WidgetId, property: Property) {
        let field = Field::new(id, property);
        let sources = match self.tree.get(id).and_then(|n| n.bindings.get(property)) {
            Some(layout) => layout
                .sources(property.axis())
                .into_iter()
                .filter_map(|(target, p)| self.resolve_target(id, &target).map(|w| Field::new(w, p)))
                .collect(),
            None => Vec::new(),
        };
        self.graph.subscribe(field, sources);
    }

    /// Refresh a node's subscriptions after it or a widget near it was
    /// attached: names that now resolve become direct references and
    /// parent-relative layouts follow the new parent.
    ///
    /// Returns the names that are still unknown.
    fn resubscribe(&mut self, id: WidgetId) -> Vec<String> {
        let mut unknown = Vec::new();
        let mut bound = Vec::new();
        for property in Property::ALL {
            let Some(mut layout) = self.tree.get(id).and_then(|n| n.bindings.get(property)).cloned() else {
                continue;
            };
            layout.map_targets(|target| match target {
                Target::Named(name) => {
                    let found = self.find_named(id, name).map(Target::Widget);
                    if found.is_none() && !unknown.contains(name) {
                        unknown.push(name.clone());
                    }
                    found
                }
                _ => None,
            });
            bound.push((property, layout));
        }

        for (property, layout) in bound {
            if let Some(node) = self.tree.get_mut(id) {
                node.bindings.set(property, Some(layout));
            }
            self.subscribe(id, property);
            self.graph.enqueue(Job::Resolve(Field::new(id, property)));
        }
        unknown
    }

    /// Write a property value and queue whatever depends on it.
    fn assign(&mut self, id: WidgetId, property: Property, value: f32) {
        let changed = self.tree.get_mut(id).is_some_and(|node| node.put(property, value));
        if changed {
            self.changed(id, property);
        }
    }

    fn changed(&mut self, id: WidgetId, property: Property) {
        self.graph.notify(Field::new(id, property));
        if !matches!(property, Property::Width | Property::Height) {
            return;
        }
        if self.is_managed(id) {
            self.graph.enqueue(Job::Arrange(id));
        }
        // A resized table cell widget is re-aligned, and may grow its row.
        if let Some(item) = self.tree.parent(id) {
            if let Some(Arrangement::Item(layout)) = self.arrangement(item) {
                let fixed_height = layout.fixed_height;
                self.graph.enqueue(Job::Arrange(item));
                if fixed_height && property == Property::Height {
                    self.rearrange_table_of(item);
                }
            }
        }
    }

    /// Queue the parent's arrangement if it manages `id`.
    fn rearrange_parent(&mut self, id: WidgetId) {
        if let Some(parent) = self.tree.parent(id) {
            if self.is_managed(parent) {
                self.graph.enqueue(Job::Arrange(parent));
            }
        }
    }

    /// Queue the table two levels above a table item.
    fn rearrange_table_of(&mut self, item: WidgetId) {
        let table = self.tree.parent(item).and_then(|row| self.tree.parent(row));
        if let Some(table) = table.filter(|&t| self.table_layout(t).is_some()) {
            self.graph.enqueue(Job::Arrange(table));
        }
    }

    // -----------------------------------------------------------------------
    // Internals: flush
    // -----------------------------------------------------------------------

    /// Drain the job queue.
    ///
    /// Jobs run in FIFO order. A job that runs more than
    /// `config.max_evaluations` times in one flush is part of a dependency
    /// cycle and is dropped.
    fn flush(&mut self) {
        if self.flushing {
            return;
        }
        self.flushing = true;
        let limit = self.config.max_evaluations;
        let mut runs: HashMap<Job, usize> = HashMap::new();
        while let Some(job) = self.graph.pop() {
            let count = runs.entry(job).or_insert(0);
            *count += 1;
            if *count > limit {
                if *count == limit + 1 {
                    warn!(?job, limit, "dependency cycle cut");
                }
                continue;
            }
            match job {
                Job::Resolve(field) => self.resolve(field),
                Job::Arrange(id) => self.arrange(id),
            }
        }
        self.flushing = false;
    }

    fn resolve(&mut self, field: Field) {
        let Some(layout) = self.tree.get(field.widget).and_then(|n| n.bindings.get(field.property)) else {
            return;
        };
        let resolver = Resolver { gui: self, owner: field.widget };
        let value = layout.evaluate(&resolver, field.property.axis());
        trace!(widget = ?field.widget, property = field.property.name(), value, "resolved layout");
        self.assign(field.widget, field.property, value);
    }

    /// Place every child of a managed container.
    fn arrange(&mut self, id: WidgetId) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let own = node.size;
        let Some(arrangement) = node.arrangement.clone() else {
            return;
        };
        trace!(?id, kind = arrangement.kind(), width = own.width, height = own.height, "arranging");
        match arrangement {
            Arrangement::Free => {}
            Arrangement::Box(layout) => self.arrange_box(id, own, &layout),
            Arrangement::Row(row) => self.arrange_box(id, own, &row.columns),
            Arrangement::Table(table) => self.arrange_table(id, own, &table),
            Arrangement::Item(item) => self.arrange_item(id, own, &item),
        }
    }

    fn arrange_box(&mut self, id: WidgetId, own: Size, layout: &BoxLayout) {
        let children = self.tree.children(id).to_vec();
        if children.len() != layout.slots.len() {
            warn!(?id, children = children.len(), slots = layout.slots.len(), "slot count out of sync");
            return;
        }
        let decorations: Vec<Spacing> = children
            .iter()
            .map(|&c| self.tree.get(c).map(WidgetNode::decoration).unwrap_or(Spacing::ZERO))
            .collect();
        for (child, placement) in children.into_iter().zip(layout.arrange(own, &decorations)) {
            self.place(child, placement.position, placement.size);
        }
    }

    fn arrange_table(&mut self, id: WidgetId, own: Size, table: &TableLayout) {
        let (header, rows) = self.split_header(id);
        let heights: Vec<f32> = rows.iter().map(|&row| table.row_extent(self.custom_height(row))).collect();
        let (header_top, tops) = table.stack(header.map(|_| table.row_height), &heights);

        if let (Some(header), Some(top)) = (header, header_top) {
            self.place(header, Point::new(0.0, top), Size::new(own.width, table.row_height));
        }
        for (index, ((row, top), height)) in rows.into_iter().zip(tops).zip(heights).enumerate() {
            if let Some(Arrangement::Row(layout)) = self.arrangement_mut(row) {
                layout.stripe = table.striped.then(|| Stripe::for_index(index));
            }
            self.place(row, Point::new(0.0, top), Size::new(own.width, height));
        }
    }

    fn arrange_item(&mut self, id: WidgetId, own: Size, item: &ItemLayout) {
        let Some(&child) = self.tree.children(id).first() else {
            return;
        };
        let Some(node) = self.tree.get(child) else {
            return;
        };
        let position = item.place(own, node.size, node.decoration);
        self.fix(child, Property::Left, position.x);
        self.fix(child, Property::Top, position.y);
    }

    /// Largest full height among a row's fixed-height items; stored on the
    /// row as its custom height.
    fn custom_height(&mut self, row: WidgetId) -> f32 {
        let height = self
            .tree
            .children(row)
            .iter()
            .filter(|&&item| matches!(self.arrangement(item), Some(Arrangement::Item(i)) if i.fixed_height))
            .filter_map(|&item| self.tree.children(item).first().and_then(|&w| self.tree.get(w)))
            .map(|node| node.full_size().height)
            .fold(0.0, f32::max);
        if let Some(Arrangement::Row(layout)) = self.arrangement_mut(row) {
            layout.custom_height = height;
        }
        height
    }

    /// Give a managed child constant geometry.
    fn place(&mut self, child: WidgetId, position: Point, size: Size) {
        self.fix(child, Property::Left, position.x);
        self.fix(child, Property::Top, position.y);
        self.fix(child, Property::Width, size.width);
        self.fix(child, Property::Height, size.height);
    }
}

impl Default for Gui {
    fn default() -> Self {
        Self::new(GuiConfig::default())
    }
}

impl std::fmt::Debug for Gui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui")
            .field("widgets", &self.tree.len())
            .field("bound_fields", &self.graph.bound_fields())
            .field("config", &self.config)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Reads sources for a layout owned by `owner`.
struct Resolver<'a> {
    gui: &'a Gui,
    owner: WidgetId,
}

impl SourceResolver for Resolver<'_> {
    fn resolve(&self, target: &Target, property: Property) -> Option<f32> {
        match self.gui.resolve_target(self.owner, target) {
            Some(id) => self.gui.tree.get(id).map(|node| node.get(property)),
            None => {
                match target {
                    Target::Widget(id) => {
                        warn!(owner = ?self.owner, source = ?id, "layout reads a destroyed widget, using 0")
                    }
                    Target::Named(name) => {
                        debug!(owner = ?self.owner, name = %name, "layout reads an unknown widget name, using 0")
                    }
                    Target::This | Target::Parent => {}
                }
                None
            }
        }
    }
}

fn missing(id: WidgetId) -> LayoutError {
    LayoutError::invalid(format!("widget {id:?} does not exist"))
}

// ===========================================================================
// Tests
// ===========================================================================
