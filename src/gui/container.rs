//! Container operations: add, insert, remove, lookup and reordering.
//!
//! Indexes address a container's *logical* children. For a table that skips
//! the header row, so index 0 is the first data row.

use tracing::{debug, warn};

use crate::arrange::{Arrangement, LayoutSlot};
use crate::error::{LayoutError, Result};
use crate::reactive::Job;
use crate::tree::WidgetId;
use crate::widget::Widget;
use crate::widgets::{TableItem, TableRow};

use super::Gui;

// ---------------------------------------------------------------------------
// ChildRef / RemovedWidget
// ---------------------------------------------------------------------------

/// Addresses a child either by position or by handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRef {
    Index(usize),
    Widget(WidgetId),
}

impl From<usize> for ChildRef {
    fn from(index: usize) -> Self {
        ChildRef::Index(index)
    }
}

impl From<WidgetId> for ChildRef {
    fn from(id: WidgetId) -> Self {
        ChildRef::Widget(id)
    }
}

/// The content of a removed widget.
///
/// Its node and subtree are gone; pass `widget` to
/// [`Gui::create_boxed`] to place it somewhere else.
pub struct RemovedWidget {
    pub name: Option<String>,
    pub widget: Box<dyn Widget>,
}

impl RemovedWidget {
    /// Typed access to the removed content.
    pub fn downcast_ref<T: Widget + 'static>(&self) -> Option<&T> {
        self.widget.as_any().downcast_ref::<T>()
    }
}

impl std::fmt::Debug for RemovedWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemovedWidget")
            .field("name", &self.name)
            .field("widget_type", &self.widget.widget_type())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl Gui {
    /// Append `widget` to `container`.
    ///
    /// Fails with `InvalidArgument` if the widget is stale, already owned,
    /// the root, or `container` itself or one of its ancestors, or if
    /// `container` is not a container. Adding a plain widget to a table wraps
    /// it in a one-item row.
    pub fn add(&mut self, container: WidgetId, widget: WidgetId, name: Option<&str>) -> Result<()> {
        let len = self.child_count(container)?;
        self.insert(container, len, widget, name)
    }

    /// Insert `widget` at `index`; `OutOfRange` if `index > child_count`.
    pub fn insert(&mut self, container: WidgetId, index: usize, widget: WidgetId, name: Option<&str>) -> Result<()> {
        self.attach_child(container, index, widget, name, None)?;
        self.flush();
        Ok(())
    }

    /// Remove a child and destroy its subtree, returning its content.
    pub fn remove(&mut self, container: WidgetId, child: impl Into<ChildRef>) -> Result<RemovedWidget> {
        let child = self.resolve_child(container, child.into())?;
        let removed = self
            .unlink(container, child)
            .ok_or_else(|| LayoutError::NotFound("widget is not a child of this container".into()))?;
        self.flush();
        Ok(removed)
    }

    /// Remove every child. A table keeps its header.
    pub fn remove_all(&mut self, container: WidgetId) -> Result<()> {
        let children = self.children(container)?;
        let count = children.len();
        for child in children {
            self.unlink(container, child);
        }
        if count > 0 {
            debug!(?container, count, "removed all children");
        }
        self.flush();
        Ok(())
    }

    /// The child at `index`.
    pub fn get(&self, container: WidgetId, index: usize) -> Result<WidgetId> {
        let children = self.data_children(container)?;
        children
            .get(index)
            .copied()
            .ok_or(LayoutError::OutOfRange { index, len: children.len() })
    }

    /// The child added under `name`.
    pub fn get_by_name(&self, container: WidgetId, name: &str) -> Result<WidgetId> {
        self.data_children(container)?
            .iter()
            .copied()
            .find(|&c| self.tree.get(c).and_then(|n| n.name()) == Some(name))
            .ok_or_else(|| LayoutError::NotFound(format!("no child named '{name}'")))
    }

    pub fn child_count(&self, container: WidgetId) -> Result<usize> {
        self.data_children(container).map(<[WidgetId]>::len)
    }

    /// Children in draw order.
    pub fn children(&self, container: WidgetId) -> Result<Vec<WidgetId>> {
        self.data_children(container).map(<[WidgetId]>::to_vec)
    }

    /// Position of `widget` among the children of `container`.
    pub fn index_of(&self, container: WidgetId, widget: WidgetId) -> Result<usize> {
        self.data_children(container)?
            .iter()
            .position(|&c| c == widget)
            .ok_or_else(|| LayoutError::NotFound("widget is not a child of this container".into()))
    }

    /// Move `widget` to `index`, shifting the children in between.
    pub fn set_widget_index(&mut self, container: WidgetId, widget: WidgetId, index: usize) -> Result<()> {
        let from = self.index_of(container, widget)?;
        let len = self.child_count(container)?;
        if index >= len {
            return Err(LayoutError::OutOfRange { index, len });
        }
        if from == index {
            return Ok(());
        }
        let offset = self.header_offset(container);
        self.tree.move_child(container, offset + from, offset + index);
        if let Some(layout) = self.box_layout_mut(container) {
            let slot = layout.slots.remove(from);
            layout.slots.insert(index, slot);
        }
        self.structure_changed(container);
        debug!(?container, ?widget, from, to = index, "moved child");
        self.flush();
        Ok(())
    }

    /// First widget named `name` anywhere below the root, depth-first.
    pub fn find_by_name(&self, name: &str) -> Option<WidgetId> {
        self.tree
            .walk_depth_first(self.root())
            .into_iter()
            .skip(1)
            .find(|&id| self.tree.get(id).and_then(|n| n.name()) == Some(name))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Children of a container, header excluded.
    fn data_children(&self, container: WidgetId) -> Result<&[WidgetId]> {
        let node = self
            .tree
            .get(container)
            .ok_or_else(|| LayoutError::invalid("container does not exist"))?;
        if !node.is_container() {
            return Err(LayoutError::invalid(format!("{} is not a container", node.widget_type())));
        }
        let children = self.tree.children(container);
        Ok(&children[self.header_offset(container).min(children.len())..])
    }

    /// 1 if `container` is a table with a header row, else 0.
    pub(super) fn header_offset(&self, container: WidgetId) -> usize {
        if self.table_layout(container).is_none() {
            return 0;
        }
        match self.tree.children(container).first() {
            Some(&first) if self.is_header(first) => 1,
            _ => 0,
        }
    }

    pub(super) fn is_header(&self, id: WidgetId) -> bool {
        matches!(self.arrangement(id), Some(Arrangement::Row(row)) if row.header)
    }

    /// `(header, data rows)` of a table.
    pub(super) fn split_header(&self, table: WidgetId) -> (Option<WidgetId>, Vec<WidgetId>) {
        let children = self.tree.children(table);
        match self.header_offset(table) {
            0 => (None, children.to_vec()),
            _ => (children.first().copied(), children[1..].to_vec()),
        }
    }

    /// The logical child of `container` that `child` designates.
    ///
    /// Tables and rows wrap plain widgets, so a widget nested inside one of
    /// their children designates that child.
    fn resolve_child(&self, container: WidgetId, child: ChildRef) -> Result<WidgetId> {
        match child {
            ChildRef::Index(index) => self.get(container, index),
            ChildRef::Widget(widget) => {
                let children = self.data_children(container)?;
                if children.contains(&widget) {
                    return Ok(widget);
                }
                let wraps = matches!(self.arrangement(container), Some(Arrangement::Table(_) | Arrangement::Row(_)));
                wraps
                    .then(|| self.tree.ancestors(widget))
                    .and_then(|ancestors| ancestors.into_iter().find(|a| children.contains(a)))
                    .ok_or_else(|| LayoutError::NotFound("widget is not a child of this container".into()))
            }
        }
    }

    /// Validate that `widget` may become a child of `container`.
    pub(super) fn check_attachable(&self, container: WidgetId, widget: WidgetId) -> Result<()> {
        let target = self
            .tree
            .get(container)
            .ok_or_else(|| LayoutError::invalid("container does not exist"))?;
        match &target.arrangement {
            None => return Err(LayoutError::invalid(format!("{} is not a container", target.widget_type()))),
            Some(Arrangement::Item(_)) if !self.tree.children(container).is_empty() => {
                return Err(LayoutError::invalid("a table item holds a single widget"))
            }
            Some(_) => {}
        }
        if !self.tree.contains(widget) {
            return Err(LayoutError::invalid("widget does not exist"));
        }
        if widget == self.root() {
            return Err(LayoutError::invalid("the root cannot be added to a container"));
        }
        if self.tree.parent(widget).is_some() {
            return Err(LayoutError::invalid("widget already belongs to a container"));
        }
        if self.tree.is_ancestor(widget, container) {
            return Err(LayoutError::invalid(
                "a container cannot be added to itself or to one of its descendants",
            ));
        }
        Ok(())
    }

    /// Validate, wrap if needed, and link `widget` at logical `index`.
    ///
    /// Returns the node actually linked into `container`.
    pub(super) fn attach_child(
        &mut self,
        container: WidgetId,
        index: usize,
        widget: WidgetId,
        name: Option<&str>,
        slot: Option<LayoutSlot>,
    ) -> Result<WidgetId> {
        self.check_attachable(container, widget)?;
        let len = self.child_count(container)?;
        if index > len {
            return Err(LayoutError::OutOfRange { index, len });
        }
        let child = self.wrap_for(container, widget);
        let offset = self.header_offset(container);
        self.link(container, offset + index, child, name, slot);
        Ok(child)
    }

    /// Tables hold rows and rows hold items; anything else is wrapped.
    fn wrap_for(&mut self, container: WidgetId, widget: WidgetId) -> WidgetId {
        let align = match self.arrangement(container) {
            Some(Arrangement::Table(table)) => table.align,
            Some(Arrangement::Row(row)) => row.align,
            _ => return widget,
        };
        let is_table = self.table_layout(container).is_some();
        let (is_row, is_item) = match self.arrangement(widget) {
            Some(Arrangement::Row(_)) => (true, false),
            Some(Arrangement::Item(_)) => (false, true),
            _ => (false, false),
        };

        let item = if is_row || is_item {
            widget
        } else {
            let item = self.create(TableItem::new(align));
            self.link(item, 0, widget, None, None);
            item
        };
        if !is_table || is_row {
            return item;
        }
        let row = self.create(TableRow::new());
        self.link(row, 0, item, None, None);
        row
    }

    /// Attach `child` at raw child index `index` and keep slots, column
    /// templates and subscriptions in step.
    pub(super) fn link(
        &mut self,
        container: WidgetId,
        index: usize,
        child: WidgetId,
        name: Option<&str>,
        slot: Option<LayoutSlot>,
    ) {
        self.tree.attach(container, index, child);
        if let (Some(node), Some(name)) = (self.tree.get_mut(child), name) {
            node.name = Some(name.to_owned());
        }

        if let Some(layout) = self.box_layout_mut(container) {
            let at = index.min(layout.slots.len());
            layout.slots.insert(at, slot.unwrap_or_default());
        }
        // Rows inside a table follow the table's column template.
        let row = if self.table_layout(container).is_some() { child } else { container };
        self.apply_columns(row);

        for unknown in self.resubscribe(child) {
            warn!(?child, name = %unknown, "layout refers to an unknown widget name");
        }
        if name.is_some() {
            self.resubscribe_waiting(container, child);
        }
        self.structure_changed(container);
        debug!(?container, ?child, index, name = name.unwrap_or(""), "attached child");
    }

    /// Give layouts near a newly named `child` a chance to pick it up: the
    /// container itself and the other children may have been waiting for
    /// that name.
    fn resubscribe_waiting(&mut self, container: WidgetId, child: WidgetId) {
        let waiting: Vec<WidgetId> = std::iter::once(container)
            .chain(self.tree.children(container).iter().copied())
            .filter(|&w| w != child && self.has_named_targets(w))
            .collect();
        for widget in waiting {
            self.resubscribe(widget);
        }
    }

    /// Copy the owning table's column template into `row`.
    pub(super) fn apply_columns(&mut self, row: WidgetId) {
        let Some(template) = self
            .tree
            .parent(row)
            .and_then(|table| self.table_layout(table))
            .map(|table| table.columns.clone())
        else {
            return;
        };
        if let Some(Arrangement::Row(layout)) = self.arrangement_mut(row) {
            layout.copy_columns(&template);
        }
    }

    /// Detach and destroy `child`, shrinking the slot sequence with it.
    pub(super) fn unlink(&mut self, container: WidgetId, child: WidgetId) -> Option<RemovedWidget> {
        let index = self.tree.index_of(child)?;
        if let Some(layout) = self.box_layout_mut(container) {
            if index < layout.slots.len() {
                layout.slots.remove(index);
            }
        }
        let removed = self.drop_subtree(child);
        self.structure_changed(container);
        debug!(?container, ?child, index, "removed child");
        removed
    }

    /// Destroy a subtree and queue the layouts that were reading it.
    pub(super) fn drop_subtree(&mut self, id: WidgetId) -> Option<RemovedWidget> {
        let mut orphans = Vec::new();
        let mut removed = None;
        for (node_id, node) in self.tree.remove(id) {
            orphans.extend(self.graph.forget(node_id));
            if node_id == id {
                removed = Some(RemovedWidget { name: node.name, widget: node.widget });
            }
        }
        for field in orphans {
            if self.tree.contains(field.widget) {
                self.graph.enqueue(Job::Resolve(field));
            }
        }
        removed
    }

    /// Queue the re-arrangements a child list change causes.
    fn structure_changed(&mut self, container: WidgetId) {
        if self.is_managed(container) {
            self.graph.enqueue(Job::Arrange(container));
        }
        match self.arrangement(container) {
            // A row's items may change its custom height.
            Some(Arrangement::Row(_)) => {
                if let Some(table) = self.tree.parent(container).filter(|&t| self.table_layout(t).is_some()) {
                    self.graph.enqueue(Job::Arrange(table));
                }
            }
            Some(Arrangement::Item(_)) => self.rearrange_table_of(container),
            _ => {}
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
