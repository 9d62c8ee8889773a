//! Dependency graph for bound layouts.
//!
//! Every bound field (a widget's left/top/width/height driven by a
//! [`Layout`](crate::layout::Layout)) subscribes to the concrete
//! `(widget, property)` sources it reads. When a source changes, its
//! subscribers are queued as [`Job::Resolve`]; container resizes queue
//! [`Job::Arrange`]. The queue is drained in FIFO order by
//! [`Gui`](crate::gui::Gui) before each public call returns.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexSet;

use crate::layout::Property;
use crate::tree::WidgetId;

// ---------------------------------------------------------------------------
// Field / Job
// ---------------------------------------------------------------------------

/// A single geometric property of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub widget: WidgetId,
    pub property: Property,
}

impl Field {
    pub fn new(widget: WidgetId, property: Property) -> Self {
        Self { widget, property }
    }
}

/// Pending work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Job {
    /// Re-evaluate the layout bound to a field.
    Resolve(Field),
    /// Re-run a container's arrangement.
    Arrange(WidgetId),
}

// ---------------------------------------------------------------------------
// DependencyGraph
// ---------------------------------------------------------------------------

/// Subscriptions between fields plus the dirty queue.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// source -> fields reading it, in subscription order.
    subscribers: HashMap<Field, IndexSet<Field>>,
    /// field -> sources it reads.
    sources: HashMap<Field, Vec<Field>>,
    /// Pending jobs in FIFO order.
    queue: VecDeque<Job>,
    /// Jobs currently in `queue`; a job already queued is not queued twice.
    queued: HashSet<Job>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sources `field` reads.
    pub fn subscribe(&mut self, field: Field, sources: Vec<Field>) {
        self.unsubscribe(field);
        if sources.is_empty() {
            return;
        }
        for source in &sources {
            self.subscribers.entry(*source).or_default().insert(field);
        }
        self.sources.insert(field, sources);
    }

    /// Drop every subscription held by `field`.
    pub fn unsubscribe(&mut self, field: Field) {
        let Some(sources) = self.sources.remove(&field) else {
            return;
        };
        for source in sources {
            if let Some(subs) = self.subscribers.get_mut(&source) {
                subs.shift_remove(&field);
                if subs.is_empty() {
                    self.subscribers.remove(&source);
                }
            }
        }
    }

    /// Forget a destroyed widget: its own subscriptions, the subscriptions
    /// others hold on it, and its queued jobs.
    ///
    /// Returns the fields that were reading the widget.
    pub fn forget(&mut self, widget: WidgetId) -> Vec<Field> {
        let mut orphans = Vec::new();
        for property in Property::ALL {
            let field = Field::new(widget, property);
            self.unsubscribe(field);
            if let Some(dependents) = self.subscribers.remove(&field) {
                for dependent in dependents {
                    if let Some(list) = self.sources.get_mut(&dependent) {
                        list.retain(|s| *s != field);
                    }
                    orphans.push(dependent);
                }
            }
        }
        let stale = |job: &Job| match job {
            Job::Resolve(field) => field.widget == widget,
            Job::Arrange(id) => *id == widget,
        };
        self.queue.retain(|job| !stale(job));
        self.queued.retain(|job| !stale(job));
        orphans
    }

    /// Fields reading `source`.
    pub fn dependents(&self, source: Field) -> impl Iterator<Item = Field> + '_ {
        self.subscribers.get(&source).into_iter().flat_map(|subs| subs.iter().copied())
    }

    /// Sources `field` currently reads.
    pub fn sources_of(&self, field: Field) -> &[Field] {
        self.sources.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Queue the dependents of `source` for re-evaluation.
    pub fn notify(&mut self, source: Field) {
        let dependents: Vec<Field> = self.dependents(source).collect();
        for dependent in dependents {
            self.enqueue(Job::Resolve(dependent));
        }
    }

    pub fn enqueue(&mut self, job: Job) {
        if self.queued.insert(job) {
            self.queue.push_back(job);
        }
    }

    /// Take the oldest pending job.
    pub fn pop(&mut self) -> Option<Job> {
        let job = self.queue.pop_front()?;
        self.queued.remove(&job);
        Some(job)
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of fields with at least one source.
    pub fn bound_fields(&self) -> usize {
        self.sources.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
