//! Containers and their children.
//!
//! A [`Container`] owns exactly one active [`LayoutKind`], an ordered list of
//! [`Child`] elements and one [`Constraint`] per child. Children are stored
//! in a slotmap so a [`ChildId`] stays stable while the engine reorders,
//! re-places and hides them.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::SlotMap;

use horizon_reflow_core::{ChildId, ContainerId};

use crate::attributes::{self, Attributes};
use crate::layout::{Constraint, FormLayout, LayoutKind};

/// A container shared between the host and a layout controller.
pub type SharedContainer = Arc<Mutex<Container>>;

/// A placed element inside a container.
#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    name: String,
    visible: bool,
    attributes: Attributes,
    classes: Vec<String>,
}

impl Child {
    /// Create a visible child with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            attributes: Attributes::new(),
            classes: Vec::new(),
        }
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Builder: add a style class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: start hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// The child's name (its host identifier).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the child is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the child.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The child's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the child's attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// The child's style classes.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the child carries a style class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a style class if not already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }
}

/// A host element owning a layout and its children.
#[derive(Debug)]
pub struct Container {
    id: ContainerId,
    layout: LayoutKind,
    children: SlotMap<ChildId, Child>,
    order: Vec<ChildId>,
    constraints: HashMap<ChildId, Constraint>,
    attributes: Attributes,
    classes: Vec<String>,
    visible: bool,
    disposed: bool,
}

impl Container {
    /// Create an empty container with the given layout.
    pub fn new(layout: impl Into<LayoutKind>) -> Self {
        Self {
            id: ContainerId::next(),
            layout: layout.into(),
            children: SlotMap::with_key(),
            order: Vec::new(),
            constraints: HashMap::new(),
            attributes: Attributes::new(),
            classes: Vec::new(),
            visible: true,
            disposed: false,
        }
    }

    /// Builder: set a container attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Wrap in the shared handle controllers operate on.
    pub fn into_shared(self) -> SharedContainer {
        Arc::new(Mutex::new(self))
    }

    /// The container's identity.
    pub fn id(&self) -> ContainerId {
        self.id
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The active layout.
    pub fn layout(&self) -> &LayoutKind {
        &self.layout
    }

    /// Install a new layout.
    pub fn set_layout(&mut self, layout: impl Into<LayoutKind>) {
        self.layout = layout.into();
    }

    /// The active layout, if it is a form layout.
    pub fn form_layout(&self) -> Option<&FormLayout> {
        self.layout.as_form()
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append a child placed at `constraint`.
    pub fn add_child(&mut self, child: Child, constraint: Constraint) -> ChildId {
        let id = self.children.insert(child);
        self.order.push(id);
        self.constraints.insert(id, constraint);
        id
    }

    /// Insert a child at a sibling position (clamped to the child count).
    pub fn insert_child(&mut self, index: usize, child: Child, constraint: Constraint) -> ChildId {
        let id = self.children.insert(child);
        self.order.insert(index.min(self.order.len()), id);
        self.constraints.insert(id, constraint);
        id
    }

    /// Remove a child and its constraint.
    pub fn remove_child(&mut self, id: ChildId) -> Option<Child> {
        let child = self.children.remove(id)?;
        self.order.retain(|&c| c != id);
        self.constraints.remove(&id);
        Some(child)
    }

    /// Children in sibling order.
    pub fn children(&self) -> &[ChildId] {
        &self.order
    }

    /// Children that take part in reflow, in sibling order.
    pub fn reflow_children(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.order.iter().copied().filter(|&id| {
            self.children
                .get(id)
                .is_some_and(|child| !attributes::is_excluded(child))
        })
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.order.len()
    }

    /// Look up a child.
    pub fn child(&self, id: ChildId) -> Option<&Child> {
        self.children.get(id)
    }

    /// Look up a child mutably.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut Child> {
        self.children.get_mut(id)
    }

    /// Find the first child with a name.
    pub fn find_child(&self, name: &str) -> Option<ChildId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.children.get(id).is_some_and(|c| c.name() == name))
    }

    /// Current constraint of a child.
    pub fn constraint(&self, id: ChildId) -> Option<&Constraint> {
        self.constraints.get(&id)
    }

    /// Replace a child's constraint wholesale.
    ///
    /// Returns `false` if the child does not belong to this container.
    pub fn replace_constraint(&mut self, id: ChildId, constraint: Constraint) -> bool {
        if !self.children.contains_key(id) {
            return false;
        }
        self.constraints.insert(id, constraint);
        true
    }

    /// Move a child to a sibling position (clamped to the child count).
    pub fn reorder_child(&mut self, id: ChildId, index: usize) -> bool {
        let Some(from) = self.order.iter().position(|&c| c == id) else {
            return false;
        };
        self.order.remove(from);
        self.order.insert(index.min(self.order.len()), id);
        true
    }

    // =========================================================================
    // Attributes, classes, visibility
    // =========================================================================

    /// The container's attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Mutable access to the container's attributes.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// The container's style classes.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the container carries a style class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a style class if not already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Remove every class matching a predicate.
    pub fn remove_classes(&mut self, mut predicate: impl FnMut(&str) -> bool) {
        self.classes.retain(|c| !predicate(c));
    }

    /// Whether the container is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the container.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mark the container as destroyed by the host.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Whether the host has destroyed the container.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
