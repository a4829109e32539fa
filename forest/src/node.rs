//! Node structure for the forest.

use std::collections::BTreeSet;

use grove_core::{Condition, ConditionKind, ConditionReason, Conditions, SourceObject};

/// A named node in the forest.
///
/// Nodes are owned exclusively by the [`Forest`](crate::Forest); the parent
/// link is the *name* of another node in the same forest, never an owning
/// reference, so cyclic parent chains are representable data.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique name within the forest.
    name: String,
    /// True only if the node was explicitly marked existing. A node can be
    /// present in the forest (referenced as someone's parent) without
    /// existing.
    exists: bool,
    /// Name of the parent node, or `None` for a root.
    parent: Option<String>,
    /// Names of child nodes, maintained by the forest on parent wiring.
    children: BTreeSet<String>,
    /// True if this node is a "sub" child of its parent.
    pub is_sub: bool,
    /// Derived status conditions.
    conditions: Conditions,
    /// Opaque external object attached to this node, if any.
    source_object: Option<SourceObject>,
}

impl Node {
    /// Create a new non-existent node with no parent.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exists: false,
            parent: None,
            children: BTreeSet::new(),
            is_sub: false,
            conditions: Conditions::new(),
            source_object: None,
        }
    }

    /// Get the node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether the node has been marked existing.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Mark the node as existing.
    pub fn set_exists(&mut self) {
        self.exists = true;
    }

    /// Get the name of the parent node, if any.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Check whether the node is a root (has no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn set_parent(&mut self, parent: impl Into<String>) {
        self.parent = Some(parent.into());
    }

    pub(crate) fn add_child(&mut self, child: impl Into<String>) {
        self.children.insert(child.into());
    }

    pub(crate) fn remove_child(&mut self, child: &str) {
        self.children.remove(child);
    }

    /// Get the names of this node's children, sorted.
    pub fn child_names(&self) -> Vec<String> {
        self.children.iter().cloned().collect()
    }

    /// Check whether the node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Append a status condition. Exact duplicates are dropped.
    pub fn set_condition(
        &mut self,
        kind: ConditionKind,
        reason: ConditionReason,
        message: impl Into<String>,
    ) {
        self.conditions.push(Condition::new(kind, reason, message));
    }

    /// Get all conditions on this node, in insertion order.
    pub fn conditions(&self) -> &[Condition] {
        self.conditions.all()
    }

    /// Check whether any condition carries the given reason.
    pub fn has_condition(&self, reason: ConditionReason) -> bool {
        self.conditions.has_reason(reason)
    }

    /// Attach an opaque external object to this node.
    pub fn set_source_object(&mut self, object: SourceObject) {
        self.source_object = Some(object);
    }

    /// Get the attached external object, if any.
    pub fn source_object(&self) -> Option<&SourceObject> {
        self.source_object.as_ref()
    }
}
