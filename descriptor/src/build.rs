//! Two-pass forest construction from a positional descriptor.

use tracing::debug;

use grove_core::{ConditionKind, ConditionReason, SourceObject};
use grove_forest::Forest;

use crate::{position_name, Descriptor, Entry};

/// Build a forest from a descriptor.
///
/// Construction never fails: a reference to a node that was never declared
/// leaves a non-existent placeholder in the forest and a `ParentMissing`
/// condition on the child, and every node on a parent-link cycle (including
/// a self-parent) is annotated with `InCycle`.
pub fn build(descriptor: &Descriptor) -> Forest {
    let mut forest = Forest::new();
    build_into(descriptor, &mut forest);
    forest
}

/// Build a descriptor's forest into an externally supplied registry.
pub fn build_into(descriptor: &Descriptor, forest: &mut Forest) {
    // First, mark every positionally named node existing. Wiring below must
    // observe declared nodes as existing no matter where in the descriptor
    // they appear.
    for position in 0..descriptor.len() {
        forest.get(&position_name(position)).set_exists();
    }

    // Then, wire parents in position order.
    for (position, entry) in descriptor.entries().iter().enumerate() {
        let Entry::Parent { name: parent, sub } = entry else {
            continue;
        };
        let child = position_name(position);
        if *sub {
            forest.get(&child).is_sub = true;
        }
        // May create a referenced-but-undeclared placeholder, which stays
        // non-existent.
        let parent_exists = forest.get(parent).exists();
        forest.set_parent(&child, parent);
        // The check uses the parent's state at the moment of wiring; it is
        // never retroactively cleared.
        if !parent_exists {
            debug!(child = %child, parent = %parent, "parent missing");
            forest.get(&child).set_condition(
                ConditionKind::ActivitiesHalted,
                ConditionReason::ParentMissing,
                "no parent",
            );
        }
        // Re-check for cycles after every edge insertion so that every
        // member of a newly closed cycle is annotated as soon as the
        // closing edge appears.
        if let Some(cycle) = forest.cycle_names(&child) {
            debug!(child = %child, members = ?cycle, "cycle detected");
            for member in cycle {
                forest.get(&member).set_condition(
                    ConditionKind::ActivitiesHalted,
                    ConditionReason::InCycle,
                    "in cycle",
                );
            }
        }
    }
}

/// Attach an external object named `name` to the node `node`.
///
/// No-op if either name is empty. The node is lazily created if unseen.
pub fn attach_source_object(forest: &mut Forest, name: &str, node: &str) {
    if name.is_empty() || node.is_empty() {
        return;
    }
    forest
        .get(node)
        .set_source_object(SourceObject::new(name, node));
}
