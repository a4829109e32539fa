//! Grove Core Types
//!
//! This crate provides the foundational types used throughout grove:
//! - Status conditions (ConditionKind, ConditionReason, Condition, Conditions)
//! - External attachment records (SourceObject)

mod condition;
mod source;

pub use condition::*;
pub use source::*;
