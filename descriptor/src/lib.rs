//! Grove Descriptor
//!
//! Deterministic forest construction from compact positional descriptors:
//! - [`Descriptor`]: validated descriptor strings parsed into typed entries
//! - [`build`] / [`build_into`]: the two-pass construction and validation
//!   algorithm (existence marking, then parent wiring with missing-parent
//!   and cycle detection)
//! - [`attach_source_object`]: opaque external object attachment

mod build;
mod descriptor;
mod error;

pub use build::*;
pub use descriptor::*;
pub use error::*;
