//! Problem implementations for the layered engine.
//!
//! - [`painters`] : painter's partition, one layer per painter count.

pub mod painters;
