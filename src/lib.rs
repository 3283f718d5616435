//! classdoc — build normalized per-class documentation models from a flat
//! stream of doc entries.
//!
//! The upstream extractor emits loosely structured entries (classes,
//! configs, methods, properties, events). This crate reassembles them:
//! dotted names become nested property trees, duplicates resolve to the
//! latest declaration, and `@accessor`/`@evented` cfgs grow synthesized
//! getter/setter methods and change events.

pub mod aggregator;
pub mod input;
pub mod model;

pub use aggregator::accessors::synthesize_accessors;
pub use aggregator::nest::nest_properties;
pub use aggregator::Aggregator;
