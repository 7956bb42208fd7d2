// Field order, generic substitution, and the padding they cost.
//
// `SizedRecord<A, B>` keeps its fields in declaration order, so
// `SizedRecord<u16, u32>` and `SizedRecord<u32, u16>` can differ in size even
// though they hold the same field types. `CompactRecord<A, B>` lets rustc
// reorder the same fields for comparison.

pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod record;
pub mod report;

pub use error::LayoutError;
pub use layout::{FieldLayout, RecordLayout};
pub use record::{CompactRecord, Footprint, SizedRecord};
pub use report::{FootprintPair, LayoutReport};
