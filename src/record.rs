// Generic records whose footprint depends on field order and on the types
// substituted for their parameters.

use std::any::type_name;
use std::mem;

use crate::layout::{FieldLayout, RecordLayout};

// ============================================================================
// Footprint: shared by both layouts
// ============================================================================

pub trait Footprint: Sized {
    /// Bytes occupied by this value, padding included.
    fn footprint(&self) -> usize {
        mem::size_of_val(self)
    }

    /// Measures every field of this value as placed by the compiler.
    fn describe(&self) -> RecordLayout;
}

/// `type_name` with the module path stripped from every path segment, so
/// `core::option::Option<alloc::string::String>` reads `Option<String>`.
fn short_type_name<T>() -> String {
    let full = type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
            continue;
        }
        push_last_segment(&mut short, &segment);
        segment.clear();
        short.push(ch);
    }
    push_last_segment(&mut short, &segment);
    short
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}

// Both records share the same fields and API; only the representation differs.
macro_rules! record_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<A, B> {
            count: u16,
            data1: A,
            data2: B,
        }

        impl<A, B> $name<A, B> {
            pub fn new(count: u16, data1: A, data2: B) -> Self {
                let record = Self { count, data1, data2 };
                tracing::trace!(
                    record = %Self::type_label(),
                    footprint = mem::size_of::<Self>(),
                    "constructed"
                );
                record
            }

            pub fn count(&self) -> u16 {
                self.count
            }

            pub fn data1(&self) -> &A {
                &self.data1
            }

            pub fn data2(&self) -> &B {
                &self.data2
            }

            pub fn type_label() -> String {
                format!(
                    "{}<{}, {}>",
                    stringify!($name),
                    short_type_name::<A>(),
                    short_type_name::<B>()
                )
            }
        }

        impl<A, B> Footprint for $name<A, B> {
            fn describe(&self) -> RecordLayout {
                RecordLayout::new(
                    Self::type_label(),
                    mem::size_of_val(self),
                    mem::align_of::<Self>(),
                    vec![
                        FieldLayout::of::<u16>("count", mem::offset_of!(Self, count)),
                        FieldLayout::of::<A>("data1", mem::offset_of!(Self, data1)),
                        FieldLayout::of::<B>("data2", mem::offset_of!(Self, data2)),
                    ],
                )
            }
        }
    };
}

// ============================================================================
// SizedRecord: fields stay in declaration order
// ============================================================================

record_type! {
    /// A `count` followed by two generic payloads, laid out in declaration order.
    ///
    /// `SizedRecord<u16, u32>` and `SizedRecord<u32, u16>` hold the same set of
    /// field types, yet the padding the compiler inserts differs whenever `u32`
    /// is more strictly aligned than `u16`.
    #[repr(C)]
    SizedRecord
}

// ============================================================================
// CompactRecord: the compiler is free to reorder fields
// ============================================================================

record_type! {
    /// Same fields as [`SizedRecord`] with the default Rust representation.
    /// rustc may reorder the fields to minimize padding, so swapping the type
    /// parameters usually leaves the footprint unchanged.
    CompactRecord
}

impl<A, B> From<SizedRecord<A, B>> for CompactRecord<A, B> {
    fn from(record: SizedRecord<A, B>) -> Self {
        let SizedRecord { count, data1, data2 } = record;
        CompactRecord::new(count, data1, data2)
    }
}
