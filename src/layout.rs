// Measured layout of a record: where each field sits and where the padding went.

use std::mem;
use std::ops::Range;

use serde::Serialize;

use crate::error::LayoutError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
    pub align: usize,
}

impl FieldLayout {
    pub fn of<T>(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
        }
    }

    /// One past the last byte of the field, `None` if that overflows.
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLayout {
    name: String,
    size: usize,
    align: usize,
    fields: Vec<FieldLayout>,
}

impl RecordLayout {
    pub fn new(name: impl Into<String>, size: usize, align: usize, fields: Vec<FieldLayout>) -> Self {
        Self {
            name: name.into(),
            size,
            align,
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn align(&self) -> usize {
        self.align
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Fields in the order they occupy memory.
    pub fn fields_by_offset(&self) -> Vec<&FieldLayout> {
        let mut sorted: Vec<&FieldLayout> = self.fields.iter().collect();
        sorted.sort_by_key(|field| field.offset);
        sorted
    }

    pub fn payload(&self) -> usize {
        self.fields
            .iter()
            .fold(0usize, |total, field| total.saturating_add(field.size))
    }

    pub fn padding(&self) -> usize {
        self.size.saturating_sub(self.payload())
    }

    /// Byte ranges not covered by any field, including the trailing tail.
    pub fn gaps(&self) -> Vec<Range<usize>> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for field in self.fields_by_offset() {
            if field.offset > cursor {
                gaps.push(cursor..field.offset);
            }
            cursor = cursor.max(field.end().unwrap_or(usize::MAX));
        }
        if self.size > cursor {
            gaps.push(cursor..self.size);
        }
        gaps
    }

    /// Verifies the measured layout against the alignment rules every
    /// platform must satisfy.
    pub fn check(&self) -> Result<(), LayoutError> {
        if self.align == 0 || !self.align.is_power_of_two() {
            return Err(LayoutError::inconsistent(
                &self.name,
                format!("alignment {} is not a power of two", self.align),
            ));
        }
        if self.size < self.payload() {
            return Err(LayoutError::inconsistent(
                &self.name,
                format!("size {} is smaller than its fields ({})", self.size, self.payload()),
            ));
        }
        if self.size % self.align != 0 {
            return Err(LayoutError::inconsistent(
                &self.name,
                format!("size {} is not a multiple of {}", self.size, self.align),
            ));
        }

        let mut previous_end = 0;
        for field in self.fields_by_offset() {
            if field.align == 0 || !field.align.is_power_of_two() {
                return Err(LayoutError::inconsistent(
                    &self.name,
                    format!("field `{}` has alignment {}, not a power of two", field.name, field.align),
                ));
            }
            if field.align > self.align {
                return Err(LayoutError::inconsistent(
                    &self.name,
                    format!("field `{}` needs alignment {} above the record's {}", field.name, field.align, self.align),
                ));
            }
            if field.offset % field.align != 0 {
                return Err(LayoutError::inconsistent(
                    &self.name,
                    format!("field `{}` at offset {} is misaligned", field.name, field.offset),
                ));
            }
            if field.offset < previous_end {
                return Err(LayoutError::inconsistent(
                    &self.name,
                    format!("field `{}` overlaps the previous field", field.name),
                ));
            }
            let end = match field.end() {
                Some(end) if end <= self.size => end,
                _ => {
                    return Err(LayoutError::inconsistent(
                        &self.name,
                        format!("field `{}` ends past the record", field.name),
                    ))
                }
            };
            previous_end = end;
        }

        tracing::debug!(
            record = %self.name,
            size = self.size,
            padding = self.padding(),
            "layout checked"
        );
        Ok(())
    }
}
