use std::fmt::{self, Display, Write as _};
use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::config::{ReportConfig, ReportFormat};
use crate::error::LayoutError;
use crate::layout::RecordLayout;
use crate::record::{CompactRecord, Footprint, SizedRecord};

// ============================================================================
// The two-number line
// ============================================================================

/// Footprints of `SizedRecord<u16, u32>` and `SizedRecord<u32, u16>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FootprintPair {
    pub first: usize,
    pub second: usize,
}

impl FootprintPair {
    pub fn measure() -> Self {
        let first: SizedRecord<u16, u32> = SizedRecord::new(1, 1, 1);
        let second: SizedRecord<u32, u16> = SizedRecord::new(1, 1, 1);
        let pair = Self {
            first: first.footprint(),
            second: second.footprint(),
        };
        tracing::debug!(first = pair.first, second = pair.second, "measured footprints");
        pair
    }
}

impl Display for FootprintPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

pub fn write_pair<W: Write>(out: &mut W, pair: &FootprintPair) -> Result<(), LayoutError> {
    writeln!(out, "{pair}")?;
    out.flush()?;
    Ok(())
}

// ============================================================================
// The detailed report
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub declaration_order: Vec<RecordLayout>,
    pub compiler_order: Vec<RecordLayout>,
}

impl LayoutReport {
    /// Measures both parameter orders under both representations and checks
    /// every measured layout.
    pub fn measure() -> Result<Self, LayoutError> {
        let report = Self {
            declaration_order: vec![
                SizedRecord::<u16, u32>::new(1, 1, 1).describe(),
                SizedRecord::<u32, u16>::new(1, 1, 1).describe(),
            ],
            compiler_order: vec![
                CompactRecord::<u16, u32>::new(1, 1, 1).describe(),
                CompactRecord::<u32, u16>::new(1, 1, 1).describe(),
            ],
        };
        for layout in report.layouts() {
            layout.check()?;
        }
        Ok(report)
    }

    pub fn layouts(&self) -> impl Iterator<Item = &RecordLayout> {
        self.declaration_order.iter().chain(self.compiler_order.iter())
    }

    pub fn render(&self, config: &ReportConfig) -> Result<String, LayoutError> {
        match config.format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ReportFormat::Plain => Ok(self.render_plain(config.color)),
        }
    }

    fn render_plain(&self, color: bool) -> String {
        let mut out = String::new();
        let sections = [
            ("Declaration order (#[repr(C)])", &self.declaration_order),
            ("Compiler order (default repr)", &self.compiler_order),
        ];
        for (title, layouts) in sections {
            let title = if color { title.bold().to_string() } else { title.to_string() };
            let _ = writeln!(out, "{title}");
            for layout in layouts {
                render_layout(&mut out, layout, color);
            }
            out.push('\n');
        }
        out
    }
}

fn render_layout(out: &mut String, layout: &RecordLayout, color: bool) {
    let padding = format!("{} padding", layout.padding());
    let padding = match (color, layout.padding()) {
        (false, _) => padding,
        (true, 0) => padding.as_str().green().to_string(),
        (true, _) => padding.as_str().yellow().to_string(),
    };
    let _ = writeln!(
        out,
        "  {}: {} bytes, align {}, {}",
        layout.name(),
        layout.size(),
        layout.align(),
        padding
    );
    for field in layout.fields_by_offset() {
        let _ = writeln!(
            out,
            "    {:>3}..{:<3} {:<6} size {} align {}",
            field.offset,
            field.end().unwrap_or(usize::MAX),
            field.name,
            field.size,
            field.align
        );
    }
    for gap in layout.gaps() {
        let line = format!("    {:>3}..{:<3} (pad)", gap.start, gap.end);
        let line = if color { line.as_str().dimmed().to_string() } else { line };
        let _ = writeln!(out, "{line}");
    }
}
