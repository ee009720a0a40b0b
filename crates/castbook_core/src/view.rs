//! Record list rendering.
//!
//! # Responsibility
//! - Render the ordered record set as fixed three-line blocks.
//! - Map a rendered line index back to the record that owns it.
//!
//! # Invariants
//! - Every record renders to exactly `LINES_PER_RECORD` lines.
//! - `record_index_for_line(i)` is the block that contains line `i`.

use crate::labels::MEMO_LINE_PREFIX;
use crate::model::cast::CastRecord;

/// Rendered lines per record: header, memo, blank separator.
pub const LINES_PER_RECORD: usize = 3;

/// Role of one rendered line inside its record block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Memo,
    Separator,
}

/// Renders the list block for every record, in order.
pub fn render_lines(records: &[CastRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() * LINES_PER_RECORD);
    for record in records {
        lines.push(header_line(record));
        lines.push(format!("{MEMO_LINE_PREFIX}{}", record.note_text()));
        lines.push(String::new());
    }
    lines
}

/// `"{store} | {person}"`, plus `" ({age})"` when an age is stored.
pub fn header_line(record: &CastRecord) -> String {
    let mut line = format!("{} | {}", record.store_name, record.person_name);
    if let Some(age) = record.age {
        line.push_str(&format!(" ({age})"));
    }
    line
}

/// Index of the record owning rendered line `line_index`.
///
/// The result may be past the end of the record set; callers bound-check.
pub fn record_index_for_line(line_index: usize) -> usize {
    line_index / LINES_PER_RECORD
}

/// First rendered line of the record at `record_index`.
pub fn first_line_for_record(record_index: usize) -> usize {
    record_index * LINES_PER_RECORD
}

pub fn line_kind(line_index: usize) -> LineKind {
    match line_index % LINES_PER_RECORD {
        0 => LineKind::Header,
        1 => LineKind::Memo,
        _ => LineKind::Separator,
    }
}
