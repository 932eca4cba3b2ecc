//! Box-drawn table output with a merged two-level header

use std::io::Write;

use crate::error::Result;
use crate::model::{ColumnDirectory, RowGrid};

use super::ValueMapper;

/// A run of horizontally adjacent header columns sharing one family name,
/// drawn as a single spanning cell
struct Span {
    start: usize,
    len: usize,
    label: String,
}

/// Write the collected grid as a formatted table.
///
/// The header has two levels: family names on top (adjacent repeats merged
/// into one spanning cell) and short column names beneath. One data row is
/// emitted per grid row in grid order; slot 0 carries the row key and every
/// other slot is positioned by column index. The table is built in memory
/// and written to `w` in one pass; sink errors propagate untransformed.
pub fn write_table(
    w: &mut dyn Write,
    directory: &ColumnDirectory,
    grid: &RowGrid,
    mapper: Option<&ValueMapper>,
) -> Result<()> {
    let n = directory.len();
    let mut family_row = vec![String::new(); n + 1];
    let mut column_row = vec![String::new(); n + 1];
    for (family, column, index) in directory.iter() {
        family_row[index] = family.to_string();
        column_row[index] = short_name(family, column).to_string();
    }

    let mut data_rows: Vec<Vec<String>> = Vec::with_capacity(grid.len());
    for (key, _) in grid.iter() {
        let mut rendered = vec![String::new(); n + 1];
        rendered[0] = key.to_string();
        for (index, slot) in rendered.iter_mut().enumerate().skip(1) {
            let value = grid.get(key, index);
            *slot = match mapper.and_then(|map| map(value)) {
                Some(display) => display,
                None => match value {
                    Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                    None => String::new(),
                },
            };
        }
        data_rows.push(rendered);
    }

    // Column widths come from the second header level and the data; spans
    // too narrow for their family name widen their last column.
    let mut widths: Vec<usize> = vec![0; n + 1];
    for row in std::iter::once(&column_row).chain(data_rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let spans = family_spans(&family_row);
    for span in &spans {
        let need = span.label.chars().count() + 2;
        let have = inner_width(&widths, span);
        if have < need {
            widths[span.start + span.len - 1] += need - have;
        }
    }

    let mut out = String::new();
    out.push_str(&spanned_rule(&widths, &spans, '┌', '┬', '┐'));
    out.push_str(&family_line(&widths, &spans));
    out.push_str(&header_joint_rule(&widths, &spans));
    out.push_str(&data_line(&widths, &column_row));
    out.push_str(&plain_rule(&widths, '├', '┼', '┤'));
    for row in &data_rows {
        out.push_str(&data_line(&widths, row));
    }
    out.push_str(&plain_rule(&widths, '└', '┴', '┘'));

    w.write_all(out.as_bytes())?;
    Ok(())
}

/// Strip the `family:` prefix from a fully qualified column name; names not
/// carrying the prefix stay verbatim
fn short_name<'a>(family: &str, column: &'a str) -> &'a str {
    column
        .strip_prefix(family)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(column)
}

/// Group the family header into spans, merging adjacent columns with the
/// same family name. Slot 0 (the row-key column) is always its own span.
fn family_spans(family_row: &[String]) -> Vec<Span> {
    let mut spans = vec![Span {
        start: 0,
        len: 1,
        label: String::new(),
    }];
    for (i, family) in family_row.iter().enumerate().skip(1) {
        match spans.last_mut() {
            Some(last) if last.start > 0 && &last.label == family => last.len += 1,
            _ => spans.push(Span {
                start: i,
                len: 1,
                label: family.clone(),
            }),
        }
    }
    spans
}

/// Inner character width of a span: every member column with its padding,
/// plus the separators the merge swallowed
fn inner_width(widths: &[usize], span: &Span) -> usize {
    let columns: usize = widths[span.start..span.start + span.len]
        .iter()
        .map(|w| w + 2)
        .sum();
    columns + span.len - 1
}

fn spanned_rule(widths: &[usize], spans: &[Span], left: char, joint: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, span) in spans.iter().enumerate() {
        if i > 0 {
            line.push(joint);
        }
        for _ in 0..inner_width(widths, span) {
            line.push('─');
        }
    }
    line.push(right);
    line.push('\n');
    line
}

fn plain_rule(widths: &[usize], left: char, joint: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(joint);
        }
        for _ in 0..width + 2 {
            line.push('─');
        }
    }
    line.push(right);
    line.push('\n');
    line
}

/// Rule between the two header levels: every column boundary exists below
/// it, but only span edges exist above, so the junction glyph differs
fn header_joint_rule(widths: &[usize], spans: &[Span]) -> String {
    let mut line = String::new();
    line.push('├');
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let edge_above = spans.iter().any(|span| span.start == i);
            line.push(if edge_above { '┼' } else { '┬' });
        }
        for _ in 0..width + 2 {
            line.push('─');
        }
    }
    line.push('┤');
    line.push('\n');
    line
}

fn family_line(widths: &[usize], spans: &[Span]) -> String {
    let mut line = String::new();
    line.push('│');
    for span in spans {
        let width = inner_width(widths, span) - 2;
        line.push_str(&format!(" {:width$} │", span.label, width = width));
    }
    line.push('\n');
    line
}

fn data_line(widths: &[usize], row: &[String]) -> String {
    let mut line = String::new();
    line.push('│');
    for (i, cell) in row.iter().enumerate() {
        line.push_str(&format!(" {:width$} │", cell, width = widths[i]));
    }
    line.push('\n');
    line
}
