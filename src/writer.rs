/*!
 * Column-aligned table output for sls
 *
 * Widths are measured with `chars().count()` and applied through `format!`
 * width specifiers, which also pad by `char` count, so multi-byte names line
 * up. The colored label is padded before styling so escape codes never count
 * towards a width.
 */

use std::io::Write;

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::{IoResultExt, Result};
use crate::icons::{self, Icon};
use crate::permissions::format_permissions;
use crate::scanner::is_empty_dir;
use crate::types::{Entry, EntryKind, Row};
use crate::utils::{format_modified, format_size};

/// Gap between adjacent columns
const GAP: &str = "   ";

/// A row together with the icon shown before its name
#[derive(Debug, Clone)]
pub struct RenderedRow {
    pub row: Row,
    pub icon: Icon,
}

/// Renders entries as an `ls -l` style table
pub struct TableWriter<'a> {
    /// Writer configuration
    config: &'a Config,
}

impl<'a> TableWriter<'a> {
    /// Create a new table writer
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render every entry's fields and icon
    pub fn rows(&self, entries: &[Entry]) -> Result<Vec<RenderedRow>> {
        entries.iter().map(|entry| self.render_row(entry)).collect()
    }

    fn render_row(&self, entry: &Entry) -> Result<RenderedRow> {
        let permissions = format_permissions(entry.mode);
        let kind = EntryKind::from_permissions(&permissions);
        let icon = icons::classify(&entry.name, kind, || is_empty_dir(&entry.path))
            .at_path(&entry.path)?;

        let row = Row {
            permissions,
            links: entry.link_count.to_string(),
            owner: entry.owner_name.clone(),
            group: entry.group_name.clone(),
            size: format_size(entry.size_bytes, self.config.human_readable),
            modified: format_modified(entry.modified_time),
            name: entry.name.clone(),
        };

        Ok(RenderedRow { row, icon })
    }

    /// Render the complete table, one line per entry
    pub fn render(&self, entries: &[Entry]) -> Result<Vec<String>> {
        let rows = self.rows(entries)?;
        let widths = column_widths(rows.iter().map(|r| &r.row));
        Ok(rows.iter().map(|r| format_line(r, &widths)).collect())
    }

    /// Render the table and write it out.
    ///
    /// Nothing is written unless every row renders.
    pub fn write<W: Write>(&self, entries: &[Entry], out: &mut W) -> Result<()> {
        let lines = self.render(entries)?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Widest cell of each column, in characters
pub fn column_widths<'r>(rows: impl IntoIterator<Item = &'r Row>) -> [usize; Row::COLUMNS] {
    let mut widths = [0; Row::COLUMNS];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Lay out one row using the given column widths
pub fn format_line(rendered: &RenderedRow, widths: &[usize; Row::COLUMNS]) -> String {
    let row = &rendered.row;
    let label = format!("{} {:<w$}", rendered.icon.glyph, row.name, w = widths[6]);
    let label = match rendered.icon.color {
        Some(color) => label.style(color.style()).to_string(),
        None => label,
    };

    format!(
        "{:<w0$}{GAP}{:<w1$}{GAP}{:<w2$}{GAP}{:<w3$}{GAP}{:>w4$}{GAP}{:<w5$}{GAP}{}",
        row.permissions,
        row.links,
        row.owner,
        row.group,
        row.size,
        row.modified,
        label,
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
        w5 = widths[5],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{IconColor, GENERIC_FILE_GLYPH};

    fn row(name: &str, size: &str, owner: &str) -> Row {
        Row {
            permissions: "-rw-r--r--".to_string(),
            links: "1".to_string(),
            owner: owner.to_string(),
            group: "staff".to_string(),
            size: size.to_string(),
            modified: "Jan 02 03:04".to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn widths_are_measured_per_column() {
        let rows = [row("a", "5", "root"), row("longer.txt", "12345", "al")];
        let widths = column_widths(rows.iter());
        assert_eq!(widths, [10, 1, 4, 5, 5, 12, 10]);
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let rows = [row("ünïcödé", "1", "x")];
        assert_eq!(column_widths(rows.iter())[6], 7);
    }

    #[test]
    fn layout_pads_and_aligns_columns() {
        let rows = [row("a", "5", "root"), row("bb", "12345", "al")];
        let widths = column_widths(rows.iter());
        let plain = |r: &Row| RenderedRow {
            row: r.clone(),
            icon: Icon {
                glyph: GENERIC_FILE_GLYPH,
                color: None,
            },
        };

        assert_eq!(
            format_line(&plain(&rows[0]), &widths),
            format!("-rw-r--r--   1   root   staff       5   Jan 02 03:04   {GENERIC_FILE_GLYPH} a ")
        );
        assert_eq!(
            format_line(&plain(&rows[1]), &widths),
            format!("-rw-r--r--   1   al     staff   12345   Jan 02 03:04   {GENERIC_FILE_GLYPH} bb")
        );
    }

    #[test]
    fn colored_labels_are_reset() {
        let r = row("run.sh", "10", "root");
        let widths = column_widths([&r]);
        let rendered = RenderedRow {
            row: r,
            icon: Icon {
                glyph: "\u{e691}",
                color: Some(IconColor::Executable),
            },
        };
        let line = format_line(&rendered, &widths);
        assert!(line.contains("\x1b[32m\u{e691} run.sh"));
        assert!(line.ends_with("\x1b[0m"));
    }
}
