use std::io::{self, Write};
use std::slice;

use serde::Serialize;

use crate::align::align_cell;
use crate::options::PrintOptions;
use crate::record::extract_records;
use crate::width::{compute_widths, split_at_width, visible_width};

/// Errors emitted while printing a table.
#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    /// Converting a record into printable cells failed.
    #[error("failed to serialise record: {0}")]
    Serialization(String),
    /// A record did not serialise to named fields.
    #[error("record does not serialise to a map of named fields")]
    NotARecord,
    /// A record lacks one of the fields named by the header row.
    #[error("record is missing field '{0}'")]
    MissingField(String),
    /// Writing to the output sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Streams bordered text tables to an output sink.
///
/// The configuration is fixed at construction; each print call computes its
/// own column widths and writes the whole table before returning.
pub struct TablePrinter<W: Write> {
    out: W,
    options: PrintOptions,
}

impl TablePrinter<io::Stdout> {
    /// Printer with default options writing to standard output.
    pub fn new() -> Self {
        Self::with_options(io::stdout(), PrintOptions::new())
    }
}

impl Default for TablePrinter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TablePrinter<W> {
    /// Printer writing to `out` with the given options.
    pub fn with_options(out: W, options: PrintOptions) -> Self {
        Self { out, options }
    }

    /// The active render configuration.
    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Consume the printer and return its output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `headers` and `rows` as a bordered table.
    ///
    /// Empty headers produce no output at all; an empty row slice still
    /// renders the header block between its borders. Rows shorter than the
    /// header count render blank trailing cells, and cells wider than their
    /// column wrap onto additional physical lines.
    pub fn print<H, R, C>(&mut self, headers: &[H], rows: &[R]) -> Result<(), PrintError>
    where
        H: AsRef<str>,
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let lines = table_lines(headers, rows, &self.options);
        if lines.is_empty() {
            return Ok(());
        }
        for line in &lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Print a single data row under `headers`.
    pub fn print_row<H, C>(&mut self, headers: &[H], row: &[C]) -> Result<(), PrintError>
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        self.print(headers, slice::from_ref(&row))
    }

    /// Print serialisable records, taking headers from the first record's
    /// field names.
    ///
    /// An empty record sequence produces no output. Records must serialise
    /// to named fields; a record missing one of the header fields aborts the
    /// call without partial output.
    pub fn print_records<Data, Row>(&mut self, records: Data) -> Result<(), PrintError>
    where
        Data: IntoIterator<Item = Row>,
        Row: Serialize,
    {
        let (headers, rows) = extract_records(records)?;
        self.print(&headers, &rows)
    }
}

/// Render `headers` and `rows` into a table string using `options`.
///
/// Sink-free variant of [`TablePrinter::print`]; the result is byte identical
/// to what the printer writes.
pub fn render<H, R, C>(headers: &[H], rows: &[R], options: PrintOptions) -> String
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let lines = table_lines(headers, rows, &options);
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn table_lines<H, R, C>(headers: &[H], rows: &[R], options: &PrintOptions) -> Vec<String>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    if headers.is_empty() {
        return Vec::new();
    }

    let widths = compute_widths(
        headers,
        rows,
        options.min_column_width,
        options.max_column_width,
    );
    let border = border_line(&widths, options);

    let mut lines = Vec::new();
    lines.push(border.clone());
    let header_cells: Vec<Option<&str>> = headers.iter().map(|h| Some(h.as_ref())).collect();
    push_row_lines(&mut lines, header_cells, &widths, options);
    lines.push(border.clone());
    for row in rows {
        push_row_lines(&mut lines, row_cells(row.as_ref(), widths.len()), &widths, options);
    }
    lines.push(border);
    lines
}

/// Cells of one logical row, `None` where the row has no cell for a column.
fn row_cells<C: AsRef<str>>(row: &[C], columns: usize) -> Vec<Option<&str>> {
    let mut cells: Vec<Option<&str>> = row
        .iter()
        .take(columns)
        .map(|cell| Some(cell.as_ref()))
        .collect();
    cells.resize(columns, None);
    cells
}

/// Emit the physical lines of one logical row, wrapping overflowing cells.
///
/// Cells that fit are exhausted after their first line; a cell wider than its
/// column contributes its remainder to a lazily created follow-up row, and
/// the loop runs until no column has content left.
fn push_row_lines(
    lines: &mut Vec<String>,
    cells: Vec<Option<&str>>,
    widths: &[usize],
    options: &PrintOptions,
) {
    let mut remaining = cells;
    loop {
        let mut next: Option<Vec<Option<&str>>> = None;
        let mut line = String::new();
        for (col, slot) in remaining.iter().copied().enumerate() {
            line.push(options.column_separator);
            match slot {
                Some(text) if visible_width(text) > widths[col] => {
                    let (head, rest) = split_at_width(text, widths[col]);
                    push_cell(&mut line, head, widths[col], options);
                    next.get_or_insert_with(|| vec![None; widths.len()])[col] = Some(rest);
                }
                Some(text) => push_cell(&mut line, text, widths[col], options),
                None => push_cell(&mut line, "", widths[col], options),
            }
        }
        line.push(options.column_separator);
        lines.push(line);
        match next {
            Some(cells) => remaining = cells,
            None => break,
        }
    }
}

fn push_cell(line: &mut String, text: &str, width: usize, options: &PrintOptions) {
    let pad = " ".repeat(options.column_padding);
    line.push_str(&pad);
    line.push_str(&align_cell(text, width, options.align));
    line.push_str(&pad);
}

fn border_line(widths: &[usize], options: &PrintOptions) -> String {
    let fill = options.row_separator.to_string();
    let mut line = String::new();
    for width in widths {
        line.push(options.corner_marker);
        line.push_str(&fill.repeat(width + 2 * options.column_padding));
    }
    line.push(options.corner_marker);
    line
}
