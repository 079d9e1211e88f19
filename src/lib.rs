//! Print tabular data as bordered text tables.
//!
//! Given a list of headers and a grid of string cells, the crate computes a
//! content width for every column (bounded by configurable minimum and
//! maximum widths), then draws the table with corner markers, horizontal
//! border lines and column separators. Cells wider than their column wrap
//! onto additional physical lines; rows shorter than the header count render
//! blank trailing cells. Structs and other serialisable records can be
//! printed directly, with headers taken from their field names.
//!
//! ```
//! use pretty_table::{PrintOptions, render};
//!
//! let options = PrintOptions::new()
//!     .min_column_width(5)?
//!     .column_padding(1);
//! let table = render(
//!     &["Name", "Age"],
//!     &[vec!["Alice", "30"], vec!["Bob", "25"]],
//!     options,
//! );
//! assert_eq!(table, concat!(
//!     "+-------+-------+\n",
//!     "| Name  | Age   |\n",
//!     "+-------+-------+\n",
//!     "| Alice | 30    |\n",
//!     "| Bob   | 25    |\n",
//!     "+-------+-------+\n",
//! ));
//! # Ok::<(), pretty_table::ConfigError>(())
//! ```

mod align;
mod constants;
mod options;
mod printer;
mod record;
mod width;

pub use align::Alignment;
pub use constants::{
    DEFAULT_COLUMN_PADDING, DEFAULT_COLUMN_SEPARATOR, DEFAULT_CORNER_MARKER,
    DEFAULT_MAX_COLUMN_WIDTH, DEFAULT_MIN_COLUMN_WIDTH, DEFAULT_ROW_SEPARATOR,
};
pub use options::{ConfigError, PrintOptions};
pub use printer::{PrintError, TablePrinter, render};
