/// Default marker drawn where border lines meet column boundaries.
pub const DEFAULT_CORNER_MARKER: char = '+';

/// Default fill character for horizontal border lines.
pub const DEFAULT_ROW_SEPARATOR: char = '-';

/// Default vertical separator drawn between columns.
pub const DEFAULT_COLUMN_SEPARATOR: char = '|';

/// Default lower bound for a column's content width.
pub const DEFAULT_MIN_COLUMN_WIDTH: usize = 8;

/// Default upper bound for a column's content width.
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 16;

/// Default number of blank columns printed on each side of cell content.
pub const DEFAULT_COLUMN_PADDING: usize = 2;
