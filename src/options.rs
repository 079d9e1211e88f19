use crate::align::Alignment;
use crate::constants::{
    DEFAULT_COLUMN_PADDING, DEFAULT_COLUMN_SEPARATOR, DEFAULT_CORNER_MARKER,
    DEFAULT_MAX_COLUMN_WIDTH, DEFAULT_MIN_COLUMN_WIDTH, DEFAULT_ROW_SEPARATOR,
};

/// Errors emitted while validating render configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A minimum column width of zero would leave no room for content.
    #[error("minimum column width must be greater than 0")]
    ZeroMinWidth,
    /// The requested width bounds would put the maximum below the minimum.
    #[error("maximum column width {max} is smaller than minimum column width {min}")]
    WidthBoundsReversed {
        /// Minimum content width the configuration would end up with.
        min: usize,
        /// Maximum content width the configuration would end up with.
        max: usize,
    },
    /// Border characters must stay visible; blank them through the
    /// `disable_*` methods instead.
    #[error("{role} must not be a whitespace character")]
    WhitespaceBorderChar {
        /// Which border character was rejected.
        role: &'static str,
    },
}

/// Render configuration consumed by [`TablePrinter`](crate::TablePrinter).
///
/// Built once through its setters, each of which validates immediately; a
/// held `PrintOptions` value is always internally consistent. When raising
/// both width bounds above the defaults, raise the maximum first.
#[derive(Clone, Debug)]
pub struct PrintOptions {
    pub(crate) align: Alignment,
    pub(crate) corner_marker: char,
    pub(crate) row_separator: char,
    pub(crate) column_separator: char,
    pub(crate) min_column_width: usize,
    pub(crate) max_column_width: usize,
    pub(crate) column_padding: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintOptions {
    /// Configuration with the default border characters and width bounds.
    pub fn new() -> Self {
        Self {
            align: Alignment::Left,
            corner_marker: DEFAULT_CORNER_MARKER,
            row_separator: DEFAULT_ROW_SEPARATOR,
            column_separator: DEFAULT_COLUMN_SEPARATOR,
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            column_padding: DEFAULT_COLUMN_PADDING,
        }
    }

    /// Set the horizontal alignment of cell content.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the marker drawn where border lines meet column boundaries.
    pub fn corner_marker(mut self, marker: char) -> Result<Self, ConfigError> {
        if marker.is_whitespace() {
            return Err(ConfigError::WhitespaceBorderChar {
                role: "corner marker",
            });
        }
        self.corner_marker = marker;
        Ok(self)
    }

    /// Set the fill character for horizontal border lines.
    pub fn row_separator(mut self, separator: char) -> Result<Self, ConfigError> {
        if separator.is_whitespace() {
            return Err(ConfigError::WhitespaceBorderChar {
                role: "row separator",
            });
        }
        self.row_separator = separator;
        Ok(self)
    }

    /// Set the vertical separator drawn between columns.
    pub fn column_separator(mut self, separator: char) -> Result<Self, ConfigError> {
        if separator.is_whitespace() {
            return Err(ConfigError::WhitespaceBorderChar {
                role: "column separator",
            });
        }
        self.column_separator = separator;
        Ok(self)
    }

    /// Set the minimum content width of every column.
    pub fn min_column_width(mut self, width: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroMinWidth);
        }
        if width > self.max_column_width {
            return Err(ConfigError::WidthBoundsReversed {
                min: width,
                max: self.max_column_width,
            });
        }
        self.min_column_width = width;
        Ok(self)
    }

    /// Set the maximum content width of every column; wider cells wrap.
    pub fn max_column_width(mut self, width: usize) -> Result<Self, ConfigError> {
        if width < self.min_column_width {
            return Err(ConfigError::WidthBoundsReversed {
                min: self.min_column_width,
                max: width,
            });
        }
        self.max_column_width = width;
        Ok(self)
    }

    /// Set the number of spaces printed on each side of cell content.
    pub fn column_padding(mut self, padding: usize) -> Self {
        self.column_padding = padding;
        self
    }

    /// Blank out every border character.
    ///
    /// The table keeps its geometry: blanked borders render as spaces and
    /// every line still spans the same number of columns.
    pub fn disable_borders(self) -> Self {
        self.disable_corner_marker()
            .disable_row_separator()
            .disable_column_separator()
    }

    /// Render corner markers as spaces.
    pub fn disable_corner_marker(mut self) -> Self {
        self.corner_marker = ' ';
        self
    }

    /// Render horizontal border lines as spaces.
    pub fn disable_row_separator(mut self) -> Self {
        self.row_separator = ' ';
        self
    }

    /// Render column separators as spaces.
    pub fn disable_column_separator(mut self) -> Self {
        self.column_separator = ' ';
        self
    }
}
