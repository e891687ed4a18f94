//! Bootstrap table assembly and rendering.

use std::fmt;

use crate::config::{ConfigValue, TableConfig};
use crate::error::{Result, TableError};
use crate::line::Line;

/// A Bootstrap-styled HTML table.
///
/// The table owns an optional header line and an append-only list of data
/// lines, tracks the widest line seen so far, and renders the complete
/// markup with short rows padded to that width.
///
/// # Example
///
/// ```rust
/// use bootstrap_tables::{Table, TableConfig};
///
/// let mut config = TableConfig::new();
/// config.insert("table-hover".to_string(), true.into());
/// config.insert("id".to_string(), "users".into());
///
/// let mut table = Table::with_config(&config).unwrap();
/// table.set_header(["Name", "Email"]);
/// table.add_row(["Alice", "alice@example.com"]);
///
/// let html = table.render();
/// assert!(html.contains("table-hover"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
	header: Option<Line>,
	rows: Vec<Line>,
	max_row_length: usize,
	id: Option<String>,
	striped: bool,
	bordered: bool,
	hover: bool,
	condensed: bool,
	responsive: bool,
	extra_classes: Vec<String>,
}

impl Table {
	/// Creates an empty table with all style flags off.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a table and applies the given configuration.
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidConfigKey`] or
	/// [`TableError::InvalidConfigValue`] as [`Table::set_config`] does.
	pub fn with_config(config: &TableConfig) -> Result<Self> {
		let mut table = Self::new();
		if !config.is_empty() {
			table.set_config(config)?;
		}
		Ok(table)
	}

	/// Applies configuration entries in insertion order.
	///
	/// Recognized keys: `table-striped`, `table-bordered`, `table-hover`,
	/// `table-condensed`, `table-responsive` (boolean values) and `id`
	/// (string value).
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidConfigKey`] at the first unrecognized
	/// key. Entries before the offending key are already applied at that
	/// point; the table is left with the partial configuration. Returns
	/// [`TableError::InvalidConfigValue`] when a recognized key carries
	/// the wrong value variant.
	pub fn set_config(&mut self, config: &TableConfig) -> Result<()> {
		for (key, value) in config {
			match key.as_str() {
				"table-striped" => self.striped = flag_value(key, value)?,
				"table-bordered" => self.bordered = flag_value(key, value)?,
				"table-hover" => self.hover = flag_value(key, value)?,
				"table-condensed" => self.condensed = flag_value(key, value)?,
				"table-responsive" => self.responsive = flag_value(key, value)?,
				"id" => self.id = Some(text_value(key, value)?.to_string()),
				_ => return Err(TableError::InvalidConfigKey(key.clone())),
			}
			tracing::debug!(key = key.as_str(), "applied table config entry");
		}

		Ok(())
	}

	/// Sets the header line, replacing any previous header.
	pub fn set_header<C, S>(&mut self, cells: C)
	where
		C: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let header = Line::header(cells);
		self.update_max_row_length(&header);
		self.header = Some(header);
	}

	/// Appends a data row.
	pub fn add_row<C, S>(&mut self, cells: C)
	where
		C: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.add_row_with_classes(cells, Vec::<String>::new());
	}

	/// Appends a data row carrying its own CSS classes.
	pub fn add_row_with_classes<C, K, S, T>(&mut self, cells: C, classes: K)
	where
		C: IntoIterator<Item = S>,
		K: IntoIterator<Item = T>,
		S: Into<String>,
		T: Into<String>,
	{
		let row = Line::data(cells, classes);
		self.update_max_row_length(&row);
		self.rows.push(row);
	}

	/// Replaces the extra classes on the table element.
	///
	/// Passing an empty sequence is a no-op that leaves previously set
	/// extra classes unchanged; there is no clear operation.
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidClassName`] when any class contains
	/// embedded whitespace. Validation runs before any mutation, so a
	/// failed call leaves the previous classes intact.
	pub fn set_extra_classes<C, S>(&mut self, classes: C) -> Result<()>
	where
		C: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let classes: Vec<String> = classes.into_iter().map(Into::into).collect();

		for class in &classes {
			if class.split_whitespace().count() > 1 {
				return Err(TableError::InvalidClassName(class.clone()));
			}
		}

		if !classes.is_empty() {
			self.extra_classes = classes;
		}

		Ok(())
	}

	/// Returns the extra classes on the table element.
	pub fn extra_classes(&self) -> &[String] {
		&self.extra_classes
	}

	/// Returns the header line, if one was set.
	pub fn header(&self) -> Option<&Line> {
		self.header.as_ref()
	}

	/// Returns the data rows in insertion order.
	pub fn rows(&self) -> &[Line] {
		&self.rows
	}

	/// Returns the widest cell count seen across the header and all rows.
	pub fn max_row_length(&self) -> usize {
		self.max_row_length
	}

	/// Returns the table id, if one was set.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Returns whether the `table-striped` flag is set.
	pub fn is_striped(&self) -> bool {
		self.striped
	}

	/// Returns whether the `table-bordered` flag is set.
	pub fn is_bordered(&self) -> bool {
		self.bordered
	}

	/// Returns whether the `table-hover` flag is set.
	pub fn is_hover(&self) -> bool {
		self.hover
	}

	/// Returns whether the `table-condensed` flag is set.
	pub fn is_condensed(&self) -> bool {
		self.condensed
	}

	/// Returns whether the `table-responsive` flag is set.
	pub fn is_responsive(&self) -> bool {
		self.responsive
	}

	/// Renders the class tokens for the table element.
	///
	/// Flags come first in fixed order (striped, bordered, hover,
	/// condensed), each as `table-{flag} `, followed by the extra classes
	/// with the same trailing-space-per-token formatting. Returns the
	/// empty string when nothing applies.
	pub fn render_table_classes(&self) -> String {
		let mut classes = String::new();

		if self.striped {
			classes.push_str("table-striped ");
		}
		if self.bordered {
			classes.push_str("table-bordered ");
		}
		if self.hover {
			classes.push_str("table-hover ");
		}
		if self.condensed {
			classes.push_str("table-condensed ");
		}

		classes.push_str(&self.render_extra_classes());

		classes
	}

	/// Renders the id attribute, or the empty string when the id is unset
	/// or empty.
	pub fn render_id_attr(&self) -> String {
		match &self.id {
			Some(id) if !id.is_empty() => format!(r#"id="{}""#, id),
			_ => String::new(),
		}
	}

	/// Pads a line to the table width and closes it.
	///
	/// Emits one filler cell per missing column (using the line's own
	/// cell tag) and always appends the closing `</tr>`.
	pub fn pad_row(&self, line: &Line) -> String {
		let mut html = String::new();

		let tag = line.tag();
		let diff = self.max_row_length.saturating_sub(line.len());

		for _ in 0..diff {
			html.push_str(&format!("\t\t\t<{}></{}>\n", tag, tag));
		}

		html.push_str("\t\t</tr>\n");

		html
	}

	/// Renders the complete table markup.
	///
	/// The output layout (tabs, newlines, trailing spaces inside class
	/// attributes, the space between `<table` and `class` even when the
	/// id attribute is empty) is a byte-exact contract; repeated calls
	/// with no intervening mutation return identical strings.
	pub fn render(&self) -> String {
		tracing::trace!(
			rows = self.rows.len(),
			has_header = self.header.is_some(),
			"rendering table"
		);

		let mut html = String::new();

		let table_classes = self.render_table_classes();

		if self.responsive {
			html.push_str("<div class=\"table-responsive\">\n");
		}

		html.push_str(&format!(
			"<table {} class=\"table {}\">\n",
			self.render_id_attr(),
			table_classes
		));

		if let Some(header) = &self.header {
			html.push_str("\t<thead>\n");
			html.push_str(&header.render());
			html.push_str(&self.pad_row(header));
			html.push_str("\t</thead>\n");
		}

		if !self.rows.is_empty() {
			html.push_str("\t<tbody>\n");
			for row in &self.rows {
				html.push_str(&row.render());
				html.push_str(&self.pad_row(row));
			}
			html.push_str("\t</tbody>\n");
		}

		html.push_str("</table>\n");

		if self.responsive {
			html.push_str("</div>\n");
		}

		html
	}

	fn render_extra_classes(&self) -> String {
		let mut classes = String::new();

		for class in &self.extra_classes {
			classes.push_str(&format!("{} ", class));
		}

		classes
	}

	fn update_max_row_length(&mut self, line: &Line) {
		if line.len() > self.max_row_length {
			self.max_row_length = line.len();
		}
	}
}

impl fmt::Display for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

fn flag_value(key: &str, value: &ConfigValue) -> Result<bool> {
	value
		.as_flag()
		.ok_or_else(|| TableError::InvalidConfigValue {
			key: key.to_string(),
			expected: "boolean",
		})
}

fn text_value<'a>(key: &str, value: &'a ConfigValue) -> Result<&'a str> {
	value
		.as_text()
		.ok_or_else(|| TableError::InvalidConfigValue {
			key: key.to_string(),
			expected: "string",
		})
}
