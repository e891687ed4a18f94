//! Table line (one `<tr>` worth of cells).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a table line, which determines the cell tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
	/// Header line; cells render as `<th>`.
	Header,
	/// Data line; cells render as `<td>`.
	Data,
}

impl LineKind {
	/// Returns the cell tag name for this kind.
	pub fn tag(&self) -> &'static str {
		match self {
			LineKind::Header => "th",
			LineKind::Data => "td",
		}
	}
}

/// One row of cells, either the header or a data row.
///
/// A line stores its cell values and optional CSS classes verbatim; the
/// cell list is fixed at construction and never mutated. Lines are owned
/// by a [`Table`](crate::Table), which appends the closing `</tr>` and any
/// filler cells when assembling the full markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
	kind: LineKind,
	cells: Vec<String>,
	css_classes: Vec<String>,
}

impl Line {
	/// Creates a header line from the given cells.
	pub fn header<C, S>(cells: C) -> Self
	where
		C: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(LineKind::Header, cells, Vec::<String>::new())
	}

	/// Creates a data line from the given cells and CSS classes.
	///
	/// Passing an empty `classes` sequence leaves the line without
	/// classes; there is no way to attach classes after construction.
	pub fn data<C, K, S, T>(cells: C, classes: K) -> Self
	where
		C: IntoIterator<Item = S>,
		K: IntoIterator<Item = T>,
		S: Into<String>,
		T: Into<String>,
	{
		Self::new(LineKind::Data, cells, classes)
	}

	fn new<C, K, S, T>(kind: LineKind, cells: C, classes: K) -> Self
	where
		C: IntoIterator<Item = S>,
		K: IntoIterator<Item = T>,
		S: Into<String>,
		T: Into<String>,
	{
		Self {
			kind,
			cells: cells.into_iter().map(Into::into).collect(),
			css_classes: classes.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns the number of cells in this line.
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Returns `true` when this line has no cells.
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// Returns the kind of this line.
	pub fn kind(&self) -> LineKind {
		self.kind
	}

	/// Returns the cell tag name (`"th"` or `"td"`).
	pub fn tag(&self) -> &'static str {
		self.kind.tag()
	}

	/// Returns the cell values in insertion order.
	pub fn cells(&self) -> &[String] {
		&self.cells
	}

	/// Returns the CSS classes attached to this line.
	pub fn css_classes(&self) -> &[String] {
		&self.css_classes
	}

	/// Renders the `class` attribute for this line.
	///
	/// Returns ` class="c1 c2 "` (leading space before `class=`, trailing
	/// space after every class token) when classes are present, or the
	/// empty string. The trailing-space formatting is part of the output
	/// contract.
	pub fn render_classes_attr(&self) -> String {
		let mut classes = String::new();

		if !self.css_classes.is_empty() {
			classes.push_str(r#" class=""#);
			for class in &self.css_classes {
				classes.push_str(&format!("{} ", class));
			}
			classes.push('"');
		}

		classes
	}

	/// Renders the opening `<tr>` and the cells of this line.
	///
	/// The closing `</tr>` is not emitted here; the owning table appends
	/// it, along with filler cells for short rows, via
	/// [`Table::pad_row`](crate::Table::pad_row). Cell values are
	/// interpolated without escaping.
	pub fn render(&self) -> String {
		let tag = self.tag();

		let mut html = format!("\t<tr{}>\n", self.render_classes_attr());

		for cell in &self.cells {
			html.push_str(&format!("\t\t<{}>{}</{}>\n", tag, cell, tag));
		}

		html
	}
}

impl fmt::Display for Line {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
