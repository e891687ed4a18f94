//! Common test fixtures for bootstrap-tables tests

use bootstrap_tables::{Table, TableConfig};
use rstest::*;

/// Fixture providing a configuration with every recognized key
#[fixture]
pub fn full_config() -> TableConfig {
	let mut config = TableConfig::new();
	config.insert("table-striped".to_string(), true.into());
	config.insert("table-bordered".to_string(), true.into());
	config.insert("table-hover".to_string(), true.into());
	config.insert("table-condensed".to_string(), true.into());
	config.insert("table-responsive".to_string(), true.into());
	config.insert("id".to_string(), "id1".into());
	config
}

/// Fixture providing a responsive hover table with an id, an extra class,
/// a two-column header and two rows (the second one short and carrying its
/// own class)
#[fixture]
pub fn sample_table() -> Table {
	let mut config = TableConfig::new();
	config.insert("table-responsive".to_string(), true.into());
	config.insert("table-hover".to_string(), true.into());
	config.insert("id".to_string(), "id1".into());

	let mut table = Table::with_config(&config).unwrap();
	table.set_extra_classes(["test-extra-class"]).unwrap();
	table.set_header(["first", "second"]);
	table.add_row(["one", "two"]);
	table.add_row_with_classes(["oneOnly"], ["row2-class"]);

	table
}

/// Fixture providing an unconfigured empty table
#[fixture]
pub fn empty_table() -> Table {
	Table::new()
}
