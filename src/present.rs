//! Rendering of remote data for the operator.

use std::collections::HashMap;

mod clock;
pub use self::clock::Clock;
mod lookup;
pub use self::lookup::{IssuerDirectory, describe_result};
mod rows;
pub use self::rows::*;
mod table;
pub use self::table::{Table, TableKind};

/// Named tables plus the lookups used to fill them.
pub struct Presenter {
    tables: HashMap<TableKind, Table>,
    issuers: IssuerDirectory,
    clock: Clock,
}

impl Presenter {
    pub fn new(issuers: IssuerDirectory, clock: Clock) -> Self {
        Self {
            tables: HashMap::new(),
            issuers,
            clock,
        }
    }

    pub fn issuers(&self) -> &IssuerDirectory {
        &self.issuers
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    fn table(&mut self, kind: TableKind) -> &mut Table {
        self.tables.entry(kind).or_insert_with(|| Table::new(kind))
    }

    /// Replaces the rows of `kind` in one step and returns the rendered text.
    pub fn show(&mut self, kind: TableKind, rows: Vec<Vec<String>>) -> String {
        let table = self.table(kind);
        table.replace(rows);
        table.render()
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(IssuerDirectory::default(), Clock::utc())
    }
}
