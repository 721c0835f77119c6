use crate::libs::formatter::FormattedBreak;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the projected breaks of a shift occurrence.
    pub fn breaks(breaks: &[FormattedBreak]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SLOT", "STARTS", "ENDS", "DURATION"]);
        for b in breaks {
            table.add_row(row![b.slot, b.start, b.end, b.duration]);
        }
        table.printstd();

        Ok(())
    }
}
