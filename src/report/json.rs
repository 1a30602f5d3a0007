//! JSON report: the full dashboard struct, pretty-printed.

use crate::dashboard::Dashboard;
use std::io::{self, Write};

pub fn write<W: Write>(writer: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, dashboard)?;
    writeln!(writer)
}
