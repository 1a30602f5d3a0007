//! Report generation for a computed dashboard
//!
//! Output formatters, picked by file extension:
//!
//! - **HTML**: the dashboard page itself - dark theme, D3.js bar/line charts
//! - **JSON**: the full `Dashboard` struct, machine-readable
//! - **CSV**: every aggregation table flattened into block,label,value rows
//!
//! # Usage
//!
//! ```ignore
//! use streamlens::report;
//!
//! report::generate("dashboard.html", &dashboard)?;
//! report::generate("dashboard.json", &dashboard)?;
//! report::generate("tables.csv", &dashboard)?;
//! ```

pub mod csv;
pub mod html;
pub mod json;

use crate::dashboard::Dashboard;
use std::io;
use std::path::Path;

/// Generate a report in the appropriate format based on file extension.
pub fn generate<P: AsRef<Path>>(path: P, dashboard: &Dashboard) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "html" | "htm" => html::write(&mut file, dashboard),
        "json" => json::write(&mut file, dashboard),
        _ => csv::write(&mut file, dashboard),
    }
}
