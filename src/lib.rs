/*!
 * sls - super ls
 *
 * Lists a file or the contents of a directory as a column-aligned table
 * with permissions, ownership, size, modification time and a file-type icon.
 * Part of the SuperUtils collection.
 */

pub mod config;
pub mod error;
pub mod icons;
pub mod owners;
pub mod permissions;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


use std::io::Write;

use owo_colors::OwoColorize;

// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{LsError, Result};
pub use owners::{NameResolver, StaticNames, SystemNames};
pub use scanner::Scanner;
pub use types::{Entry, EntryKind, Row};
pub use utils::humanize_size;
pub use writer::TableWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool tag printed in front of diagnostics
pub const TOOL_NAME: &str = "sls";

/// Collect and print the listing described by `config`.
///
/// The table is only written once every entry has been read and rendered.
pub fn list<R, W>(config: &Config, names: &R, out: &mut W) -> Result<()>
where
    R: NameResolver,
    W: Write,
{
    let entries = Scanner::new(config, names).scan()?;
    TableWriter::new(config).write(&entries, out)
}

/// Single-line diagnostic for a failed listing
pub fn diagnostic(err: &LsError) -> String {
    format!("{}: {}", TOOL_NAME, err).red().to_string()
}
