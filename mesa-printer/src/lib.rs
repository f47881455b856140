//! # mesa-printer
//!
//! OS printer access through the platform's own command-line tools.
//!
//! ## Scope
//!
//! This crate handles HOW to reach a printer:
//! - enumerating installed printers (`Get-Printer` on Windows, `lpstat` elsewhere)
//! - sending plain text to a named printer (`Out-Printer` / `lp`)
//! - sanitizing printer names and content before they reach a shell
//!
//! WHAT gets printed (and which printer is the default) stays in mesa-server.
//!
//! ## Example
//!
//! ```ignore
//! use mesa_printer::{Printer, ShellPrinter};
//!
//! let printer = ShellPrinter::detect();
//! for info in printer.list_printers().await? {
//!     println!("{}", info.name);
//! }
//! printer.print_text("Kitchen", "Mesa 4: 2x Pudim").await?;
//! ```

mod error;
mod printer;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use printer::{Platform, Printer, PrinterInfo, ShellPrinter, sanitize};
