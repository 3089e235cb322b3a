//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `shelf add --title .. --stock ..` | Validate and append a product |
//! | `shelf get <ID>` | Show one product |
//! | `shelf list` | Show every product in file order |
//! | `shelf update <ID> [--price ..]` | Merge the given fields into a product |
//! | `shelf delete <ID>` | Remove a product |
//! | `shelf config` | Print the resolved configuration |
//!
//! Running `shelf` with no subcommand defaults to `shelf list`.
//!
//! Fields outside the fixed set go through `--attr key=value`. The value is
//! parsed as JSON when it parses (`--attr tags='["a","b"]'`), otherwise it is
//! kept as a string.
//!
//! ## Output
//!
//! Human-readable colored text by default. With `--json`, records are printed
//! as pretty JSON and status messages are suppressed.
//!
//! ## Logging
//!
//! Library events go to stderr. `RUST_LOG` wins when set; otherwise only
//! warnings are shown, or debug events with `--verbose`.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
