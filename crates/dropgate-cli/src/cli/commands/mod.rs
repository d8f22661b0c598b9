//! CLI command handlers, one file per command.

mod check;
mod classify;
mod gate;
mod mime;
mod url;

pub use check::run_check;
pub use classify::run_classify;
pub use gate::run_gate;
pub use mime::run_mime;
pub use url::run_url;
