#[cfg(test)]
pub(crate) mod test_utils;

mod logging;
pub use logging::setup_logging;
mod cli;
pub use cli::Args;
mod app;
pub use app::App;
mod control;
pub use control::{ControlCommand, ControlOutput, UnboundControl};
mod fetcher;
pub use fetcher::{BlocklistFetcher, REQUEST_TIMEOUT};
mod sync;
pub use sync::ResolverSync;
mod util;
pub use util::read_lines;
