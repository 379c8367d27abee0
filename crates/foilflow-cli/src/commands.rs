pub mod field;
pub mod geometry;
pub mod solve;
pub mod sweep;

use crate::utils::progress::CliProgressHandler;
use foilflow::engine::progress::ProgressReporter;

/// Progress reporter drawing to stderr, or silent when `quiet` is set.
pub(crate) fn reporter(quiet: bool) -> (CliProgressHandler, ProgressReporter<'static>) {
    let handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    (handler, reporter)
}
