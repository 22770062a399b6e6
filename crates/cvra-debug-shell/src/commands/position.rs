//! Robot pose query.

use std::io::Write;

use crate::client::DebugService;
use crate::error::ShellError;
use crate::output::format_position;

/// Execute `position`: query the pose and print it in degrees.
///
/// # Errors
///
/// Returns an error if the request fails or output cannot be written.
pub async fn run_position<S: DebugService, W: Write>(
    service: &mut S,
    writer: &mut W,
) -> Result<(), ShellError> {
    let pose = service.get_position().await?;
    writeln!(writer, "{}", format_position(&pose))?;
    Ok(())
}
