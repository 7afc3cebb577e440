//! `crumbs builders` command implementation.

use crumbs_core::BuilderRegistry;

use crate::error::CliError;
use crate::output::Output;

/// Print one registered builder name per line.
pub(crate) fn execute() -> Result<(), CliError> {
    let output = Output::new();
    for name in BuilderRegistry::default().names() {
        output.emit(name)?;
    }
    Ok(())
}
