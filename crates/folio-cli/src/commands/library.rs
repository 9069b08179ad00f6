//! Library command handler

use anyhow::Result;

use folio_core::BookStore;

use crate::output::Output;

/// List the library presets
pub fn list(store: &BookStore, output: &Output) -> Result<()> {
    output.print_libraries(store.libraries());
    Ok(())
}
