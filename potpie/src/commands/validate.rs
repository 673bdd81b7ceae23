// potpie/src/commands/validate.rs
//! The `validate` command: report printf placeholder mismatches in a catalog.

use anyhow::{bail, Context, Result};
use log::info;

use potpie_core::{open_catalog, validate_catalog, Language, PrintfValidator};

use crate::cli::ValidateCommand;
use crate::ui::output;

/// Runs the `validate` command.
///
/// Fails when at least one entry does not keep its source's placeholders, so
/// the command can gate a CI job.
pub fn run_validate(cmd: &ValidateCommand, quiet: bool) -> Result<()> {
    if cmd.source_nplurals == 0 || cmd.target_nplurals == 0 {
        bail!("--source-nplurals and --target-nplurals must be greater than 0");
    }
    let catalog = open_catalog(&cmd.file)
        .with_context(|| format!("Could not read catalog {}", cmd.file.display()))?;
    let validator = PrintfValidator::new(
        Language::new("source", cmd.source_nplurals),
        Language::new("target", cmd.target_nplurals),
    );

    // Plural messages contribute one pair per form.
    let checked = catalog.entries().len();
    if !quiet {
        output::info_msg(format!(
            "Checking {} source/translation pair(s) in {}",
            checked,
            cmd.file.display()
        ));
    }
    let failures = validate_catalog(catalog.as_ref(), &validator);
    info!("Checked {} pair(s) from {} message(s), {} failure(s)", checked, catalog.len(), failures);

    if failures > 0 {
        bail!(
            "{} of {} entries failed printf validation in {}",
            failures,
            checked,
            cmd.file.display()
        );
    }
    if !quiet {
        output::success_msg(format!(
            "All {} entries in {} keep their printf placeholders",
            checked,
            cmd.file.display()
        ));
    }
    Ok(())
}
