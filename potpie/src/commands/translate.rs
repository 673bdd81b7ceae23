// potpie/src/commands/translate.rs
//! The `translate` command: catalog in, pseudo-translated catalog out.

use anyhow::{Context, Result};
use log::{debug, info};

use potpie_core::{
    open_catalog, translate_catalog, FormatContext, PrintfValidator, PseudoTranslator,
    TransformKind, Validator,
};

use super::load_config;
use crate::cli::TranslateCommand;
use crate::ui::output;

/// Runs the `translate` command.
///
/// Command-line flags win over the configuration file, which wins over the
/// built-in defaults. The output file is only written when every entry was
/// translated.
pub fn run_translate(cmd: &TranslateCommand, quiet: bool) -> Result<()> {
    let config = load_config(cmd.config.as_deref())?;

    let kind = cmd.transform.map(TransformKind::from).unwrap_or(config.transform);
    let format = match &cmd.format {
        Some(name) => FormatContext::from_name(name),
        None => config.format_for(&cmd.input),
    };
    let seed = cmd.seed.or(config.seed);
    debug!("Resolved settings: transform={}, format={}, seed={:?}", kind, format, seed);

    let mut catalog = open_catalog(&cmd.input)
        .with_context(|| format!("Could not read catalog {}", cmd.input.display()))?;

    let translator = PseudoTranslator::for_kind(kind, format, seed);
    let validator = (cmd.validate || config.validate)
        .then(|| PrintfValidator::new(config.source_language(), config.target_language()));

    let report = translate_catalog(
        catalog.as_mut(),
        &translator,
        validator.as_ref().map(|v| v as &dyn Validator),
    )
    .with_context(|| format!("Could not pseudo-translate {}", cmd.input.display()))?;

    catalog
        .save(&cmd.output)
        .with_context(|| format!("Could not write catalog to {}", cmd.output.display()))?;
    info!("Wrote {}", cmd.output.display());

    if !quiet {
        output::success_msg(format!(
            "Pseudo-translated {} entries ({}) into {}",
            report.entries,
            kind,
            cmd.output.display()
        ));
        if report.validation_failures > 0 {
            output::warn_msg(format!(
                "{} translation(s) do not keep their printf placeholders",
                report.validation_failures
            ));
        }
    }
    Ok(())
}
