use log::info;

use rustyll_toc::utils::fs;
use rustyll_toc::utils::BoxResult;
use rustyll_toc::{attach_identifiers, Config};

use crate::cli::types::Commands;

/// Handle the ids command
pub fn handle_ids_command(command: &Commands, config: Config) -> BoxResult<()> {
    if let Commands::Ids {
        input,
        output,
        selector,
        keep_empty,
        style,
    } = command
    {
        // Command line options take precedence over the config file
        let mut options = config.id_options();
        if let Some(selector) = selector {
            options.selector = selector.clone();
        }
        if *keep_empty {
            options.skip_empty_label = false;
        }
        if let Some(style) = style {
            options.identifier_fn = style.identifier_fn();
        }

        let html = fs::read_input(input.as_deref())?;
        let result = attach_identifiers(&html, &options)?;
        fs::write_output(output.as_deref(), &result)?;

        if let Some(path) = output {
            info!("Wrote HTML with ids to {}", path.display());
        }
    }
    Ok(())
}
