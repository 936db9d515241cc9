use log::info;

use rustyll_toc::utils::fs;
use rustyll_toc::utils::BoxResult;
use rustyll_toc::{build_toc, Config};

use crate::cli::types::Commands;

/// Handle the toc command
pub fn handle_toc_command(command: &Commands, config: Config) -> BoxResult<()> {
    if let Commands::Toc {
        input,
        output,
        selector,
        list_tag,
        item_tag,
        list_classes,
        item_classes,
        anchor_classes,
        missing_id,
        nesting,
    } = command
    {
        let mut options = config.toc_options();
        if let Some(selector) = selector {
            options.selector = selector.clone();
        }
        if let Some(tag) = list_tag {
            options.list_tag = tag.clone();
        }
        if let Some(tag) = item_tag {
            options.item_tag = tag.clone();
        }
        if !list_classes.is_empty() {
            options.list_classes = list_classes.clone();
        }
        if !item_classes.is_empty() {
            options.item_classes = item_classes.clone();
        }
        if !anchor_classes.is_empty() {
            options.anchor_classes = anchor_classes.clone();
        }
        if let Some(policy) = missing_id {
            options.missing_id = *policy;
        }
        if let Some(strategy) = nesting {
            options.nesting = *strategy;
        }

        let html = fs::read_input(input.as_deref())?;
        let toc = build_toc(&html, &options)?;
        fs::write_output(output.as_deref(), &toc)?;

        if let Some(path) = output {
            info!("Wrote table of contents to {}", path.display());
        }
    }
    Ok(())
}
