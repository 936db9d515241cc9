use log::info;

use rustyll_toc::utils::fs;
use rustyll_toc::utils::BoxResult;
use rustyll_toc::{attach_anchors, Config};

use crate::cli::types::Commands;

/// Handle the anchors command
pub fn handle_anchors_command(command: &Commands, config: Config) -> BoxResult<()> {
    if let Commands::Anchors {
        input,
        output,
        selector,
        label,
        classes,
    } = command
    {
        let mut options = config.anchor_options();
        if let Some(selector) = selector {
            options.selector = selector.clone();
        }
        if let Some(label) = label {
            options.label = label.clone();
        }
        if !classes.is_empty() {
            options.classes = classes.clone();
        }

        let html = fs::read_input(input.as_deref())?;
        let result = attach_anchors(&html, &options)?;
        fs::write_output(output.as_deref(), &result)?;

        if let Some(path) = output {
            info!("Wrote HTML with anchors to {}", path.display());
        }
    }
    Ok(())
}
