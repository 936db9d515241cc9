use log::info;

use rustyll_toc::utils::fs;
use rustyll_toc::utils::BoxResult;
use rustyll_toc::{process_html, Config};

use crate::cli::types::Commands;

/// Handle the process command
pub fn handle_process_command(command: &Commands, mut config: Config) -> BoxResult<()> {
    if let Commands::Process {
        input,
        output,
        toc_output,
        selector,
    } = command
    {
        if let Some(selector) = selector {
            config.selector = selector.clone();
        }

        let html = fs::read_input(input.as_deref())?;
        let processed = process_html(&html, &config)?;

        fs::write_output(output.as_deref(), &processed.html)?;
        fs::write_output(toc_output.as_deref(), &processed.toc)?;

        if let Some(path) = output {
            info!("Wrote processed HTML to {}", path.display());
        }
        if let Some(path) = toc_output {
            info!("Wrote table of contents to {}", path.display());
        }
    }
    Ok(())
}
