use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rustyll_toc::{IdentifierStyle, MissingIdPolicy, NestingStrategy};

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustyll-toc")]
#[command(about = "Attach heading ids and anchors, and build tables of contents for rendered HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Custom configuration file (repeatable, later files win)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Directory searched for _toc.yml, _toc.toml or _toc.json (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Attach generated ids to headings
    #[command(alias = "i")]
    Ids {
        /// HTML input file (defaults to stdin)
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ordered heading pattern, e.g. "h1,h2,h3"
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,

        /// Give headings with empty text an id too
        #[arg(long, default_value_t = false)]
        keep_empty: bool,

        /// Identifier generator
        #[arg(long, value_enum, value_name = "STYLE")]
        style: Option<IdentifierStyle>,
    },

    /// Append self-link anchors to headings that have an id
    #[command(alias = "a")]
    Anchors {
        /// HTML input file (defaults to stdin)
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ordered heading pattern, e.g. "h1,h2,h3"
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,

        /// Anchor text
        #[arg(long, value_name = "TEXT")]
        label: Option<String>,

        /// Anchor class (repeatable)
        #[arg(long = "class", value_name = "CLASS")]
        classes: Vec<String>,
    },

    /// Build a nested table of contents from headings with ids
    #[command(alias = "t")]
    Toc {
        /// HTML input file (defaults to stdin)
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ordered heading pattern, e.g. "h1,h2,h3"
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,

        /// List container tag
        #[arg(long, value_name = "TAG")]
        list_tag: Option<String>,

        /// List item tag
        #[arg(long, value_name = "TAG")]
        item_tag: Option<String>,

        /// List class (repeatable)
        #[arg(long = "list-class", value_name = "CLASS")]
        list_classes: Vec<String>,

        /// Item class (repeatable)
        #[arg(long = "item-class", value_name = "CLASS")]
        item_classes: Vec<String>,

        /// Link class (repeatable)
        #[arg(long = "anchor-class", value_name = "CLASS")]
        anchor_classes: Vec<String>,

        /// What to do with headings that have no id
        #[arg(long, value_enum, value_name = "POLICY")]
        missing_id: Option<MissingIdPolicy>,

        /// Where nested lists go
        #[arg(long, value_enum, value_name = "STRATEGY")]
        nesting: Option<NestingStrategy>,
    },

    /// Attach ids and anchors, then build the table of contents
    #[command(alias = "p")]
    Process {
        /// HTML input file (defaults to stdin)
        input: Option<PathBuf>,

        /// Output file for the processed HTML (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output file for the table of contents (defaults to stdout, after the HTML)
        #[arg(long, value_name = "FILE")]
        toc_output: Option<PathBuf>,

        /// Ordered heading pattern, e.g. "h1,h2,h3"
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,
    },
}
