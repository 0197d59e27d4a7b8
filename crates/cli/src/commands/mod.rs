pub mod expand;
pub mod find;

use std::io::{Stderr, Stdout};

use clap::{Args, Subcommand};
pub use expand::ExpandArgs;
pub use find::FindArgs;

use crate::printer::{
    ColorChoice, HumanPrinter, JsonPrinter, OutputFormat, PrinterConfig, RecordPrinter,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a path and everything beneath it, root first.
    ///
    /// Example:
    ///   arbor find ~/projects
    ///   arbor find --depth 1 --json /etc
    Find(FindArgs),

    /// Expand a directory and flatten it in the chosen order.
    ///
    /// Example:
    ///   arbor expand --order shallow .
    ///   arbor expand --no-recurse --keep-root /tmp
    Expand(ExpandArgs),
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output records as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn make_printer(&self) -> Box<dyn RecordPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let cfg = PrinterConfig {
            color: self.color,
            show_summary: !self.quiet,
        };

        match format {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout, Stderr>::stdout(cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout(cfg)),
        }
    }
}
