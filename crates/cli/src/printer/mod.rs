use std::io::{self, Write};
use std::time::Duration;

use arbor_fs::{EntryKind, FileRecord};
use clap::ValueEnum;

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line, optionally colored by kind.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Enable colors when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub color: ColorChoice,
    /// Whether to write the closing summary to stderr.
    pub show_summary: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            show_summary: true,
        }
    }
}

/// Totals reported once all records are printed.
#[derive(Debug)]
pub struct Summary<'a> {
    /// Label of the command that produced the records.
    pub kind: &'a str,
    pub total: usize,
    pub elapsed: Option<Duration>,
}

pub trait RecordPrinter {
    fn print_record(&mut self, record: &FileRecord) -> io::Result<()>;

    fn finish(&mut self, summary: &Summary<'_>) -> io::Result<()>;
}

/// Plain listing: directories red, links blue, files uncolored.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// `Auto` resolves to no color, since a generic writer cannot be probed.
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = cfg.color == ColorChoice::Always;
        Self {
            out,
            err,
            cfg,
            use_color,
        }
    }

    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
            use_color,
        }
    }

    fn format_path(&self, record: &FileRecord) -> String {
        let color = match record.kind() {
            EntryKind::Directory => RED,
            EntryKind::SymbolicLink => BLUE,
            EntryKind::RegularFile => "",
        };

        if self.use_color && !color.is_empty() {
            format!("{color}{}{RESET}", record.full_path())
        } else {
            record.full_path().to_owned()
        }
    }
}

impl<W: Write, E: Write> RecordPrinter for HumanPrinter<W, E> {
    fn print_record(&mut self, record: &FileRecord) -> io::Result<()> {
        let path = self.format_path(record);
        writeln!(self.out, "{path}")
    }

    fn finish(&mut self, summary: &Summary<'_>) -> io::Result<()> {
        self.out.flush()?;
        if !self.cfg.show_summary {
            return Ok(());
        }

        match summary.elapsed {
            Some(elapsed) => writeln!(
                self.err,
                "\n[{}] {} entries in {:.2}ms",
                summary.kind,
                summary.total,
                elapsed.as_secs_f64() * 1000.0
            ),
            None => writeln!(self.err, "\n[{}] {} entries", summary.kind, summary.total),
        }
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    pub fn stdout(cfg: PrinterConfig) -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
            cfg,
        }
    }
}

impl<W: Write, E: Write> RecordPrinter for JsonPrinter<W, E> {
    fn print_record(&mut self, record: &FileRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)
    }

    fn finish(&mut self, summary: &Summary<'_>) -> io::Result<()> {
        self.out.flush()?;
        if !self.cfg.show_summary {
            return Ok(());
        }

        let obj = serde_json::json!({
            "type": "summary",
            "kind": summary.kind,
            "total": summary.total,
            "elapsed_ms": summary.elapsed.map(|d| d.as_secs_f64() * 1000.0),
        });
        writeln!(self.err, "{obj}")
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
