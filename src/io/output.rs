use crate::core::errors::Result;
use crate::core::RunSummary;
use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()> {
        let json = serde_json::to_string_pretty(summary)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()> {
        let verdict = if summary.passed() {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        let copy = if summary.copy_succeeded { "ok" } else { "failed" };

        writeln!(self.writer, "DICOM payload check")?;
        writeln!(self.writer, "  Input directory:  {}", summary.input_dir.display())?;
        writeln!(self.writer, "  Output directory: {}", summary.output_dir.display())?;
        writeln!(self.writer, "  Files scanned:    {}", summary.files_scanned)?;
        writeln!(self.writer, "  Invalid files:    {}", summary.invalid_files)?;
        writeln!(self.writer, "  Copy:             {copy}")?;
        writeln!(self.writer, "  Result:           {verdict}")?;
        Ok(())
    }
}

/// Build a summary writer for the requested format, targeting either a
/// file or stdout.
pub fn create_writer(output: Option<&Path>, format: OutputFormat) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
