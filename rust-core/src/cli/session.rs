//! Prompt loop over one editing session
//! 
//! Generic over its input and output streams so whole sessions can be
//! driven from memory.

use super::command::Command;
use super::parse::{parse_frequencies, parse_pairs, InputError};
use crate::config::WorkbenchConfig;
use crate::editor::SpectrumEditor;
use crate::plot::Figure;
use crate::transform::TransformError;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MAIN_PROMPT: &str = "Type 'd' to display, 's <filename>' to save, 'fr', 'fs' or 'fa' to remove, scale or add frequencies, or 'q' to quit: ";
const USAGE: &str = "Invalid action. Type 'd' to display, 's <filename>' to save, 'fr' to remove frequencies, 'fs' to scale frequencies, 'fa' to add frequencies, or 'q' to quit.";
const PAIR_HINT: &str = "Error: Invalid input. Please enter frequencies and magnitudes in the format (600, 20), (720, 30).";

/// Which bins a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listing {
    /// Magnitude above the threshold
    Present,
    
    /// Magnitude at or below the threshold
    Absent,
}

/// Interactive editing session
pub struct Session<R, W> {
    editor: SpectrumEditor,
    config: WorkbenchConfig,
    figure: Option<Figure>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session; `editor` should already be calculated
    pub fn new(editor: SpectrumEditor, config: WorkbenchConfig, input: R, output: W) -> Self {
        Self {
            editor,
            config,
            figure: None,
            input,
            output,
        }
    }
    
    /// Run until `q` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt(MAIN_PROMPT)? else {
                debug!("input closed");
                return Ok(());
            };
            
            match Command::parse(&line) {
                Some(Command::Display) => {
                    self.plot()?;
                    self.show()?;
                }
                Some(Command::Save(name)) => {
                    self.plot()?;
                    self.save(&name)?;
                }
                Some(Command::Remove) => self.remove()?,
                Some(Command::Scale) => self.scale()?,
                Some(Command::Add) => self.add()?,
                Some(Command::Quit) => return Ok(()),
                None => writeln!(self.output, "{USAGE}")?,
            }
        }
    }
    
    /// Snapshot the current views into a figure
    pub fn plot(&mut self) -> io::Result<()> {
        match Figure::from_editor(&self.editor) {
            Ok(figure) => self.figure = Some(figure),
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }
    
    /// Display the last figure
    pub fn show(&mut self) -> io::Result<()> {
        let Some(figure) = &self.figure else {
            return writeln!(self.output, "No figure was created. Execute plot() before showing.");
        };
        
        if let Err(e) = figure.show(&self.config) {
            writeln!(self.output, "Error: {e}")?;
        }
        Ok(())
    }
    
    /// Save the last figure under `filename` (default: signal name)
    pub fn save(&mut self, filename: &str) -> io::Result<()> {
        let Some(figure) = &self.figure else {
            return writeln!(self.output, "No figure was created. Execute plot() before saving.");
        };
        
        match figure.save(filename, &self.config) {
            Ok(path) => writeln!(self.output, "Saved as: {}", path.display()),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }
    
    pub fn editor(&self) -> &SpectrumEditor {
        &self.editor
    }
    
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }
    
    /// Consume the session, returning its output stream
    pub fn into_output(self) -> W {
        self.output
    }
    
    fn remove(&mut self) -> io::Result<()> {
        self.list(Listing::Present)?;
        let Some(answer) = self.prompt("Enter frequencies to zero out, separated by commas: ")? else {
            return Ok(());
        };
        
        match parse_frequencies(&answer) {
            Ok(freqs) => {
                let result = self.editor.remove(&freqs);
                self.report(result.map(|_| format!("Frequencies {freqs:?} removed.")))
            }
            Err(InputError::Empty) => Ok(()),
            Err(e) => {
                debug!("rejected edit input: {e}");
                writeln!(self.output, "Error: Invalid frequency input.")
            }
        }
    }
    
    fn scale(&mut self) -> io::Result<()> {
        self.list(Listing::Present)?;
        let Some(answer) = self.prompt("Enter frequencies to scale in the format (freq1, scale1), (freq2, scale2): ")? else {
            return Ok(());
        };
        
        match parse_pairs(&answer) {
            Ok(pairs) => {
                let result = self.editor.scale(&pairs);
                self.report(result.map(|_| format!("Frequencies {pairs:?} scaled.")))
            }
            Err(InputError::Empty) => Ok(()),
            Err(e) => {
                debug!("rejected edit input: {e}");
                writeln!(self.output, "{PAIR_HINT}")
            }
        }
    }
    
    fn add(&mut self) -> io::Result<()> {
        self.list(Listing::Absent)?;
        let Some(answer) = self.prompt("Enter frequencies and magnitudes to add in the format (freq1, mag1), (freq2, mag2): ")? else {
            return Ok(());
        };
        
        match parse_pairs(&answer) {
            Ok(pairs) => {
                let result = self.editor.add(&pairs);
                self.report(result.map(|_| format!("Frequencies {pairs:?} added.")))
            }
            Err(InputError::Empty) => Ok(()),
            Err(e) => {
                debug!("rejected edit input: {e}");
                writeln!(self.output, "{PAIR_HINT}")
            }
        }
    }
    
    fn report(&mut self, result: Result<String, TransformError>) -> io::Result<()> {
        match result {
            Ok(message) => writeln!(self.output, "{message} You can now 'd'isplay or 's'ave the plot."),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }
    
    /// Print the bin table for an edit command
    fn list(&mut self, listing: Listing) -> io::Result<()> {
        let views = match self.editor.views() {
            Ok(views) => views,
            Err(e) => return writeln!(self.output, "Error: {e}"),
        };
        
        writeln!(self.output, "{:<20} {:<20} {:<20}", "Freq (Hz)", "Mag", "Phase (°)")?;
        writeln!(self.output, "{}", "-".repeat(50))?;
        let threshold = self.config.magnitude_threshold;
        
        let rows = self
            .editor
            .frequencies()
            .iter()
            .zip(&views.normalized_magnitudes)
            .zip(views.phase_degrees());
        
        for ((&freq, &magnitude), phase) in rows {
            let present = magnitude > threshold;
            if present == (listing == Listing::Present) {
                writeln!(self.output, "{freq:<20.2} {magnitude:<20.2} {phase:<20.2}")?;
            }
        }
        Ok(())
    }
    
    /// Write `text` and read one line; `None` at end of input
    /// 
    /// Bytes that are not valid UTF-8 become U+FFFD, so they fail parsing
    /// like any other malformed answer.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}
