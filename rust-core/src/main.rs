//! Interactive DFT editor
//! 
//! ```bash
//! dft-workbench signal.txt
//! dft-workbench signal.txt -vvv   # trace every DFT term
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dft_workbench::cli::Session;
use dft_workbench::{load_signal, SpectrumEditor, WorkbenchConfig};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Process a single signal from a text file", long_about = None)]
struct Args {
    /// The path to the text file with signal data
    filename: PathBuf,
    
    /// Verbosity level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    
    /// Figure width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,
    
    /// Figure height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
    
    /// Magnitude threshold separating present from absent bins
    #[arg(long, default_value_t = 1e-4)]
    threshold: f64,
    
    /// Command used to open displayed figures (default: platform opener)
    #[arg(long)]
    viewer: Option<String>,
    
    /// TrueType font used for plot text
    #[arg(long)]
    font: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> WorkbenchConfig {
        WorkbenchConfig {
            magnitude_threshold: self.threshold,
            figure_size: (self.width, self.height),
            viewer: self.viewer.clone(),
            font_path: self.font.clone(),
            ..WorkbenchConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .try_init();
    
    if !args.filename.exists() {
        println!("Error: File {} does not exist.", args.filename.display());
        return Ok(());
    }
    
    let signal = match load_signal(&args.filename) {
        Ok(signal) => signal,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };
    
    let config = args.config();
    let mut editor = match SpectrumEditor::new(signal, &config) {
        Ok(editor) => editor,
        Err(e) => {
            println!("Error: {e}");
            return Ok(());
        }
    };
    editor.calculate();
    info!(bins = editor.frequencies().len(), "spectrum ready");
    
    let stdin = io::stdin();
    let mut session = Session::new(editor, config, stdin.lock(), io::stdout());
    session.run().context("interactive session failed")?;
    
    Ok(())
}
