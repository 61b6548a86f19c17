use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dia")]
#[command(about = "Local dashboard summaries with sensitive text masked", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a dashboard screenshot
    Summarize {
        /// Image path (png, jpg, jpeg) or text:<content>
        source: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Include the masked extracted text for audit
        #[arg(long)]
        show_masked: bool,

        /// Tesseract language code (default from config: eng)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Mask sensitive text from --text or stdin
    Mask {
        /// Text to mask; stdin is read when omitted
        #[arg(long)]
        text: Option<String>,

        /// Print masked text and per-rule counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List detection rules in application order
    Rules,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
