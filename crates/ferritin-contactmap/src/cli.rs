use super::commands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a contact map to SVG
    Render {
        /// Contacts as JSON (`.json`) or an `i j category` table
        #[arg(short, long)]
        input: PathBuf,
        /// Write the SVG here. Without it the figure is shown instead.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// JSON style overrides
        #[arg(short, long)]
        style: Option<PathBuf>,
        /// Open the figure in the system viewer
        #[arg(long)]
        show: bool,
    },
    /// Print the default PF00014 style as JSON
    Style,
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Render {
                input,
                output,
                style,
                show,
            } => commands::render::execute(input, output, style, show),
            Commands::Style => commands::style::execute(),
        }
    }
}
