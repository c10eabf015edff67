//! Glyphwrap CLI - wrap text and inspect label font metrics

mod cli;
mod colorizer;
mod font_file;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is initialized from the parsed flags inside run()
    let app = cli::GlyphwrapApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
