//! Command-line interface for the glyphwrap utility
//!
//! Wraps text to a fixed character width and reports label font metrics.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::colorizer::{colorize_lines, plain_lines};
use crate::font_file::FontFile;
use glyphwrap::core::logging::init_logging_with_default;
use glyphwrap::{Color, LabelBase, LabelType, LineWrapper, DEFAULT_LINE_SPACING};

/// Log level when neither a flag nor the environment sets one
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Glyphwrap - word-break text wrapping for display labels
#[derive(Parser)]
#[command(name = "glyphwrap")]
#[command(about = "Wrap text to a character width and inspect label font metrics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error) [default: GLYPHWRAP_LOG_LEVEL, RUST_LOG, warn]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json) [default: GLYPHWRAP_LOG_FORMAT, compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wrap text to a maximum number of characters per line
    Wrap {
        /// Maximum characters per line, hyphen included (at least 2)
        #[arg(short, long)]
        width: usize,

        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print lines as a JSON array
        #[arg(long)]
        json: bool,

        /// When to highlight inserted hyphens
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Show font metrics and palette for a label
    Label {
        /// Font description file (JSON)
        #[arg(short, long)]
        font: PathBuf,

        /// Label text
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Read label text from a file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Wrap the text to this many characters per line
        #[arg(short, long)]
        width: Option<usize>,

        /// Text color (#rrggbb)
        #[arg(long)]
        color_fg: Option<Color>,

        /// Background color (#rrggbb); transparent when omitted
        #[arg(long)]
        color_bg: Option<Color>,

        /// Line spacing as a multiple of the font height
        #[arg(long, default_value_t = DEFAULT_LINE_SPACING)]
        line_spacing: f32,

        /// Kind of label
        #[arg(long, value_enum, default_value_t = LabelTypeChoice::Label)]
        label_type: LabelTypeChoice,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Label kinds
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum LabelTypeChoice {
    #[default]
    Label,
    Bitmap,
}

impl From<LabelTypeChoice> for LabelType {
    fn from(value: LabelTypeChoice) -> Self {
        match value {
            LabelTypeChoice::Label => LabelType::Label,
            LabelTypeChoice::Bitmap => LabelType::BitmapLabel,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Options for the label command
pub struct LabelOptions {
    pub font: PathBuf,
    pub text: Option<String>,
    pub input: Option<PathBuf>,
    pub width: Option<usize>,
    pub color_fg: Option<Color>,
    pub color_bg: Option<Color>,
    pub line_spacing: f32,
    pub label_type: LabelTypeChoice,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PaletteEntry {
    color: String,
    transparent: bool,
}

/// Everything the label command reports
#[derive(Debug, Serialize)]
pub struct LabelSummary {
    label_type: String,
    metrics_aware: bool,
    ascent: i32,
    descent: i32,
    line_spacing: f32,
    line_height: i32,
    palette: Vec<PaletteEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<Vec<String>>,
}

/// Main CLI application
#[derive(Default)]
pub struct GlyphwrapApp;

impl GlyphwrapApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Flags win over the environment
        let log_level = cli.log_level.map(|level| level.as_str());
        let log_format = cli.log_format.map(|format| format.as_str());

        if let Err(e) = init_logging_with_default(log_level, log_format, DEFAULT_LOG_LEVEL) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Glyphwrap v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Wrap {
                width,
                input,
                output,
                json,
                color,
            } => self.wrap_command(width, input, output, json, color, cli.verbose),
            Commands::Label {
                font,
                text,
                input,
                width,
                color_fg,
                color_bg,
                line_spacing,
                label_type,
                json,
            } => {
                let options = LabelOptions {
                    font,
                    text,
                    input,
                    width,
                    color_fg,
                    color_bg,
                    line_spacing,
                    label_type,
                    json,
                };
                let report = self.label_command(&options, cli.verbose)?;
                println!("{}", report);
                Ok(())
            }
        }
    }

    /// Handle the wrap command
    fn wrap_command(
        &self,
        width: usize,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        json: bool,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let colorize = !json && self.should_colorize(&output, color);
        let rendered = self.render_wrapped(width, &content, json, colorize)?;

        if verbose {
            eprintln!("Wrapped text to {} characters per line", width);
        }

        self.write_output(output, &rendered)
    }

    /// Wrap `content` and format it for output
    pub fn render_wrapped(
        &self,
        width: usize,
        content: &str,
        json: bool,
        colorize: bool,
    ) -> Result<String> {
        let wrapper = LineWrapper::new(width).map_err(|e| anyhow!("{}", e))?;
        let lines = wrapper.wrap_lines(content);
        info!(width, line_count = lines.len(), "Wrapped input");

        if json {
            let texts: Vec<&str> = lines.iter().map(|line| line.as_str()).collect();
            Ok(serde_json::to_string_pretty(&texts)?)
        } else if colorize {
            Ok(colorize_lines(&lines))
        } else {
            Ok(plain_lines(&lines))
        }
    }

    /// Determine if we should colorize the output based on color choice and output destination
    fn should_colorize(&self, output: &Option<PathBuf>, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                match output {
                    None => crossterm::tty::IsTty::is_tty(&std::io::stdout()),
                    Some(ref p) if p.to_str() == Some("-") => {
                        crossterm::tty::IsTty::is_tty(&std::io::stdout())
                    }
                    Some(_) => false,
                }
            }
        }
    }

    /// Handle the label command, returning the report to print
    pub fn label_command(&self, options: &LabelOptions, verbose: bool) -> Result<String> {
        let font = FontFile::load(&options.font)?.into_font()?;
        let metrics_aware = font.is_metrics_aware();
        if verbose {
            eprintln!(
                "Loaded {} font from '{}'",
                if metrics_aware { "metrics" } else { "glyph" },
                options.font.display()
            );
        }

        let mut label = LabelBase::new(font, options.label_type.into());
        label
            .set_line_spacing(options.line_spacing)
            .map_err(|e| anyhow!("{}", e))?;
        if let Some(color) = options.color_fg {
            label.set_color(Some(color));
        }
        label.set_background_color(options.color_bg);

        let text = match (&options.text, &options.input) {
            (Some(text), _) => text.clone(),
            (None, Some(_)) => self.read_input(options.input.clone())?,
            (None, None) => String::new(),
        };
        label.set_text(text);

        let lines = match options.width {
            Some(width) => Some(label.wrapped_lines(width).map_err(|e| anyhow!("{}", e))?),
            None => None,
        };

        let summary = LabelSummary {
            label_type: label.label_type().to_string(),
            metrics_aware,
            ascent: label.ascent(),
            descent: label.descent(),
            line_spacing: label.line_spacing(),
            line_height: label.line_height(),
            palette: label
                .palette()
                .iter()
                .map(|(color, transparent)| PaletteEntry {
                    color: color.to_string(),
                    transparent,
                })
                .collect(),
            lines,
        };
        debug!(?summary, "Built label summary");

        if options.json {
            return Ok(serde_json::to_string_pretty(&summary)?);
        }
        Ok(Self::format_summary(&summary))
    }

    fn format_summary(summary: &LabelSummary) -> String {
        let mut report = vec![
            format!("Label type:   {}", summary.label_type),
            format!(
                "Font:         {}",
                if summary.metrics_aware {
                    "metrics-aware"
                } else {
                    "glyph-probed"
                }
            ),
            format!("Ascent:       {}", summary.ascent),
            format!("Descent:      {}", summary.descent),
            format!(
                "Line height:  {} (spacing {})",
                summary.line_height, summary.line_spacing
            ),
            "Palette:".to_string(),
        ];
        for (index, entry) in summary.palette.iter().enumerate() {
            let state = if entry.transparent { " (transparent)" } else { "" };
            report.push(format!("  [{}] {}{}", index, entry.color, state));
        }
        if let Some(lines) = &summary.lines {
            report.push(format!("Lines ({}):", lines.len()));
            report.extend(lines.iter().map(|line| format!("  {}", line)));
        }
        report.join("\n")
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                if content.is_empty() || content.ends_with('\n') {
                    write!(stdout, "{}", content)?;
                } else {
                    writeln!(stdout, "{}", content)?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
