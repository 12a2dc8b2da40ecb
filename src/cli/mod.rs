//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing. Usage errors, `-h` and bad paths all
//! exit with [`EXIT_USAGE`].

mod run;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
pub use run::run;

use crate::logging::ColorMode;

/// Exit code for usage errors, help output and invalid paths.
pub const EXIT_USAGE: i32 = 84;

/// Short usage line printed on argument errors.
pub const USAGE_LINE: &str = "Usage: headerize <path>";

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "headerize",
  version,
  disable_version_flag = true,
  about,
  styles = CUSTOM_STYLES,
  after_help = "USAGE
    headerize f

DESCRIPTION
    f   file or directory

Headers are read from header.json in the current directory unless --config
or HEADERIZE_CONFIG points elsewhere.

Examples:
  # Add headers to every .ts and .vue file under src/
  headerize src/

  # List files missing their header without modifying anything
  headerize --check .

  # Preview the insertions
  headerize --check --show-diff src/
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// File or directory to process. Directories are processed recursively.
  #[arg(value_name = "PATH")]
  pub path: PathBuf,

  /// Path to the header config file (default: header.json in the current
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Check mode: report files missing their header without modifying them
  #[arg(long)]
  pub check: bool,

  /// Show a diff of every header insertion on stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Append a diff of every header insertion to a file
  #[arg(long, value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Write through a temporary file and rename it over the original
  #[arg(long)]
  pub atomic: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// An early exit decided while parsing arguments.
#[derive(Debug)]
pub enum CliExit {
  /// `-h`/`--help` was given; carries the rendered help text.
  Help(String),
  /// The arguments could not be parsed; carries clap's reason.
  Usage(String),
  /// The path is neither an existing file nor an existing directory.
  WrongPath(PathBuf),
}

impl CliExit {
  /// The process exit code for this exit.
  pub const fn code(&self) -> i32 {
    EXIT_USAGE
  }

  /// Prints the exit message and terminates the process.
  pub fn exit(self) -> ! {
    let code = self.code();
    match self {
      CliExit::Help(text) => print!("{text}"),
      CliExit::Usage(reason) => {
        eprintln!("ERROR: {reason}");
        println!("{USAGE_LINE}");
      }
      CliExit::WrongPath(_) => {
        println!("Wrong file or directory name !");
        println!("Please use -h for help");
      }
    }
    process::exit(code)
  }
}

impl Cli {
  /// Parse CLI arguments, exiting the process on help or errors.
  pub fn parse_args() -> Self {
    match Self::try_parse_args(std::env::args_os()) {
      Ok(cli) => cli,
      Err(exit) => exit.exit(),
    }
  }

  /// Parse the given arguments without exiting.
  pub fn try_parse_args<I, T>(args: I) -> Result<Self, CliExit>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    let cli = Self::try_parse_from(args).map_err(|e| match e.kind() {
      ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => CliExit::Help(e.to_string()),
      kind => CliExit::Usage(kind.as_str().unwrap_or("invalid arguments").to_string()),
    })?;

    cli.validate()?;
    Ok(cli)
  }

  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), CliExit> {
    if !self.path.is_file() && !self.path.is_dir() {
      return Err(CliExit::WrongPath(self.path.clone()));
    }
    Ok(())
  }

  /// Renders the long help text.
  pub fn help_text() -> String {
    Self::command().render_long_help().to_string()
  }
}
