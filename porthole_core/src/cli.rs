//! Command line options.

use crate::constant::DEFAULT_CANVAS_HEIGHT;
use crate::constant::DEFAULT_CANVAS_WIDTH;

use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Command line options.
pub struct CliOptions {
  script: Option<PathBuf>,
  width: u32,
  height: u32,
}

impl Default for CliOptions {
  fn default() -> Self {
    Self {
      script: None,
      width: DEFAULT_CANVAS_WIDTH,
      height: DEFAULT_CANVAS_HEIGHT,
    }
  }
}

const SHORT_HELP: &str = r#"Usage: {PORTHOLE_BIN_NAME} [OPTIONS] [SCRIPT]

Arguments:
  [SCRIPT]  Pointer event script, read STDIN if not given

Options:
  -W, --width <WIDTH>    Canvas width [default: 640]
  -H, --height <HEIGHT>  Canvas height [default: 480]
  -h, --help             Print help (see more with '--help')
  -V, --version          Print version
"#;

const LONG_HELP: &str = r#"A retained-mode 2D scene-graph engine

porthole builds a demo scene, replays pointer events on it and records every
frame drawn onto its canvas. Set PORTHOLE_LOG=trace to see each event and
frame in the log file.

Usage: {PORTHOLE_BIN_NAME} [OPTIONS] [SCRIPT]

Arguments:
  [SCRIPT]
          Pointer event script, read STDIN if not given. Each line is one
          event: `down|move|up X Y [left|middle|right]`, blank lines and
          lines start with `#` are ignored

Options:
  -W, --width <WIDTH>
          Canvas width [default: 640]

  -H, --height <HEIGHT>
          Canvas height [default: 480]

  -h, --help
          Print help (see a summary with '-h')

  -V, --version
          Print version
"#;

const VERSION: &str = "{PORTHOLE_BIN_NAME} {PORTHOLE_PKG_VERSION}";

fn bin_name() -> String {
  std::env::current_exe()
    .ok()
    .and_then(|exe| {
      exe
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
    })
    .unwrap_or_else(|| "porthole".to_string())
}

fn parse(mut parser: lexopt::Parser) -> Result<CliOptions, lexopt::Error> {
  use lexopt::prelude::*;

  // Arguments
  let mut options = CliOptions::default();

  while let Some(arg) = parser.next()? {
    match arg {
      Short('h') | Long("help") => {
        let help = match arg {
          Short(_) => SHORT_HELP,
          _ => LONG_HELP,
        };
        println!("{}", help.replace("{PORTHOLE_BIN_NAME}", &bin_name()));
        std::process::exit(0);
      }
      Short('V') | Long("version") => {
        let version = VERSION
          .replace("{PORTHOLE_BIN_NAME}", &bin_name())
          .replace("{PORTHOLE_PKG_VERSION}", env!("CARGO_PKG_VERSION"));
        println!("{version}");
        std::process::exit(0);
      }
      Short('W') | Long("width") => {
        options.width = parser.value()?.parse()?;
      }
      Short('H') | Long("height") => {
        options.height = parser.value()?.parse()?;
      }
      Value(script) if options.script.is_none() => {
        options.script = Some(Path::new(&script).to_path_buf());
      }
      _ => return Err(arg.unexpected()),
    }
  }

  Ok(options)
}

impl CliOptions {
  fn handle_error(result: Result<Self, lexopt::Error>) -> Self {
    match result {
      Ok(res) => res,
      Err(e) => {
        println!("error: {e}");
        println!();
        println!("For more information, try '--help'");
        std::process::exit(2);
      }
    }
  }

  pub fn from_env() -> Self {
    let result = parse(lexopt::Parser::from_env());
    Self::handle_error(result)
  }

  pub fn from_args(args: &[OsString]) -> Self {
    let result = Self::try_from_args(args);
    Self::handle_error(result)
  }

  /// Same with [`from_args`](CliOptions::from_args), but returns the error
  /// instead of exiting.
  pub fn try_from_args(args: &[OsString]) -> Result<Self, lexopt::Error> {
    parse(lexopt::Parser::from_args(args))
  }

  /// Pointer event script, `None` means STDIN.
  pub fn script(&self) -> Option<&Path> {
    self.script.as_deref()
  }

  /// Canvas width.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Canvas height.
  pub fn height(&self) -> u32 {
    self.height
  }

  #[cfg(test)]
  pub fn new(script: Option<PathBuf>, width: u32, height: u32) -> Self {
    Self {
      script,
      width,
      height,
    }
  }
}
