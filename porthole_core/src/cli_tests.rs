use super::cli::*;

use std::ffi::OsString;
use std::path::Path;

fn to_osstr(args: Vec<&str>) -> Vec<OsString> {
  args.iter().map(OsString::from).collect::<Vec<_>>()
}

#[test]
fn cli_opt1() {
  let input = [
    to_osstr(vec![]),
    to_osstr(vec!["drag.txt"]),
    to_osstr(vec!["-W", "800", "drag.txt"]),
    to_osstr(vec!["--height", "100", "--width=200"]),
    to_osstr(vec!["click.txt", "-H", "32"]),
  ];

  let to_pb = |path: &str| Some(Path::new(path).to_path_buf());

  let expects = [
    CliOptions::new(None, 640, 480),
    CliOptions::new(to_pb("drag.txt"), 640, 480),
    CliOptions::new(to_pb("drag.txt"), 800, 480),
    CliOptions::new(None, 200, 100),
    CliOptions::new(to_pb("click.txt"), 640, 32),
  ];

  assert_eq!(input.len(), expects.len());
  for (i, args) in input.iter().enumerate() {
    let actual = CliOptions::from_args(args);
    assert_eq!(actual, expects[i]);
  }
}

#[test]
fn cli_opt_default1() {
  let actual = CliOptions::from_args(&[]);
  assert_eq!(actual, CliOptions::default());
  assert!(actual.script().is_none());
}

#[test]
fn cli_opt_failed1() {
  let input = [
    to_osstr(vec!["--width"]),
    to_osstr(vec!["--width", "wide"]),
    to_osstr(vec!["-H", "-5"]),
    to_osstr(vec!["a.txt", "b.txt"]),
    to_osstr(vec!["--ex"]),
  ];
  for args in input.iter() {
    assert!(CliOptions::try_from_args(args).is_err());
  }
}
