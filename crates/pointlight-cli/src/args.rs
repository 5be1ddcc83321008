//! Command-line parsing

use std::path::PathBuf;

use crate::{CliError, CliResult};

pub const USAGE: &str = "\
Usage:
  pointlight list [--config FILE]
  pointlight render <action> [--weight light|heavy] [--affect happy|sad]
                    [--fps N] [--seconds S] [--format json|csv]
                    [--view front|side] [--perspective Z] [--config FILE]
  pointlight help

--weight and --affect go together; omit both for unmodulated motion.
--seconds defaults to one period of the action.
Points are 3D body coordinates unless --view or --perspective is given.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Front,
    Side,
}

/// Arguments of `pointlight render`
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArgs {
    pub action: String,
    /// `(weight, affect)` as typed
    pub modulation: Option<(String, String)>,
    pub fps: f64,
    pub seconds: Option<f64>,
    pub format: Format,
    pub view: Option<View>,
    pub perspective: Option<f64>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List { config: Option<PathBuf> },
    Render(RenderArgs),
    Help,
}

impl Command {
    /// Parse arguments without the program name
    pub fn parse(args: &[String]) -> CliResult<Command> {
        let Some((command, rest)) = args.split_first() else {
            return Err(CliError::usage("missing command"));
        };
        match command.as_str() {
            "list" => parse_list(rest),
            "render" => parse_render(rest).map(Command::Render),
            "help" | "-h" | "--help" => Ok(Command::Help),
            other => Err(CliError::usage(format!("unknown command '{}'", other))),
        }
    }
}

fn parse_list(args: &[String]) -> CliResult<Command> {
    let mut config = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(value_of(arg, iter.next())?)),
            other => return Err(CliError::usage(format!("unexpected argument '{}'", other))),
        }
    }
    Ok(Command::List { config })
}

fn parse_render(args: &[String]) -> CliResult<RenderArgs> {
    let mut action = None;
    let mut weight = None;
    let mut affect = None;
    let mut fps = 60.0;
    let mut seconds = None;
    let mut format = Format::Json;
    let mut view = None;
    let mut perspective = None;
    let mut config = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--weight" => weight = Some(value_of(arg, iter.next())?.to_string()),
            "--affect" => affect = Some(value_of(arg, iter.next())?.to_string()),
            "--fps" => fps = positive(arg, value_of(arg, iter.next())?)?,
            "--seconds" => seconds = Some(non_negative(arg, value_of(arg, iter.next())?)?),
            "--format" => {
                format = match value_of(arg, iter.next())? {
                    "json" => Format::Json,
                    "csv" => Format::Csv,
                    other => return Err(CliError::usage(format!("unknown format '{}'", other))),
                }
            }
            "--view" => {
                view = Some(match value_of(arg, iter.next())? {
                    "front" => View::Front,
                    "side" => View::Side,
                    other => return Err(CliError::usage(format!("unknown view '{}'", other))),
                })
            }
            "--perspective" => perspective = Some(positive(arg, value_of(arg, iter.next())?)?),
            "--config" => config = Some(PathBuf::from(value_of(arg, iter.next())?)),
            flag if flag.starts_with("--") => {
                return Err(CliError::usage(format!("unknown option '{}'", flag)))
            }
            name => {
                if action.is_some() {
                    return Err(CliError::usage(format!("unexpected argument '{}'", name)));
                }
                action = Some(name.to_string());
            }
        }
    }

    let action = action.ok_or_else(|| CliError::usage("render needs an action name"))?;
    let modulation = match (weight, affect) {
        (Some(weight), Some(affect)) => Some((weight, affect)),
        (None, None) => None,
        (Some(_), None) => return Err(CliError::usage("--weight given without --affect")),
        (None, Some(_)) => return Err(CliError::usage("--affect given without --weight")),
    };

    Ok(RenderArgs {
        action,
        modulation,
        fps,
        seconds,
        format,
        view,
        perspective,
        config,
    })
}

fn value_of<'a>(flag: &str, value: Option<&'a String>) -> CliResult<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| CliError::usage(format!("{} needs a value", flag)))
}

fn number(flag: &str, value: &str) -> CliResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CliError::usage(format!("{} expects a number, got '{}'", flag, value)))
}

fn positive(flag: &str, value: &str) -> CliResult<f64> {
    let v = number(flag, value)?;
    if v <= 0.0 {
        return Err(CliError::usage(format!("{} must be positive, got '{}'", flag, value)));
    }
    Ok(v)
}

fn non_negative(flag: &str, value: &str) -> CliResult<f64> {
    let v = number(flag, value)?;
    if v < 0.0 {
        return Err(CliError::usage(format!("{} must not be negative, got '{}'", flag, value)));
    }
    Ok(v)
}
