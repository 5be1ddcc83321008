//! Pointlight command-line driver
//!
//! Lists the action repertoire and renders frame sequences to stdout as
//! JSON lines or CSV. Logs go to stderr (`RUST_LOG`, default `warn`).

mod args;
mod error;
mod output;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use pointlight_motion::{Camera, EngineConfig, ModulationParams, MotionEngine};

use args::{Command, Format, RenderArgs, View, USAGE};
use error::{CliError, CliResult};
use output::FrameWriter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    match run(&args, stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error[{}]: {}", e.kind(), e);
            if matches!(e, CliError::Usage(_)) {
                eprintln!("\n{}", USAGE);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &[String], mut out: impl Write) -> CliResult<()> {
    match Command::parse(args)? {
        Command::Help => {
            writeln!(out, "{}", USAGE)?;
            Ok(())
        }
        Command::List { config } => {
            let engine = build_engine(config.as_deref())?;
            list(&engine, out)
        }
        Command::Render(render_args) => {
            let engine = build_engine(render_args.config.as_deref())?;
            render(&engine, &render_args, out)
        }
    }
}

fn build_engine(config: Option<&Path>) -> CliResult<MotionEngine> {
    let config = match config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    Ok(MotionEngine::with_config(config)?)
}

fn load_config(path: &Path) -> CliResult<EngineConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ConfigFormat {
        path: path.to_path_buf(),
        source,
    })
}

fn list(engine: &MotionEngine, mut out: impl Write) -> CliResult<()> {
    for spec in engine.list_actions() {
        writeln!(
            out,
            "{:<16} {:<12} {:.3}s",
            spec.name(),
            spec.semantics.to_string(),
            engine.base_period(spec.kind)
        )?;
    }
    out.flush()?;
    Ok(())
}

fn render(engine: &MotionEngine, args: &RenderArgs, out: impl Write) -> CliResult<()> {
    let kind = engine.registry().lookup(&args.action)?.kind();
    let mods = match &args.modulation {
        Some((weight, affect)) => engine.make_modulation(weight, affect)?,
        None => ModulationParams::NEUTRAL,
    };
    let camera = camera_for(args)?;

    let seconds = args
        .seconds
        .unwrap_or_else(|| engine.period_of(kind, &mods));
    let count = frame_count(seconds, args.fps)?;
    debug!(action = %kind, seconds, fps = args.fps, count, "rendering");

    let mut writer = FrameWriter::new(out, args.format, camera);
    writer.begin()?;
    for frame in engine.frames(&args.action, args.fps, count, &mods)? {
        writer.write(&frame)?;
    }
    writer.finish()?;
    Ok(())
}

fn camera_for(args: &RenderArgs) -> CliResult<Option<Camera>> {
    if args.view.is_none() && args.perspective.is_none() {
        return Ok(None);
    }
    let base = match args.view {
        Some(View::Side) => Camera::side(),
        Some(View::Front) | None => Camera::front(),
    };
    let camera = match args.perspective {
        Some(camera_z) => Camera::perspective(camera_z)?.with_yaw(base.yaw),
        None => base,
    };
    Ok(Some(camera))
}

/// Longest sequence a single render may produce
const MAX_FRAMES: u64 = 10_000_000;

/// Frames from 0 until the first frame at or past `seconds`, so a
/// transitional action always ends on its final pose
fn frame_count(seconds: f64, fps: f64) -> CliResult<u64> {
    if !seconds.is_finite() {
        return Ok(1);
    }
    let last = (seconds * fps - 1e-9).ceil().max(0.0);
    if last >= MAX_FRAMES as f64 {
        return Err(CliError::usage(format!(
            "{}s at {} fps exceeds {} frames",
            seconds, fps, MAX_FRAMES
        )));
    }
    Ok(last as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_line(line: &str) -> CliResult<String> {
        let args: Vec<String> = line.split_whitespace().map(String::from).collect();
        run_args(&args)
    }

    fn run_args(args: &[String]) -> CliResult<String> {
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn list_with_config(name: &str, json: &str) -> CliResult<String> {
        let file = format!("pointlight-{}-{}.json", name, std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, json).unwrap();
        let args = vec![
            "list".to_string(),
            "--config".to_string(),
            path.display().to_string(),
        ];
        let result = run_args(&args);
        std::fs::remove_file(&path).unwrap();
        result
    }

    #[test]
    fn test_list_prints_every_action() {
        let text = run_line("list").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("walking"));
        assert!(lines[0].contains("cyclic"));
        assert!(lines[0].ends_with("1.000s"));
        assert!(text.contains("forward-rolling"));
    }

    #[test]
    fn test_render_one_period_by_default() {
        let text = run_line("render walking --fps 10").unwrap();
        // Walking lasts 1s: frames 0..=10
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn test_render_transitional_ends_complete() {
        let text = run_line("render sitting-down --fps 4 --weight light --affect happy").unwrap();
        let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["phase"], 1.0);
        assert_eq!(last["action"], "sitting-down");
    }

    #[test]
    fn test_render_csv_projected() {
        let text =
            run_line("render waving-a-hand --seconds 0 --format csv --view side --perspective 5")
                .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "frame,time,phase,action,landmark,x,y");
        assert_eq!(lines.len(), 1 + 15);
    }

    #[test]
    fn test_unknown_action_fails() {
        let err = run_line("render moonwalking").unwrap_err();
        assert_eq!(err.kind(), "UnknownAction");
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("moonwalking"));
    }

    #[test]
    fn test_invalid_modulation_fails() {
        let err = run_line("render walking --weight medium --affect sad").unwrap_err();
        assert_eq!(err.kind(), "InvalidModulation");
        assert!(err.to_string().contains("medium"));
    }

    #[test]
    fn test_missing_config_fails() {
        let err = run_line("list --config /nonexistent/pointlight.json").unwrap_err();
        assert_eq!(err.kind(), "ConfigRead");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_file_changes_engine() {
        let json = r#"{
            "generators": { "turn": { "extent": "half" } },
            "timing": { "turning-around": 1.5 }
        }"#;
        let text = list_with_config("half-turn", json).unwrap();

        let turn = text
            .lines()
            .find(|line| line.starts_with("turning-around"))
            .unwrap();
        assert!(turn.contains("transitional"));
        assert!(turn.ends_with("1.500s"));
        assert!(text.lines().next().unwrap().contains("cyclic"));
    }

    #[test]
    fn test_malformed_config_fails() {
        let json = r#"{ "generators": { "roll": { "radius": "wide" } } }"#;
        let err = list_with_config("bad-radius", json).unwrap_err();
        assert_eq!(err.kind(), "ConfigFormat");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_endless_render_is_refused() {
        let err = run_line("render walking --seconds 1e300 --fps 60").unwrap_err();
        assert_eq!(err.kind(), "Usage");
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count(1.0, 60.0).unwrap(), 61);
        assert_eq!(frame_count(0.0, 60.0).unwrap(), 1);
        assert_eq!(frame_count(0.625, 8.0).unwrap(), 6);
        assert_eq!(frame_count(2.0 / 1.15, 4.0).unwrap(), 8);
        assert_eq!(frame_count(f64::INFINITY, 60.0).unwrap(), 1);
        assert!(frame_count(1e300, 60.0).is_err());
        assert!(frame_count(1e6, 1e6).is_err());
    }
}
