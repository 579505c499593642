//! greenviews CLI - simulate and inspect the grass switch.

#![allow(clippy::needless_pass_by_value, clippy::doc_markdown)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use greenviews_core::{
    Constraints, DrawCommand, Event, Point, Rect, RecordingCanvas, Size, Widget,
};
use greenviews_widgets::{DirAssetStore, GreenSwitch, SwitchTheme};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "greenviews")]
#[command(about = "Grass-textured toggle switch toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tap the switch and print every animation frame as JSON
    Simulate {
        /// Theme file (yaml, yml or toml)
        #[arg(short, long)]
        theme: PathBuf,

        /// Asset directory (default: the theme's directory)
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// Host frame interval in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: u64,

        /// Number of taps, each run to completion
        #[arg(long, default_value = "1")]
        taps: u32,

        /// Include recorded draw commands in each frame
        #[arg(long)]
        commands: bool,
    },

    /// Print the derived dimensions and layout of a theme
    Geometry {
        /// Theme file (yaml, yml or toml)
        #[arg(short, long)]
        theme: PathBuf,

        /// Asset directory (default: the theme's directory)
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },
}

/// One line of `simulate` output.
#[derive(Debug, Serialize)]
struct FrameRecord {
    tap: u32,
    play_time_ms: u64,
    thumb_left: f32,
    overlay_left: f32,
    enabled: bool,
    animating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    commands: Option<Vec<DrawCommand>>,
}

/// Output of `geometry`.
#[derive(Debug, Serialize)]
struct GeometryReport {
    track: Rect,
    thumb: Rect,
    measured: Size,
    track_distance: f32,
    step_px_per_ms: f32,
    thumb_inset: f32,
    thumb_diameter: f32,
    thumb_start: f32,
    thumb_finish: f32,
    textured: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            theme,
            assets,
            frame_ms,
            taps,
            commands,
        } => run_simulate(&theme, assets.as_deref(), frame_ms, taps, commands),
        Commands::Geometry { theme, assets } => run_geometry(&theme, assets.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load a theme (parsed and validated), then build a laid-out switch from it.
fn build_switch(theme_path: &Path, assets: Option<&Path>) -> Result<(GreenSwitch, Size)> {
    let theme = SwitchTheme::load(theme_path)
        .with_context(|| format!("Failed to load theme {}", theme_path.display()))?;

    let asset_root = assets.map_or_else(
        || {
            theme_path
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    );
    tracing::info!(theme = %theme_path.display(), assets = %asset_root.display(), "building switch");

    let mut switch = GreenSwitch::from_theme(&theme, &DirAssetStore::new(asset_root));
    let measured = switch.measure(Constraints::unbounded());
    switch.layout(Rect::from_size(measured));
    Ok((switch, measured))
}

fn record(switch: &GreenSwitch, tap: u32, with_commands: bool) -> FrameRecord {
    let snapshot = switch.snapshot();
    let commands = with_commands.then(|| {
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        canvas.take_commands()
    });
    FrameRecord {
        tap,
        play_time_ms: snapshot.play_time_ms,
        thumb_left: snapshot.thumb_left,
        overlay_left: snapshot.overlay_left,
        enabled: snapshot.enabled,
        animating: snapshot.animating,
        commands,
    }
}

/// Tap `taps` times, running each slide to completion at `frame_ms`.
fn simulate(
    switch: &mut GreenSwitch,
    frame_ms: u64,
    taps: u32,
    with_commands: bool,
) -> Result<Vec<FrameRecord>> {
    if frame_ms == 0 {
        bail!("--frame-ms must be at least 1");
    }
    let frame = Duration::from_millis(frame_ms);
    let mut frames = Vec::new();

    for tap in 0..taps {
        switch.event(&Event::click(Point::ORIGIN));
        frames.push(record(switch, tap, with_commands));
        while switch.tick(frame) {
            frames.push(record(switch, tap, with_commands));
        }
        tracing::debug!(tap, enabled = switch.is_enabled(), frames = frames.len(), "tap complete");
    }
    Ok(frames)
}

fn run_simulate(
    theme: &Path,
    assets: Option<&Path>,
    frame_ms: u64,
    taps: u32,
    commands: bool,
) -> Result<()> {
    let (mut switch, _) = build_switch(theme, assets)?;
    let frames = simulate(&mut switch, frame_ms, taps, commands)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in &frames {
        serde_json::to_writer(&mut out, frame).context("Failed to serialize frame")?;
        writeln!(out)?;
    }
    Ok(())
}

fn geometry(switch: &GreenSwitch, measured: Size) -> GeometryReport {
    GeometryReport {
        track: switch.track_rect(),
        thumb: switch.thumb_rect(),
        measured,
        track_distance: switch.track_distance(),
        step_px_per_ms: switch.step(),
        thumb_inset: switch.thumb_inset(),
        thumb_diameter: switch.thumb_diameter(),
        thumb_start: switch.thumb_start_position(),
        thumb_finish: switch.thumb_finish_position(),
        textured: switch.has_background_texture(),
    }
}

fn run_geometry(theme: &Path, assets: Option<&Path>) -> Result<()> {
    let (switch, measured) = build_switch(theme, assets)?;
    let report = geometry(&switch, measured);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize geometry")?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("switch.yaml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_cli_parses_simulate() {
        let cli = Cli::try_parse_from([
            "greenviews",
            "simulate",
            "--theme",
            "switch.yaml",
            "--frame-ms",
            "20",
            "--taps",
            "2",
            "--commands",
        ])
        .unwrap();
        let Commands::Simulate {
            theme,
            assets,
            frame_ms,
            taps,
            commands,
        } = cli.command
        else {
            panic!("expected simulate");
        };
        assert_eq!(theme, PathBuf::from("switch.yaml"));
        assert!(assets.is_none());
        assert_eq!((frame_ms, taps), (20, 2));
        assert!(commands);
    }

    #[test]
    fn test_cli_requires_theme() {
        assert!(Cli::try_parse_from(["greenviews", "geometry"]).is_err());
    }

    #[test]
    fn test_simulate_frames() {
        let (dir, path) = theme_file("track_width: 100\ntrack_height: 40\n");
        let (mut switch, _) = build_switch(&path, Some(dir.path())).unwrap();
        let frames = simulate(&mut switch, 100, 2, false).unwrap();

        // initial frame plus four 100ms ticks, per tap
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[0].play_time_ms, 0);
        assert!(frames[0].animating);
        assert_eq!(frames[4].play_time_ms, 400);
        assert!(frames[4].enabled);
        assert!(!frames[4].animating);
        assert_eq!(frames[5].tap, 1);
        assert_eq!(frames[5].play_time_ms, 0);
        assert!(!frames[9].enabled);
        assert!(frames.iter().all(|f| f.commands.is_none()));
    }

    #[test]
    fn test_simulate_play_time_follows_animator_clamp() {
        let (dir, path) = theme_file("density: 2\n");
        let (mut switch, _) = build_switch(&path, Some(dir.path())).unwrap();
        let frames = simulate(&mut switch, 150, 1, false).unwrap();
        let times: Vec<u64> = frames.iter().map(|f| f.play_time_ms).collect();
        assert_eq!(times, vec![0, 150, 300, 400]);
    }

    #[test]
    fn test_simulate_with_commands() {
        let (dir, path) = theme_file("density: 2\n");
        let (mut switch, _) = build_switch(&path, Some(dir.path())).unwrap();
        let frames = simulate(&mut switch, 400, 1, true).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].commands.as_ref().map(Vec::len), Some(5));

        let json = serde_json::to_value(&frames[1]).unwrap();
        assert_eq!(json["play_time_ms"], 400);
        assert!(json["commands"].is_array());
    }

    #[test]
    fn test_simulate_rejects_zero_frame() {
        let (dir, path) = theme_file("density: 2\n");
        let (mut switch, _) = build_switch(&path, Some(dir.path())).unwrap();
        assert!(simulate(&mut switch, 0, 1, false).is_err());
    }

    #[test]
    fn test_build_switch_rejects_invalid_theme() {
        let (dir, path) = theme_file("track_width: 10\ntrack_height: 40\n");
        let err = build_switch(&path, Some(dir.path())).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to load theme"), "{message}");
        assert!(message.contains("track_height"), "{message}");
    }

    #[test]
    fn test_geometry_report() {
        let (dir, path) = theme_file("track_width: 100\ntrack_height: 40\ndensity: 2\n");
        let (switch, measured) = build_switch(&path, Some(dir.path())).unwrap();
        let report = geometry(&switch, measured);
        assert_eq!(report.measured, Size::new(100.0, 40.0));
        assert_eq!(report.track_distance, 60.0);
        assert!(!report.textured);
        assert!((report.thumb_finish - report.thumb_start - 60.0).abs() < 1e-3);
    }
}
