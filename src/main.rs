//! Crease entry point
//!
//! Parses flags, loads settings and plays one match in the terminal.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crease::Settings;
use crease::renderer::{GlyphSet, TerminalRenderer, shot_menu};
use crease::sim::{DeliveryError, DistancePolicy, Match, Mode, ShotDirection};

#[derive(Debug, Parser)]
#[command(name = "crease", version, about = "Terminal cricket batting simulator")]
struct Args {
    /// Difficulty: easy, medium or hard
    #[arg(long, value_parser = parse_mode)]
    mode: Option<Mode>,

    /// RNG seed, for replaying a match
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Shot distance policy: shot_shaped or uniform
    #[arg(long, value_parser = parse_policy)]
    distance: Option<DistancePolicy>,

    /// Let the computer pick random shots
    #[arg(long)]
    autoplay: bool,

    /// Skip the ball-in-flight animation
    #[arg(long)]
    no_animation: bool,

    /// Plain ASCII ground instead of emoji
    #[arg(long)]
    ascii: bool,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| format!("unknown mode '{s}' (easy, medium, hard)"))
}

fn parse_policy(s: &str) -> Result<DistancePolicy, String> {
    DistancePolicy::from_str(s).ok_or_else(|| format!("unknown policy '{s}' (shot_shaped, uniform)"))
}

/// Settings file first, then command-line overrides
fn resolve_settings(args: &Args) -> Settings {
    let mut settings = Settings::load_or_default(args.settings.as_deref());
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(policy) = args.distance {
        settings.distance_policy = policy;
    }
    if args.no_animation {
        settings.animation = false;
    }
    if args.ascii {
        settings.glyphs = GlyphSet::Ascii;
    }
    settings
}

/// Read one line of input; None at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    Ok((n > 0).then_some(line))
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Crease starting...");

    let args = Args::parse();
    let settings = resolve_settings(&args);
    let seed = settings.seed.unwrap_or_else(rand::random);

    let mut game = Match::new(settings.match_config(seed), seed);
    let mut renderer = TerminalRenderer::stdout(settings.glyphs, settings.frame_delay());
    // Autoplay picks from its own stream so replays with --seed match
    let mut autopilot = Pcg32::seed_from_u64(seed.wrapping_add(1));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.status().is_over() {
        renderer.show_board(game.state(), &game.ground())?;

        let report = if args.autoplay {
            let shot = ShotDirection::random(&mut autopilot);
            renderer.line(&format!("Autoplay: {shot}"))?;
            game.play(shot, &mut renderer)?
        } else {
            loop {
                renderer.line(&shot_menu())?;
                let Some(line) = read_line(&mut input)? else {
                    bail!("input closed before the match finished");
                };
                match game.deliver(Some(&line), &mut renderer) {
                    Ok(report) => break report,
                    Err(DeliveryError::InvalidShot(e)) => {
                        log::debug!("Rejected input {:?}: {e}", line.trim());
                        renderer.line("Invalid shot! Please try again.\n")?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        if args.autoplay {
            // Hold the feedback line before the next board clears it
            thread::sleep(settings.autoplay_pause());
        } else if !report.status.is_over() {
            renderer.line("\nPress Enter for next delivery...")?;
            if read_line(&mut input)?.is_none() {
                bail!("input closed before the match finished");
            }
        }
    }

    if let Some(result) = game.result() {
        renderer.line(&result.to_string())?;
    }
    renderer.line(&format!("(seed {})", game.seed()))?;
    log::info!("Crease finished");
    Ok(())
}
