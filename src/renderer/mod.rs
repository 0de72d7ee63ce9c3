//! Terminal rendering module
//!
//! Text builders are pure and return `String`s; `TerminalRenderer` writes
//! them out and paces the ball animation.

pub mod glyphs;
pub mod terminal;

pub use glyphs::GlyphSet;
pub use terminal::TerminalRenderer;

use std::fmt::Write as _;

use crate::sim::{Cell, DeliveryReport, Ground, MatchState, Outcome, ShotDirection};

/// Render the ground grid, one line per row
pub fn render_grid(ground: &Ground, glyphs: GlyphSet) -> String {
    let mut out = String::new();
    for row in ground.rows() {
        for cell in row {
            out.push_str(glyphs.glyph(*cell));
        }
        out.push('\n');
    }
    out
}

/// Legend line explaining each glyph
pub fn legend(glyphs: GlyphSet) -> String {
    let entries = [
        (Cell::OuterBoundary, "Boundary"),
        (Cell::InnerBoundary, "Inner Ring"),
        (Cell::Fielder, "Fielder"),
        (Cell::Pitch, "Pitch"),
        (Cell::Grass, "Ground"),
        (Cell::Outside, "Outside"),
    ];
    let body = entries
        .iter()
        .map(|(cell, name)| {
            let glyph = glyphs.glyph(*cell).trim_end();
            let marker = if glyph.is_empty() { "(blank)" } else { glyph };
            format!("{marker} {name}")
        })
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Legend:\n{body}")
}

/// Mode, target, score and wickets panel
pub fn game_info(state: &MatchState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mode: {}", state.mode);
    let _ = writeln!(out, "Target: {}", state.target);
    let _ = writeln!(out, "Score: {}/{}", state.score(), state.wickets_lost());
    let _ = writeln!(out, "Wickets Left: {}", state.wickets_in_hand());
    out
}

/// One-line summary after a delivery
pub fn feedback(report: &DeliveryReport, state: &MatchState) -> String {
    let message = match report.outcome {
        Outcome::Wicket => "🚨 WICKET!".to_string(),
        Outcome::Runs(n) => format!("Scored {n} run{}", if n == 1 { "" } else { "s" }),
    };
    format!(
        "{message}  |  Score: {}/{}  |  Wickets Left: {}",
        state.score(),
        state.wickets_lost(),
        state.wickets_in_hand()
    )
}

/// Shot selection menu
pub fn shot_menu() -> String {
    let mut out = String::from("Choose Your Shot:\n");
    for shot in ShotDirection::ALL {
        let _ = writeln!(out, "{}: {}", shot.code().to_ascii_uppercase(), shot.label());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Formation, GroundSpec, MatchStatus, Mode, PolarCoordinate};

    fn report(outcome: Outcome) -> DeliveryReport {
        DeliveryReport {
            number: 1,
            shot: ShotDirection::Straight,
            trajectory: PolarCoordinate::new(4.0, 90.0),
            zone: None,
            caught_by: None,
            outcome,
            status: MatchStatus::Ongoing,
        }
    }

    #[test]
    fn test_render_grid_shape() {
        let ground = Ground::build(GroundSpec::default(), &Formation::standard());
        let text = render_grid(&ground, GlyphSet::Ascii);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines.iter().all(|l| l.chars().count() == 50));
        // Center row carries the pitch
        assert_eq!(&lines[12][24..26], "| ");
    }

    #[test]
    fn test_feedback_pluralizes_runs() {
        let mut state = MatchState::new(Mode::Easy, 15);
        state.apply(Outcome::SINGLE).unwrap();
        assert_eq!(
            feedback(&report(Outcome::SINGLE), &state),
            "Scored 1 run  |  Score: 1/0  |  Wickets Left: 6"
        );
        state.apply(Outcome::Wicket).unwrap();
        assert!(feedback(&report(Outcome::Wicket), &state).starts_with("🚨 WICKET!"));
        assert!(feedback(&report(Outcome::DOT), &state).starts_with("Scored 0 runs"));
    }

    #[test]
    fn test_game_info_and_menu() {
        let state = MatchState::new(Mode::Medium, 42);
        let info = game_info(&state);
        assert!(info.contains("Mode: MEDIUM"));
        assert!(info.contains("Target: 42"));
        assert!(info.contains("Wickets Left: 5"));

        let menu = shot_menu();
        assert!(menu.contains("L: Left-side (Leg)"));
        assert!(menu.contains("S: Straight (Frontfoot)"));
    }

    #[test]
    fn test_legend_lists_every_marker() {
        let text = legend(GlyphSet::Ascii);
        for name in ["Boundary", "Inner Ring", "Fielder", "Pitch", "Ground", "Outside"] {
            assert!(text.contains(name));
        }
        assert!(text.contains("(blank) Outside"));
        assert!(!text.contains("| Outside"));
        assert!(legend(GlyphSet::Emoji).contains("⬛ Outside"));
    }
}
