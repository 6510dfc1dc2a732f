//! Display-free view model for the page
//!
//! The browser entry point owns the DOM; this module decides what it shows.
//! Keeping the mapping here lets the screen flow be tested without a
//! browser: four regions toggle with the phase, and the HUD text is plain
//! formatting over session state.

use crate::sim::{GamePhase, GameState};

/// Which of the four page regions are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenVisibility {
    pub menu: bool,
    pub canvas: bool,
    pub stats: bool,
    pub game_over: bool,
}

/// Region visibility for a phase. The terminal screen doubles for wins and
/// losses; only its heading differs.
pub fn screens_for(phase: GamePhase) -> ScreenVisibility {
    match phase {
        GamePhase::Menu => ScreenVisibility {
            menu: true,
            canvas: false,
            stats: false,
            game_over: false,
        },
        GamePhase::Playing => ScreenVisibility {
            menu: false,
            canvas: true,
            stats: true,
            game_over: false,
        },
        GamePhase::GameOver | GamePhase::Won => ScreenVisibility {
            menu: false,
            canvas: false,
            stats: false,
            game_over: true,
        },
    }
}

/// Heading for the terminal screen
pub fn terminal_heading(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Won => "You Win!",
        _ => "Game Over",
    }
}

pub fn score_text(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

pub fn lives_text(state: &GameState) -> String {
    format!("Lives: {}", state.lives)
}

pub fn level_text(state: &GameState) -> String {
    format!("Level: {}", state.level)
}

/// Bare number for the terminal screen's score slot
pub fn final_score_text(state: &GameState) -> String {
    state.score.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_region_owns_each_phase() {
        let menu = screens_for(GamePhase::Menu);
        assert!(menu.menu && !menu.canvas && !menu.stats && !menu.game_over);

        let playing = screens_for(GamePhase::Playing);
        assert!(!playing.menu && playing.canvas && playing.stats && !playing.game_over);

        for phase in [GamePhase::GameOver, GamePhase::Won] {
            let terminal = screens_for(phase);
            assert!(terminal.game_over);
            assert!(!terminal.menu && !terminal.canvas && !terminal.stats);
        }
    }

    #[test]
    fn test_terminal_headings_differ() {
        assert_eq!(terminal_heading(GamePhase::Won), "You Win!");
        assert_eq!(terminal_heading(GamePhase::GameOver), "Game Over");
    }

    #[test]
    fn test_hud_text() {
        let mut state = GameState::new();
        state.score = 12;
        state.lives = 2;
        state.level = 3;
        assert_eq!(score_text(&state), "Score: 12");
        assert_eq!(lives_text(&state), "Lives: 2");
        assert_eq!(level_text(&state), "Level: 3");
        assert_eq!(final_score_text(&state), "12");
    }
}
