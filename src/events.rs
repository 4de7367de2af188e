//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Longest wait for input before the replay gets a chance to advance.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. While a trace is replaying the poll timeout shrinks to the
/// frame delay so input never holds the replay back.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    let timeout = if app.is_animating() {
        app.animation_manager.frame_delay.min(POLL_TIMEOUT)
    } else {
        POLL_TIMEOUT
    };

    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key.code)?,
            _ => {}
        }
    }

    Ok(())
}

/// Dispatches a single key press to the handler of the current screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        _ if app.screen == Screen::InGame => handle_in_game(app, code)?,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app),
        KeyCode::Char('h') => handle_h_events(app),
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
pub(crate) const fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.below()),
        Screen::OptionsMenu(item) => app.screen = Screen::OptionsMenu(item.below()),
        Screen::InGame => {}
    }
}

/// Handles 'k' key press events for upward navigation.
pub(crate) const fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.above()),
        Screen::OptionsMenu(item) => app.screen = Screen::OptionsMenu(item.above()),
        Screen::InGame => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow. Selecting a setting in the options menu cycles its value in
/// place.
pub(crate) fn handle_l_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Visualize) => {
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Algorithm);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Algorithm) => app.cycle_algorithm(),
        Screen::OptionsMenu(OptionsMenuItem::Speed) => app.cycle_speed(),
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::Visualize);
        }
        Screen::InGame => {}
    }
}

/// Handles 'h' key press events for backward navigation.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => app.return_to_menu(),
        Screen::OptionsMenu(_) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(_) => {}
    }
}

/// Handles key presses on the grid screen.
///
/// Cursor movement and the algorithm, speed and brush selectors stay live during a replay; every
/// action that edits the grid is ignored until the replay ends or is stopped.
fn handle_in_game(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('h') | KeyCode::Esc => app.return_to_menu(),
        KeyCode::Up => app.move_cursor(-1, 0),
        KeyCode::Down => app.move_cursor(1, 0),
        KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Right => app.move_cursor(0, 1),
        KeyCode::Char(' ') => app.toggle()?,
        KeyCode::Enter => app.paint()?,
        KeyCode::Char('b') => app.brush = app.brush.next(),
        KeyCode::Char('a') => app.cycle_algorithm(),
        KeyCode::Char('s') => app.cycle_speed(),
        KeyCode::Char('f') => app.find_path()?,
        KeyCode::Char('m') => app.generate_maze()?,
        KeyCode::Char('c') => app.clear_path(),
        KeyCode::Char('r') => app.reset_grid(),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::{CellKind, Coord},
        search::Algorithm,
        types::Brush,
    };

    /// Presses every key in order.
    fn press(app: &mut App, codes: &[KeyCode]) {
        for &code in codes {
            handle_key(app, code).expect("key handling should succeed");
        }
    }

    #[test]
    fn test_q_quits_from_every_screen() {
        for screen in [
            Screen::MainMenu(MainMenuItem::Options),
            Screen::OptionsMenu(OptionsMenuItem::Speed),
            Screen::InGame,
        ] {
            let mut app = App::default();
            app.screen = screen;

            press(&mut app, &[KeyCode::Char('q')]);

            assert!(app.exit, "q quits from {screen:?}");
        }
    }

    #[test]
    fn test_main_menu_navigation() {
        let mut app = App::default();

        press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('j')]);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Quit), "two items down");

        press(&mut app, &[KeyCode::Char('k'), KeyCode::Char('l')]);
        assert_eq!(
            app.screen,
            Screen::OptionsMenu(OptionsMenuItem::Algorithm),
            "options open on the algorithm entry"
        );

        press(&mut app, &[KeyCode::Char('h'), KeyCode::Char('k'), KeyCode::Char('l')]);
        assert_eq!(app.screen, Screen::InGame, "visualize opens the grid");
    }

    #[test]
    fn test_main_menu_quit_item() {
        let mut app = App::default();
        app.screen = Screen::MainMenu(MainMenuItem::Quit);

        press(&mut app, &[KeyCode::Char('l')]);

        assert!(app.exit, "selecting quit exits");
    }

    #[test]
    fn test_options_menu_cycles_settings() {
        let mut app = App::default();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Algorithm);

        press(&mut app, &[KeyCode::Char('l'), KeyCode::Char('l')]);
        assert_eq!(app.algorithm, Algorithm::AStar, "BFS, then DFS, then A*");

        press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('l')]);
        assert_eq!(app.speed, crate::config::Speed::Average, "speed cycles in place");

        press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('l')]);
        assert_eq!(
            app.screen,
            Screen::MainMenu(MainMenuItem::Visualize),
            "back returns to the main menu"
        );
    }

    #[test]
    fn test_in_game_editing_keys() {
        let mut app = App::default();
        app.screen = Screen::InGame;

        press(
            &mut app,
            &[
                KeyCode::Char(' '),
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Down,
                KeyCode::Char(' '),
                KeyCode::Left,
                KeyCode::Char('b'),
                KeyCode::Enter,
            ],
        );

        assert_eq!(app.grid.start(), Some(Coord::new(0, 0)), "first toggle places the start");
        assert_eq!(app.grid.end(), Some(Coord::new(1, 2)), "second toggle places the end");
        assert_eq!(app.brush, Brush::Hill, "b selects the next brush");
        assert_eq!(
            app.grid.cell(1, 1).expect("in bounds").kind(),
            CellKind::Weighted,
            "enter paints the hill brush"
        );
    }

    #[test]
    fn test_in_game_actions() {
        let mut app = App::default();
        app.screen = Screen::InGame;
        app.animation_manager.frame_delay = Duration::ZERO;

        press(&mut app, &[KeyCode::Char(' '), KeyCode::Right, KeyCode::Right, KeyCode::Right]);
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Char('a'), KeyCode::Char('f')]);

        assert_eq!(app.algorithm, Algorithm::Dfs, "a selects the next algorithm");
        assert_eq!(app.results.len(), 1, "f runs a search");
        assert!(app.is_animating(), "the search is replayed");

        press(&mut app, &[KeyCode::Char('c')]);
        assert!(!app.is_animating(), "c stops the replay");

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.grid.start(), None, "r resets the grid");

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(
            app.screen,
            Screen::MainMenu(MainMenuItem::Visualize),
            "escape returns to the menu"
        );
    }

    #[test]
    fn test_algorithm_key_clears_finished_search() {
        let mut app = App::default();
        app.screen = Screen::InGame;
        app.animation_manager.frame_delay = Duration::ZERO;

        press(&mut app, &[KeyCode::Char(' '), KeyCode::Right, KeyCode::Right, KeyCode::Char(' ')]);
        press(&mut app, &[KeyCode::Char('f')]);
        while app.is_animating() {
            app.tick().expect("search replay never fails");
        }
        press(&mut app, &[KeyCode::Char('a')]);

        assert_eq!(app.algorithm, Algorithm::Dfs, "a selects the next algorithm");
        assert!(
            app.animation_manager.revealed().is_empty(),
            "the previous search is no longer drawn"
        );
    }
}
