use crate::game::{GameState, MoveError, Outcome, Player};
use crate::ui::palette::{self, PaletteEntry};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Setup,
    Playing,
}

pub struct App {
    game: GameState,
    screen: Screen,
    // Palette indices for Player One and Player Two
    colors: [usize; 2],
    setup_focus: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// `colors` are palette indices for the two players, typically resolved
    /// from the config defaults. Play starts on the color-selection screen.
    pub fn new(game: GameState, colors: [usize; 2]) -> Self {
        let selected_column = game.width() / 2;
        App {
            game,
            screen: Screen::Setup,
            colors,
            setup_focus: 0,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.setup_focus = 1 - self.setup_focus;
            }
            KeyCode::Left => {
                let len = palette::PALETTE.len();
                self.colors[self.setup_focus] = (self.colors[self.setup_focus] + len - 1) % len;
            }
            KeyCode::Right => {
                self.colors[self.setup_focus] = (self.colors[self.setup_focus] + 1) % palette::PALETTE.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.colors[0] == self.colors[1] {
                    self.message = Some("Players must choose different colors!".to_string());
                } else {
                    self.start_game();
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < self.game.width() - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Rematch with the same colors
                self.start_game();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('n') => {
                // Back to color selection
                self.game.reset();
                self.screen = Screen::Setup;
            }
            _ => {}
        }
    }

    fn start_game(&mut self) {
        self.game.reset();
        self.selected_column = self.game.width() / 2;
        self.screen = Screen::Playing;
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.drop_piece(self.selected_column) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Win(player)) => {
                self.message = Some(format!(
                    "{} wins! Press 'r' for a rematch.",
                    self.player_entry(player).label
                ));
            }
            Ok(Outcome::Tie) => {
                self.message = Some("Tie game! Press 'r' for a rematch.".to_string());
            }
            Ok(Outcome::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::IllegalColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' for a rematch.".to_string());
            }
        }
    }

    fn player_entry(&self, player: Player) -> &'static PaletteEntry {
        match player {
            Player::One => &palette::PALETTE[self.colors[0]],
            Player::Two => &palette::PALETTE[self.colors[1]],
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Setup => {
                super::setup_view::render(frame, self.colors, self.setup_focus, &self.message)
            }
            Screen::Playing => super::game_view::render(
                frame,
                &self.game,
                self.selected_column,
                [self.player_entry(Player::One), self.player_entry(Player::Two)],
                &self.message,
            ),
        }
    }
}
