//! TUI rendering with ratatui
//!
//! Draws the tile grid, alerts and on-screen keyboard. Everything is read from
//! `App`; nothing here mutates game state.

use super::app::App;
use super::keyboard::{KeyAction, ROW_HEIGHT, ROWS, row_layout};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::game::InputPhase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;

/// How one grid cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileLook {
    Empty,
    Active(char),
    Flipping,
    Revealed(char, LetterFeedback),
}

/// Decide what tile (`row`, `col`) shows at `now`
#[must_use]
pub fn tile_look(app: &App, row: usize, col: usize, now: Instant) -> TileLook {
    let history = app.game.history();

    if let Some(record) = history.get(row) {
        let letter = record.word.char_at(col) as char;
        let revealed = TileLook::Revealed(letter, record.feedback.letters()[col]);

        return match &app.reveal {
            Some(reveal) if reveal.row == row => {
                if col < reveal.timeline.tiles_revealed(now) {
                    revealed
                } else if reveal.timeline.is_flipping(col, now) {
                    TileLook::Flipping
                } else {
                    TileLook::Active(letter)
                }
            }
            _ => revealed,
        };
    }

    if row == history.len()
        && app.game.phase() == InputPhase::AwaitingInput
        && let Some(&letter) = app.game.current_letters().get(col)
    {
        return TileLook::Active(letter);
    }

    TileLook::Empty
}

fn areas(area: Rect, app: &App) -> [Rect; 5] {
    let rows = u16::try_from(app.game.max_attempts()).unwrap_or(u16::MAX);
    let grid_height = rows.saturating_mul(TILE_HEIGHT);
    let keyboard_height = ROW_HEIGHT * ROWS.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(2),               // Alerts
            Constraint::Length(grid_height),     // Tiles
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Length(1),               // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Where the on-screen keyboard is drawn for a frame of size `area`
#[must_use]
pub fn keyboard_area(area: Rect, app: &App) -> Rect {
    areas(area, app)[3]
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let [header, alerts, grid, keyboard, status] = areas(f.area(), app);

    render_header(f, header);
    render_alerts(f, app, alerts);
    render_grid(f, app, grid, now);
    render_keyboard(f, app, keyboard);
    render_status(f, app, status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_alerts(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .alerts
        .iter()
        .take(area.height as usize)
        .map(|alert| Line::from(alert.text.as_str()))
        .collect();

    let alerts = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(alerts, area);
}

fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let board_width = WORD_LENGTH as u16 * (TILE_WIDTH + TILE_GAP) - TILE_GAP;
    let left = area.x + area.width.saturating_sub(board_width) / 2;
    let current_row = app.game.history().len();

    for row in 0..app.game.max_attempts() {
        let shake = match app.shake {
            Some(shake) if row == current_row => shake.offset(now),
            _ => 0,
        };
        let winning_row = app.dance.is_some() && row + 1 == current_row;

        for col in 0..WORD_LENGTH {
            let mut x = left + col as u16 * (TILE_WIDTH + TILE_GAP);
            x = x.saturating_add_signed(shake);
            let offset =
                u16::try_from(row).map_or(u16::MAX, |r| r.saturating_mul(TILE_HEIGHT));
            let mut y = area.y.saturating_add(offset);
            if winning_row && app.dance.is_some_and(|d| d.is_raised(col, now)) {
                y = y.saturating_sub(1);
            }

            let tile_area = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT).intersection(f.area());
            render_tile(f, tile_look(app, row, col, now), tile_area);
        }
    }
}

fn render_tile(f: &mut Frame, look: TileLook, area: Rect) {
    let (text, border, fill) = match look {
        TileLook::Empty => (' ', Color::DarkGray, None),
        TileLook::Active(letter) => (letter, Color::White, None),
        TileLook::Flipping => (' ', Color::Gray, Some(Color::Gray)),
        TileLook::Revealed(letter, feedback) => {
            let color = feedback_color(feedback);
            (letter, color, Some(color))
        }
    };

    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(bg) = fill {
        style = style.bg(bg).fg(Color::Black);
    }

    let tile = Paragraph::new(text.to_ascii_uppercase().to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(tile, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for row in 0..ROWS.len() {
        for (key, rect) in row_layout(area, row) {
            let bg = match key {
                KeyAction::Letter(c) => app.keyboard.get(c).map_or(Color::Gray, feedback_color),
                KeyAction::Enter | KeyAction::Delete => Color::Gray,
            };
            let label = Paragraph::new(key.label())
                .style(Style::default().bg(bg).fg(Color::Black).add_modifier(Modifier::BOLD));
            f.render_widget(label, rect.intersection(f.area()));
        }
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.phase() == InputPhase::Terminal {
        "n: New Game | Esc: Quit".to_string()
    } else {
        format!(
            "Guess {}/{} | Enter: Submit | Backspace: Delete | Esc: Quit",
            (app.game.history().len() + 1).min(app.game.max_attempts()),
            app.game.max_attempts()
        )
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::MAX_ATTEMPTS;
    use crate::game::{Dictionary, Game};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["apple", "angle", "crane"])).unwrap()
    }

    fn app(dict: &Dictionary) -> App<'_> {
        let game = Game::with_target(dict, "apple", MAX_ATTEMPTS).unwrap();
        App::new(game, GameConfig::default(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn typed_letters_are_active_on_current_row() {
        let dict = dictionary();
        let mut app = app(&dict);
        let now = Instant::now();
        app.apply(KeyAction::Letter('a'), now);

        assert_eq!(tile_look(&app, 0, 0, now), TileLook::Active('a'));
        assert_eq!(tile_look(&app, 0, 1, now), TileLook::Empty);
        assert_eq!(tile_look(&app, 1, 0, now), TileLook::Empty);
    }

    #[test]
    fn submitted_row_reveals_left_to_right() {
        let dict = dictionary();
        let mut app = app(&dict);
        let t0 = Instant::now();
        for c in "angle".chars() {
            app.apply(KeyAction::Letter(c), t0);
        }
        app.apply(KeyAction::Enter, t0);

        assert_eq!(tile_look(&app, 0, 0, t0), TileLook::Flipping);
        assert_eq!(tile_look(&app, 0, 4, t0), TileLook::Active('e'));

        let later = t0 + Duration::from_millis(500);
        assert_eq!(
            tile_look(&app, 0, 0, later),
            TileLook::Revealed('a', LetterFeedback::Correct)
        );

        app.tick(t0 + Duration::from_millis(1500));
        assert_eq!(
            tile_look(&app, 0, 1, t0),
            TileLook::Revealed('n', LetterFeedback::Absent)
        );
        // Next row is empty again once the buffer clears
        assert_eq!(tile_look(&app, 1, 0, t0), TileLook::Empty);
    }

    #[test]
    fn renders_without_panicking_on_small_terminals() {
        let dict = dictionary();
        let app = app(&dict);
        for (w, h) in [(80, 40), (20, 10), (1, 1)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| ui(f, &app, Instant::now())).unwrap();
        }
    }

    #[test]
    fn largest_grid_lays_out_and_renders() {
        let dict = dictionary();
        let game = Game::with_target(&dict, "apple", usize::MAX).unwrap();
        let app = App::new(game, GameConfig::default(), StdRng::seed_from_u64(1));

        let keyboard = keyboard_area(Rect::new(0, 0, 80, 200), &app);
        assert_eq!(keyboard.y, 3 + 2 + 20 * TILE_HEIGHT);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app, Instant::now())).unwrap();
    }

    #[test]
    fn keyboard_sits_below_grid() {
        let dict = dictionary();
        let app = app(&dict);
        let area = Rect::new(0, 0, 80, 40);
        let keyboard = keyboard_area(area, &app);
        // header 3 + alerts 2 + 6 rows of tiles
        assert_eq!(keyboard.y, 3 + 2 + 6 * TILE_HEIGHT);
        assert_eq!(keyboard.height, ROW_HEIGHT * 3);
    }
}
