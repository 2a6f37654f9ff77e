//! TUI application state and logic

use super::animation::{
    ALERT_DURATION, Alert, Dance, RevealTimeline, Shake, WIN_ALERT_DURATION,
};
use super::keyboard::{KeyAction, KeyboardState, key_at};
use crate::config::GameConfig;
use crate::core::{Feedback, Word};
use crate::game::{Evaluation, Game, GameOutcome, InputPhase};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How often the loop wakes up to advance animations
const TICK: Duration = Duration::from_millis(30);

/// A row whose tiles are being flipped
#[derive(Debug, Clone)]
pub struct Reveal {
    pub row: usize,
    pub word: Word,
    pub feedback: Feedback,
    pub timeline: RevealTimeline,
    applied: usize,
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub config: GameConfig,
    pub keyboard: KeyboardState,
    pub alerts: Vec<Alert>,
    pub reveal: Option<Reveal>,
    pub shake: Option<Shake>,
    pub dance: Option<Dance>,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>, config: GameConfig, rng: StdRng) -> Self {
        Self {
            game,
            config,
            keyboard: KeyboardState::new(),
            alerts: Vec::new(),
            reveal: None,
            shake: None,
            dance: None,
            should_quit: false,
            rng,
        }
    }

    /// Translate a terminal key into an engine action, or handle app keys directly
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n' | 'N') if self.game.phase() == InputPhase::Terminal => {
                self.new_game();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.apply(KeyAction::Letter(c), now);
            }
            KeyCode::Backspace | KeyCode::Delete => self.apply(KeyAction::Delete, now),
            KeyCode::Enter => self.apply(KeyAction::Enter, now),
            _ => {}
        }
    }

    /// Handle a click on the on-screen keyboard drawn in `keyboard_area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, keyboard_area: Rect, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(action) = key_at(keyboard_area, mouse.column, mouse.row) {
            self.apply(action, now);
        }
    }

    /// Forward one input event to the engine
    pub fn apply(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::Letter(c) => {
                self.game.on_letter_key(c);
            }
            KeyAction::Delete => {
                self.game.on_delete();
            }
            KeyAction::Enter => self.submit(now),
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.game.on_submit() {
            Ok(Evaluation { word, feedback, .. }) => {
                self.reveal = Some(Reveal {
                    row: self.game.history().len() - 1,
                    word,
                    feedback,
                    timeline: RevealTimeline::new(now, self.config.flip_duration),
                    applied: 0,
                });
            }
            Err(err) if err.is_user_facing() => {
                self.show_alert(err.to_string(), now, Some(ALERT_DURATION));
                self.shake = Some(Shake::new(now));
            }
            Err(_) => {}
        }
    }

    /// Advance animations and expire alerts
    pub fn tick(&mut self, now: Instant) {
        self.alerts.retain(|alert| !alert.is_expired(now));
        if self.shake.is_some_and(|s| s.is_complete(now)) {
            self.shake = None;
        }
        if self.dance.is_some_and(|d| d.is_complete(now)) {
            self.dance = None;
        }

        let Some(reveal) = self.reveal.as_mut() else {
            return;
        };

        let revealed = reveal.timeline.tiles_revealed(now);
        for position in reveal.applied..revealed {
            self.keyboard
                .record_tile(&reveal.word, &reveal.feedback, position);
        }
        reveal.applied = revealed;

        if reveal.timeline.is_complete(now) {
            self.reveal = None;
            self.finish_reveal(now);
        }
    }

    fn finish_reveal(&mut self, now: Instant) {
        match self.game.reveal_complete() {
            GameOutcome::Continuing => {}
            GameOutcome::Won => {
                self.show_alert("CONGRATS! You won!", now, Some(WIN_ALERT_DURATION));
                self.dance = Some(Dance::new(now, self.config.dance_duration));
            }
            GameOutcome::Lost(target) => {
                self.show_alert(
                    format!("You lost! Word was: {}", target.text().to_uppercase()),
                    now,
                    None,
                );
            }
        }
    }

    /// Newest alerts go on top
    pub fn show_alert(
        &mut self,
        text: impl Into<String>,
        now: Instant,
        duration: Option<Duration>,
    ) {
        self.alerts.insert(0, Alert::new(text, now, duration));
    }

    pub fn new_game(&mut self) {
        self.game.restart(&mut self.rng);
        self.keyboard.reset();
        self.alerts.clear();
        self.reveal = None;
        self.shake = None;
        self.dance = None;
        debug!("new game from TUI");
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        if event::poll(TICK)? {
            let now = Instant::now();
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now),
                Event::Mouse(mouse) => {
                    let keyboard_area = super::rendering::keyboard_area(area, &app);
                    app.handle_mouse(mouse, keyboard_area, now);
                }
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
