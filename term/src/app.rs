use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use minesweep_core::{Preferences, Session};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Settings;
use crate::input::{Msg, msg_for_key};
use crate::render::Renderer;

const TICK_RATE: Duration = Duration::from_secs(1);

pub struct App {
    session: Session,
    renderer: Renderer,
    rng: SmallRng,
    quit: bool,
}

impl App {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let prefs = Preferences {
            ascii: settings.ascii,
            ..Default::default()
        };
        let session = Session::new(settings.game_config(), &mut rng).with_preferences(prefs);
        Self {
            session,
            renderer: Renderer::new(settings.color),
            rng,
            quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one message and reports whether the next frame differs.
    pub fn update(&mut self, msg: Msg) -> bool {
        use Msg::*;

        log::trace!("update: {:?}", msg);
        match msg {
            Quit => {
                self.quit = true;
                false
            }
            Move(direction) => {
                self.session.move_cursor(direction);
                true
            }
            Sweep => {
                let outcome = self.session.reveal_at_cursor();
                log::debug!("Sweep at {:?}: {:?}", self.session.cursor(), outcome);
                outcome.has_update()
            }
            Flag => {
                let outcome = self.session.toggle_flag_at_cursor();
                log::debug!("Flag at {:?}: {:?}", self.session.cursor(), outcome);
                outcome.has_update()
            }
            ToggleDebug => {
                self.session.toggle_debug();
                true
            }
            ToggleHelp => {
                self.session.toggle_help();
                true
            }
            ToggleAscii => {
                self.session.toggle_ascii();
                true
            }
            NewGame => {
                self.session = self.session.restart(&mut self.rng);
                true
            }
            Tick => {
                let before = self.session.elapsed_seconds();
                self.session.tick();
                self.session.elapsed_seconds() != before
            }
        }
    }

    pub fn view(&self) -> Vec<String> {
        self.renderer.frame(&self.session)
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        for (row, line) in self.view().iter().enumerate() {
            out.queue(MoveTo(0, row as u16))?
                .queue(Print(line))?
                .queue(Clear(ClearType::UntilNewLine))?;
        }
        out.queue(Clear(ClearType::FromCursorDown))?;
        out.flush()
    }

    /// Processes one key event or tick at a time until the player quits.
    fn run(&mut self, out: &mut impl Write) -> io::Result<()> {
        let mut last_tick = Instant::now();
        self.draw(out)?;

        while !self.should_quit() {
            let mut dirty = false;
            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(msg) = msg_for_key(key) {
                            dirty |= self.update(msg);
                        }
                    }
                    Event::Resize(..) => {
                        out.execute(Clear(ClearType::All))?;
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                dirty |= self.update(Msg::Tick);
                last_tick = Instant::now();
            }

            if dirty && !self.quit {
                self.draw(out)?;
            }
        }
        Ok(())
    }
}

/// Raw mode plus alternate screen for as long as it lives. Dropping it restores the terminal,
/// also while unwinding from a panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // from here on, Drop undoes whatever got applied
        let guard = TerminalGuard;
        out.execute(EnterAlternateScreen)?;
        out.execute(Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(err) = stdout.execute(Show) {
            log::warn!("Failed to show cursor: {}", err);
        }
        if let Err(err) = stdout.execute(LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Failed to disable raw mode: {}", err);
        }
    }
}

/// Runs the app on the alternate screen, restoring the terminal however the loop ends.
pub fn run_in_terminal(app: &mut App) -> io::Result<()> {
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    app.run(&mut stdout)
}
