//! The terminal interface.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use rewindlife_lib::{Coord, World};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Fastest allowed tick.
const MIN_TICK: Duration = Duration::from_millis(10);
/// Slowest allowed tick.
const MAX_TICK: Duration = Duration::from_secs(2);

/// The world plus everything needed to paint it.
struct GameScreen {
    world: World,
    running: bool,
    tick: Duration,
    stdout: Stdout,
}

impl GameScreen {
    fn new(world: World) -> Self {
        let tick = world.config().tick_interval;
        Self {
            world,
            running: false,
            tick,
            stdout: io::stdout(),
        }
    }

    /// The part of the grid that fits in the terminal, leaving one
    /// line for the status bar.
    fn visible_area(&self) -> io::Result<(usize, usize)> {
        let (term_cols, term_rows) = terminal::size()?;
        let rows = usize::from(term_rows.saturating_sub(1)).min(self.world.rows());
        let cols = usize::from(term_cols).min(self.world.cols());
        Ok((rows, cols))
    }

    /// Repaints every visible cell and the status bar.
    fn draw_full(&mut self) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All))?;
        let (rows, cols) = self.visible_area()?;
        for row in 0..rows {
            let mut line = String::with_capacity(cols);
            for col in 0..cols {
                line.push(if self.world.get((row, col)) { '█' } else { ' ' });
            }
            queue!(self.stdout, MoveTo(0, row as u16), Print(line))?;
        }
        self.draw_status()?;
        self.stdout.flush()
    }

    /// Repaints only the cells in the latest change-list.
    fn draw_changes(&mut self, changes: &[Coord]) -> io::Result<()> {
        let (rows, cols) = self.visible_area()?;
        for &(row, col) in changes {
            if row >= rows || col >= cols {
                continue;
            }
            let glyph = if self.world.get((row, col)) { '█' } else { ' ' };
            queue!(self.stdout, MoveTo(col as u16, row as u16), Print(glyph))?;
        }
        self.draw_status()?;
        self.stdout.flush()
    }

    /// Redraws the status bar on the bottom line.
    fn draw_status(&mut self) -> io::Result<()> {
        let (_, term_rows) = terminal::size()?;
        let status = format!(
            "Gen: {}  Cells: {}  Tick: {:?}  [{}]  \
             space: run/pause  \u{2190}/\u{2192}: step  r: reseed  +/-: speed  q: quit",
            self.world.generation(),
            self.world.population(),
            self.tick,
            if self.running { "running" } else { "paused" },
        );
        queue!(
            self.stdout,
            MoveTo(0, term_rows.saturating_sub(1)),
            Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        Ok(())
    }

    /// Polls for input while running, blocks while paused, and steps
    /// the world on every tick that passes without input.
    fn event_loop(&mut self) -> io::Result<()> {
        self.draw_full()?;
        loop {
            let event = if self.running {
                if event::poll(self.tick)? {
                    Some(event::read()?)
                } else {
                    None
                }
            } else {
                Some(event::read()?)
            };

            match event {
                None => {
                    let changes = self.world.step().to_vec();
                    self.draw_changes(&changes)?;
                }
                Some(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key)? {
                        break;
                    }
                }
                Some(Event::Resize(..)) => self.draw_full()?,
                _ => (),
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> io::Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(true);
            }
            KeyCode::Char(' ') => {
                self.running = !self.running;
                self.draw_status()?;
                self.stdout.flush()?;
            }
            KeyCode::Right | KeyCode::Char('n') => {
                let changes = self.world.step().to_vec();
                self.draw_changes(&changes)?;
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if let Some(changes) = self.world.step_back().map(<[Coord]>::to_vec) {
                    self.draw_changes(&changes)?;
                }
            }
            KeyCode::Char('r') => {
                self.world.reseed();
                self.draw_full()?;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.tick = (self.tick / 2).max(MIN_TICK);
                self.draw_status()?;
                self.stdout.flush()?;
            }
            KeyCode::Char('-') => {
                self.tick = self.tick.saturating_mul(2).min(MAX_TICK);
                self.draw_status()?;
                self.stdout.flush()?;
            }
            _ => (),
        }
        Ok(false)
    }
}

/// Runs the simulation in the alternate screen until the user quits.
pub fn run(world: World) -> io::Result<()> {
    let mut screen = GameScreen::new(world);

    terminal::enable_raw_mode()?;
    execute!(screen.stdout, EnterAlternateScreen, Hide)?;

    let result = screen.event_loop();

    execute!(screen.stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
