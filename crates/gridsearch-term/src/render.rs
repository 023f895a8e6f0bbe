//! Crossterm drawing of a [`FlagGrid`] and the keyboard watcher that lets
//! the user cancel a running search.

use std::io::{self, Stdout, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridsearch_core::{Cell, Context};
use gridsearch_paths::view::{CellFlags, FlagGrid};

/// How often the keyboard watcher checks for input and for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Character and colours for one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

/// Pick the glyph for a cell. Endpoints win over the path, the path over
/// search progress.
pub fn glyph(flags: CellFlags) -> Glyph {
    let (ch, fg, bg) = if flags.contains(CellFlags::START) {
        ('A', Color::White, Color::Blue)
    } else if flags.contains(CellFlags::GOAL) {
        ('$', Color::Black, Color::Yellow)
    } else if flags.contains(CellFlags::PATH) {
        ('*', Color::White, Color::Red)
    } else if flags.contains(CellFlags::CURRENT) {
        ('@', Color::White, Color::Magenta)
    } else if flags.contains(CellFlags::FRONTIER) {
        ('+', Color::Black, Color::Cyan)
    } else if flags.contains(CellFlags::VISITED) {
        ('.', Color::White, Color::Green)
    } else {
        ('\u{b7}', Color::DarkGrey, Color::Reset)
    };
    Glyph { ch, fg, bg }
}

/// Raw-mode, alternate-screen terminal. Restored when dropped.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        crossterm::execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Redraw the grid, with `header` above it and `footer` lines below.
    pub fn draw(&mut self, grid: &FlagGrid, header: &str, footer: &[String]) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(header)
        )?;

        let size = grid.size();
        for row in 0..size {
            queue!(self.out, cursor::MoveTo(0, row as u16 + 2))?;
            for col in 0..size {
                let g = glyph(grid.at(Cell::new(row, col)));
                queue!(
                    self.out,
                    SetForegroundColor(g.fg),
                    SetBackgroundColor(g.bg),
                    Print(format!(" {} ", g.ch)),
                    ResetColor
                )?;
            }
        }

        let top = size.max(0) as u16 + 3;
        for (i, line) in footer.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, top + i as u16), Print(line))?;
        }
        self.out.flush()
    }

    /// Block until any key is pressed.
    pub fn wait_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(KeyEvent {
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(());
            }
        }
    }

    fn close(&mut self) {
        let _ = crossterm::execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}

/// Whether a key asks to stop the search: `q`, `Esc` or `Ctrl-C`.
pub fn is_cancel_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Watch the keyboard on a background thread and cancel `ctx` when a cancel
/// key is pressed. The thread exits once `ctx` or `stop` is done.
pub fn spawn_key_watcher(ctx: Context, stop: Context) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        while !stop.is_done() && !ctx.is_done() {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_cancel_key(&key) {
                    log::debug!("cancel key pressed");
                    ctx.cancel();
                }
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_win_over_path() {
        assert_eq!(glyph(CellFlags::START | CellFlags::PATH).ch, 'A');
        assert_eq!(glyph(CellFlags::GOAL | CellFlags::PATH | CellFlags::VISITED).ch, '$');
        assert_eq!(glyph(CellFlags::PATH | CellFlags::VISITED).ch, '*');
    }

    #[test]
    fn progress_glyphs() {
        assert_eq!(glyph(CellFlags::CURRENT | CellFlags::VISITED).bg, Color::Magenta);
        assert_eq!(glyph(CellFlags::FRONTIER).ch, '+');
        assert_eq!(glyph(CellFlags::VISITED).bg, Color::Green);
        assert_eq!(glyph(CellFlags::NONE).bg, Color::Reset);
    }

    #[test]
    fn cancel_keys() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert!(is_cancel_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_cancel_key(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_cancel_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_cancel_key(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_cancel_key(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
