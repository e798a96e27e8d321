use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, SetAttribute},
    terminal,
};

/// Raw-mode alternate screen with mouse capture. Restored on drop.
pub struct Terminal {
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Wait for input. `None` blocks until something arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw one frame. The screen is cleared only when its size changed;
    /// `draw` is expected to overwrite everything it owns.
    pub fn render<F>(&mut self, draw: F) -> io::Result<()>
    where
        F: FnOnce(&mut Stdout, u16, u16) -> io::Result<()>,
    {
        let (width, height) = terminal::size()?;
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        queue!(self.stdout, terminal::BeginSynchronizedUpdate)?;
        draw(&mut self.stdout, width, height)?;
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::EndSynchronizedUpdate
        )?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
