mod paths;
mod terminal;
mod ui;

use std::fs::File;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use dragscroll::{ConfigError, FrameQueue, InputEvent, Key, SliderConfig, SliderSet};
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use crate::terminal::Terminal;

/// Momentum frames run at roughly display refresh rate.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<SliderConfig, ConfigError> {
    match paths::config_file() {
        Some(path) => {
            info!("loading slider config from {}", path.display());
            SliderConfig::load(&path)
        }
        None => Ok(SliderConfig::default()),
    }
}

fn run() -> Result<(), AppError> {
    let log_file = File::create("dragscroll.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let config = load_config()?;

    let mut term = Terminal::new()?;
    let (width, _) = term.size();

    let shelves = ui::shelves();
    let mut document = ui::build_document(&shelves, width, &config);
    let mut sliders = SliderSet::attach(&document, &config);
    let mut frames = FrameQueue::new();
    let mut last_frame = Instant::now();

    info!("dragscroll demo started with {} sliders", sliders.len());

    loop {
        term.render(|out, width, _| {
            ui::draw(out, &document, &shelves, &sliders, &config, width)
        })?;

        // Block while nothing animates, otherwise wake for the next frame
        let timeout = if frames.is_empty() {
            None
        } else {
            Some(FRAME_INTERVAL.saturating_sub(last_frame.elapsed()))
        };

        let events: Vec<InputEvent> = term
            .poll(timeout)?
            .iter()
            .filter_map(InputEvent::from_crossterm)
            .collect();

        for event in &events {
            match event {
                InputEvent::Key(Key::Char('q')) | InputEvent::Key(Key::Escape) => {
                    info!("quit requested");
                    return Ok(());
                }
                InputEvent::Resize { width, .. } => ui::relayout(&mut document, &shelves, *width),
                _ => {}
            }
        }

        sliders.process_events(&events, &mut document, &mut frames);

        if frames.is_empty() {
            last_frame = Instant::now();
        } else if last_frame.elapsed() >= FRAME_INTERVAL {
            sliders.run_frame(&mut document, &mut frames);
            last_frame = Instant::now();
        }
    }
}
