//! Terminal Game of Life runner.
//!
//! Sizes the board to the terminal, seeds it, then loops: drain input,
//! render, sleep one frame, advance a generation. `r` reseeds, Esc or Ctrl+C
//! quits.

use std::thread;

use anyhow::{Context, Result};
use tracing::{error, info};

use tui_life::config::LifeConfig;
use tui_life::core::Life;
use tui_life::input::EventPump;
use tui_life::logging;
use tui_life::term::{install_panic_hook, FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::types::LifeAction;

fn main() -> Result<()> {
    let config = LifeConfig::from_env();

    // The terminal is still in cooked mode here, so stderr is visible.
    let _log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("[tui-life] logging disabled: {:#}", e);
            None
        }
    };

    let (width, height) =
        log_setup_failure(crossterm::terminal::size().context("query terminal size"))?;
    let viewport = Viewport::new(width, height);
    info!(
        width,
        height,
        frame_ms = config.frame_interval.as_millis() as u64,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    if let Err(e) = log_setup_failure(term.enter()) {
        let _ = term.exit();
        return Err(e);
    }
    install_panic_hook();

    let result = run(&mut term, &config, viewport);

    // Always try to restore terminal state.
    let restored = term.exit();
    match &result {
        Ok(()) => info!("exited cleanly"),
        Err(e) => error!("exited with error: {:#}", e),
    }
    result.and(restored)
}

fn log_setup_failure<T>(result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        error!("terminal setup failed: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &LifeConfig, mut viewport: Viewport) -> Result<()> {
    let (rows, cols) = viewport.grid_size();
    let mut life = Life::new(rows, cols, rand::thread_rng());
    info!(rows, cols, population = life.grid().population(), "seeded");

    let view = LifeView;
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut pump = EventPump::spawn().context("start input thread")?;

    loop {
        for action in pump.poll_actions() {
            match action {
                LifeAction::Resize(w, h) => {
                    info!(width = w, height = h, "terminal resized");
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                LifeAction::Reseed => {
                    info!(generation = life.generation(), "reseed");
                }
                LifeAction::Quit => {
                    info!(generation = life.generation(), "quit requested");
                }
            }
            life.apply_action(action);
        }

        if life.is_finished() {
            return Ok(());
        }

        view.render_into(life.grid(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        thread::sleep(config.frame_interval);
        life.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_failure_is_passed_through() {
        let failed: Result<(u16, u16)> = Err(anyhow::anyhow!("no tty"));
        let err = log_setup_failure(failed.context("query terminal size")).unwrap_err();
        assert_eq!(format!("{:#}", err), "query terminal size: no tty");
        assert_eq!(log_setup_failure(Ok((80u16, 24u16))).unwrap(), (80, 24));
    }
}
