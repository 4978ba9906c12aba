use std::io::Write;

use liblife::Grid;

use crate::{config::Config, sleeper::Sleeper, terminal};

/// Owns the grid and repeatedly shows it, steps it and waits.
pub struct Driver {
    grid: Grid,
    config: Config,
    sleeper: Sleeper,
}

impl Driver {
    pub fn new(grid: Grid, config: Config) -> Self {
        Self {
            sleeper: Sleeper::new(config.interval()),
            grid,
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs until `generations` frames have been shown, or forever. Returns the frame count.
    pub fn run<W>(&mut self, out: &mut W) -> anyhow::Result<u64>
    where
        W: Write,
    {
        let mut frames = 0;

        while self.config.generations.is_none_or(|limit| frames < limit) {
            terminal::draw_frame(out, &self.grid, self.config.clear_screen)?;
            frames += 1;

            if self.config.stop_when_dead && self.grid.alive_count() == 0 {
                tracing::info!(generation = self.grid.generation(), "All cells died");
                break;
            }

            if self.config.generations == Some(frames) {
                break;
            }

            self.grid.step();

            if !self.sleeper.sleep() && !self.sleeper.target_delta_time.is_zero() {
                tracing::debug!(
                    generation = self.grid.generation(),
                    "Frame took longer than the interval"
                );
            }
        }

        Ok(frames)
    }
}
