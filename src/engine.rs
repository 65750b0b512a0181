use std::vec::Drain;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::Generation;
use crate::GridCoord;
use crate::HEIGHT;
use crate::WIDTH;
use crate::events::EngineEvent;
use crate::events::StopReason;
use crate::grid::Grid;
use crate::pattern::GLIDER;
use crate::pattern::GLIDER_ORIGIN;
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Stopped,
    Running,
}

/// What a call to [`LifeEngine::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The engine is stopped, nothing was computed
    Idle,

    /// The grid changed and the generation counter moved to `generation`
    Advanced { generation: Generation },

    /// No cell was alive, the engine stopped at `generation`
    Extinct { generation: Generation },

    /// The step changed nothing, the engine stopped at `generation`
    Stagnant { generation: Generation },
}

/// Conway's Game of Life on a fixed `WIDTH` x `HEIGHT` board.
///
/// The engine owns two grids: `current` is what everyone else gets to see, and `buffer` is where
/// the next generation gets computed before it replaces `current` wholesale.
///
/// Every state change is published as an [`EngineEvent`]. The events pile up until someone calls
/// [`LifeEngine::drain_events`].
pub struct LifeEngine {
    /// The authoritative grid
    current: Grid,

    /// Next generation, only meaningful during a step
    buffer: Grid,

    generation: Generation,

    running: bool,

    /// Notifications that haven't been read yet
    events: Vec<EngineEvent>,
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeEngine {
    /// Create a stopped engine with the starting glider in place
    pub fn new() -> Self {
        let mut engine = Self {
            current: Grid::empty(),
            buffer: Grid::empty(),
            generation: 0,
            running: false,
            events: Vec::new(),
        };

        engine.seed();

        engine
    }

    /// Go back to the starting glider, with the counter at `0` and the engine stopped
    pub fn reset(&mut self) {
        info!("Resetting board");

        self.running = false;
        self.generation = 0;
        self.seed();

        self.events.push(EngineEvent::Reset);
    }

    /// Start running. Calling this while already running restarts the counter.
    pub fn start(&mut self) {
        info!("Starting simulation");

        self.running = true;
        self.generation = 0;

        self.events.push(EngineEvent::Started);
    }

    /// Stop running. Fine to call when already stopped.
    pub fn stop(&mut self) {
        self.halt(StopReason::User);
    }

    /// Flip the cell at `(x, y)` on the authoritative grid.
    ///
    /// Returns whether anything was flipped; coordinates off the board are ignored.
    pub fn toggle_cell(&mut self, x: GridCoord, y: GridCoord) -> bool {
        match self.current.toggle(x, y) {
            Ok(state) => {
                debug!(x, y, ?state, "Toggled cell");
                true
            }
            Err(e) => {
                warn!("Ignoring toggle: {e}");
                false
            }
        }
    }

    /// Advance the board by one generation, if running.
    ///
    /// Stops the engine when nothing is alive before the step, or when the step left every cell
    /// unchanged.
    pub fn step(&mut self) -> StepOutcome {
        if !self.running {
            return StepOutcome::Idle;
        }

        if !self.current.any_alive() {
            self.halt(StopReason::Extinct);

            return StepOutcome::Extinct {
                generation: self.generation,
            };
        }

        let mut changed = false;

        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                let cell = self.current[(x, y)];
                let next = rules::next_state(cell, self.current.live_neighbors(x, y));

                changed |= next != cell;

                self.buffer[(x, y)] = next;
            }
        }

        self.current = self.buffer;

        if !changed {
            self.halt(StopReason::Stagnant);

            return StepOutcome::Stagnant {
                generation: self.generation,
            };
        }

        self.generation += 1;
        debug!(generation = self.generation, "Advanced");

        self.events.push(EngineEvent::GenerationAdvanced {
            generation: self.generation,
        });

        StepOutcome::Advanced {
            generation: self.generation,
        }
    }

    /// The authoritative grid
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn is_alive(&self, x: GridCoord, y: GridCoord) -> bool {
        self.current.is_alive(x, y)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Status {
        if self.running {
            Status::Running
        } else {
            Status::Stopped
        }
    }

    /// Take every notification published since the last call, oldest first
    pub fn drain_events(&mut self) -> Drain<'_, EngineEvent> {
        self.events.drain(..)
    }

    fn halt(&mut self, reason: StopReason) {
        info!(generation = self.generation, ?reason, "Stopping simulation");

        self.running = false;

        self.events.push(EngineEvent::Stopped {
            generation: self.generation,
            reason,
        });
    }

    /// Clear both grids and put the starting glider on the authoritative one
    fn seed(&mut self) {
        self.current.clear();
        self.buffer.clear();

        let (x, y) = GLIDER_ORIGIN;
        if let Err(e) = GLIDER.stamp(&mut self.current, x, y) {
            // the origin is a constant well inside the board
            unreachable!("{} does not fit at {GLIDER_ORIGIN:?}: {e}", GLIDER.name);
        }
    }
}
