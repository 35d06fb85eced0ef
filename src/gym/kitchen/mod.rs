use std::fmt;

use log::{debug, info, trace, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::VariantArray;

use crate::env::{DiscreteActionSpace, Environment, Report};

mod action;
mod config;
mod error;
mod heatmap;
mod observation;
mod progress;
mod render;

pub use action::KitchenAction;
pub use config::{GridGeometry, KitchenConfig, LocationTable, Pos, Station};
pub use error::KitchenError;
pub use heatmap::VisitHeatmap;
pub use observation::Observation;
pub use progress::{FryingTimer, TaskProgress};
pub use render::KitchenSnapshot;

/// Where the agent starts every episode
pub const ORIGIN: Pos = (0, 0);

const REWARD: &str = "reward";
const STEPS: &str = "steps";
const STOVE_WAIT: &str = "stove_wait";

/// The result of a single [`Kitchen::step`]
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub observation: Observation,
    pub reward: f32,
    /// Delivered this step or out of steps. Not sticky: stepping on after a delivery
    /// reports `false` again until the agent is back on the counter or the limit is hit
    pub done: bool,
    /// The episode ran out of steps without a delivery this step
    pub truncated: bool,
}

/// A hawker stall where a single cook fetches a vegetable, chops it, fries it and serves it
///
/// The agent walks a small grid and uses the [stations](Station) it stands on. Frying happens
/// either instantly by interacting with the stove or by standing on the stove for
/// [`KitchenConfig::frying_steps`] qualifying steps. Delivering the finished dish to the counter pays
/// [`KitchenConfig::delivery_reward`] and ends the episode; otherwise the episode ends after
/// [`KitchenConfig::max_steps`].
#[derive(Debug, Clone)]
pub struct Kitchen {
    config: KitchenConfig,
    geometry: GridGeometry,
    pos: Pos,
    steps: u32,
    progress: TaskProgress,
    frying: FryingTimer,
    heatmap: VisitHeatmap,
    finished: bool,
    rng: StdRng,
    pub report: Report,
}

impl Kitchen {
    /// The reference 4x3 stall
    pub fn new() -> Self {
        Self::with_config(KitchenConfig::default()).expect("reference kitchen layout is valid")
    }

    /// **Errors** if the configuration fails [validation](KitchenConfig::validate)
    pub fn with_config(config: KitchenConfig) -> Result<Self, KitchenError> {
        let geometry = config.validate()?;
        Ok(Self {
            geometry,
            pos: ORIGIN,
            steps: 0,
            progress: TaskProgress::default(),
            frying: FryingTimer::new(config.frying_steps),
            heatmap: VisitHeatmap::new(geometry),
            finished: false,
            rng: StdRng::from_entropy(),
            report: Report::new(vec![REWARD, STEPS, STOVE_WAIT]),
            config,
        })
    }

    /// Start a new episode
    ///
    /// The simulation itself is deterministic; `seed` only reseeds the generator behind
    /// [`Environment::random_action`].
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Observation, KitchenError> {
        self.restart(seed)
    }

    /// Take one action and advance the simulation by one step
    pub fn step(&mut self, action: KitchenAction) -> Transition {
        self.advance(action)
    }

    /// [`Kitchen::step`] with a raw action index from an external policy
    ///
    /// **Errors** with [`KitchenError::InvalidAction`] if `action` is not a valid index
    pub fn try_step(&mut self, action: usize) -> Result<Transition, KitchenError> {
        let action = KitchenAction::try_from(action)?;
        Ok(self.advance(action))
    }

    /// Use the station under the agent
    ///
    /// Silently does nothing off-station or when the previous stage is missing.
    pub fn interact(&mut self) {
        let locations = &self.config.locations;
        let progress = &mut self.progress;

        if self.pos == locations.fridge {
            if !progress.has_veg {
                debug!("picked up a vegetable at step {}", self.steps);
            }
            progress.has_veg = true;
        } else if self.pos == locations.cutting && progress.has_veg {
            if !progress.has_chopped {
                debug!("chopped the vegetable at step {}", self.steps);
            }
            progress.has_chopped = true;
        } else if self.pos == locations.stove && progress.has_chopped {
            if !progress.has_cooked {
                debug!("cooked on the stove by hand at step {}", self.steps);
            }
            progress.has_cooked = true;
            self.frying.clear();
        }
    }

    pub fn observation(&self) -> Observation {
        Observation::encode(self.geometry, self.pos, &self.progress)
    }

    pub fn agent_position(&self) -> Pos {
        self.pos
    }

    pub fn locations(&self) -> &LocationTable {
        &self.config.locations
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    pub fn heatmap(&self) -> &VisitHeatmap {
        &self.heatmap
    }

    pub fn progress(&self) -> TaskProgress {
        self.progress
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    /// Qualifying stove steps left on the frying countdown, `0` when idle
    pub fn frying_remaining(&self) -> u32 {
        self.frying.remaining()
    }

    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Text frame of the stall, see [`Kitchen`]'s `Display` impl
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Visit counts laid out like [`Kitchen::render`]
    pub fn render_heatmap(&self) -> String {
        self.heatmap.to_string()
    }

    /// Owned copy of the state a renderer reads
    pub fn snapshot(&self) -> KitchenSnapshot {
        KitchenSnapshot {
            geometry: self.geometry,
            locations: self.config.locations,
            agent: self.pos,
            heatmap: self.heatmap.clone(),
            progress: self.progress,
            steps_taken: self.steps,
            frying_remaining: self.frying.remaining(),
        }
    }

    fn restart(&mut self, seed: Option<u64>) -> Result<Observation, KitchenError> {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        self.pos = ORIGIN;
        self.steps = 0;
        self.progress = TaskProgress::default();
        self.frying.clear();
        self.heatmap.clear();
        self.finished = false;

        self.check_initial_state()?;
        trace!("kitchen reset (seed {seed:?})");
        Ok(self.observation())
    }

    fn check_initial_state(&self) -> Result<(), KitchenError> {
        let problem = if self.pos != ORIGIN {
            format!("agent at {:?}", self.pos)
        } else if self.steps != 0 {
            format!("{} steps taken", self.steps)
        } else if self.progress != TaskProgress::default() {
            format!("task progress {:?}", self.progress)
        } else if self.frying.is_running() {
            format!("frying timer at {}", self.frying.remaining())
        } else if self.heatmap.total() != 0 {
            format!("{} visits recorded", self.heatmap.total())
        } else {
            return Ok(());
        };

        Err(KitchenError::InvalidResetState(problem))
    }

    fn advance(&mut self, action: KitchenAction) -> Transition {
        if self.finished {
            warn!("stepping a finished episode at step {}", self.steps + 1);
        }

        self.steps += 1;
        match action.delta() {
            Some(delta) => self.pos = self.moved(delta),
            None => self.interact(),
        }
        self.pos = self.geometry.clamp(self.pos);
        self.heatmap.record(self.pos);
        self.fry();

        let delivered = self.progress.is_complete() && self.pos == self.config.locations.counter;
        let reward = if delivered {
            self.config.delivery_reward
        } else {
            0.0
        };
        let out_of_steps = self.steps >= self.config.max_steps;
        let done = delivered || out_of_steps;

        trace!("step {}: {action:?} -> {:?}, reward {reward}", self.steps, self.pos);
        if !self.finished {
            if delivered {
                info!("dish delivered after {} steps", self.steps);
            } else if out_of_steps {
                info!("episode truncated after {} steps", self.steps);
            }
        }
        self.finished |= done;

        self.report.entry(STEPS).and_modify(|x| *x += 1.0);
        self.report
            .entry(REWARD)
            .and_modify(|x| *x += reward as f64);

        Transition {
            observation: self.observation(),
            reward,
            done,
            truncated: done && !delivered,
        }
    }

    /// The agent's position after a move, unchanged if the move would leave the grid
    fn moved(&self, (dx, dy): (isize, isize)) -> Pos {
        let (x, y) = self.pos;
        let x = x
            .checked_add_signed(dx)
            .filter(|&x| x < self.geometry.width())
            .unwrap_or(x);
        let y = y
            .checked_add_signed(dy)
            .filter(|&y| y < self.geometry.height())
            .unwrap_or(y);
        (x, y)
    }

    /// Delayed cooking path, evaluated every step
    ///
    /// Once the food is cooked the timer no longer runs.
    fn fry(&mut self) {
        let progress = &mut self.progress;
        if !progress.has_chopped || progress.has_cooked || self.pos != self.config.locations.stove {
            return;
        }

        self.report.entry(STOVE_WAIT).and_modify(|x| *x += 1.0);
        if self.frying.tick() {
            debug!(
                "finished frying after {} steps on the stove",
                self.frying.required()
            );
            progress.has_cooked = true;
        }
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}

/// Text frame with station markers `F`, `C`, `S`, `X` and the agent `A`, origin bottom-left
impl fmt::Display for Kitchen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::draw(self.geometry, &self.config.locations, self.pos))
    }
}

impl Environment for Kitchen {
    type State = Observation;
    type Action = KitchenAction;

    fn step(&mut self, action: Self::Action) -> (Option<Self::State>, f32) {
        let Transition {
            observation,
            reward,
            done,
            ..
        } = self.advance(action);
        ((!done).then_some(observation), reward)
    }

    fn reset(&mut self) -> Self::State {
        self.restart(None)
            .expect("a freshly reset kitchen is always in its initial state")
    }

    fn random_action(&mut self) -> Self::Action {
        let i = self.rng.gen_range(0..KitchenAction::VARIANTS.len());
        KitchenAction::VARIANTS[i]
    }
}

impl DiscreteActionSpace for Kitchen {
    fn actions(&self) -> Vec<Self::Action> {
        KitchenAction::VARIANTS.to_vec()
    }
}
