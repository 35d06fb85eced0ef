mod report;

pub use report::Report;

/// Represents a Markov decision process, defining the dynamics of an environment
/// in which an agent can operate.
///
/// This base trait represents the common case of a discrete-time MDP with one agent
/// and a finite action space.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Update the environment in response to an action taken by an agent, producing a new state and associated reward
    ///
    /// **Returns** `(next_state, reward)`, where `next_state` is `None` if the transition was terminal
    fn step(&mut self, action: Self::Action) -> (Option<Self::State>, f32);

    /// Reset the environment to an initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;

    /// Sample an action uniformly from the environment's action space
    fn random_action(&mut self) -> Self::Action;
}

/// An [`Environment`] whose available actions can be enumerated
pub trait DiscreteActionSpace: Environment {
    /// Get the available actions for the current state
    ///
    /// The returned vec should never be empty, instead specify an action that represents doing nothing if necessary.
    fn actions(&self) -> Vec<Self::Action>;
}

/// Summary of a single episode produced by [`rollout`]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rollout {
    /// Number of actions taken
    pub steps: u32,
    /// Undiscounted sum of rewards
    pub reward: f32,
}

/// Reset `env` and run it until a terminal transition, choosing each action with `policy`
///
/// The policy receives the environment (so it may sample [`Environment::random_action`]) and the current state.
pub fn rollout<E, P>(env: &mut E, mut policy: P) -> Rollout
where
    E: Environment,
    P: FnMut(&mut E, &E::State) -> E::Action,
{
    let mut summary = Rollout::default();
    let mut next_state = Some(env.reset());
    while let Some(state) = next_state {
        let action = policy(env, &state);
        let (next, reward) = env.step(action);
        summary.steps += 1;
        summary.reward += reward;
        next_state = next;
    }

    summary
}
