use hawker::{
    env::{rollout, Environment},
    gym::kitchen::{Kitchen, KitchenAction, KitchenConfig, KitchenError, LocationTable, TaskProgress},
};
use proptest::prelude::*;

fn action_seqs(max_len: usize) -> impl Strategy<Value = Vec<KitchenAction>> {
    prop::collection::vec(0usize..5, 0..max_len)
        .prop_map(|raw| raw.into_iter().map(|a| KitchenAction::try_from(a).unwrap()).collect::<Vec<_>>())
}

/// Any grid up to 6x6 with every station on it
fn configs() -> impl Strategy<Value = KitchenConfig> {
    (1usize..=6, 1usize..=6, 1u32..=5)
        .prop_flat_map(|(width, height, frying_steps)| {
            let cell = (0..width, 0..height);
            (
                Just(width),
                Just(height),
                Just(frying_steps),
                [cell.clone(), cell.clone(), cell.clone(), cell],
            )
        })
        .prop_map(|(width, height, frying_steps, [fridge, cutting, stove, counter])| KitchenConfig {
            width,
            height,
            frying_steps,
            locations: LocationTable {
                fridge,
                cutting,
                stove,
                counter,
            },
            ..Default::default()
        })
}

fn flags(p: TaskProgress) -> [bool; 3] {
    [p.has_veg, p.has_chopped, p.has_cooked]
}

proptest! {
    #[test]
    fn agent_stays_on_grid(config in configs(), actions in action_seqs(200)) {
        let mut env = Kitchen::with_config(config).unwrap();
        env.reset(None).unwrap();
        let grid = env.geometry();

        for action in actions {
            let t = env.step(action);
            prop_assert!(grid.contains(env.agent_position()));
            prop_assert_eq!(t.observation.len(), grid.cells() + 3);
            prop_assert_eq!(t.observation.agent_cell(), Some(grid.index(env.agent_position())));
        }
    }

    #[test]
    fn progress_follows_the_chain(config in configs(), actions in action_seqs(200)) {
        let mut env = Kitchen::with_config(config).unwrap();
        env.reset(None).unwrap();
        let mut before = env.progress();

        for action in actions {
            env.step(action);
            let after = env.progress();
            prop_assert!(!after.has_chopped || after.has_veg, "chopped without a vegetable");
            prop_assert!(!after.has_cooked || after.has_chopped, "cooked without chopping");
            prop_assert!(!after.has_chopped || before.has_veg, "veg and chop in the same step");
            for (was, is) in flags(before).into_iter().zip(flags(after)) {
                prop_assert!(!was || is, "progress went backwards");
            }
            before = after;
        }
    }

    #[test]
    fn reward_only_for_delivery(config in configs(), actions in action_seqs(200)) {
        let mut env = Kitchen::with_config(config).unwrap();
        env.reset(None).unwrap();
        let counter = env.locations().counter;

        for action in actions {
            let t = env.step(action);
            let delivered = env.progress().is_complete() && env.agent_position() == counter;
            if delivered {
                prop_assert_eq!(t.reward, 10.0);
                prop_assert!(t.done && !t.truncated);
            } else {
                prop_assert_eq!(t.reward, 0.0);
                prop_assert_eq!(t.done, t.truncated);
            }
        }
    }

    #[test]
    fn episodes_end_within_max_steps(seed in any::<u64>(), max_steps in 1u32..=80) {
        let config = KitchenConfig { max_steps, ..Default::default() };
        let mut env = Kitchen::with_config(config).unwrap();
        env.reset(Some(seed)).unwrap();

        let summary = rollout(&mut env, |env, _| env.random_action());
        prop_assert!(summary.steps >= 1);
        prop_assert!(summary.steps <= max_steps);
        prop_assert!(summary.reward == 0.0 || summary.reward == 10.0);
    }

    #[test]
    fn reset_restores_initial_state(actions in action_seqs(120)) {
        let mut env = Kitchen::new();
        let initial = env.reset(None).unwrap();
        for action in actions {
            env.step(action);
        }

        prop_assert_eq!(env.reset(None).unwrap(), initial);
        prop_assert_eq!(env.agent_position(), (0, 0));
        prop_assert_eq!(env.steps_taken(), 0);
        prop_assert_eq!(env.progress(), TaskProgress::default());
        prop_assert_eq!(env.frying_remaining(), 0);
        prop_assert_eq!(env.heatmap().total(), 0);
    }

    #[test]
    fn heatmap_counts_every_step(actions in action_seqs(120)) {
        let mut env = Kitchen::new();
        env.reset(None).unwrap();
        let steps = actions.len() as u32;
        for action in actions {
            env.step(action);
        }
        prop_assert_eq!(env.heatmap().total(), steps);
        prop_assert_eq!(env.steps_taken(), steps);
    }

    #[test]
    fn unknown_action_indices_rejected(index in 5usize..10_000) {
        let mut env = Kitchen::new();
        env.reset(None).unwrap();
        prop_assert_eq!(env.try_step(index).unwrap_err(), KitchenError::InvalidAction(index));
        prop_assert_eq!(env.steps_taken(), 0);
    }
}
