use std::{thread, time::Duration};

use hawker::{
    env::{rollout, Environment},
    gym::Kitchen,
    viz,
};
use log::info;

const NUM_EPISODES: u16 = 20;
const FRAME_DELAY: Duration = Duration::from_millis(40);

fn main() {
    let mut env = Kitchen::new();
    let (handle, tx) = viz::init(NUM_EPISODES);

    for episode in 0..NUM_EPISODES {
        env.reset(Some(episode.into())).unwrap();

        let summary = rollout(&mut env, |env, _| {
            let action = env.random_action();
            let _ = tx.send(viz::Update {
                episode,
                snapshot: env.snapshot(),
            });
            thread::sleep(FRAME_DELAY);
            action
        });

        let _ = tx.send(viz::Update {
            episode,
            snapshot: env.snapshot(),
        });

        let report = env.report.take();
        info!(
            "episode {episode}: {} steps, reward {}, {} steps waiting at the stove",
            summary.steps, summary.reward, report["stove_wait"]
        );
    }

    drop(tx);
    let _ = handle.join();
}
