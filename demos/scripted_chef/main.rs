use std::error::Error;

use hawker::gym::{
    kitchen::KitchenAction::{self, *},
    Kitchen,
};

/// Fridge, cutting board, three steps on the stove, then the counter
const ROUTE: [KitchenAction; 10] = [Up, Up, Interact, Right, Interact, Right, Up, Up, Right, Down];

fn main() -> Result<(), Box<dyn Error>> {
    let mut env = Kitchen::new();
    env.reset(Some(0))?;
    println!("{env}\n");

    for (i, action) in ROUTE.into_iter().enumerate() {
        let t = env.step(action);
        println!("step {:>2}: {action:?}, reward {}, done {}", i + 1, t.reward, t.done);
        println!("{env}\n");
        if t.done {
            break;
        }
    }

    println!("visits:\n{}", env.render_heatmap());

    let report = env.report.take();
    for (metric, value) in report {
        println!("{metric}: {value}");
    }

    Ok(())
}
