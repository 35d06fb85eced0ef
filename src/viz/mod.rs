use std::{
    io,
    sync::mpsc::{self, Sender},
    thread::{self, JoinHandle},
};

use log::LevelFilter;

use crate::gym::kitchen::KitchenSnapshot;

pub use app::App;

mod app;
mod components;
mod tui;
mod util;

/// A frame for the viewer
pub struct Update {
    pub episode: u16,
    pub snapshot: KitchenSnapshot,
}

/// Capture `log` records for the Logs tab and run the viewer on its own thread
///
/// Send an [`Update`] after every step; dropping the sender marks the run as finished.
/// The viewer keeps the last frame on screen until the user quits with `q`.
pub fn init(episodes: u16) -> (JoinHandle<io::Result<()>>, Sender<Update>) {
    // Fails only if the host already installed a logger, in which case records go there
    let _ = tui_logger::init_logger(LevelFilter::Trace);
    tui_logger::set_default_level(LevelFilter::Debug);

    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || App::new(episodes).run(rx));
    (handle, tx)
}
