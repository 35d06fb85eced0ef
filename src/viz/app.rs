use std::{
    io,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use crossterm::event::{self, KeyCode};
use ratatui::{prelude::*, widgets::*};

use super::{
    components::{help::render_help, KitchenView, Logs},
    tui,
    util::event_keycode,
    Update,
};

const TABS: [&str; 2] = ["Kitchen", "Logs"];

#[derive(Default)]
enum State {
    #[default]
    Running,
    /// The sender hung up, keep showing the last frame
    Finished,
    Quit,
}

/// The root TUI component which holds the viewer state and runs the render loop
pub struct App {
    state: State,
    episode: u16,
    total_episodes: u16,
    selected_tab: usize,
    show_help: bool,
    kitchen: KitchenView,
    logs: Logs,
}

impl App {
    pub fn new(episodes: u16) -> Self {
        Self {
            state: State::default(),
            episode: 0,
            total_episodes: episodes,
            selected_tab: 0,
            show_help: false,
            kitchen: KitchenView::default(),
            logs: Logs::new(),
        }
    }

    /// Initialize the terminal and run the main loop
    ///
    /// Restores the terminal on exit
    pub fn run(&mut self, rx: Receiver<Update>) -> io::Result<()> {
        let mut terminal = tui::init()?;

        loop {
            match self.state {
                State::Running => self.drain(&rx),
                State::Finished => {}
                State::Quit => break,
            }

            terminal.draw(|frame| frame.render_widget(&*self, frame.size()))?;

            if event::poll(Duration::from_millis(16))? {
                let event = event::read()?;
                match event_keycode(&event) {
                    Some(KeyCode::Char('q')) => self.state = State::Quit,
                    Some(KeyCode::Char('h')) => self.show_help = !self.show_help,
                    Some(KeyCode::Tab) => {
                        self.selected_tab = (self.selected_tab + 1) % TABS.len();
                    }
                    _ if self.selected_tab == 1 => {
                        self.logs.handle_ui_event(&event);
                    }
                    _ => {}
                }
            }
        }

        tui::restore()
    }

    /// Apply every pending update, keeping only the newest frame
    fn drain(&mut self, rx: &Receiver<Update>) {
        loop {
            match rx.try_recv() {
                Ok(Update { episode, snapshot }) => {
                    self.episode = episode;
                    self.kitchen.update(snapshot);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.state = State::Finished;
                    break;
                }
            }
        }
    }

    fn progress(&self) -> f64 {
        if self.total_episodes == 0 {
            return 1.0;
        }
        ((f64::from(self.episode) + 1.0) / f64::from(self.total_episodes)).clamp(0.0, 1.0)
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [menu_area, main_area, progress_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        Tabs::new(TABS)
            .block(Block::default().padding(Padding::uniform(1)))
            .white()
            .bold()
            .highlight_style(Style::default().light_green())
            .select(self.selected_tab)
            .render(menu_area, buf);

        match self.selected_tab {
            0 => self.kitchen.render_ref(main_area, buf),
            1 => self.logs.render_ref(main_area, buf),
            _ => {}
        }

        let title = match self.state {
            State::Finished => String::from("Finished"),
            _ => format!("Episode {}/{}", u32::from(self.episode) + 1, self.total_episodes),
        };
        Gauge::default()
            .block(Block::bordered().border_type(BorderType::Rounded).title(title))
            .gauge_style(Color::Cyan)
            .ratio(self.progress())
            .render(progress_area, buf);

        if self.show_help {
            render_help(area, buf, self.selected_tab);
        }
    }
}
