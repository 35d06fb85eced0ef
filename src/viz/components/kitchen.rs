use ratatui::{prelude::*, widgets::*};

use crate::gym::kitchen::KitchenSnapshot;

/// Cell colours of the frame view, one per marker
fn cell_style(marker: char) -> Style {
    let bg = match marker {
        'F' => Color::Rgb(100, 180, 255),
        'C' => Color::Rgb(255, 215, 0),
        'S' => Color::Rgb(255, 100, 100),
        'X' => Color::Rgb(100, 255, 100),
        'A' => Color::Rgb(0, 0, 0),
        _ => Color::Rgb(220, 220, 220),
    };
    let fg = match marker {
        'A' => Color::White,
        _ => Color::Black,
    };
    Style::default().fg(fg).bg(bg)
}

/// Black to red to yellow to white as `t` goes from 0 to 1
fn hot(t: f64) -> Color {
    let channel = |offset: f64| ((3.0 * t - offset).clamp(0.0, 1.0) * 255.0) as u8;
    Color::Rgb(channel(0.0), channel(1.0), channel(2.0))
}

fn flag(name: &'static str, done: bool) -> Span<'static> {
    if done {
        Span::from(format!("{name} ✓")).light_green()
    } else {
        Span::from(format!("{name} ✗")).dark_gray()
    }
}

/// The latest kitchen frame next to its visit heatmap
#[derive(Default)]
pub struct KitchenView {
    snapshot: Option<KitchenSnapshot>,
}

impl KitchenView {
    pub fn update(&mut self, snapshot: KitchenSnapshot) {
        self.snapshot = Some(snapshot);
    }

    fn frame_lines(snapshot: &KitchenSnapshot) -> Vec<Line<'static>> {
        let grid = snapshot.geometry;
        let mut lines = (0..grid.height())
            .rev()
            .map(|y| {
                grid.row(y)
                    .map(|pos| {
                        let marker = snapshot.marker(pos);
                        Span::styled(format!(" {marker} "), cell_style(marker))
                    })
                    .collect::<Vec<_>>()
            })
            .map(Line::from)
            .collect::<Vec<_>>();

        let progress = snapshot.progress;
        lines.push(Line::default());
        lines.push(Line::from(vec![
            flag("veg", progress.has_veg),
            Span::raw("  "),
            flag("chopped", progress.has_chopped),
            Span::raw("  "),
            flag("cooked", progress.has_cooked),
        ]));
        lines.push(Line::from(format!(
            "step {}  frying {}",
            snapshot.steps_taken, snapshot.frying_remaining
        )));
        lines
    }

    fn heatmap_lines(snapshot: &KitchenSnapshot) -> Vec<Line<'static>> {
        let heatmap = &snapshot.heatmap;
        let grid = heatmap.geometry();
        let max = heatmap.max().max(1) as f64;
        (0..grid.height())
            .rev()
            .map(|y| {
                grid.row(y)
                    .map(|pos| {
                        let visits = heatmap.get(pos);
                        let style = Style::default()
                            .fg(Color::Gray)
                            .bg(hot(visits as f64 / max));
                        Span::styled(format!("{visits:>4} "), style)
                    })
                    .collect::<Vec<_>>()
            })
            .map(Line::from)
            .collect()
    }
}

impl WidgetRef for KitchenView {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let panel = |title: &'static str| {
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::uniform(1))
                .title(title)
        };

        let Some(snapshot) = &self.snapshot else {
            Paragraph::new("Waiting for the first step...")
                .block(panel("Kitchen"))
                .render(area, buf);
            return;
        };

        let [frame_area, heatmap_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        Paragraph::new(Self::frame_lines(snapshot))
            .block(panel("Kitchen"))
            .render(frame_area, buf);

        Paragraph::new(Self::heatmap_lines(snapshot))
            .block(panel("Visits"))
            .render(heatmap_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hot_colormap_ends() {
        assert_eq!(hot(0.0), Color::Rgb(0, 0, 0), "Unvisited cells are black");
        assert_eq!(hot(1.0), Color::Rgb(255, 255, 255), "Hottest cell is white");
        assert_eq!(hot(0.5), Color::Rgb(255, 127, 0));
    }

    #[test]
    fn renders_frame_and_heatmap() {
        let mut env = crate::gym::Kitchen::new();
        env.reset(None).unwrap();
        env.step(crate::gym::kitchen::KitchenAction::Up);

        let mut view = KitchenView::default();
        view.update(env.snapshot());

        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        view.render_ref(area, &mut buf);

        let text = buf
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(text.contains(" F "), "Fridge marker drawn");
        assert!(text.contains(" A "), "Agent marker drawn");
        assert!(text.contains("Visits"), "Heatmap panel drawn");
    }
}
