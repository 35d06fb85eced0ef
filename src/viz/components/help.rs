use ratatui::{prelude::*, widgets::*};

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::from(key).light_cyan().bold(),
        Span::raw(" : "),
        Span::raw(description),
    ])
}

/// Draw the key bindings for the selected tab as a centered popup
pub fn render_help(area: Rect, buf: &mut Buffer, selected_tab: usize) {
    let mut lines = vec![
        key_line("  q  ", "Exit the viewer"),
        key_line("  h  ", "Toggle this help"),
        key_line(" Tab ", "Switch tabs"),
    ];

    if selected_tab == 1 {
        lines.extend([
            key_line("  s  ", "Show or hide the target selector"),
            key_line("⬆ / ⬇", "Select a log target"),
            key_line("⬅ / ➡", "Show fewer or more levels for the target"),
            key_line("- / +", "Capture fewer or more levels for the target"),
            key_line("PgUp ", "Page mode, scroll up"),
            key_line("PgDn ", "Page mode, scroll down"),
            key_line(" Esc ", "Leave page mode"),
        ]);
    } else {
        lines.push(Line::from(
            "Stations: F fridge, C cutting board, S stove, X counter, A agent".italic(),
        ));
    }

    let [_, center_vert, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(lines.len() as u16 + 4),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(80),
        Constraint::Fill(1),
    ])
    .areas(center_vert);

    Clear.render(center, buf);

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::horizontal(1))
                .title("Help"),
        )
        .wrap(Wrap { trim: false })
        .render(center, buf);
}
