use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

mod add_dialog;
mod alert;
mod class_list;
mod detail_panel;
pub(super) mod utils;
pub mod view_model;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + live clock
            Constraint::Min(6),    // Class list + detail
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(root[1]);
    class_list::render_class_list(frame, body[0], app);
    detail_panel::render_detail_panel(frame, body[1], app);

    render_status(frame, root[2], app);
    render_controls(frame, root[3], app);

    if app.current_view == View::AddClass {
        add_dialog::render_add_dialog(frame, app);
    }

    // Alerts render on top of everything
    if let Some(message) = &app.alert {
        alert::render_alert(frame, message);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(
            "noterom",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} / {} classes",
                app.store.len(),
                noterom_core::MAX_CLASSES
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let clock = Paragraph::new(Span::styled(
        app.clock_text.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(clock, inner);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.snapshot.is_active();
    let (dot_color, border_style) = if is_active {
        (Color::Green, Style::default().fg(Color::Green))
    } else {
        (Color::DarkGray, Style::default())
    };

    let text_color = if app.status_message.is_some() {
        Color::Yellow
    } else {
        Color::White
    };

    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::styled(app.status_text(), Style::default().fg(text_color)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn key_hint<'a>(key: &'a str, label: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(label),
    ]
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hints: Vec<[Span; 2]> = match app.current_view {
        View::Classes => vec![
            key_hint("j/k", ": Move  "),
            key_hint("Enter", ": Focus  "),
            key_hint("d", ": Remove  "),
            key_hint("a", ": Add  "),
            key_hint("n", ": Notes  "),
            key_hint("Esc", ": Unfocus  "),
            key_hint("q", ": Quit"),
        ],
        View::AddClass => vec![
            key_hint("Tab", ": Next field  "),
            key_hint("Enter", ": Next / Submit  "),
            key_hint("Ctrl+S", ": Submit  "),
            key_hint("Ctrl+X", ": Clear field  "),
            key_hint("Esc", ": Cancel"),
        ],
        View::EditNotes => vec![
            key_hint("Ctrl+S", ": Save notes  "),
            key_hint("Enter", ": New line  "),
            key_hint("Ctrl+X", ": Clear  "),
            key_hint("Esc", ": Back"),
        ],
    };

    let spans: Vec<Span> = hints.into_iter().flatten().collect();
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Controls ")
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
