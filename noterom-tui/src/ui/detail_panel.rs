use super::view_model::detail_view;
use super::*;

pub fn render_detail_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name + date/time
            Constraint::Min(3),    // Notes
        ])
        .split(area);

    let focused = app.focused_entry();
    let detail = detail_view(focused);
    let is_active =
        focused.is_some_and(|e| Some(e.id.as_str()) == app.snapshot.active_id.as_deref());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            detail.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.subtitle,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Class ")
            .border_style(if is_active {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            })
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(header, chunks[0]);

    if app.current_view == View::EditNotes {
        render_notes_editor(frame, chunks[1], app);
    } else {
        render_notes_preview(frame, chunks[1], detail.notes_preview);
    }
}

fn render_notes_preview(frame: &mut Frame, area: Rect, preview: Option<String>) {
    let widget = match preview {
        Some(text) if !text.is_empty() => Paragraph::new(text),
        Some(_) => Paragraph::new(Span::styled(
            "No notes yet. Press n to write some.",
            Style::default().fg(Color::DarkGray),
        )),
        None => Paragraph::new(""),
    };
    let widget = widget.wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("N", Style::default().add_modifier(Modifier::UNDERLINED)),
                Span::raw("otes "),
            ]))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_notes_editor(frame: &mut Frame, area: Rect, app: &App) {
    let (before, after) = app.notes_input.split_at_cursor();
    let input_text = format!("{}█{}", before, after);
    let editor = Paragraph::new(input_text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Notes (editing) ")
                .border_style(Style::default().fg(Color::Magenta))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(editor, area);
}
