use super::view_model::{class_cards, EMPTY_HINT};
use super::*;

pub fn render_class_list(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.current_view == View::Classes;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Classes ")
        .border_style(if is_focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        })
        .padding(Padding::horizontal(1));

    let cards = class_cards(
        app.store.entries(),
        app.store.selected_id(),
        app.snapshot.active_id.as_deref(),
    );

    if cards.is_empty() {
        let hint = Paragraph::new(Span::styled(
            EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = cards
        .into_iter()
        .map(|card| {
            let marker = if card.is_selected { "● " } else { "  " };
            let title_style = if card.is_active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };

            let mut title = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(card.title, title_style),
            ];
            if card.is_active {
                title.push(Span::styled("  [active]", Style::default().fg(Color::Green)));
            }

            ListItem::new(vec![
                Line::from(title),
                Line::from(Span::styled(
                    format!("  {}", card.meta),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default().with_selected(Some(app.list_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
