use super::utils::centered_rect;
use super::*;
use crate::app::DialogField;

pub fn render_add_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(56, 16, frame.area());
    frame.render_widget(Clear, area);

    let dialog = &app.dialog;
    let mut lines = vec![Line::from("")];

    for field in DialogField::ALL {
        let is_focused = dialog.focused_field == field;
        let label_style = if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = dialog.field(field);

        let value = if is_focused {
            let (before, after) = input.split_at_cursor();
            Span::styled(
                format!("{}█{}", before, after),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else if input.value.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(input.value.clone(), Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", field.label()), label_style),
            value,
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Duration wins over End when both are filled.",
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(hint) = &app.status_message {
        lines.push(Line::from(Span::styled(
            hint.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(" Add Class ", Style::default().fg(Color::Yellow)))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, area);
}
