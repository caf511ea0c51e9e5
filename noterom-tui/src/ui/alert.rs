use super::utils::centered_rect;
use super::*;

pub fn render_alert(frame: &mut Frame, message: &str) {
    let width = (message.chars().count() as u16 + 8).clamp(30, 70);
    let area = centered_rect(width, 7, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(" Notice ", Style::default().fg(Color::Red)))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(paragraph, area);
}
