//! Login feature view.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::state::LoginState;
use crate::render::centered_rect;
use crate::state::AppState;

const CARD_WIDTH: u16 = 52;

/// Renders the login screen.
pub fn render_login(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    let lines = login_lines(&app.login);

    let card_height = lines.len() as u16 + 2;
    let card = centered_rect(area, CARD_WIDTH, card_height);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Login ");
    let inner = block.inner(card);
    frame.render_widget(block, card);
    frame.render_widget(Paragraph::new(lines), inner);

    if area.height > card.y + card.height {
        let hints = Line::from(Span::styled(
            "Esc back · Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        ));
        let hint_area = ratatui::layout::Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            hint_area,
        );
    }
}

/// Builds the login screen body as styled lines.
pub fn login_lines(state: &LoginState) -> Vec<Line<'static>> {
    if state.loading {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Loading saved session...",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
        ];
    }

    if let Some(error) = &state.load_error {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Could not read saved session: {error}"),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
        ];
    }

    match &state.session {
        Some(session) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Registration complete.",
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Signed up as ", Style::default().fg(Color::White)),
                Span::styled(
                    session.user_name.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {}", session.email),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  This is where real sign-in would happen.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No saved session found.",
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Press Esc to go back and register.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ],
    }
}
