//! Registration feature view.
//!
//! Pure rendering functions for the register screen. Functions here take
//! state by immutable reference and draw to a ratatui Frame; they never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use enrol_core::config::Config;
use enrol_core::form::Field;

use super::state::{Focus, RegisterState};
use crate::render::{SPINNER_FRAMES, centered_rect};
use crate::state::AppState;

/// Outer width of the form card (including borders).
const CARD_WIDTH: u16 = 52;

/// Renders the register screen.
pub fn render_register(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    let inner_width = CARD_WIDTH.saturating_sub(4) as usize;
    let lines = form_lines(&app.register, &app.config, app.spinner_frame, inner_width);

    let card_height = lines.len() as u16 + 2;
    let card = centered_rect(area, CARD_WIDTH, card_height);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Create Account ");
    let inner = block.inner(card);
    frame.render_widget(block, card);
    frame.render_widget(Paragraph::new(lines), inner);

    // Key hints on the bottom screen row
    if area.height > card.y + card.height {
        let hints = Line::from(Span::styled(
            "Tab next · Enter submit · Esc quit",
            Style::default().fg(Color::DarkGray),
        ));
        let hint_area = ratatui::layout::Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            hint_area,
        );
    }
}

/// Builds the form body as styled lines.
///
/// Exposed for tests: the card is just these lines inside a border.
pub fn form_lines(
    state: &RegisterState,
    config: &Config,
    spinner_frame: usize,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for field in Field::all() {
        lines.extend(field_lines(state, config, field, width));
        lines.push(Line::from(""));
    }

    lines.push(submit_line(state, spinner_frame));

    if let Some(error) = &state.form_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(login_link_line(state));

    lines
}

fn field_lines(
    state: &RegisterState,
    config: &Config,
    field: Field,
    width: usize,
) -> Vec<Line<'static>> {
    let focused = state.focus == Focus::Field(field);

    let pointer = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let label = Line::from(Span::styled(
        format!("{pointer}{}", field.label()),
        label_style,
    ));

    let raw = state.form.value(field);
    let shown = if field.is_secret() && config.mask_secrets {
        "•".repeat(raw.chars().count())
    } else {
        raw.to_string()
    };
    // Reserve room for the indent and cursor block
    let shown = fit_tail(&shown, width.saturating_sub(3));

    let mut value_spans = vec![Span::styled(
        format!("  {shown}"),
        Style::default().fg(Color::Yellow),
    )];
    if focused {
        value_spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }

    let mut lines = vec![label, Line::from(value_spans)];

    if let Some(error) = state.form.visible_error(field) {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines
}

fn submit_line(state: &RegisterState, spinner_frame: usize) -> Line<'static> {
    if state.is_submitting() {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        return Line::from(Span::styled(
            format!("  [ {spinner} Saving... ]"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let focused = state.focus == Focus::Submit;
    let pointer = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(Span::styled(format!("{pointer}[ Sign Up ]"), style))
}

fn login_link_line(state: &RegisterState) -> Line<'static> {
    let focused = state.focus == Focus::LoginLink;
    let pointer = if focused { "> " } else { "  " };
    let link_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED)
    };
    Line::from(vec![
        Span::styled(
            format!("{pointer}Already have an account? "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("Login", link_style),
    ])
}

/// Keeps the tail of a string within `max_width` display columns, prefixing
/// "…" when truncated. The tail matters here: the cursor sits at the end.
fn fit_tail(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut tail = String::new();
    let mut used = 0;
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        tail.insert(0, c);
        used += w;
    }
    format!("…{tail}")
}
