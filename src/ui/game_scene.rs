//! Bulls and Cows scene: history, input line, status bar, rules panel.

use crate::app::{App, StatusKind};
use crate::bulls_cows::Outcome;
use crate::constants::{MAX_ATTEMPTS, SECRET_LEN};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the game scene.
pub fn render_game(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    // Horizontal: game area (left) + rules panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(26)])
        .split(area);

    // Left side: board (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_board(frame, v_chunks[0], app);
    render_status_bar(frame, v_chunks[1], app);
    render_rules_panel(frame, h_chunks[1]);

    if app.round.outcome().is_finished() {
        render_game_over_banner(frame, v_chunks[0], app);
    }
}

/// Input line, remaining attempts, then history newest first.
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Bulls and Cows ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    if !app.round.outcome().is_finished() {
        let mut slots = String::new();
        for i in 0..SECRET_LEN {
            slots.push(app.input.chars().nth(i).unwrap_or('_'));
            slots.push(' ');
        }
        lines.push(Line::from(vec![
            Span::styled("Guess: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                slots,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        let remaining = app.round.remaining_attempts();
        lines.push(Line::from(vec![
            Span::styled("Attempts left: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                remaining.to_string(),
                Style::default().fg(if remaining <= 2 {
                    Color::Red
                } else {
                    Color::White
                }),
            ),
        ]));

        if app.secret_revealed {
            lines.push(Line::from(vec![
                Span::styled("Secret: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    app.round.reveal_secret().to_string(),
                    Style::default().fg(Color::LightRed),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    for attempt in app.round.history().iter().rev() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("#{:>2}: ", attempt.ordinal),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{}   ", attempt.guess),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{} bulls ", attempt.bulls),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("{} cows", attempt.cows),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Status message (line 1) and controls (line 2).
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if area.height < 2 {
        return;
    }

    let status = match &app.status {
        Some(msg) => {
            let color = match msg.kind {
                StatusKind::Info => Color::Green,
                StatusKind::Error => Color::LightRed,
            };
            Span::styled(msg.text.clone(), Style::default().fg(color))
        }
        None if app.round.history().is_empty() => Span::styled(
            "Type 4 unique digits and press Enter",
            Style::default().fg(Color::Yellow),
        ),
        None => Span::raw(""),
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), status])),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let controls = [
        (" [Enter]", " Guess  "),
        ("[Ctrl-N]", " New game  "),
        ("[Ctrl-R]", " Show code  "),
        ("[Esc]", " Quit"),
    ];
    let mut spans = Vec::new();
    for (key, action) in controls {
        spans.push(Span::styled(key, Style::default().fg(Color::White)));
        spans.push(Span::styled(action, Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

fn render_rules_panel(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" How to play ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Find the 4-digit code",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "of unique digits",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("in {} tries.", MAX_ATTEMPTS),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Bulls ", Style::default().fg(Color::Green)),
            Span::styled("right place", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Cows  ", Style::default().fg(Color::Yellow)),
            Span::styled("wrong place", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Example:",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "code 1234, guess 1324",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "= 2 bulls, 2 cows",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Result text for a finished round.
pub fn game_over_text(app: &App) -> Option<(&'static str, String)> {
    let secret = app.round.reveal_secret();
    match app.round.outcome() {
        Outcome::InProgress => None,
        Outcome::Won => Some((
            "Congratulations!",
            format!(
                "You cracked {} in {} attempts!",
                secret,
                app.round.attempts_used()
            ),
        )),
        Outcome::Lost => Some(("Game Over", format!("The code was {}", secret))),
    }
}

/// Compact banner at the bottom of the board; history stays visible.
fn render_game_over_banner(frame: &mut Frame, area: Rect, app: &App) {
    let Some((title, message)) = game_over_text(app) else {
        return;
    };
    let color = if app.round.outcome() == Outcome::Won {
        Color::Green
    } else {
        Color::Red
    };

    let banner_height: u16 = 4;
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height.min(area.height),
    };
    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[Ctrl-N] Play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
