//! Header panel: title plus the two decorative feeds.

use crate::app::App;
use crate::constants::WEATHER_CITY;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height the header needs for the feeds currently loaded.
pub fn header_height(app: &App) -> u16 {
    // borders + title
    let mut height = 3;
    if app.weather.is_some() {
        height += 1;
    }
    if app.quote.is_some() {
        height += 2;
    }
    height
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        "Full Stack Developer \u{00B7} Portfolio",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];

    // Absent feeds render nothing
    if let Some(weather) = &app.weather {
        let mut spans = vec![Span::styled(
            format!("{}: {:.1}\u{00B0}C", WEATHER_CITY, weather.temperature),
            Style::default().fg(Color::Cyan),
        )];
        if let Some(wind) = weather.windspeed {
            spans.push(Span::styled(
                format!("  wind {:.0} km/h", wind),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    if let Some(quote) = &app.quote {
        let mut text = format!("\"{}\"", quote.content);
        if let Some(author) = &quote.author {
            text.push_str(&format!(" - {}", author));
        }
        lines.push(Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
