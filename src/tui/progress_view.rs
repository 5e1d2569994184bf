//! Reading Progress view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::ReadingProgress;
use crate::tui::{ContextualComponent, Theme};

/// Events emitted by the progress view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// User left the view
    Back,
}

/// Progress view (stateless, renders from the loaded collection)
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressView;

impl ContextualComponent for ProgressView {
    type Context = ReadingProgress;
    type Event = ProgressEvent;

    fn handle_input(&mut self, key: KeyEvent, _progress: &Self::Context) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Left | KeyCode::BackTab => Some(ProgressEvent::Back),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, progress: &Self::Context) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Totals
                Constraint::Length(3), // Gauge
                Constraint::Length(3), // Completion
                Constraint::Min(0),
            ])
            .split(area);

        let totals = Paragraph::new(vec![
            Line::from(format!("Total Books: {}", progress.total)),
            Line::from(format!("Books Read: {}", progress.read_count)),
        ])
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(totals, chunks[0]);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            )
            .gauge_style(Style::default().fg(theme.success).bg(theme.highlight_bg))
            .ratio(progress.ratio())
            .label(progress.percent_label());
        f.render_widget(gauge, chunks[1]);

        let completion = Paragraph::new(format!(
            "Reading Completion: {}",
            progress.percent_label()
        ))
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(completion, chunks[2]);
    }
}
