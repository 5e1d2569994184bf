//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{ActiveView, AppState, Focus, StatusKind, Theme, UpdateView};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        // First line: status message, or the collection summary when idle
        let status_line = if state.status_message.is_empty() {
            let progress = state.progress();
            Line::from(Span::styled(
                format!(
                    "{} books, {} read ({})",
                    progress.total,
                    progress.read_count,
                    progress.percent_label()
                ),
                Style::default().fg(theme.text_muted),
            ))
        } else {
            let color = match state.status_kind {
                StatusKind::Info => theme.text,
                StatusKind::Success => theme.success,
                StatusKind::Warning => theme.warning,
            };
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(color),
            ))
        };

        let help_line = Self::contextual_help_line(state, theme);

        let status = Paragraph::new(vec![status_line, help_line]).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(status, area);
    }

    /// Key hints for the pane that currently has focus.
    fn contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match (state.focus, &state.view) {
            (Focus::Sidebar, _) => &[
                ("↑/↓", "Select"),
                ("Enter", "Open"),
                ("1-6", "Jump"),
                ("r", "Reload"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
            (Focus::View, ActiveView::Books(_)) => {
                &[("↑/↓", "Scroll"), ("PgUp/PgDn", "Page"), ("Esc", "Back")]
            }
            (Focus::View, ActiveView::Add(_) | ActiveView::Update(UpdateView::Editing(_))) => &[
                ("Tab/↓", "Next field"),
                ("Space", "Toggle read"),
                ("Ctrl+S", "Save"),
                ("Esc", "Back"),
            ],
            (Focus::View, ActiveView::Search(_)) => {
                &[("Type", "Query"), ("Enter", "Search"), ("Esc", "Back")]
            }
            (Focus::View, ActiveView::Update(UpdateView::Picking(_)) | ActiveView::Delete(_)) => {
                &[("↑/↓", "Select"), ("Enter", "Choose"), ("Esc", "Back")]
            }
            (Focus::View, ActiveView::Progress(_)) => &[("Esc", "Back")],
        };

        let mut spans = vec![Span::styled(
            "Help: ",
            Style::default().fg(theme.primary),
        )];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(theme.text),
            ));
        }
        Line::from(spans)
    }
}
