//! Help overlay widget listing the keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, Theme};

/// Sections of `(key, description)` pairs shown in the overlay.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("↑/↓ or k/j", "Select a view in the sidebar"),
            ("1-6", "Jump to a view"),
            ("Enter/→/Tab", "Focus the view"),
            ("Esc", "Back to the sidebar"),
        ],
    ),
    (
        "FORMS",
        &[
            ("Tab/↓", "Next field"),
            ("Shift+Tab/↑", "Previous field"),
            ("Space", "Toggle 'Mark as read'"),
            ("Ctrl+S", "Submit"),
        ],
    ),
    (
        "GENERAL",
        &[
            ("r", "Reload the collection from disk"),
            ("?", "Toggle this help"),
            ("q", "Quit (from the sidebar)"),
            ("Ctrl+C/Ctrl+Q", "Quit"),
        ],
    ),
];

/// Help overlay widget
pub struct HelpOverlay;

impl HelpOverlay {
    /// Lines shown in the overlay.
    #[must_use]
    pub fn content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, (title, entries)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in *entries {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {key:<16}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled((*description).to_string(), Style::default().fg(theme.text)),
                ]));
            }
        }
        lines
    }

    /// Render the overlay centered over `area`.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 70, area);
        f.render_widget(Clear, popup);

        let help = Paragraph::new(Self::content(theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help (? or Esc to close) ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(help, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_shortcut() {
        let lines = HelpOverlay::content(&Theme::default());
        // One heading per section, one line per entry, blank separators between
        let expected = SECTIONS
            .iter()
            .map(|(_, entries)| entries.len() + 1)
            .sum::<usize>()
            + SECTIONS.len()
            - 1;
        assert_eq!(lines.len(), expected);
    }
}
