// Banner rendering module
//
// Renders the top line naming the focal resource, its namespace, and the
// snapshot the graph was built from.

use crate::app::AppState;
use crate::mesh::display_name;
use crate::theme::{BONE_WHITE, NEON_PURPLE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Text pieces for the banner: focus label and snapshot summary
pub fn banner_text(app: &AppState) -> (String, String) {
    let focus = match app.focus.as_deref() {
        Some(id) => match app.snapshot.find(id) {
            Some(resource) => match &resource.namespace {
                Some(ns) => format!("{} · ns/{}", display_name(resource), ns),
                None => display_name(resource),
            },
            None => format!("{} (not in snapshot)", id),
        },
        None => "no resource selected".to_string(),
    };

    let source = app
        .snapshot_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "in-memory".to_string());
    let summary = format!(
        "{} · {} resources · {} edges",
        source,
        app.snapshot.resources.len(),
        app.snapshot.edges.len()
    );

    (focus, summary)
}

pub fn render_banner(f: &mut Frame, area: Rect, app: &AppState) {
    let (focus, summary) = banner_text(app);

    let line = Line::from(vec![
        Span::styled(
            " 🐙 ",
            Style::default().fg(NEON_PURPLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            focus,
            Style::default().fg(BONE_WHITE).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(summary, Style::default().fg(BONE_WHITE)),
    ]);

    let banner = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(NEON_PURPLE))
                .title(Span::styled(
                    "━ Octoview ━",
                    Style::default().fg(NEON_PURPLE).add_modifier(Modifier::BOLD),
                )),
        )
        .alignment(Alignment::Left);

    f.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_app;
    use crate::mesh::Snapshot;

    #[test]
    fn test_banner_text_for_focus() {
        let app = sample_app();
        let (focus, summary) = banner_text(&app);
        assert_eq!(focus, "deploy/web · ns/emojivoto");
        assert_eq!(summary, "in-memory · 4 resources · 4 edges");
    }

    #[test]
    fn test_banner_text_without_focus() {
        let app = AppState::new(Snapshot::default());
        let (focus, _) = banner_text(&app);
        assert_eq!(focus, "no resource selected");
    }

    #[test]
    fn test_banner_text_unknown_focus() {
        let mut app = sample_app();
        app.focus = Some("x/y".to_string());
        assert_eq!(banner_text(&app).0, "x/y (not in snapshot)");
    }
}
