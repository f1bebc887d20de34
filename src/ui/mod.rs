// UI rendering module
//
// This module contains all UI rendering components for octoview.
// The main draw() function orchestrates rendering of all UI panels.

pub mod arrows;
mod banner;
pub mod card;
pub mod neighbors;
pub mod octopus;
mod status_bar;

use crate::app::AppState;
use crate::theme::{BONE_WHITE, NEON_PURPLE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use banner::render_banner;
use octopus::{render_octopus, OctopusView};
use status_bar::render_status_bar;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &AppState) {
    let size = f.area();

    // Main layout: banner, graph, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Min(0),    // Octopus graph
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    // Built once per frame and shared by the panels that need it
    let view = app.current_view();

    render_banner(f, chunks[0], app);
    render_graph_panel(f, chunks[1], app, view.as_ref());
    render_status_bar(f, chunks[2], app, view.as_ref());
}

fn render_graph_panel(f: &mut Frame, area: Rect, app: &AppState, view: Option<&OctopusView>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(NEON_PURPLE))
        .title(Span::styled(
            "━ Upstream ⟶ Resource ⟶ Downstream ━",
            Style::default().fg(NEON_PURPLE).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(view) = view else {
        let message = if app.snapshot.resources.is_empty() {
            "The mesh is quiet... no resources in snapshot"
        } else {
            "No resource selected (←/→ to pick one)"
        };
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        f.render_widget(
            Paragraph::new(Span::styled(
                message,
                Style::default().fg(BONE_WHITE).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            row,
        );
        return;
    };

    render_octopus(f, inner, view, app.selected_link);
}
