// Status Bar rendering module
//
// Renders the bottom status bar with keyboard shortcuts, the refresh
// interval, the selected link and any snapshot load error.

use crate::app::config::DEFAULT_REFRESH_MS;
use crate::app::AppState;
use crate::theme::{get_refresh_color, BLOOD_RED, BONE_WHITE, NEON_PURPLE, TOXIC_GREEN};
use crate::ui::octopus::OctopusView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Keyboard hint shown in the status bar
struct Hint {
    priority: u8,
    key: &'static str,
    desc: &'static str,
    color: Color,
}

const HINTS: [Hint; 7] = [
    Hint {
        priority: 1,
        key: "Q:",
        desc: "Quit ",
        color: Color::Red,
    },
    Hint {
        priority: 1,
        key: "←→:",
        desc: "Resource | ",
        color: NEON_PURPLE,
    },
    Hint {
        priority: 1,
        key: "↑↓:",
        desc: "Link | ",
        color: NEON_PURPLE,
    },
    Hint {
        priority: 1,
        key: "Enter:",
        desc: "Open | ",
        color: NEON_PURPLE,
    },
    Hint {
        priority: 2,
        key: "B:",
        desc: "Back | ",
        color: NEON_PURPLE,
    },
    Hint {
        priority: 2,
        key: "R:",
        desc: "Reload | ",
        color: NEON_PURPLE,
    },
    Hint {
        priority: 3,
        key: "+/-:",
        desc: "Speed | ",
        color: NEON_PURPLE,
    },
];

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState, view: Option<&OctopusView>) {
    // Calculate available width for hints (subtract borders and icon)
    let available_width = area.width.saturating_sub(4) as usize;

    let mut spans = vec![Span::styled(" ◉ ", Style::default().fg(NEON_PURPLE))];
    let mut current_length = 3;

    // Add hints by priority until we run out of space
    for priority in 1..=3 {
        for hint in HINTS.iter().filter(|h| h.priority == priority) {
            let hint_length = hint.key.chars().count() + hint.desc.len();
            if current_length + hint_length <= available_width {
                spans.push(Span::styled(
                    hint.key,
                    Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(hint.desc));
                current_length += hint_length;
            }
        }
    }

    spans.push(Span::raw(" "));
    spans.extend(build_indicators(app, view));

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(NEON_PURPLE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}

/// Build indicator spans: refresh interval, selected link, load error
///
/// `view` is the graph drawn this frame; the selected link's href is read
/// from it.
pub fn build_indicators(app: &AppState, view: Option<&OctopusView>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    let refresh_color = get_refresh_color(
        app.refresh_config.refresh_ms,
        DEFAULT_REFRESH_MS,
        app.refresh_config.recently_changed(),
    );
    spans.push(Span::styled("[⟳ ", Style::default().fg(BONE_WHITE)));
    spans.push(Span::styled(
        format!("{}ms", app.refresh_config.refresh_ms),
        Style::default().fg(refresh_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", Style::default().fg(BONE_WHITE)));

    let selected = app
        .selected_link
        .and_then(|idx| view.and_then(|v| v.link(idx)));
    if let Some(link) = selected {
        spans.push(Span::styled("→ ", Style::default().fg(BONE_WHITE)));
        spans.push(Span::styled(
            link.href.clone(),
            Style::default()
                .fg(TOXIC_GREEN)
                .add_modifier(Modifier::UNDERLINED),
        ));
        spans.push(Span::raw(" "));
    }

    if let Some(err) = &app.load_error {
        spans.push(Span::styled(
            format!("⚠ {}", err),
            Style::default().fg(BLOOD_RED).add_modifier(Modifier::BOLD),
        ));
    }

    spans
}
