// Resource card rendering module
//
// A card summarises one resource: its (possibly linked) title, a success
// rate bar colored by health class, requests per second and P99 latency.
// Used for the focal resource and for every displayed neighbor.

use crate::mesh::{display_name, resource_link, Resource, ResourceLink};
use crate::metrics::{classify_success_rate, format_metric, MetricKind, SuccessRateClass};
use crate::theme::{success_rate_color, BONE_WHITE, NEON_PURPLE, TOXIC_GREEN};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Where a card is shown; controls title emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    /// The focal resource in the center column
    Main,
    /// A displayed upstream or downstream neighbor
    Neighbor,
}

/// Card or list title: plain text, or a link when the resource is linkable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    Plain(String),
    Linked(ResourceLink),
}

impl Title {
    pub fn text(&self) -> &str {
        match self {
            Title::Plain(text) => text,
            Title::Linked(link) => &link.label,
        }
    }

    pub fn link(&self) -> Option<&ResourceLink> {
        match self {
            Title::Plain(_) => None,
            Title::Linked(link) => Some(link),
        }
    }
}

/// Title for a resource: linked when it has a namespace, plain otherwise
pub fn linked_title(resource: &Resource, display: &str) -> Title {
    match resource_link(resource, display) {
        Some(link) => Title::Linked(link),
        None => Title::Plain(display.to_string()),
    }
}

/// Everything needed to draw one resource card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub role: CardRole,
    pub title: Title,
    pub class: SuccessRateClass,
    /// Bar fill in [0, 1]
    pub ratio: f64,
    /// Text on the bar, e.g. "93.12%"
    pub success_label: String,
    pub rps: String,
    pub p99: String,
}

/// Build the card view for a resource
pub fn build_card(resource: &Resource, role: CardRole) -> CardView {
    let display = display_name(resource);
    let ratio = resource
        .success_rate
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, 1.0))
        .unwrap_or(0.0);

    CardView {
        role,
        title: linked_title(resource, &display),
        class: classify_success_rate(resource.success_rate),
        ratio,
        success_label: format_metric(MetricKind::SuccessRate, resource.success_rate),
        rps: format_metric(MetricKind::Rate, resource.request_rate),
        p99: format_metric(MetricKind::Latency, resource.p99()),
    }
}

/// Truncate a string to a display width, appending an ellipsis if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Styled span for a title, truncated to `max_width`
///
/// Links are underlined; a selected link is reversed. Plain titles are
/// never highlighted.
pub fn title_span(title: &Title, base: Style, max_width: usize, selected: bool) -> Span<'static> {
    let mut style = base;
    if title.link().is_some() {
        style = style.add_modifier(Modifier::UNDERLINED);
        if selected {
            style = style.fg(TOXIC_GREEN).add_modifier(Modifier::REVERSED);
        }
    }
    Span::styled(truncate_to_width(title.text(), max_width), style)
}

/// Draw a resource card into `area`
///
/// # Arguments
/// * `card` - The card view to draw
/// * `selected` - Whether the card's title link is the selected link
pub fn render_card(f: &mut Frame, area: Rect, card: &CardView, selected: bool) {
    let is_selected = selected && card.title.link().is_some();
    let border_color = if is_selected { TOXIC_GREEN } else { NEON_PURPLE };
    let (border_type, title_style) = match card.role {
        CardRole::Main => (
            BorderType::Double,
            Style::default().fg(BONE_WHITE).add_modifier(Modifier::BOLD),
        ),
        CardRole::Neighbor => (BorderType::Rounded, Style::default().fg(BONE_WHITE)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Success rate bar
            Constraint::Length(1), // RPS
            Constraint::Length(1), // P99
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(title_span(
        &card.title,
        title_style,
        inner.width as usize,
        selected,
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(success_rate_color(card.class)))
        .ratio(card.ratio)
        .label(card.success_label.clone());
    f.render_widget(gauge, rows[1]);

    render_metric_row(f, rows[2], "RPS", &card.rps);
    render_metric_row(f, rows[3], "P99", &card.p99);
}

/// Label on the left, value right-aligned
fn render_metric_row(f: &mut Frame, area: Rect, label: &str, value: &str) {
    let value_width = (value.width() as u16).min(area.width);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(value_width)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(label.to_string(), Style::default().fg(NEON_PURPLE))),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(value.to_string(), Style::default().fg(BONE_WHITE)))
            .alignment(Alignment::Right),
        cols[1],
    );
}
