// Octopus graph rendering module
//
// Lays out the focal resource in the center, its upstream neighbors on the
// left and downstream neighbors on the right, with connector arms between.
// Excess neighbors collapse into a summary list and unmeshed traffic sources
// get their own panel; both count as slots so every rendered block on a side
// gets exactly one arm.

use super::arrows::{render_arrow_strip, ArrowStrip, Flow};
use super::card::{
    build_card, linked_title, render_card, title_span, truncate_to_width, CardRole, CardView,
    Title,
};
use super::neighbors::select_neighbors;
use crate::app::config::{CARD_ROWS, MAX_NEIGHBORS, SLOT_ROWS};
use crate::mesh::{display_name, Neighbors, Resource, ResourceLink, UnmeshedSource};
use crate::theme::{BONE_WHITE, GRAVE_GRAY, NEON_PURPLE};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// One rendered block in a neighbor column
#[derive(Debug, Clone, PartialEq)]
pub enum SlotView {
    /// A displayed neighbor
    Card(CardView),
    /// Display names of traffic sources without mesh telemetry
    Unmeshed(Vec<String>),
    /// Neighbors beyond the display cap, as plain or linked titles
    Collapsed(Vec<Title>),
}

/// Complete octopus graph for one focal resource
#[derive(Debug, Clone, PartialEq)]
pub struct OctopusView {
    pub center: CardView,
    /// Upstream column, top to bottom
    pub upstream: Vec<SlotView>,
    /// Downstream column, top to bottom
    pub downstream: Vec<SlotView>,
    /// Arms from the upstream column into the center card
    pub inbound: Option<ArrowStrip>,
    /// Arms from the center card to the downstream column
    pub outbound: Option<ArrowStrip>,
}

impl OctopusView {
    /// Navigable links in column order: upstream first, then downstream
    pub fn links(&self) -> Vec<&ResourceLink> {
        self.upstream
            .iter()
            .chain(self.downstream.iter())
            .flat_map(SlotView::links)
            .collect()
    }

    /// Link at `index` in `links()` order
    pub fn link(&self, index: usize) -> Option<&ResourceLink> {
        self.links().get(index).copied()
    }
}

impl SlotView {
    fn links(&self) -> Vec<&ResourceLink> {
        match self {
            SlotView::Card(card) => card.title.link().into_iter().collect(),
            SlotView::Unmeshed(_) => Vec::new(),
            SlotView::Collapsed(titles) => titles.iter().filter_map(Title::link).collect(),
        }
    }
}

fn collapsed_titles(resources: &[&Resource]) -> Vec<Title> {
    resources
        .iter()
        .map(|r| linked_title(r, &display_name(r)))
        .collect()
}

/// Build the octopus graph for a focal resource
///
/// Returns `None` when no resource is selected; the caller shows its own
/// empty state.
///
/// # Arguments
/// * `resource` - The focal resource, if any
/// * `neighbors` - Its upstream and downstream neighbors
/// * `unmeshed_sources` - Traffic sources without mesh telemetry
pub fn build_octopus_view(
    resource: Option<&Resource>,
    neighbors: &Neighbors,
    unmeshed_sources: &[UnmeshedSource],
) -> Option<OctopusView> {
    let resource = resource?;

    let upstreams = select_neighbors(&neighbors.upstream, MAX_NEIGHBORS);
    let downstreams = select_neighbors(&neighbors.downstream, MAX_NEIGHBORS);

    let num_upstreams = upstreams.displayed.len()
        + usize::from(!unmeshed_sources.is_empty())
        + usize::from(upstreams.has_collapsed());
    let num_downstreams = downstreams.displayed.len() + usize::from(downstreams.has_collapsed());

    let mut upstream: Vec<SlotView> = upstreams
        .displayed
        .iter()
        .map(|n| SlotView::Card(build_card(n, CardRole::Neighbor)))
        .collect();
    if !unmeshed_sources.is_empty() {
        upstream.push(SlotView::Unmeshed(
            unmeshed_sources.iter().map(UnmeshedSource::display_name).collect(),
        ));
    }
    if upstreams.has_collapsed() {
        upstream.push(SlotView::Collapsed(collapsed_titles(&upstreams.collapsed)));
    }

    let mut downstream: Vec<SlotView> = downstreams
        .displayed
        .iter()
        .map(|n| SlotView::Card(build_card(n, CardRole::Neighbor)))
        .collect();
    if downstreams.has_collapsed() {
        downstream.push(SlotView::Collapsed(collapsed_titles(&downstreams.collapsed)));
    }

    debug_assert_eq!(upstream.len(), num_upstreams);
    debug_assert_eq!(downstream.len(), num_downstreams);

    Some(OctopusView {
        center: build_card(resource, CardRole::Main),
        upstream,
        downstream,
        inbound: ArrowStrip::new(num_upstreams, Flow::Inbound),
        outbound: ArrowStrip::new(num_downstreams, Flow::Outbound),
    })
}

/// Rect of `rows` height centered vertically in `area`
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let [rect] = Layout::vertical([Constraint::Length(rows)])
        .flex(Flex::Center)
        .areas(area);
    rect
}

/// Draw the octopus graph into `area`
///
/// Five columns left to right: upstream neighbors, inbound arms, focal
/// resource, outbound arms, downstream neighbors.
///
/// # Arguments
/// * `view` - The graph to draw
/// * `selected` - Index of the selected link in `view.links()`, if any
pub fn render_octopus(f: &mut Frame, area: Rect, view: &OctopusView, selected: Option<usize>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(3, 12), // Upstream neighbors
            Constraint::Ratio(1, 12), // Inbound arms
            Constraint::Ratio(4, 12), // Focal resource
            Constraint::Ratio(1, 12), // Outbound arms
            Constraint::Ratio(3, 12), // Downstream neighbors
        ])
        .split(area);

    let upstream_links: usize = view.upstream.iter().map(|slot| slot.links().len()).sum();

    render_column(f, columns[0], &view.upstream, selected);
    if let Some(strip) = &view.inbound {
        let strip_area = centered_rows(columns[1], strip.slots() as u16 * SLOT_ROWS);
        render_arrow_strip(f, strip_area, strip, NEON_PURPLE);
    }

    // The focal card is not navigable
    render_card(f, centered_rows(columns[2], CARD_ROWS), &view.center, false);

    if let Some(strip) = &view.outbound {
        let strip_area = centered_rows(columns[3], strip.slots() as u16 * SLOT_ROWS);
        render_arrow_strip(f, strip_area, strip, NEON_PURPLE);
    }
    render_column(
        f,
        columns[4],
        &view.downstream,
        selected.and_then(|idx| idx.checked_sub(upstream_links)),
    );
}

/// Draw a neighbor column, one SLOT_ROWS band per slot, vertically centered
///
/// `selected` indexes the links of this column only.
fn render_column(f: &mut Frame, area: Rect, slots: &[SlotView], selected: Option<usize>) {
    if slots.is_empty() {
        return;
    }

    let bands = Layout::vertical(slots.iter().map(|_| Constraint::Length(SLOT_ROWS)))
        .flex(Flex::Center)
        .split(area);

    let mut first_link = 0;
    for (slot, band) in slots.iter().zip(bands.iter()) {
        // Card on top, spacer row below
        let slot_area = Rect {
            height: band.height.min(CARD_ROWS),
            ..*band
        };
        match slot {
            SlotView::Card(card) => {
                render_card(f, slot_area, card, selected == Some(first_link))
            }
            SlotView::Unmeshed(names) => render_unmeshed_panel(f, slot_area, names),
            SlotView::Collapsed(titles) => render_collapsed_panel(
                f,
                slot_area,
                titles,
                selected.and_then(|idx| idx.checked_sub(first_link)),
            ),
        }
        first_link += slot.links().len();
    }
}

/// Lines for a summary list, keeping the last line for an overflow note
fn summary_lines(mut lines: Vec<Line<'static>>, capacity: usize) -> Vec<Line<'static>> {
    if lines.len() <= capacity || capacity == 0 {
        lines.truncate(capacity);
        return lines;
    }

    let hidden = lines.len() - (capacity - 1);
    lines.truncate(capacity - 1);
    lines.push(Line::from(Span::styled(
        format!("… and {} more", hidden),
        Style::default().fg(BONE_WHITE).add_modifier(Modifier::ITALIC),
    )));
    lines
}

fn render_unmeshed_panel(f: &mut Frame, area: Rect, names: &[String]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GRAVE_GRAY))
        .title(Span::styled(
            "Unmeshed",
            Style::default().fg(NEON_PURPLE).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let lines = names
        .iter()
        .map(|name| {
            Line::from(Span::styled(
                truncate_to_width(name, width),
                Style::default().fg(BONE_WHITE),
            ))
        })
        .collect();

    f.render_widget(
        Paragraph::new(summary_lines(lines, inner.height as usize)).block(block),
        area,
    );
}

/// `selected` indexes the linked titles of this panel only
fn render_collapsed_panel(f: &mut Frame, area: Rect, titles: &[Title], selected: Option<usize>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(GRAVE_GRAY))
        .title(Span::styled(
            format!("+{} more", titles.len()),
            Style::default().fg(NEON_PURPLE),
        ));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let mut link_idx = 0;
    let lines = titles
        .iter()
        .map(|t| {
            let is_selected = t.link().is_some() && selected == Some(link_idx);
            if t.link().is_some() {
                link_idx += 1;
            }
            Line::from(title_span(t, Style::default().fg(BONE_WHITE), width, is_selected))
        })
        .collect();

    f.render_widget(
        Paragraph::new(summary_lines(lines, inner.height as usize)).block(block),
        area,
    );
}
