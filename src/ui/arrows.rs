// Arrow strip layout and drawing
//
// Computes the connector arms drawn between the center card and a neighbor
// column, then draws them on a ratatui canvas. Each neighbor slot is one
// BASE_HEIGHT band of the strip; arms fan out from (or into) the vertical
// middle of the strip.

use crate::app::config::{ARROW_WIDTH, BASE_HEIGHT};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Context, Line as CanvasLine},
    Frame,
};

/// Fraction of the strip width covered by the horizontal lead of a bent arm
const LEAD_FRACTION: f64 = 0.25;

/// Fraction of the strip width where the horizontal tail of a bent arm begins
const TAIL_FRACTION: f64 = 0.75;

/// Horizontal length of an arrowhead barb in canvas units
const HEAD_DX: f64 = 6.0;

/// Vertical spread of an arrowhead barb in canvas units
const HEAD_DY: f64 = BASE_HEIGHT / 12.0;

/// Direction of traffic through an arrow strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// From the upstream column into the center card
    Inbound,
    /// From the center card out to the downstream column
    Outbound,
}

/// Shape of one connector arm, read left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmShape {
    /// Rises toward the right
    Up,
    /// Falls toward the right
    Down,
    /// Straight across the middle
    Flat,
}

/// Shape and vertical offset of the arm for one neighbor slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub shape: ArmShape,
    /// Vertical offset from the strip's middle, in canvas units
    pub height: f64,
}

/// Lay out one arm per neighbor slot
///
/// Slots above the middle index bend one way, slots below bend the other,
/// and the middle slot (only present for odd counts) is flat. For even
/// counts the middle index is fractional, so every slot bends.
///
/// # Arguments
/// * `num_neighbors` - Number of slots in the adjacent column
/// * `flow` - Which side of the center card the strip sits on
///
/// # Returns
/// One geometry per slot, top to bottom; empty when there are no slots
pub fn layout_arrows(num_neighbors: usize, flow: Flow) -> Vec<ArrowGeometry> {
    let is_even = num_neighbors % 2 == 0;
    let middle_index = if is_even {
        (num_neighbors as f64 - 1.0) / 2.0
    } else {
        (num_neighbors / 2) as f64
    };

    (0..num_neighbors)
        .map(|i| {
            let i = i as f64;
            if i < middle_index {
                let height = ((middle_index - i).ceil() - 1.0) * BASE_HEIGHT + BASE_HEIGHT / 2.0;
                let shape = match flow {
                    Flow::Outbound => ArmShape::Up,
                    Flow::Inbound => ArmShape::Down,
                };
                ArrowGeometry { shape, height }
            } else if i == middle_index {
                ArrowGeometry {
                    shape: ArmShape::Flat,
                    height: BASE_HEIGHT,
                }
            } else {
                let height = ((i - middle_index).ceil() - 1.0) * BASE_HEIGHT + BASE_HEIGHT / 2.0;
                let shape = match flow {
                    Flow::Outbound => ArmShape::Down,
                    Flow::Inbound => ArmShape::Up,
                };
                ArrowGeometry { shape, height }
            }
        })
        .collect()
}

/// A laid-out arrow strip ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStrip {
    pub flow: Flow,
    pub arms: Vec<ArrowGeometry>,
    /// Canvas width
    pub width: f64,
    /// Canvas height, one BASE_HEIGHT band per slot
    pub height: f64,
}

impl ArrowStrip {
    /// Lay out a strip for `num_neighbors` slots
    ///
    /// Returns `None` when there is nothing to connect.
    pub fn new(num_neighbors: usize, flow: Flow) -> Option<Self> {
        if num_neighbors == 0 {
            return None;
        }
        Some(Self {
            flow,
            arms: layout_arrows(num_neighbors, flow),
            width: ARROW_WIDTH,
            height: num_neighbors as f64 * BASE_HEIGHT,
        })
    }

    /// Number of neighbor slots the strip connects
    pub fn slots(&self) -> usize {
        self.arms.len()
    }

    fn middle(&self) -> f64 {
        self.height / 2.0
    }

    /// Vertical travel of a bent arm from the middle to its slot center
    ///
    /// With an odd slot count the middle slot is centered on the strip's
    /// middle, so every other slot center sits half a band further out than
    /// the laid-out height.
    fn travel(&self, arm: &ArrowGeometry) -> f64 {
        if self.slots() % 2 == 1 {
            arm.height + BASE_HEIGHT / 2.0
        } else {
            arm.height
        }
    }

    /// Left and right y coordinates of an arm in canvas space (y grows upward)
    ///
    /// Outbound arms leave the center card at the middle of the strip;
    /// inbound arms arrive there. The neighbor end lands on the center of
    /// the arm's slot.
    pub fn arm_endpoints(&self, arm: &ArrowGeometry) -> (f64, f64) {
        let mid = self.middle();
        let rise = match arm.shape {
            ArmShape::Up => self.travel(arm),
            ArmShape::Down => -self.travel(arm),
            ArmShape::Flat => 0.0,
        };
        match self.flow {
            Flow::Outbound => (mid, mid + rise),
            Flow::Inbound => (mid - rise, mid),
        }
    }
}

/// Draw one arm on the canvas
pub fn draw_arm(ctx: &mut Context<'_>, strip: &ArrowStrip, arm: &ArrowGeometry, color: Color) {
    let (y_left, y_right) = strip.arm_endpoints(arm);
    match arm.shape {
        ArmShape::Flat => draw_flat_arm(ctx, strip.width, y_left, color),
        ArmShape::Up => draw_up_arm(ctx, strip.width, y_left, y_right, color),
        ArmShape::Down => draw_down_arm(ctx, strip.width, y_left, y_right, color),
    }
}

fn draw_flat_arm(ctx: &mut Context<'_>, width: f64, y: f64, color: Color) {
    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: y,
        x2: width,
        y2: y,
        color,
    });
    draw_arrowhead(ctx, width, y, color);
}

fn draw_up_arm(ctx: &mut Context<'_>, width: f64, y_left: f64, y_right: f64, color: Color) {
    debug_assert!(y_right >= y_left);
    draw_bent_arm(ctx, width, y_left, y_right, color);
}

fn draw_down_arm(ctx: &mut Context<'_>, width: f64, y_left: f64, y_right: f64, color: Color) {
    debug_assert!(y_right <= y_left);
    draw_bent_arm(ctx, width, y_left, y_right, color);
}

/// Horizontal lead, diagonal bend, horizontal tail, arrowhead
fn draw_bent_arm(ctx: &mut Context<'_>, width: f64, y_left: f64, y_right: f64, color: Color) {
    let lead_end = width * LEAD_FRACTION;
    let tail_start = width * TAIL_FRACTION;

    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: y_left,
        x2: lead_end,
        y2: y_left,
        color,
    });
    ctx.draw(&CanvasLine {
        x1: lead_end,
        y1: y_left,
        x2: tail_start,
        y2: y_right,
        color,
    });
    ctx.draw(&CanvasLine {
        x1: tail_start,
        y1: y_right,
        x2: width,
        y2: y_right,
        color,
    });
    draw_arrowhead(ctx, width, y_right, color);
}

fn draw_arrowhead(ctx: &mut Context<'_>, x: f64, y: f64, color: Color) {
    for dy in [HEAD_DY, -HEAD_DY] {
        ctx.draw(&CanvasLine {
            x1: x - HEAD_DX,
            y1: y + dy,
            x2: x,
            y2: y,
            color,
        });
    }
}

/// Draw an arrow strip into `area`
pub fn render_arrow_strip(f: &mut Frame, area: Rect, strip: &ArrowStrip, color: Color) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, strip.width])
        .y_bounds([0.0, strip.height])
        .paint(|ctx| {
            for arm in &strip.arms {
                draw_arm(ctx, strip, arm, color);
            }
        });

    f.render_widget(canvas, area);
}
