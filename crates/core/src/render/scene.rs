//! Drawable primitives.
//!
//! The core computes a full [`ChartScene`] — a frontend draws the primitives
//! in declaration order onto whatever 2D surface it has. Scenes serialize so
//! non-Rust frontends can consume them as JSON.

use serde::Serialize;

/// Horizontal text alignment, relative to the label's anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeg {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: &'static str,
    pub width: f32,
    /// Dash pattern (on, off); `None` draws solid.
    pub dash: Option<(f32, f32)>,
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectShape {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub fill: &'static str,
    pub stroke: Option<&'static str>,
}

/// A filled circle (the line chart's hover marker).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: &'static str,
}

/// A piece of text anchored at (x, y).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: &'static str,
    pub align: TextAlign,
}

/// The body of one candlestick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CandleBody {
    /// Open/close rectangle
    Filled(RectShape),
    /// Body height rounded below one pixel — drawn as a single horizontal
    /// line instead (a doji)
    Doji(LineSeg),
}

/// One candlestick: wick plus body, colored by direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleShape {
    pub wick: LineSeg,
    pub body: CandleBody,
    /// close ≥ open
    pub bullish: bool,
}

/// Dashed crosshair at the hovered bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crosshair {
    pub vertical: LineSeg,
    /// The candlestick style draws a horizontal line through the hovered
    /// close; the line style draws a marker dot instead.
    pub horizontal: Option<LineSeg>,
    pub marker: Option<MarkerDot>,
}

/// Hover tooltip, offset so it never clips past the right edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipBox {
    pub rect: RectShape,
    pub lines: Vec<Label>,
}

/// Everything needed to draw one chart frame. Recomputed in full on every
/// input change — there is no partial redraw.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartScene {
    pub background: Option<RectShape>,
    pub grid: Vec<LineSeg>,
    /// Candlestick style only
    pub candles: Vec<CandleShape>,
    /// Line style only: polyline through the close prices
    pub line_path: Vec<(f32, f32)>,
    /// Line style only: closed fill path under the line
    pub area_path: Vec<(f32, f32)>,
    pub line_color: Option<&'static str>,
    pub area_color: Option<&'static str>,
    pub price_labels: Vec<Label>,
    pub time_labels: Vec<Label>,
    pub crosshair: Option<Crosshair>,
    pub tooltip: Option<TooltipBox>,
}
