//! Chart layout math.
//!
//! Maps a synthesized OHLC series onto a padded viewport and emits a
//! [`ChartScene`] of drawable primitives: grid, candles or line/area, axis
//! labels, and the hover crosshair/tooltip. All coordinates are pixels with
//! the origin at the top-left, matching 2D canvas conventions.

use crate::format;
use crate::models::chart::ChartPoint;
use crate::models::settings::Theme;
use crate::render::hover::HoverState;
use crate::render::scene::{
    CandleBody, CandleShape, ChartScene, Crosshair, Label, LineSeg, MarkerDot, RectShape,
    TextAlign, TooltipBox,
};
use crate::render::theme::Palette;

/// Fraction of a bar slot occupied by the candle body.
const CANDLE_WIDTH_FACTOR: f32 = 0.6;

/// Body heights below this many pixels are drawn as a doji line.
const DOJI_THRESHOLD: f32 = 1.0;

/// The drawing surface: full size plus uniform padding around the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width of the padded plot area.
    #[must_use]
    pub fn plot_width(&self) -> f32 {
        self.width - 2.0 * self.padding
    }

    /// Height of the padded plot area.
    #[must_use]
    pub fn plot_height(&self) -> f32 {
        self.height - 2.0 * self.padding
    }
}

/// How the series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// OHLC candles with wicks; hover shows a full crosshair.
    Candlestick,
    /// Close-price polyline with an area fill; hover shows a vertical line
    /// and a marker dot.
    Line,
}

impl ChartStyle {
    /// Number of horizontal grid steps (lines = steps + 1).
    fn h_steps(self) -> usize {
        match self {
            ChartStyle::Candlestick => 8,
            ChartStyle::Line => 5,
        }
    }

    /// Number of vertical grid steps (lines = steps + 1).
    fn v_steps(self) -> usize {
        match self {
            ChartStyle::Candlestick => 10,
            ChartStyle::Line => 6,
        }
    }

    fn crosshair_dash(self) -> (f32, f32) {
        match self {
            ChartStyle::Candlestick => (3.0, 3.0),
            ChartStyle::Line => (5.0, 5.0),
        }
    }

    fn tooltip_size(self) -> (f32, f32) {
        match self {
            ChartStyle::Candlestick => (140.0, 60.0),
            ChartStyle::Line => (120.0, 40.0),
        }
    }
}

/// Min and max close price across the series.
/// Returns `(0.0, 0.0)` for an empty series.
#[must_use]
pub fn price_bounds(series: &[ChartPoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series {
        min = min.min(point.close);
        max = max.max(point.close);
    }
    if series.is_empty() {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// X pixel coordinate of the bar at `index`.
/// A single-point series maps to the plot center.
#[must_use]
pub fn x_at(viewport: &Viewport, len: usize, index: usize) -> f32 {
    if len < 2 {
        return viewport.padding + viewport.plot_width() / 2.0;
    }
    viewport.padding + index as f32 / (len - 1) as f32 * viewport.plot_width()
}

/// Y pixel coordinate of a price, given the series bounds.
/// A flat series (zero price range) maps every price to the vertical
/// center of the plot rather than dividing by zero.
#[must_use]
pub fn y_at(viewport: &Viewport, min_price: f64, max_price: f64, value: f64) -> f32 {
    let range = max_price - min_price;
    let t = if range <= 0.0 {
        0.5
    } else {
        ((value - min_price) / range) as f32
    };
    viewport.height - viewport.padding - t * viewport.plot_height()
}

/// Invert the x-mapping to the nearest bar index.
///
/// Returns `None` when the pointer is outside the padded plot area: the
/// candlestick style bounds both axes, the line style only x. The result is
/// clamped to a valid index, so the padding boundaries map to the first and
/// last bar.
#[must_use]
pub fn hover_index(
    viewport: &Viewport,
    style: ChartStyle,
    len: usize,
    x: f32,
    y: f32,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let inside_x = x >= viewport.padding && x <= viewport.width - viewport.padding;
    let inside_y = y >= viewport.padding && y <= viewport.height - viewport.padding;
    let inside = match style {
        ChartStyle::Candlestick => inside_x && inside_y,
        ChartStyle::Line => inside_x,
    };
    if !inside {
        return None;
    }

    let t = (x - viewport.padding) / viewport.plot_width();
    let index = (t * (len - 1) as f32).round() as isize;
    Some(index.clamp(0, len as isize - 1) as usize)
}

/// Compute the full scene for one frame.
///
/// `pair` selects 4-decimal price formatting (currency pairs) over the
/// 2-decimal default, matching the symbol's quote precision.
#[must_use]
pub fn build_scene(
    series: &[ChartPoint],
    viewport: &Viewport,
    style: ChartStyle,
    theme: Theme,
    hover: &HoverState,
    pair: bool,
) -> ChartScene {
    let palette = Palette::for_theme(theme);
    let mut scene = ChartScene::default();

    if style == ChartStyle::Candlestick {
        scene.background = Some(RectShape {
            x: 0.0,
            y: 0.0,
            w: viewport.width,
            h: viewport.height,
            fill: palette.background,
            stroke: None,
        });
    }

    if series.is_empty() {
        return scene;
    }

    let len = series.len();
    let (min_price, max_price) = price_bounds(series);

    push_grid(&mut scene, viewport, style, palette);

    match style {
        ChartStyle::Candlestick => {
            push_candles(&mut scene, series, viewport, min_price, max_price, palette);
        }
        ChartStyle::Line => {
            push_line_paths(&mut scene, series, viewport, min_price, max_price, palette);
        }
    }

    push_price_labels(
        &mut scene, viewport, style, min_price, max_price, palette, pair,
    );
    push_time_labels(&mut scene, series, viewport, style, palette);

    if let Some(index) = hover.index() {
        if index < len {
            push_hover(
                &mut scene, series, viewport, style, min_price, max_price, palette, pair, index,
            );
        }
    }

    scene
}

fn push_grid(scene: &mut ChartScene, viewport: &Viewport, style: ChartStyle, palette: &Palette) {
    let h_steps = style.h_steps();
    let v_steps = style.v_steps();

    for i in 0..=h_steps {
        let y = viewport.padding + i as f32 * viewport.plot_height() / h_steps as f32;
        scene.grid.push(LineSeg {
            x1: viewport.padding,
            y1: y,
            x2: viewport.width - viewport.padding,
            y2: y,
            color: palette.grid,
            width: 1.0,
            dash: None,
        });
    }

    for i in 0..=v_steps {
        let x = viewport.padding + i as f32 * viewport.plot_width() / v_steps as f32;
        scene.grid.push(LineSeg {
            x1: x,
            y1: viewport.padding,
            x2: x,
            y2: viewport.height - viewport.padding,
            color: palette.grid,
            width: 1.0,
            dash: None,
        });
    }
}

fn push_candles(
    scene: &mut ChartScene,
    series: &[ChartPoint],
    viewport: &Viewport,
    min_price: f64,
    max_price: f64,
    palette: &Palette,
) {
    let len = series.len();
    let candle_width = viewport.plot_width() / len as f32 * CANDLE_WIDTH_FACTOR;

    for (index, point) in series.iter().enumerate() {
        let x = x_at(viewport, len, index);
        let open_y = y_at(viewport, min_price, max_price, point.open);
        let close_y = y_at(viewport, min_price, max_price, point.close);
        let high_y = y_at(viewport, min_price, max_price, point.high);
        let low_y = y_at(viewport, min_price, max_price, point.low);

        let bullish = point.close >= point.open;
        let color = if bullish { palette.bullish } else { palette.bearish };

        let wick = LineSeg {
            x1: x,
            y1: high_y,
            x2: x,
            y2: low_y,
            color,
            width: 1.0,
            dash: None,
        };

        let body_y = open_y.min(close_y);
        let body_height = (close_y - open_y).abs();
        let body = if body_height < DOJI_THRESHOLD {
            CandleBody::Doji(LineSeg {
                x1: x - candle_width / 2.0,
                y1: body_y,
                x2: x + candle_width / 2.0,
                y2: body_y,
                color,
                width: 1.0,
                dash: None,
            })
        } else {
            CandleBody::Filled(RectShape {
                x: x - candle_width / 2.0,
                y: body_y,
                w: candle_width,
                h: body_height,
                fill: color,
                stroke: None,
            })
        };

        scene.candles.push(CandleShape { wick, body, bullish });
    }
}

fn push_line_paths(
    scene: &mut ChartScene,
    series: &[ChartPoint],
    viewport: &Viewport,
    min_price: f64,
    max_price: f64,
    palette: &Palette,
) {
    let len = series.len();
    let path: Vec<(f32, f32)> = series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            (
                x_at(viewport, len, index),
                y_at(viewport, min_price, max_price, point.close),
            )
        })
        .collect();

    // Area path: the line closed down to the plot floor.
    let floor = viewport.height - viewport.padding;
    let mut area = path.clone();
    area.push((viewport.width - viewport.padding, floor));
    area.push((viewport.padding, floor));

    scene.line_path = path;
    scene.area_path = area;
    scene.line_color = Some(palette.accent);
    scene.area_color = Some(palette.area);
}

fn push_price_labels(
    scene: &mut ChartScene,
    viewport: &Viewport,
    style: ChartStyle,
    min_price: f64,
    max_price: f64,
    palette: &Palette,
    pair: bool,
) {
    let steps = style.h_steps();
    let range = max_price - min_price;

    for i in 0..=steps {
        let price = max_price - i as f64 * range / steps as f64;
        let y = viewport.padding + i as f32 * viewport.plot_height() / steps as f32 + 4.0;

        let (x, text, align) = match style {
            // Candlestick labels hang off the right edge of the plot.
            ChartStyle::Candlestick => {
                let text = if pair {
                    format!("{price:.4}")
                } else {
                    format!("{price:.2}")
                };
                (viewport.width - viewport.padding + 5.0, text, TextAlign::Left)
            }
            // Line labels sit left of the plot, dollar-prefixed.
            ChartStyle::Line => (
                viewport.padding - 10.0,
                format!("${price:.2}"),
                TextAlign::Right,
            ),
        };

        scene.price_labels.push(Label {
            x,
            y,
            text,
            color: palette.text,
            align,
        });
    }
}

fn push_time_labels(
    scene: &mut ChartScene,
    series: &[ChartPoint],
    viewport: &Viewport,
    style: ChartStyle,
    palette: &Palette,
) {
    let len = series.len();
    let step = (len / 6).max(1);
    let y = match style {
        ChartStyle::Candlestick => viewport.height - viewport.padding + 15.0,
        ChartStyle::Line => viewport.height - viewport.padding + 20.0,
    };

    let mut last_index = usize::MAX;
    for i in 0..=6 {
        let index = (i * step).min(len - 1);
        if index == last_index {
            continue;
        }
        last_index = index;

        scene.time_labels.push(Label {
            x: x_at(viewport, len, index),
            y,
            text: series[index].date.format("%b %-d").to_string(),
            color: palette.text,
            align: TextAlign::Center,
        });
    }
}

#[allow(clippy::too_many_arguments)]
fn push_hover(
    scene: &mut ChartScene,
    series: &[ChartPoint],
    viewport: &Viewport,
    style: ChartStyle,
    min_price: f64,
    max_price: f64,
    palette: &Palette,
    pair: bool,
    index: usize,
) {
    let point = &series[index];
    let len = series.len();
    let x = x_at(viewport, len, index);
    let y = y_at(viewport, min_price, max_price, point.close);
    let dash = Some(style.crosshair_dash());

    let vertical = LineSeg {
        x1: x,
        y1: viewport.padding,
        x2: x,
        y2: viewport.height - viewport.padding,
        color: palette.accent,
        width: 1.0,
        dash,
    };

    let crosshair = match style {
        ChartStyle::Candlestick => Crosshair {
            vertical,
            horizontal: Some(LineSeg {
                x1: viewport.padding,
                y1: y,
                x2: viewport.width - viewport.padding,
                y2: y,
                color: palette.accent,
                width: 1.0,
                dash,
            }),
            marker: None,
        },
        ChartStyle::Line => Crosshair {
            vertical,
            horizontal: None,
            marker: Some(MarkerDot {
                x,
                y,
                radius: 4.0,
                color: palette.accent,
            }),
        },
    };
    scene.crosshair = Some(crosshair);

    let (tooltip_w, tooltip_h) = style.tooltip_size();
    // Flip to the left of the pointer past the midline so the box never
    // clips the right edge.
    let tooltip_x = if x > viewport.width / 2.0 {
        x - tooltip_w - 10.0
    } else {
        x + 10.0
    };
    let tooltip_y = y - tooltip_h / 2.0;

    let rect = RectShape {
        x: tooltip_x,
        y: tooltip_y,
        w: tooltip_w,
        h: tooltip_h,
        fill: palette.tooltip_bg,
        stroke: Some(palette.tooltip_border),
    };

    let price_text = if pair {
        format!("{:.4}", point.close)
    } else {
        format!("{:.2}", point.close)
    };
    let date_text = point.date.format("%-m/%-d/%Y").to_string();

    let line = |offset: f32, text: String| Label {
        x: tooltip_x + 8.0,
        y: tooltip_y + offset,
        text,
        color: palette.tooltip_text,
        align: TextAlign::Left,
    };

    let lines = match style {
        ChartStyle::Candlestick => vec![
            line(16.0, format!("Price: {price_text}")),
            line(32.0, format!("Date: {date_text}")),
            line(48.0, format!("Volume: {}", format::format_volume(point.volume))),
        ],
        ChartStyle::Line => vec![
            line(16.0, format!("${price_text}")),
            line(32.0, date_text),
        ],
    };

    scene.tooltip = Some(TooltipBox { rect, lines });
}
