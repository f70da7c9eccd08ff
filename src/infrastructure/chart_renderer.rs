// Mapper to convert chart domain models to a plotly figure
use crate::domain::chart::{ChartData, DisplayMode, SeriesData};
use crate::domain::theme::{Palette, Theme};
use serde::Serialize;

const LINE_WIDTH: u32 = 2;
const HIGHLIGHT_LINE_WIDTH: u32 = 4;
const DIMMED_OPACITY: f64 = 0.35;
const FILL_ALPHA: f64 = 0.1;

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    /// Status per point, shown on hover
    pub text: Vec<&'static str>,
    /// `[min, max]` per point
    pub customdata: Vec<[f64; 2]>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: DisplayMode,
    pub line: Line,
    pub fill: &'static str,
    pub fillcolor: String,
    pub opacity: f64,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
    pub showlegend: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub b: u32,
    pub t: u32,
    pub r: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub showgrid: bool,
    pub zeroline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub color: &'static str,
}

pub fn chart_to_figure(chart: ChartData) -> Figure {
    let palette = chart.theme.palette();

    let data: Vec<Trace> = chart
        .series
        .into_iter()
        .enumerate()
        .map(|(index, series)| {
            series_to_trace(index, series, chart.theme, chart.mode, chart.highlight.as_deref())
        })
        .collect();

    Figure {
        layout: layout(chart.title, palette, data.len() > 1),
        data,
    }
}

fn series_to_trace(
    index: usize,
    series: SeriesData,
    theme: Theme,
    mode: DisplayMode,
    highlight: Option<&str>,
) -> Trace {
    let color = series
        .spec
        .color
        .clone()
        .unwrap_or_else(|| theme.series_color(index).to_string());

    let (width, opacity) = match highlight {
        Some(id) if id == series.spec.id => (HIGHLIGHT_LINE_WIDTH, 1.0),
        Some(_) => (LINE_WIDTH, DIMMED_OPACITY),
        None => (LINE_WIDTH, 1.0),
    };

    let mut x = Vec::with_capacity(series.points.len());
    let mut y = Vec::with_capacity(series.points.len());
    let mut text = Vec::with_capacity(series.points.len());
    let mut customdata = Vec::with_capacity(series.points.len());
    for p in &series.points {
        x.push(p.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string());
        y.push(p.value);
        text.push(p.status.as_str());
        customdata.push([p.min_value, p.max_value]);
    }

    Trace {
        name: series.spec.name,
        x,
        y,
        text,
        customdata,
        kind: "scatter",
        mode,
        fillcolor: fill_color(&color),
        line: Line { color, width },
        fill: "tozeroy",
        opacity,
        hovertemplate: "%{y} (%{text})<br>min %{customdata[0]} / max %{customdata[1]}",
    }
}

fn layout(title: String, palette: &Palette, showlegend: bool) -> Layout {
    Layout {
        title,
        margin: Margin {
            l: 40,
            b: 40,
            t: 40,
            r: 20,
        },
        xaxis: Axis {
            showgrid: false,
            zeroline: false,
            gridcolor: None,
        },
        yaxis: Axis {
            showgrid: true,
            zeroline: false,
            gridcolor: Some(palette.grid),
        },
        plot_bgcolor: palette.plot_background,
        paper_bgcolor: palette.paper_background,
        font: Font {
            color: palette.font,
        },
        showlegend,
    }
}

/// `#2563eb` becomes `rgba(37, 99, 235, 0.1)`. Anything that is not a
/// 6-digit hex colour is passed through unchanged.
fn fill_color(color: &str) -> String {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return color.to_string();
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    format!(
        "rgba({}, {}, {}, {})",
        channel(0),
        channel(2),
        channel(4),
        FILL_ALPHA
    )
}
