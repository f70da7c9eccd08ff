// Chart themes
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub paper_background: &'static str,
    pub plot_background: &'static str,
    pub grid: &'static str,
    pub font: &'static str,
    pub series: [&'static str; 8],
}

const LIGHT: Palette = Palette {
    paper_background: "#ffffff",
    plot_background: "#ffffff",
    grid: "#eeeeee",
    font: "#0c1625",
    series: [
        "#2563eb", "#e11d48", "#0ea66c", "#d97706", "#7c3aed", "#0891b2", "#db2777", "#4b5563",
    ],
};

const DARK: Palette = Palette {
    paper_background: "#05090f",
    plot_background: "#0b111a",
    grid: "#1f2a38",
    font: "#e6edf7",
    series: [
        "#5cb0ff", "#f0635c", "#3fb68b", "#f7c843", "#a78bfa", "#22d3ee", "#f472b6", "#9ca3af",
    ],
};

impl Theme {
    /// Case-insensitive lookup; `None` for names that are not a theme.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Series colour for the trace at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> &'static str {
        let series = &self.palette().series;
        series[index % series.len()]
    }
}
