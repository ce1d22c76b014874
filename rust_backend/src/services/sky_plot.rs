use log::info;
use serde::Serialize;

use crate::config::PlotSettings;
use crate::core::domain::{PolygonOutline, ShapeKind, Year1Document};
use crate::geometry::{convert_areas, SkippedArea};
use crate::io::export::python_float_repr;
use crate::services::exposure_map::{ExposureGrid, HeatmapLayer};

/// plotly's sequential `Tealgrn` scale, light to dark.
pub const TEALGRN: [&str; 7] = [
    "rgb(176, 242, 188)",
    "rgb(137, 232, 172)",
    "rgb(103, 219, 165)",
    "rgb(76, 200, 163)",
    "rgb(56, 178, 163)",
    "rgb(44, 152, 160)",
    "rgb(37, 125, 152)",
];

pub const PLOT_TITLE: &str = "Year 1 Long Term Scheduler Preference";
const LINE_WIDTH: f64 = 2.0;

/// Hands out palette colours in order, starting over after the last one.
#[derive(Debug, Clone)]
pub struct ColourCycle<'a> {
    palette: &'a [&'a str],
    position: usize,
}

impl<'a> ColourCycle<'a> {
    /// `None` for an empty palette.
    pub fn new(palette: &'a [&'a str]) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        Some(Self {
            palette,
            position: 0,
        })
    }

    pub fn tealgrn() -> ColourCycle<'static> {
        ColourCycle {
            palette: &TEALGRN,
            position: 0,
        }
    }

    pub fn next_colour(&mut self) -> &'a str {
        let colour = self.palette[self.position % self.palette.len()];
        self.position += 1;
        colour
    }
}

/// Hover label of an area trace, e.g. `t_frac: 0.3`.
///
/// # Examples
///
/// ```
/// use lts_year1::services::sky_plot::t_frac_label;
///
/// assert_eq!(t_frac_label(0.3), "t_frac: 0.3");
/// assert_eq!(t_frac_label(1.0), "t_frac: 1.0");
/// ```
pub fn t_frac_label(t_frac: f64) -> String {
    format!("t_frac: {}", python_float_repr(t_frac))
}

/// One filled outline on the sky plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaTrace {
    /// Hover label.
    pub name: String,
    pub area_name: String,
    pub kind: ShapeKind,
    pub ra: Vec<f64>,
    pub dec: Vec<f64>,
    pub colour: String,
    pub line_width: f64,
    pub fill: String,
    pub mode: String,
    pub show_legend: bool,
}

impl AreaTrace {
    pub fn from_outline(outline: &PolygonOutline, colour: &str) -> Self {
        Self {
            name: t_frac_label(outline.t_frac),
            area_name: outline.name.clone(),
            kind: outline.kind,
            ra: outline.ra(),
            dec: outline.dec(),
            colour: colour.to_string(),
            line_width: LINE_WIDTH,
            fill: "toself".to_string(),
            mode: "lines".to_string(),
            show_legend: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_title: String,
    pub y_title: String,
    /// R.A. grows to the left, as on the sky.
    pub x_reversed: bool,
    pub y_range: [f64; 2],
}

impl PlotLayout {
    pub fn from_settings(settings: &PlotSettings) -> Self {
        Self {
            title: PLOT_TITLE.to_string(),
            width: settings.width,
            height: settings.height,
            x_title: "R.A.".to_string(),
            y_title: "Declination".to_string(),
            x_reversed: true,
            y_range: [settings.dec_min, settings.dec_max],
        }
    }
}

/// Everything the front-end needs to draw the preference map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyPlot {
    pub layout: PlotLayout,
    pub heatmap: Option<HeatmapLayer>,
    pub traces: Vec<AreaTrace>,
    pub skipped: Vec<SkippedArea>,
}

/// Build the plot description for a document.
///
/// Traces follow the order of the areas in the document; colours advance
/// only for areas that were drawn.
pub fn build_sky_plot(
    document: &Year1Document,
    exposure: Option<&ExposureGrid>,
    settings: &PlotSettings,
) -> SkyPlot {
    let report = convert_areas(document.year1_areas());

    let mut colours = ColourCycle::tealgrn();
    let traces: Vec<AreaTrace> = report
        .outlines
        .iter()
        .map(|outline| AreaTrace::from_outline(outline, colours.next_colour()))
        .collect();

    info!(
        "Sky plot built with {} traces{}",
        traces.len(),
        if exposure.is_some() {
            " over the exposure map"
        } else {
            ""
        }
    );

    SkyPlot {
        layout: PlotLayout::from_settings(settings),
        heatmap: exposure.map(ExposureGrid::to_layer),
        traces,
        skipped: report.skipped,
    }
}
