//! Services turning parsed documents into what the front-end displays.
//!
//! `sky_plot` assembles the preference map from the converted outlines,
//! `exposure_map` the heatmap drawn beneath them.

pub mod exposure_map;
pub mod sky_plot;

pub use exposure_map::{ExposureGrid, GridError, HeatmapLayer};
pub use sky_plot::{build_sky_plot, AreaTrace, ColourCycle, PlotLayout, SkyPlot};
