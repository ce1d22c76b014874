//! Exposure-time heatmap drawn behind the preference areas.
//!
//! The grid holds total exposure minutes per sky pixel, rows running over
//! latitude bins from -90° to +90° and columns over longitude bins from 0° to
//! 360°. Colours are mapped in log space.

use serde::Serialize;

/// Lower end of the colour scale, in minutes.
pub const EXPOSURE_ZMIN: f64 = 10.0;

/// Number of labelled ticks on the colour bar.
pub const COLOUR_BAR_TICKS: usize = 6;

const COLOUR_BAR_TITLE: &str = "Total Exposure Time<br>in pixel (minutes)";
const HOVER_TEMPLATE: &str = "<i>4MOST VP Exposure Time</i><br><b>RA</b>: %{x}<br><b>Decl.</b>: %{y}<br><b>Total t_exp (min)</b>: %{text:.1f}";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Exposure grid is empty")]
    Empty,

    #[error("Exposure grid row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// `count` evenly spaced values from `start` to `stop`, both included.
///
/// # Examples
///
/// ```
/// use lts_year1::services::exposure_map::linspace;
///
/// assert_eq!(linspace(0.0, 360.0, 5), vec![0.0, 90.0, 180.0, 270.0, 360.0]);
/// assert_eq!(linspace(-90.0, 90.0, 1), vec![-90.0]);
/// ```
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Exposure minutes per (latitude, longitude) pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureGrid {
    values: Vec<Vec<f64>>,
    cols: usize,
}

impl ExposureGrid {
    pub fn new(values: Vec<Vec<f64>>) -> Result<Self, GridError> {
        let cols = values.first().map(Vec::len).ok_or(GridError::Empty)?;
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = values
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged {
                row,
                found,
                expected: cols,
            });
        }
        Ok(Self { values, cols })
    }

    pub fn rows(&self) -> usize {
        self.values.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Longitude of each column, in degrees.
    pub fn longitudes(&self) -> Vec<f64> {
        linspace(0.0, 360.0, self.cols)
    }

    /// Latitude of each row, in degrees.
    pub fn latitudes(&self) -> Vec<f64> {
        linspace(-90.0, 90.0, self.rows())
    }

    /// Largest exposure, ignoring NaN pixels.
    pub fn max_exposure(&self) -> Option<f64> {
        self.values
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |max, v| Some(max.map_or(v, |m: f64| m.max(v))))
    }

    /// Base-10 logarithm of every pixel; pixels without a finite logarithm are gaps.
    pub fn log_values(&self) -> Vec<Vec<Option<f64>>> {
        self.values
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v > 0.0 && v.is_finite() { Some(v.log10()) } else { None })
                    .collect()
            })
            .collect()
    }

    /// Colour bar from [`EXPOSURE_ZMIN`] to the largest exposure.
    ///
    /// `None` when the grid holds nothing above the lower end of the scale.
    pub fn colour_bar(&self, ticks: usize) -> Option<ColourBar> {
        let zmax = self.max_exposure()?;
        if !(zmax.is_finite() && zmax > EXPOSURE_ZMIN) {
            return None;
        }

        let zmin_log = EXPOSURE_ZMIN.log10();
        let zmax_log = zmax.log10();
        let tick_values = linspace(zmin_log, zmax_log, ticks);
        let tick_text = tick_values
            .iter()
            .map(|v| 10f64.powf(*v).round_ties_even())
            .collect();

        Some(ColourBar {
            title: COLOUR_BAR_TITLE.to_string(),
            zmin_log,
            zmax_log,
            tick_values,
            tick_text,
        })
    }

    /// Heatmap layer ready for serialization.
    pub fn to_layer(&self) -> HeatmapLayer {
        HeatmapLayer {
            longitude: self.longitudes(),
            latitude: self.latitudes(),
            z_log: self.log_values(),
            exposure: self
                .values
                .iter()
                .map(|row| row.iter().map(|&v| (!v.is_nan()).then_some(v)).collect())
                .collect(),
            colour_bar: self.colour_bar(COLOUR_BAR_TICKS),
            colour_scale: "Plasma".to_string(),
            hover_template: HOVER_TEMPLATE.to_string(),
        }
    }
}

/// Log-scaled colour bar with labels in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColourBar {
    pub title: String,
    pub zmin_log: f64,
    pub zmax_log: f64,
    pub tick_values: Vec<f64>,
    pub tick_text: Vec<f64>,
}

/// Heatmap backdrop of the sky plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayer {
    pub longitude: Vec<f64>,
    pub latitude: Vec<f64>,
    pub z_log: Vec<Vec<Option<f64>>>,
    /// Raw minutes, shown on hover.
    pub exposure: Vec<Vec<Option<f64>>>,
    pub colour_bar: Option<ColourBar>,
    pub colour_scale: String,
    pub hover_template: String,
}
