//! Conversions from internal results into API DTOs.

use crate::api::types as api;
use crate::core::domain::PolygonOutline;
use crate::geometry::{ConversionReport, SkippedArea};
use crate::io::LoadOutcome;

impl From<&PolygonOutline> for api::SkyOutline {
    fn from(outline: &PolygonOutline) -> Self {
        api::SkyOutline {
            name: outline.name.clone(),
            kind: outline.kind.as_str().to_string(),
            t_frac: outline.t_frac,
            ra: outline.ra(),
            dec: outline.dec(),
        }
    }
}

impl From<&SkippedArea> for api::SkippedAreaInfo {
    fn from(skipped: &SkippedArea) -> Self {
        api::SkippedAreaInfo {
            index: skipped.index,
            name: skipped.name.clone(),
            reason: skipped.reason.clone(),
        }
    }
}

impl api::AreaOutlines {
    pub fn from_report(report: &ConversionReport, outcome: &LoadOutcome) -> Self {
        api::AreaOutlines {
            outlines: report.outlines.iter().map(Into::into).collect(),
            skipped: report.skipped.iter().map(Into::into).collect(),
            used_fallback: outcome.used_fallback(),
            rejected: outcome.rejected.clone(),
        }
    }
}
