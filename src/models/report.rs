// src/models/report.rs

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{dimension::Dimension, question::QuestionBank};

/// Everything the results screen needs: a row per dimension plus the
/// radar-chart payload. Charting itself is the client's job; the server
/// only supplies axes and values.
#[derive(Debug, Serialize)]
pub struct ResultsReport {
    /// One entry per dimension, in fixed display order.
    pub dimensions: Vec<DimensionScore>,
    pub chart: RadarChart,
}

#[derive(Debug, Serialize)]
pub struct DimensionScore {
    pub code: Dimension,
    pub name: &'static str,
    /// Raw weighted score accumulated from the answers.
    pub score: f64,
    /// Score normalized against the highest score this bank allows for the
    /// dimension, scaled to [0, 100].
    pub percent: f64,
    pub recommendation: &'static str,
}

/// Data for a radial chart with one axis per dimension.
#[derive(Debug, Serialize)]
pub struct RadarChart {
    pub axes: Vec<&'static str>,
    pub values: Vec<f64>,
    pub max: f64,
}

impl ResultsReport {
    pub fn build(bank: &QuestionBank, scores: &HashMap<Dimension, f64>) -> Self {
        let dimensions: Vec<DimensionScore> = Dimension::ALL
            .into_iter()
            .map(|code| {
                let score = scores.get(&code).copied().unwrap_or(0.0);
                DimensionScore {
                    code,
                    name: code.display_name(),
                    score,
                    percent: percent_of_max(score, bank.max_score(code)),
                    recommendation: code.recommendation(),
                }
            })
            .collect();

        let chart = RadarChart {
            axes: dimensions.iter().map(|d| d.name).collect(),
            values: dimensions.iter().map(|d| d.percent).collect(),
            max: 100.0,
        };

        Self { dimensions, chart }
    }
}

/// Scales a score to [0, 100] against the attainable maximum. A dimension
/// no question weights has max 0 and reports 0%.
fn percent_of_max(score: f64, max_score: f64) -> f64 {
    if max_score <= 0.0 {
        return 0.0;
    }
    (score / max_score) * 100.0
}
