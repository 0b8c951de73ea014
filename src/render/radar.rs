//! Radar-chart series construction for the skills section.
//!
//! Each skill category becomes one polar chart. The transform closes the
//! polygon (last point duplicates the first, so the "toself" fill path
//! returns to its start) and wraps long axis labels onto multiple lines.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{SkillCategory, MAX_SCORE};

/// A closed radar-chart series for one skill category.
///
/// The label and value sequences carry N+1 points for N skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarSeries {
    /// Chart title (the category name).
    pub title: String,
    /// Wrapped axis labels, closed.
    pub labels: Vec<String>,
    /// Scores, closed.
    pub values: Vec<u32>,
}

/// Builds the closed, wrapped series for one category.
///
/// A one-skill category closes trivially with a duplicate point. Categories
/// are validated non-empty at load time; an empty one still produces an
/// empty (un-closed) series rather than panicking.
#[must_use]
pub fn build_series(category: &SkillCategory) -> RadarSeries {
    let mut labels: Vec<String> = category
        .skills
        .iter()
        .map(|skill| wrap_label(&skill.name))
        .collect();
    let mut values: Vec<u32> = category.skills.iter().map(|skill| skill.score).collect();

    if let (Some(first_label), Some(first_value)) =
        (labels.first().cloned(), values.first().copied())
    {
        labels.push(first_label);
        values.push(first_value);
    }

    RadarSeries {
        title: category.name.clone(),
        labels,
        values,
    }
}

/// Wraps a skill label for the cramped angular axis.
///
/// `" & "` and `" and "` always become line breaks. If the label has more
/// than two words or contains a hyphen, every hyphen and remaining space is
/// additionally broken. Both tests look at the original label, and the
/// ampersand/"and" substitution runs first; changing either detail changes
/// the output for every multi-word label. No other separator (`/` included)
/// is touched.
#[must_use]
pub fn wrap_label(label: &str) -> String {
    let broken = label.replace(" & ", "<br>").replace(" and ", "<br>");
    if label.split_whitespace().count() > 2 || label.contains('-') {
        broken.replace('-', "<br>").replace(' ', "<br>")
    } else {
        broken
    }
}

/// Produces the complete Plotly figure (trace, layout, config) for a series.
///
/// Fixed presentation: radial axis spans `[0, MAX_SCORE]` with gridlines and
/// ticks hidden, the angular axis starts at 90° and runs clockwise, and the
/// legend and mode bar are disabled.
#[must_use]
pub fn plotly_figure(series: &RadarSeries) -> Value {
    json!({
        "data": [{
            "type": "scatterpolar",
            "r": series.values,
            "theta": series.labels,
            "fill": "toself",
            "fillcolor": "rgba(255, 0, 0, 0.3)",
            "line": {"color": "red"},
            "name": series.title,
            "hoverinfo": "none",
            "connectgaps": true
        }],
        "layout": {
            "polar": {
                "radialaxis": {
                    "visible": false,
                    "range": [0, MAX_SCORE],
                    "showline": false,
                    "showgrid": false
                },
                "angularaxis": {
                    "tickfont": {"size": 9, "color": "#000"},
                    "rotation": 90,
                    "direction": "clockwise",
                    "gridcolor": "rgba(0,0,0,0)",
                    "linecolor": "rgba(0,0,0,0)",
                    "layer": "below traces"
                },
                "bgcolor": "rgba(0,0,0,0)",
                "domain": {"x": [0.1, 0.9], "y": [0.15, 0.85]}
            },
            "showlegend": false,
            "height": 180,
            "margin": {"l": 10, "r": 10, "t": 25, "b": 10},
            "title": {
                "text": series.title,
                "font": {"size": 12, "color": "#000"},
                "y": 0.98,
                "x": 0,
                "xanchor": "left"
            },
            "paper_bgcolor": "rgba(0,0,0,0)"
        },
        "config": {"displayModeBar": false}
    })
}
