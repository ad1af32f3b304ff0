// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text charts for the terminal surfaces.
//!
//! Every chart is drawn as horizontal bars scaled to the largest value of
//! its series. Sector distribution is shown as a share of the total.

use crate::dashboard::view::{ChartKind, ChartView, DataPoint};

const FULL: char = '█';
const EMPTY: char = '░';

/// A filled/empty bar of `width` cells for `fraction` in `0.0..=1.0`.
pub fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat(FULL).take(filled));
    out.extend(std::iter::repeat(EMPTY).take(width - filled));
    out
}

/// Skill level bar, `level` being a percentage.
pub fn level_bar(level: u8, width: usize) -> String {
    bar(f64::from(level) / 100.0, width)
}

pub fn chart_lines(chart: &ChartView, width: usize) -> Vec<String> {
    if chart.points.is_empty() {
        return vec!["-".to_string()];
    }
    let label_width = chart
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let bar_width = width.saturating_sub(label_width + 12).max(10);

    let total: f64 = chart.points.iter().map(|p| p.value).sum();
    let max = chart
        .points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);

    chart
        .points
        .iter()
        .map(|point| {
            let (fraction, value) = match chart.kind {
                ChartKind::SectorDistribution => {
                    let share = ratio(point.value, total);
                    (share, format!("{:.0}%", share * 100.0))
                }
                _ => (ratio(point.value, max), format_value(point)),
            };
            format!(
                "{:<lw$}  {}  {}",
                point.label,
                bar(fraction, bar_width),
                value,
                lw = label_width
            )
        })
        .collect()
}

fn ratio(value: f64, of: f64) -> f64 {
    if of > 0.0 {
        value / of
    } else {
        0.0
    }
}

fn format_value(point: &DataPoint) -> String {
    if point.value.fract() == 0.0 {
        format!("{:.0}", point.value)
    } else {
        format!("{:.1}", point.value)
    }
}
