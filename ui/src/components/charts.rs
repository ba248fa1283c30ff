//! Hand-drawn SVG charts.

use std::f64::consts::PI;

use dioxus::prelude::*;
use shared::result::ChartPoint;

const RADIUS: f64 = 45.0;

/// `stroke-dasharray` for a ring filled to `percentage`.
pub fn ring_dash(percentage: f64) -> (f64, f64) {
    let circumference = 2.0 * PI * RADIUS;
    let filled = circumference * percentage.clamp(0.0, 100.0) / 100.0;
    (filled, circumference - filled)
}

/// Ring colour by score band.
pub fn score_color(percentage: f64) -> &'static str {
    if percentage >= 80.0 {
        "#00fff7"
    } else if percentage >= 60.0 {
        "#ff00ea"
    } else {
        "#7f00ff"
    }
}

/// Percentage of `part` in `whole`, 0 when `whole` is not positive.
pub fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part * 100.0 / whole
    } else {
        0.0
    }
}

#[component]
pub fn ScoreRing(percentage: f64, #[props(into)] caption: String) -> Element {
    let (filled, rest) = ring_dash(percentage);
    let offset = 2.0 * PI * RADIUS * 0.25;
    let color = score_color(percentage);
    let label = shared::result::format_score(percentage);

    rsx! {
      svg { class: "w-40 h-40", view_box: "0 0 100 100",
        circle {
          cx: "50",
          cy: "50",
          r: "{RADIUS}",
          fill: "none",
          stroke: "#1a0066",
          stroke_width: "10",
        }
        circle {
          cx: "50",
          cy: "50",
          r: "{RADIUS}",
          fill: "none",
          stroke: "{color}",
          stroke_width: "10",
          stroke_dasharray: "{filled:.2} {rest:.2}",
          stroke_dashoffset: "{offset:.2}",
          stroke_linecap: "round",
        }
        text {
          x: "50",
          y: "48",
          text_anchor: "middle",
          dominant_baseline: "middle",
          font_size: "16",
          font_weight: "bold",
          fill: "#e0e0ff",
          "{label}%"
        }
        text {
          x: "50",
          y: "64",
          text_anchor: "middle",
          font_size: "7",
          fill: "#e0e0ff",
          "{caption}"
        }
      }
    }
}

/// Two-slice split, e.g. obtained versus remaining marks.
#[component]
pub fn SplitDonut(
    first: f64,
    second: f64,
    #[props(into)] first_label: String,
    #[props(into)] second_label: String,
) -> Element {
    let (filled, rest) = ring_dash(share(first, first + second));

    rsx! {
      div { class: "flex flex-col items-center gap-4",
        svg { class: "w-48 h-48 -rotate-90", view_box: "0 0 100 100",
          circle {
            cx: "50",
            cy: "50",
            r: "{RADIUS}",
            fill: "none",
            stroke: "#ff00ea",
            stroke_width: "12",
          }
          circle {
            cx: "50",
            cy: "50",
            r: "{RADIUS}",
            fill: "none",
            stroke: "#00fff7",
            stroke_width: "12",
            stroke_dasharray: "{filled:.2} {rest:.2}",
          }
        }
        div { class: "flex gap-6 text-sm text-exam-text",
          span { class: "flex items-center gap-2",
            span { class: "w-3 h-3 rounded-full bg-exam-cyan" }
            "{first_label}"
          }
          span { class: "flex items-center gap-2",
            span { class: "w-3 h-3 rounded-full bg-exam-pink" }
            "{second_label}"
          }
        }
      }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars for percentages on a `width` x `height` plot, left to right.
pub fn layout_bars(values: &[f64], width: f64, height: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = width / values.len() as f64;
    let bar_width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let h = height * value.clamp(0.0, 100.0) / 100.0;
            Bar {
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

/// Percentage per exam, oldest first.
#[component]
pub fn ExamBars(points: Vec<ChartPoint>) -> Element {
    const W: f64 = 320.0;
    const H: f64 = 140.0;

    if points.is_empty() {
        return rsx! {
          p { class: "text-exam-text/60 italic text-center py-8", "No exams taken yet." }
        };
    }

    let values: Vec<f64> = points.iter().map(|p| p.percentage).collect();
    let bars = layout_bars(&values, W, H);
    let view_box = format!("0 -10 {W} {}", H + 40.0);
    let label_y = format!("{:.1}", H + 14.0);

    rsx! {
      svg { class: "w-full h-56", view_box: "{view_box}",
        line {
          x1: "0",
          y1: "{H}",
          x2: "{W}",
          y2: "{H}",
          stroke: "#7f00ff",
          stroke_width: "1",
        }
        for (i , (bar , point)) in bars.into_iter().zip(points.iter()).enumerate() {
          {
              let center = format!("{:.1}", bar.x + bar.width / 2.0);
              let value_y = format!("{:.1}", bar.y - 3.0);
              let value = shared::result::format_score(point.percentage);
              rsx! {
                g { key: "{i}",
                  rect {
                    x: "{bar.x:.1}",
                    y: "{bar.y:.1}",
                    width: "{bar.width:.1}",
                    height: "{bar.height:.1}",
                    rx: "3",
                    fill: score_color(point.percentage),
                  }
                  text {
                    x: "{center}",
                    y: "{value_y}",
                    text_anchor: "middle",
                    font_size: "8",
                    fill: "#e0e0ff",
                    "{value}%"
                  }
                  text {
                    x: "{center}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    font_size: "7",
                    fill: "#e0e0ff",
                    {short_label(&point.name)}
                  }
                }
              }
          }
        }
      }
    }
}

fn short_label(name: &str) -> String {
    let mut chars = name.chars();
    let head: String = chars.by_ref().take(10).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_dash_is_clamped() {
        let circumference = 2.0 * PI * RADIUS;
        assert_eq!(ring_dash(0.0), (0.0, circumference));
        assert_eq!(ring_dash(150.0).0, circumference);
        let (filled, rest) = ring_dash(25.0);
        assert!((filled - circumference / 4.0).abs() < 1e-9);
        assert!((filled + rest - circumference).abs() < 1e-9);
    }

    #[test]
    fn bars_fill_their_slots_from_the_baseline() {
        let bars = layout_bars(&[100.0, 50.0], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].y, 0.0);
        assert_eq!(bars[1].height, 50.0);
        assert_eq!(bars[1].y, 50.0);
        assert!(bars[1].x > bars[0].x + bars[0].width);
    }

    #[test]
    fn share_of_empty_whole_is_zero() {
        assert_eq!(share(3.0, 0.0), 0.0);
        assert_eq!(share(1.0, 4.0), 25.0);
    }

    #[test]
    fn long_labels_are_shortened() {
        assert_eq!(short_label("Midterm"), "Midterm");
        assert_eq!(short_label("Generated Exam 12"), "Generated …");
    }
}
