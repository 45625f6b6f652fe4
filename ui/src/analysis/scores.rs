use dioxus::prelude::*;

use crate::core::format::format_percent;
use crate::core::score::{score_color, RingGeometry, ScoreCard};
use crate::t;

/// Overall ring, per-axis rings and bars; a placeholder when there is no score yet.
#[component]
pub fn ScoreSummary(card: ScoreCard) -> Element {
    let ScoreCard::Scored(axes) = card else {
        return rsx! {
            p { class: "score-summary score-summary--empty", {t!("panel-score-none")} }
        };
    };

    let color = t!("panel-score-color");
    let lighting = t!("panel-score-lighting");
    let composition = t!("panel-score-composition");

    rsx! {
        div { class: "score-summary",
            div { class: "score-summary__overall",
                ScoreRing { value: axes.overall(), label: t!("panel-score-overall"), large: true }
            }
            div { class: "score-summary__axes",
                ScoreRing { value: axes.color, label: color.clone() }
                ScoreRing { value: axes.lighting, label: lighting.clone() }
                ScoreRing { value: axes.composition, label: composition.clone() }
            }
            div { class: "score-summary__bars",
                ScoreBar { value: axes.color, label: color }
                ScoreBar { value: axes.lighting, label: lighting }
                ScoreBar { value: axes.composition, label: composition }
            }
        }
    }
}

#[component]
pub fn ScoreRing(value: u32, label: String, #[props(default)] large: bool) -> Element {
    let geometry = RingGeometry::for_value(value);
    let stroke = score_color(value);
    let class = if large {
        "score-ring score-ring--large"
    } else {
        "score-ring"
    };

    rsx! {
        div { class: "{class}",
            div { class: "score-ring__dial",
                svg {
                    class: "score-ring__svg",
                    view_box: "0 0 100 100",
                    circle {
                        cx: "50",
                        cy: "50",
                        r: "{geometry.radius}",
                        stroke: "#e5e7eb",
                        stroke_width: "8",
                        fill: "transparent",
                    }
                    circle {
                        class: "score-ring__progress",
                        cx: "50",
                        cy: "50",
                        r: "{geometry.radius}",
                        stroke: "{stroke}",
                        stroke_width: "8",
                        fill: "transparent",
                        stroke_dasharray: "{geometry.circumference}",
                        stroke_dashoffset: "{geometry.dash_offset}",
                        stroke_linecap: "round",
                    }
                }
                span { class: "score-ring__value", "{format_percent(value)}" }
            }
            if !label.is_empty() && !large {
                span { class: "score-ring__label", "{label}" }
            }
        }
    }
}

#[component]
pub fn ScoreBar(value: u32, label: String) -> Element {
    let width = value.min(100);
    let fill = score_color(value);

    rsx! {
        div { class: "score-bar",
            span { class: "score-bar__label", "{label}" }
            div {
                class: "score-bar__track",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{width}",
                div {
                    class: "score-bar__fill",
                    style: "width: {width}%; background-color: {fill};",
                }
            }
            span { class: "score-bar__value", "{format_percent(value)}" }
        }
    }
}
