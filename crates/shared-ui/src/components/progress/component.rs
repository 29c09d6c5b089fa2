use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Clamp a percentage into `0.0..=100.0`; NaN reads as zero.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Progress bar with an optional label row (`label` left, `detail` right).
#[component]
pub fn ProgressBar(
    value: f64,
    #[props(default)] label: String,
    #[props(default)] detail: String,
) -> Element {
    let value = clamp_percent(value);
    let show_header = !label.is_empty() || !detail.is_empty();

    rsx! {
        div { class: "progress-bar",
            if show_header {
                div { class: "progress-bar-header",
                    span { class: "progress-bar-label", "{label}" }
                    span { class: "progress-bar-detail", "{detail}" }
                }
            }
            Progress { value: Some(value),
                ProgressIndicator { style: "width: {value}%" }
            }
        }
    }
}
