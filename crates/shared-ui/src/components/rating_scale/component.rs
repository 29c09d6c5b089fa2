use dioxus::prelude::*;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// Row of radio buttons for a 1 to 5 rating.
///
/// `name` groups the radios, so each scale on a page needs its own. Nothing is
/// checked while `value` is `None`.
#[component]
pub fn RatingScale(
    name: String,
    value: Option<u8>,
    on_change: EventHandler<u8>,
    #[props(default)] label: String,
    #[props(default)] description: String,
    #[props(default = "Poor".to_string())] low_label: String,
    #[props(default = "Excellent".to_string())] high_label: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        fieldset { class: "rating-scale",
            if !label.is_empty() {
                legend { class: "rating-scale-label", "{label}" }
            }
            if !description.is_empty() {
                p { class: "rating-scale-description", "{description}" }
            }
            div { class: "rating-scale-options", role: "radiogroup",
                for score in RATING_MIN..=RATING_MAX {
                    label {
                        key: "{score}",
                        class: "rating-scale-option",
                        "data-checked": if value == Some(score) { "true" } else { "false" },
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{score}",
                            checked: value == Some(score),
                            onchange: move |_| on_change.call(score),
                        }
                        span { "{score}" }
                    }
                }
            }
            div { class: "rating-scale-ends",
                span { "{low_label}" }
                span { "{high_label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_five_options_with_one_checked() {
        fn app() -> Element {
            rsx! {
                RatingScale {
                    name: "communication",
                    value: Some(4),
                    on_change: move |_| {},
                    label: "Communication",
                }
            }
        }
        let html = render(app);
        assert_eq!(html.matches(r#"type="radio""#).count(), 5);
        assert_eq!(html.matches(r#"data-checked="true""#).count(), 1);
        assert!(html.contains("Communication"));
        assert!(html.contains("Excellent"));
    }

    #[test]
    fn nothing_checked_without_value() {
        fn app() -> Element {
            rsx! {
                RatingScale { name: "teamwork", value: None, on_change: move |_| {} }
            }
        }
        let html = render(app);
        assert!(!html.contains(r#"data-checked="true""#));
    }
}
