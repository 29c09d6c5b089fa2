use dioxus::prelude::*;

/// Labelled text input with an optional hint and inline error.
///
/// `label` renders a `<label for=id>` above the field, `hint` a muted line
/// under it. A non-empty `error` replaces the hint and marks the field
/// `aria-invalid`.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] hint: String,
    #[props(default)] error: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if invalid {
                p { class: "input-error", role: "alert", "{error}" }
            } else if !hint.is_empty() {
                p { class: "input-hint", "{hint}" }
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
    fn label_points_at_input() {
        fn app() -> Element {
            rsx! { Input { id: "email", label: "Email", input_type: "email" } }
        }
        let html = render(app);
        assert!(html.contains(r#"for="email""#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"type="email""#));
    }

    #[test]
    fn error_replaces_hint() {
        fn app() -> Element {
            rsx! {
                Input {
                    id: "subject",
                    hint: "Enter a descriptive title for this review.",
                    error: "Subject must be at least 2 characters.",
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Subject must be at least 2 characters."));
        assert!(!html.contains("Enter a descriptive title"));
        assert!(html.contains(r#"aria-invalid="true""#));
    }
}
