use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{validate_sign_up, AppError, PasswordStrength, SignUpRequest};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Input, ProgressBar, ToastOptions,
};
use std::collections::HashMap;

/// Live strength meter with the requirement checklist.
#[component]
fn PasswordStrengthMeter(password: String) -> Element {
    let strength = PasswordStrength::of(&password);
    let label = strength.level.label();

    rsx! {
        div { class: "auth-strength", "data-level": "{label.to_lowercase()}",
            ProgressBar {
                value: f64::from(strength.score),
                label: "Password Strength:",
                detail: "{label}",
            }
            ul { class: "auth-checklist",
                for (text, passed) in strength.checks.items() {
                    li { key: "{text}", "data-passed": "{passed}",
                        if passed { "\u{2713} " } else { "\u{2717} " }
                        "{text}"
                    }
                }
            }
        }
    }
}

/// Account creation. Mismatched or weak passwords are rejected before the
/// request is sent.
#[component]
pub fn SignUp() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_sign_up = move |evt: FormEvent| async move {
        evt.prevent_default();
        field_errors.set(HashMap::new());

        if let Err(rejection) = validate_sign_up(&password(), &confirm()) {
            toast.error(
                format!("{} {}", rejection.title(), rejection.description()),
                ToastOptions::new(),
            );
            field_errors.set(HashMap::from([(
                rejection.field().to_string(),
                rejection.title().to_string(),
            )]));
            return;
        }

        loading.set(true);
        let req = SignUpRequest {
            name: name(),
            email: email(),
            password: password(),
            confirm_password: confirm(),
        };
        match server::api::sign_up(req).await {
            Ok(_) => {
                toast.success(
                    "Account created successfully! You can now log in with your credentials".to_string(),
                    ToastOptions::new(),
                );
                navigator().push(Route::SignIn {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    let error_for = move |field: &str| field_errors().get(field).cloned().unwrap_or_default();
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create an account" }
                    CardDescription { "Enter your details to get started" }
                }

                CardContent {
                    form { onsubmit: handle_sign_up,
                        div { class: "auth-field",
                            Input {
                                id: "name",
                                label: "Full Name",
                                placeholder: "John Doe",
                                required: true,
                                value: name(),
                                error: error_for("name"),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                id: "email",
                                label: "Email Address",
                                input_type: "email",
                                placeholder: "name@example.com",
                                required: true,
                                value: email(),
                                error: error_for("email"),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                id: "password",
                                label: "Password",
                                input_type: "{password_type}",
                                required: true,
                                value: password(),
                                error: error_for("password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Small,
                                onclick: move |_| show_password.toggle(),
                                if show_password() { "Hide password" } else { "Show password" }
                            }
                            if !password().is_empty() {
                                PasswordStrengthMeter { password: password() }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                id: "confirm_password",
                                label: "Confirm Password",
                                input_type: "{password_type}",
                                required: true,
                                value: confirm(),
                                error: error_for("confirm_password"),
                                on_input: move |e: FormEvent| confirm.set(e.value()),
                            }
                        }

                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::SignIn {}, "Sign in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_lists_every_requirement() {
        fn app() -> Element {
            rsx! { PasswordStrengthMeter { password: "abcdefgh" } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Fair"));
        assert!(html.contains("At least 8 characters"));
        assert!(html.contains("At least one special character"));
    }
}
