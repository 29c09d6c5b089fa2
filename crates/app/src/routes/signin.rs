use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{AppError, Role, SignInRequest, ALL_ROLES};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, ToastOptions,
};
use std::collections::HashMap;

/// The submit button stays disabled until both fields have text.
pub fn can_submit(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}

/// Sign-in form. The role comes from the email address; any password works.
#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let detected = Role::from_email(&email());

    let handle_sign_in = move |evt: FormEvent| async move {
        evt.prevent_default();
        if !can_submit(&email(), &password()) {
            return;
        }
        loading.set(true);
        field_errors.set(HashMap::new());

        let req = SignInRequest {
            email: email(),
            password: password(),
        };
        match server::api::sign_in(req).await {
            Ok(resp) => {
                session.set_role(resp.role);
                toast.success(
                    format!(
                        "Login successful! Welcome back! You are logged in as {}.",
                        resp.role.as_str()
                    ),
                    ToastOptions::new(),
                );
                navigator().push(Route::Dashboard {});
            }
            Err(e) => {
                let err_str = e.to_string();
                tracing::warn!(error = %err_str, "sign-in failed");
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

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "HR Performance Portal" }
                    CardDescription { "Your workplace management solution" }
                }

                CardContent {
                    form { onsubmit: handle_sign_in,
                        div { class: "auth-field",
                            Input {
                                id: "email",
                                label: "Email",
                                input_type: "email",
                                placeholder: "name@example.com",
                                value: email(),
                                error: field_errors().get("email").cloned().unwrap_or_default(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                id: "password",
                                label: "Password",
                                input_type: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                error: field_errors().get("password").cloned().unwrap_or_default(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }

                        if !email().trim().is_empty() {
                            p { class: "auth-role-hint", "Signing in as {detected.label()}" }
                        }

                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading() || !can_submit(&email(), &password()),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }

                    div { class: "auth-demo",
                        p { class: "auth-demo-title", "Demo accounts" }
                        div { class: "auth-demo-links",
                            for role in ALL_ROLES {
                                Button {
                                    key: "{role.as_str()}",
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| email.set(role.demo_email().to_string()),
                                    "{role.demo_email()}"
                                }
                            }
                        }
                        p { class: "auth-demo-note", "Any password will work for the demo" }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::SignUp {}, "Sign up" }
                    }
                }
            }
        }
    }
}
