use dioxus::prelude::*;
use shared_types::{AppError, ProfileSettings, Role};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    InitialsAvatar, Input, Textarea, ToastOptions,
};
use std::collections::HashMap;

#[component]
pub fn ProfileTab(role: Role) -> Element {
    let toast = use_toast();
    let mut profile = use_signal(move || ProfileSettings::for_role(role));
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        saving.set(true);
        field_errors.set(HashMap::new());
        match server::api::save_profile(profile()).await {
            Ok(resp) => toast.success(resp.message, ToastOptions::new()),
            Err(e) => {
                let err_str = e.to_string();
                field_errors.set(AppError::parse_field_errors(&err_str));
                toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
            }
        }
        saving.set(false);
    };

    let error_for = move |field: &str| field_errors().get(field).cloned().unwrap_or_default();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Profile" }
                CardDescription { "This is how others will see you on the portal." }
            }
            form { onsubmit: handle_save,
                CardContent { class: "settings-form",
                    div { class: "settings-identity",
                        InitialsAvatar { name: profile.read().name.clone() }
                        span { "{role.label()}" }
                    }
                    Input {
                        id: "profile_name",
                        label: "Name",
                        value: profile.read().name.clone(),
                        error: error_for("name"),
                        on_input: move |e: FormEvent| profile.write().name = e.value(),
                    }
                    Input {
                        id: "profile_email",
                        label: "Email",
                        input_type: "email",
                        value: profile.read().email.clone(),
                        error: error_for("email"),
                        on_input: move |e: FormEvent| profile.write().email = e.value(),
                    }
                    Input {
                        id: "profile_job_title",
                        label: "Job Title",
                        value: profile.read().job_title.clone(),
                        on_input: move |e: FormEvent| profile.write().job_title = e.value(),
                    }
                    Textarea {
                        id: "profile_bio",
                        label: "Bio",
                        placeholder: "Tell us a little about yourself",
                        value: profile.read().bio.clone(),
                        on_input: move |e: FormEvent| profile.write().bio = e.value(),
                    }
                }
                CardFooter {
                    Button {
                        button_type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
