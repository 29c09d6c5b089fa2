use dioxus::prelude::*;
use shared_types::{
    AppError, NotificationFrequency, NotificationPreferences, NOTIFICATION_FREQUENCIES,
    NOTIFICATION_KINDS,
};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormSelect, SwitchField, ToastOptions,
};

#[component]
pub fn NotificationsTab() -> Element {
    let toast = use_toast();
    let mut prefs = use_signal(NotificationPreferences::default);
    let mut saving = use_signal(|| false);

    let save = move |_: MouseEvent| async move {
        saving.set(true);
        match server::api::save_notification_preferences(prefs()).await {
            Ok(resp) => toast.success(resp.message, ToastOptions::new()),
            Err(e) => toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new()),
        }
        saving.set(false);
    };

    let save_label = if saving() { "Saving..." } else { "Save Changes" };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Email Notifications" }
                CardDescription { "Choose which emails you receive." }
            }
            CardContent { class: "settings-form",
                for kind in NOTIFICATION_KINDS {
                    SwitchField {
                        key: "{kind.id()}",
                        id: "{kind.id()}",
                        label: "{kind.label()}",
                        description: "{kind.description()}",
                        checked: prefs.read().is_enabled(kind),
                        on_change: move |on: bool| prefs.write().set(kind, on),
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Notification Schedule" }
                CardDescription { "How often notification emails are sent." }
            }
            CardContent {
                FormSelect {
                    id: "frequency",
                    label: "Frequency",
                    value: "{prefs.read().frequency.value()}",
                    onchange: move |e: FormEvent| {
                        if let Some(frequency) = NotificationFrequency::from_value(&e.value()) {
                            prefs.write().frequency = frequency;
                        }
                    },
                    for frequency in NOTIFICATION_FREQUENCIES {
                        option { key: "{frequency.value()}", value: "{frequency.value()}", "{frequency.label()}" }
                    }
                }
            }
            CardFooter {
                Button { disabled: saving(), onclick: save, "{save_label}" }
            }
        }
    }
}
