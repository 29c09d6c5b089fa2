use dioxus::prelude::*;
use shared_types::{
    AdminSettings, AppError, ReviewFrequency, Role, ALL_ROLES, CRITERIA, REVIEW_FREQUENCIES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, FormSelect, Input, SwitchField, TabContent, TabList, TabTrigger, Tabs,
    Textarea, ToastOptions,
};
use std::collections::HashMap;

/// Parses a whole number of days, keeping the previous value on bad input.
fn parse_days(input: &str, previous: u32) -> u32 {
    input.trim().parse().unwrap_or(previous)
}

#[component]
pub fn AdminTab(role: Role) -> Element {
    let toast = use_toast();
    let mut settings = use_signal(AdminSettings::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let save = move |_: MouseEvent| async move {
        saving.set(true);
        field_errors.set(HashMap::new());
        match server::api::save_admin_settings(role, settings()).await {
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
    let save_label = if saving() { "Saving..." } else { "Save Settings" };

    rsx! {
        Tabs { default_value: "general", horizontal: true,
            TabList {
                TabTrigger { value: "general", index: 0usize, "General" }
                TabTrigger { value: "reviews", index: 1usize, "Review Process" }
                TabTrigger { value: "permissions", index: 2usize, "Permissions" }
            }

            TabContent { value: "general", index: 0usize,
                Card {
                    CardHeader {
                        CardTitle { "Company Information" }
                    }
                    CardContent { class: "settings-form",
                        Input {
                            id: "company_name",
                            label: "Company Name",
                            value: settings.read().company_name.clone(),
                            error: error_for("company_name"),
                            on_input: move |e: FormEvent| settings.write().company_name = e.value(),
                        }
                        Input {
                            id: "company_domain",
                            label: "Company Domain",
                            value: settings.read().company_domain.clone(),
                            error: error_for("company_domain"),
                            on_input: move |e: FormEvent| settings.write().company_domain = e.value(),
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "System Settings" }
                        CardDescription { "Configure global system settings." }
                    }
                    CardContent { class: "settings-form",
                        SwitchField {
                            id: "maintenance_mode",
                            label: "Maintenance Mode",
                            description: "Only admins can sign in while this is on.",
                            checked: settings.read().maintenance_mode,
                            on_change: move |on: bool| settings.write().maintenance_mode = on,
                        }
                        SwitchField {
                            id: "debug_mode",
                            label: "Debug Mode",
                            description: "Log extra detail for troubleshooting.",
                            checked: settings.read().debug_mode,
                            on_change: move |on: bool| settings.write().debug_mode = on,
                        }
                        Input {
                            id: "system_email",
                            label: "System Email",
                            input_type: "email",
                            value: settings.read().system_email.clone(),
                            error: error_for("system_email"),
                            on_input: move |e: FormEvent| settings.write().system_email = e.value(),
                        }
                    }
                }
            }

            TabContent { value: "reviews", index: 1usize,
                Card {
                    CardHeader {
                        CardTitle { "Review Cycle Settings" }
                    }
                    CardContent { class: "settings-form",
                        FormSelect {
                            id: "review_frequency",
                            label: "Review Frequency",
                            value: "{settings.read().review_frequency.value()}",
                            onchange: move |e: FormEvent| {
                                if let Some(frequency) = ReviewFrequency::from_value(&e.value()) {
                                    settings.write().review_frequency = frequency;
                                }
                            },
                            for frequency in REVIEW_FREQUENCIES {
                                option { key: "{frequency.value()}", value: "{frequency.value()}", "{frequency.label()}" }
                            }
                        }
                        Input {
                            id: "review_window_days",
                            label: "Review Window (Days)",
                            input_type: "number",
                            value: settings.read().review_window_days.to_string(),
                            error: error_for("review_window_days"),
                            on_input: move |e: FormEvent| {
                                let days = parse_days(&e.value(), settings.read().review_window_days);
                                settings.write().review_window_days = days;
                            },
                        }
                        SwitchField {
                            id: "enable_peer_reviews",
                            label: "Enable Peer Reviews",
                            checked: settings.read().enable_peer_reviews,
                            on_change: move |on: bool| settings.write().enable_peer_reviews = on,
                        }
                        SwitchField {
                            id: "enable_self_assessments",
                            label: "Enable Self Assessments",
                            checked: settings.read().enable_self_assessments,
                            on_change: move |on: bool| settings.write().enable_self_assessments = on,
                        }
                        Input {
                            id: "reminder_days",
                            label: "Reminder Days",
                            input_type: "number",
                            hint: "Days before the due date to send a reminder",
                            value: settings.read().reminder_days.to_string(),
                            error: error_for("reminder_days"),
                            on_input: move |e: FormEvent| {
                                let days = parse_days(&e.value(), settings.read().reminder_days);
                                settings.write().reminder_days = days;
                            },
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Review Templates" }
                    }
                    CardContent { class: "settings-form",
                        Input {
                            id: "template_name",
                            label: "Template Name",
                            value: settings.read().template_name.clone(),
                            on_input: move |e: FormEvent| settings.write().template_name = e.value(),
                        }
                        Textarea {
                            id: "template_description",
                            label: "Description",
                            rows: 3,
                            value: settings.read().template_description.clone(),
                            on_input: move |e: FormEvent| settings.write().template_description = e.value(),
                        }
                        div { class: "settings-criteria",
                            span { class: "settings-criteria-label", "Criteria Categories" }
                            for criterion in CRITERIA {
                                Badge { key: "{criterion.key()}", variant: BadgeVariant::Outline, "{criterion.label()}" }
                            }
                        }
                    }
                }
            }

            TabContent { value: "permissions", index: 2usize,
                Card {
                    CardHeader {
                        CardTitle { "Role Permissions" }
                        CardDescription { "What each role is allowed to do." }
                    }
                    CardContent { class: "settings-form",
                        for group_role in ALL_ROLES {
                            div { key: "{group_role.as_str()}", class: "settings-permission-group",
                                h4 { "{group_role.label()}" }
                                for (index, permission) in settings.read().permissions_for(group_role) {
                                    SwitchField {
                                        key: "{permission.key}",
                                        id: "perm-{permission.key}",
                                        label: "{permission.label}",
                                        checked: permission.enabled,
                                        on_change: move |on: bool| {
                                            if let Some(p) = settings.write().permissions.get_mut(index) {
                                                p.enabled = on;
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        div { class: "settings-actions",
            Button { disabled: saving(), onclick: save, "{save_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_day_input_keeps_previous_value() {
        assert_eq!(parse_days("21", 14), 21);
        assert_eq!(parse_days(" 7 ", 14), 7);
        assert_eq!(parse_days("", 14), 14);
        assert_eq!(parse_days("two", 3), 3);
    }
}
