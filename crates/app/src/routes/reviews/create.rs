use crate::routes::Route;
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{
    AppError, ReviewDraft, ReviewStep, ReviewType, Role, CRITERIA, REVIEW_STEPS, REVIEW_TYPES,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, FormSelect, Input, PageDescription, PageHeader, PageTitle, RatingScale,
    SwitchField, Textarea, ToastOptions,
};
use std::collections::HashMap;

/// Fields that live on the Details step.
const DETAIL_FIELDS: [&str; 3] = ["review_type", "subject", "employee_id"];

/// Step to show after a failed submit: Details when any of its fields is
/// flagged, otherwise stay put.
fn step_for_errors(current: ReviewStep, errors: &HashMap<String, String>) -> ReviewStep {
    if DETAIL_FIELDS.iter().any(|f| errors.contains_key(*f)) {
        ReviewStep::Details
    } else {
        current
    }
}

/// Four-step wizard for a new review.
#[component]
pub fn ReviewCreatePage(role: Role) -> Element {
    let toast = use_toast();
    let mut draft = use_signal(|| ReviewDraft::new(Local::now().date_naive()));
    let mut step = use_signal(ReviewStep::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);

    let employees = use_resource(use_reactive!(|role| async move {
        server::api::list_employees(role).await.unwrap_or_default()
    }));

    let handle_submit = move |_: MouseEvent| async move {
        let current = draft();
        if let Err(err) = current.check() {
            step.set(step_for_errors(step(), &err.field_errors));
            field_errors.set(err.field_errors);
            toast.error(err.message, ToastOptions::new());
            return;
        }

        submitting.set(true);
        field_errors.set(HashMap::new());
        match server::api::submit_review(role, current).await {
            Ok(review) => {
                toast.success(
                    format!("Review submitted successfully! \"{}\" is now pending.", review.subject),
                    ToastOptions::new(),
                );
                navigator().push(Route::Reviews { employee: None });
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if !fe.is_empty() {
                    step.set(step_for_errors(step(), &fe));
                    field_errors.set(fe);
                }
                toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
            }
        }
        submitting.set(false);
    };

    let error_for = move |field: &str| field_errors().get(field).cloned().unwrap_or_default();
    let current_step = step();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reviews.css") }

        div { class: "review-create-page",
            PageHeader {
                PageTitle { "Create Review" }
                PageDescription { "Set up a new performance review." }
            }

            ol { class: "wizard-steps",
                for (i, s) in REVIEW_STEPS.iter().enumerate() {
                    li {
                        key: "{s.label()}",
                        class: "wizard-step",
                        "data-active": if *s == current_step { "true" } else { "false" },
                        span { class: "wizard-step-number", "{i + 1}" }
                        span { "{s.label()}" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "{current_step.label()}" }
                    CardDescription { "Step {step_number(current_step)} of {REVIEW_STEPS.len()}" }
                }

                CardContent { class: "wizard-body",
                    match current_step {
                        ReviewStep::Details => rsx! {
                            FormSelect {
                                id: "review_type",
                                label: "Review Type",
                                value: "{draft.read().review_type.value()}",
                                onchange: move |e: FormEvent| {
                                    if let Some(kind) = ReviewType::from_value(&e.value()) {
                                        draft.write().review_type = kind;
                                    }
                                },
                                for kind in REVIEW_TYPES {
                                    option { key: "{kind.value()}", value: "{kind.value()}", "{kind.label()}" }
                                }
                            }
                            Input {
                                id: "subject",
                                label: "Subject",
                                placeholder: "Q1 Performance Review",
                                value: draft.read().subject.clone(),
                                error: error_for("subject"),
                                on_input: move |e: FormEvent| draft.write().subject = e.value(),
                            }
                            if draft.read().needs_employee() {
                                FormSelect {
                                    id: "employee_id",
                                    label: "Employee",
                                    hint: error_for("employee_id"),
                                    value: draft.read().employee_id.clone().unwrap_or_default(),
                                    onchange: move |e: FormEvent| {
                                        let id = e.value();
                                        draft.write().employee_id = (!id.is_empty()).then_some(id);
                                    },
                                    option { value: "", "Select employee" }
                                    for person in employees.read().clone().unwrap_or_default() {
                                        option { key: "{person.id}", value: "{person.id}", "{person.name}" }
                                    }
                                }
                            }
                            Input {
                                id: "due_date",
                                label: "Due Date",
                                input_type: "date",
                                value: draft.read().due_date.to_string(),
                                on_input: move |e: FormEvent| {
                                    if let Ok(date) = NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                        draft.write().due_date = date;
                                    }
                                },
                            }
                            Textarea {
                                id: "description",
                                label: "Description",
                                placeholder: "Provide additional context for this review...",
                                value: draft.read().description.clone(),
                                on_input: move |e: FormEvent| draft.write().description = e.value(),
                            }
                        },
                        ReviewStep::Criteria => rsx! {
                            for criterion in CRITERIA {
                                RatingScale {
                                    key: "{criterion.key()}",
                                    name: "{criterion.key()}",
                                    label: "{criterion.label()}",
                                    description: "{criterion.description()}",
                                    value: draft.read().ratings.get(criterion),
                                    on_change: move |rating: u8| draft.write().ratings.set(criterion, rating),
                                }
                            }
                        },
                        ReviewStep::Comments => rsx! {
                            Textarea {
                                id: "strengths",
                                label: "Key Strengths",
                                placeholder: "Describe the key strengths demonstrated...",
                                value: draft.read().strengths.clone(),
                                on_input: move |e: FormEvent| draft.write().strengths = e.value(),
                            }
                            Textarea {
                                id: "improvements",
                                label: "Areas for Improvement",
                                placeholder: "Identify areas where improvement is needed...",
                                value: draft.read().improvements.clone(),
                                on_input: move |e: FormEvent| draft.write().improvements = e.value(),
                            }
                            Textarea {
                                id: "additional_comments",
                                label: "Additional Comments",
                                placeholder: "Any other feedback or observations...",
                                value: draft.read().additional_comments.clone(),
                                on_input: move |e: FormEvent| draft.write().additional_comments = e.value(),
                            }
                        },
                        ReviewStep::Notifications => rsx! {
                            SwitchField {
                                id: "send_email",
                                label: "Send Email Notification",
                                description: "Notify the reviewee by email when the review is created.",
                                checked: draft.read().send_email,
                                on_change: move |on: bool| draft.write().send_email = on,
                            }
                            SwitchField {
                                id: "send_reminders",
                                label: "Send Reminder Notifications",
                                description: "Send reminders as the due date approaches.",
                                checked: draft.read().send_reminders,
                                on_change: move |on: bool| draft.write().send_reminders = on,
                            }
                        },
                    }
                }

                CardFooter { class: "wizard-footer",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: current_step.is_first(),
                        onclick: move |_| {
                            if let Some(prev) = step().previous() {
                                step.set(prev);
                            }
                        },
                        "Previous"
                    }
                    if let Some(next) = current_step.next() {
                        Button { onclick: move |_| step.set(next), "Next" }
                    } else {
                        Button {
                            disabled: submitting(),
                            onclick: handle_submit,
                            if submitting() { "Submitting..." } else { "Submit Review" }
                        }
                    }
                }
            }
        }
    }
}

fn step_number(step: ReviewStep) -> usize {
    REVIEW_STEPS.iter().position(|s| *s == step).map_or(1, |i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_errors_send_the_wizard_back() {
        let errors = HashMap::from([("subject".to_string(), "too short".to_string())]);
        assert_eq!(step_for_errors(ReviewStep::Notifications, &errors), ReviewStep::Details);
    }

    #[test]
    fn other_errors_keep_the_current_step() {
        let errors = HashMap::from([("technical_skills".to_string(), "out of range".to_string())]);
        assert_eq!(step_for_errors(ReviewStep::Criteria, &errors), ReviewStep::Criteria);
        assert_eq!(step_for_errors(ReviewStep::Comments, &HashMap::new()), ReviewStep::Comments);
    }

    #[test]
    fn steps_are_numbered_from_one() {
        assert_eq!(step_number(ReviewStep::Details), 1);
        assert_eq!(step_number(ReviewStep::Notifications), 4);
    }
}
