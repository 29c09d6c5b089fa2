use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdFolder, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::ALL_ROLES;
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Comprehensive Reviews",
        description: "Support for peer reviews, manager evaluations and self-assessments in one platform.",
    },
    Feature {
        title: "Structured Feedback",
        description: "Standardized templates with rating scales and comment sections for meaningful insights.",
    },
    Feature {
        title: "Actionable Analytics",
        description: "Generate reports and identify trends to drive performance improvements.",
    },
];

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
        1 => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
        _ => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 24, height: 24 } },
    }
}

/// Public marketing page at `/`.
#[component]
pub fn Landing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            header { class: "landing-header",
                span { class: "landing-brand", "HR Portal" }
                nav { class: "landing-header-actions",
                    Link { to: Route::SignIn {},
                        Button { variant: ButtonVariant::Ghost, "Sign in" }
                    }
                    Link { to: Route::SignUp {},
                        Button { "Sign up" }
                    }
                }
            }

            section { class: "landing-hero",
                h1 { class: "landing-hero-title",
                    "Streamline Your "
                    span { class: "landing-hero-accent", "Performance Reviews" }
                }
                p { class: "landing-hero-subtitle",
                    "A comprehensive HR portal for managing employee performance reviews, feedback, and growth."
                }
                div { class: "landing-hero-actions",
                    Link { to: Route::SignIn {},
                        Button { size: ButtonSize::Large, "Login" }
                    }
                    Link { to: Route::SignUp {},
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Large, "Create an account" }
                    }
                }
            }

            section { class: "landing-section",
                h2 { class: "landing-section-title", "Key Features" }
                div { class: "landing-grid",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        div { key: "{feature.title}", class: "landing-feature",
                            span { class: "landing-feature-icon", {feature_icon(index)} }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }

            section { class: "landing-section landing-section-muted",
                h2 { class: "landing-section-title", "Tailored for Every Role" }
                div { class: "landing-grid",
                    for role in ALL_ROLES {
                        Card { key: "{role.as_str()}", class: "landing-role",
                            CardHeader {
                                CardTitle { "{role.label()}" }
                                CardDescription { "{role.summary()}" }
                            }
                            CardContent {
                                p { class: "landing-role-demo", "Demo account: {role.demo_email()}" }
                            }
                        }
                    }
                }
            }

            section { class: "landing-cta",
                h2 { "Ready to Transform Your Performance Reviews?" }
                p { "Sign in with one of the demo accounts to explore each role." }
                Link { to: Route::SignIn {},
                    Button { size: ButtonSize::Large, "Get Started" }
                }
            }

            footer { class: "landing-footer",
                p { "\u{a9} 2025 HR Portal. All rights reserved." }
            }
        }
    }
}
