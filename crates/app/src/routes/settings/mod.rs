mod admin;
mod notifications;
mod profile;

use dioxus::prelude::*;
use shared_types::{Role, SettingsTab};
use shared_ui::{PageDescription, PageHeader, PageTitle, TabContent, TabList, TabTrigger, Tabs};

/// `/settings`: profile and notification tabs for everyone, system
/// settings for admins.
#[component]
pub fn SettingsPage(role: Role) -> Element {
    let tabs = SettingsTab::visible_for(role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            PageHeader {
                PageTitle { "Settings" }
                PageDescription { "Manage your account and preferences." }
            }

            Tabs { default_value: "profile", horizontal: true,
                TabList {
                    for (index, tab) in tabs.iter().enumerate() {
                        TabTrigger { key: "{tab.value()}", value: "{tab.value()}", index, "{tab.label()}" }
                    }
                }
                for (index, tab) in tabs.iter().enumerate() {
                    TabContent { key: "{tab.value()}", value: "{tab.value()}", index,
                        match tab {
                            SettingsTab::Profile => rsx! { profile::ProfileTab { role } },
                            SettingsTab::Notifications => rsx! { notifications::NotificationsTab {} },
                            SettingsTab::Admin => rsx! { admin::AdminTab { role } },
                        }
                    }
                }
            }
        }
    }
}
