// src/domain/profile.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub collaborator_updates: bool,
    pub marketing_emails: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSetting {
    EmailNotifications,
    CollaboratorUpdates,
    MarketingEmails,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            collaborator_updates: true,
            marketing_emails: false,
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, setting: NotificationSetting) -> bool {
        match setting {
            NotificationSetting::EmailNotifications => self.email_notifications,
            NotificationSetting::CollaboratorUpdates => self.collaborator_updates,
            NotificationSetting::MarketingEmails => self.marketing_emails,
        }
    }

    /// Flip one flag and return its new value
    pub fn toggle(&mut self, setting: NotificationSetting) -> bool {
        let flag = match setting {
            NotificationSetting::EmailNotifications => &mut self.email_notifications,
            NotificationSetting::CollaboratorUpdates => &mut self.collaborator_updates,
            NotificationSetting::MarketingEmails => &mut self.marketing_emails,
        };
        *flag = !*flag;
        *flag
    }
}

impl fmt::Display for NotificationSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationSetting::EmailNotifications => "emailNotifications",
            NotificationSetting::CollaboratorUpdates => "collaboratorUpdates",
            NotificationSetting::MarketingEmails => "marketingEmails",
        };
        f.write_str(name)
    }
}

impl FromStr for NotificationSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email-notifications" | "emailNotifications" => Ok(Self::EmailNotifications),
            "collaborator-updates" | "collaboratorUpdates" => Ok(Self::CollaboratorUpdates),
            "marketing-emails" | "marketingEmails" => Ok(Self::MarketingEmails),
            other => Err(format!("unknown notification setting: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_toggling_marketing_then_enables_it() {
        let mut settings = NotificationSettings::default();

        let value = settings.toggle(NotificationSetting::MarketingEmails);

        assert!(value);
        assert!(settings.get(NotificationSetting::MarketingEmails));
        assert!(settings.get(NotificationSetting::EmailNotifications));
    }

    #[test]
    fn given_kebab_or_camel_name_when_parsing_setting_then_accepts_both() {
        assert_eq!(
            "collaborator-updates".parse::<NotificationSetting>(),
            Ok(NotificationSetting::CollaboratorUpdates)
        );
        assert_eq!(
            "emailNotifications".parse::<NotificationSetting>(),
            Ok(NotificationSetting::EmailNotifications)
        );
        assert!("sms".parse::<NotificationSetting>().is_err());
    }
}
