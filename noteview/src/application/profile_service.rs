// src/application/profile_service.rs
use tracing::{debug, instrument};

use crate::domain::{NotificationSetting, Notification, Profile};
use crate::infrastructure::latency::SimulatedLatency;
use crate::ports::Notifier;

pub struct ProfileService<N: Notifier> {
    profile: Profile,
    notifier: N,
    latency: SimulatedLatency,
}

impl<N: Notifier> ProfileService<N> {
    pub fn new(profile: Profile, notifier: N) -> Self {
        Self {
            profile,
            notifier,
            latency: SimulatedLatency::none(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Apply new account details after the simulated round-trip; never fails
    #[instrument(level = "debug", skip(self))]
    pub fn update(&mut self, name: Option<&str>, email: Option<&str>) -> &Profile {
        self.latency.wait();
        if let Some(name) = name {
            self.profile.name = name.to_string();
        }
        if let Some(email) = email {
            self.profile.email = email.to_string();
        }
        self.notifier.notify(Notification::info(
            "Profile updated",
            "Your profile has been updated successfully",
        ));
        &self.profile
    }

    pub fn toggle_notification(&mut self, setting: NotificationSetting) -> bool {
        let enabled = self.profile.notifications.toggle(setting);
        debug!(%setting, enabled, "Toggled notification preference");
        self.notifier.notify(Notification::info(
            "Preference updated",
            format!("{setting} setting has been updated"),
        ));
        enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationSettings;
    use crate::infrastructure::notifier::RecordingNotifier;

    fn profile() -> Profile {
        Profile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            notifications: NotificationSettings::default(),
        }
    }

    #[test]
    fn given_new_name_when_updating_then_keeps_email_and_notifies() {
        let notifier = RecordingNotifier::new();
        let mut service = ProfileService::new(profile(), notifier.clone());

        let updated = service.update(Some("Jane Roe"), None).clone();

        assert_eq!(updated.name, "Jane Roe");
        assert_eq!(updated.email, "john@example.com");
        assert_eq!(notifier.last().unwrap().title, "Profile updated");
    }

    #[test]
    fn given_setting_when_toggling_then_flips_and_names_setting() {
        let notifier = RecordingNotifier::new();
        let mut service = ProfileService::new(profile(), notifier.clone());

        let enabled = service.toggle_notification(NotificationSetting::EmailNotifications);

        assert!(!enabled);
        assert!(!service.profile().notifications.email_notifications);
        assert_eq!(
            notifier.last().unwrap().description,
            "emailNotifications setting has been updated"
        );
    }
}
