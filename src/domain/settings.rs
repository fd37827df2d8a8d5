use serde::{Deserialize, Serialize};

/// Notification channel toggles.
///
/// Each settings record has a matching `*Patch` type whose fields are all
/// optional; a patch shallow-merges into the record, overwriting only the
/// fields it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    /// Reminder before a payment due date
    pub payment_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            sms: true,
            push: true,
            payment_reminders: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettingsPatch {
    pub email: Option<bool>,
    pub sms: Option<bool>,
    pub push: Option<bool>,
    pub payment_reminders: Option<bool>,
}

impl NotificationSettingsPatch {
    pub fn apply(&self, settings: &mut NotificationSettings) {
        if let Some(email) = self.email {
            settings.email = email;
        }
        if let Some(sms) = self.sms {
            settings.sms = sms;
        }
        if let Some(push) = self.push {
            settings.push = push;
        }
        if let Some(reminders) = self.payment_reminders {
            settings.payment_reminders = reminders;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub biometric_enabled: bool,
    pub biometric_type: Option<BiometricType>,
    pub two_factor_enabled: bool,
    pub session_timeout_minutes: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            biometric_enabled: false,
            biometric_type: None,
            two_factor_enabled: false,
            session_timeout_minutes: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometricType {
    Fingerprint,
    FaceId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettingsPatch {
    pub biometric_enabled: Option<bool>,
    /// Some(None) clears the biometric type
    pub biometric_type: Option<Option<BiometricType>>,
    pub two_factor_enabled: Option<bool>,
    pub session_timeout_minutes: Option<u32>,
}

impl SecuritySettingsPatch {
    pub fn apply(&self, settings: &mut SecuritySettings) {
        if let Some(enabled) = self.biometric_enabled {
            settings.biometric_enabled = enabled;
        }
        if let Some(biometric_type) = self.biometric_type {
            settings.biometric_type = biometric_type;
        }
        if let Some(two_factor) = self.two_factor_enabled {
            settings.two_factor_enabled = two_factor;
        }
        if let Some(timeout) = self.session_timeout_minutes {
            settings.session_timeout_minutes = timeout;
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    /// ISO 4217 currency code
    pub currency: String,
    /// BCP 47 language tag
    pub language: String,
    pub date_format: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            currency: "INR".to_string(),
            language: "en".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
        }
    }
}

/// Exactly two themes exist; `toggled` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPatch {
    pub theme: Option<Theme>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub date_format: Option<String>,
}

impl PreferencesPatch {
    pub fn apply(&self, preferences: &mut Preferences) {
        if let Some(theme) = self.theme {
            preferences.theme = theme;
        }
        if let Some(currency) = &self.currency {
            preferences.currency = currency.clone();
        }
        if let Some(language) = &self.language {
            preferences.language = language.clone();
        }
        if let Some(date_format) = &self.date_format {
            preferences.date_format = date_format.clone();
        }
    }
}

/// Payment automation behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationSettings {
    pub auto_payment_enabled: bool,
    pub payment_preference: PaymentPreference,
    /// Only meaningful when payment_preference is Custom
    pub custom_payment_amount: Option<f64>,
    /// Hours before the due date the automatic payment fires
    pub payment_buffer_hours: u32,
}

impl Default for AutomationSettings {
    fn default() -> Self {
        Self {
            auto_payment_enabled: true,
            payment_preference: PaymentPreference::MinimumDue,
            custom_payment_amount: None,
            payment_buffer_hours: 24,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPreference {
    MinimumDue,
    FullAmount,
    Custom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomationSettingsPatch {
    pub auto_payment_enabled: Option<bool>,
    pub payment_preference: Option<PaymentPreference>,
    pub custom_payment_amount: Option<Option<f64>>,
    pub payment_buffer_hours: Option<u32>,
}

impl AutomationSettingsPatch {
    pub fn apply(&self, settings: &mut AutomationSettings) {
        if let Some(enabled) = self.auto_payment_enabled {
            settings.auto_payment_enabled = enabled;
        }
        if let Some(preference) = self.payment_preference {
            settings.payment_preference = preference;
        }
        if let Some(amount) = self.custom_payment_amount {
            settings.custom_payment_amount = amount;
        }
        if let Some(buffer) = self.payment_buffer_hours {
            settings.payment_buffer_hours = buffer;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggled_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_patch_overwrites_only_carried_fields() {
        let mut preferences = Preferences::default();
        let patch = PreferencesPatch {
            currency: Some("USD".to_string()),
            ..Default::default()
        };
        patch.apply(&mut preferences);

        assert_eq!(preferences.currency, "USD");
        assert_eq!(preferences.theme, Theme::Light);
        assert_eq!(preferences.language, "en");
        assert_eq!(preferences.date_format, "DD/MM/YYYY");
    }

    #[test]
    fn test_security_patch_can_clear_biometric_type() {
        let mut security = SecuritySettings {
            biometric_enabled: true,
            biometric_type: Some(BiometricType::FaceId),
            ..Default::default()
        };
        let patch = SecuritySettingsPatch {
            biometric_enabled: Some(false),
            biometric_type: Some(None),
            ..Default::default()
        };
        patch.apply(&mut security);

        assert!(!security.biometric_enabled);
        assert_eq!(security.biometric_type, None);
    }
}
