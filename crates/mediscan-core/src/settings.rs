//! Settings view state.
//!
//! Every toggle is independent, nothing is persisted, and saving only raises
//! an acknowledgement that the next edit clears.

use serde::Serialize;
use tracing::info;

use mediscan_sample::settings as defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Toggle {
    HealthAlerts,
    MedicationReminders,
    AppointmentReminders,
    WeeklySummary,
    ShareWithProviders,
    DarkMode,
}

impl Toggle {
    pub const ALL: [Toggle; 6] = [
        Toggle::HealthAlerts,
        Toggle::MedicationReminders,
        Toggle::AppointmentReminders,
        Toggle::WeeklySummary,
        Toggle::ShareWithProviders,
        Toggle::DarkMode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::HealthAlerts => "Health Alerts",
            Toggle::MedicationReminders => "Medication Reminders",
            Toggle::AppointmentReminders => "Appointment Reminders",
            Toggle::WeeklySummary => "Weekly Health Summary",
            Toggle::ShareWithProviders => "Share Data with Healthcare Providers",
            Toggle::DarkMode => "Dark Mode",
        }
    }

    pub fn default_enabled(self) -> bool {
        !matches!(self, Toggle::WeeklySummary | Toggle::DarkMode)
    }

    /// Position in `Toggle::ALL`, which is also the storage slot.
    fn index(self) -> usize {
        match self {
            Toggle::HealthAlerts => 0,
            Toggle::MedicationReminders => 1,
            Toggle::AppointmentReminders => 2,
            Toggle::WeeklySummary => 3,
            Toggle::ShareWithProviders => 4,
            Toggle::DarkMode => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }

    fn next(self) -> Self {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::French,
            Language::French => Language::German,
            Language::German => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Timezone {
    #[default]
    Eastern,
    Central,
    Mountain,
    Pacific,
}

impl Timezone {
    pub fn label(self) -> &'static str {
        match self {
            Timezone::Eastern => "Eastern Time (ET)",
            Timezone::Central => "Central Time (CT)",
            Timezone::Mountain => "Mountain Time (MT)",
            Timezone::Pacific => "Pacific Time (PT)",
        }
    }

    fn next(self) -> Self {
        match self {
            Timezone::Eastern => Timezone::Central,
            Timezone::Central => Timezone::Mountain,
            Timezone::Mountain => Timezone::Pacific,
            Timezone::Pacific => Timezone::Eastern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Phone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email Address",
            ProfileField::Phone => "Phone Number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: defaults::FIRST_NAME.to_string(),
            last_name: defaults::LAST_NAME.to_string(),
            email: defaults::EMAIL.to_string(),
            phone: defaults::PHONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsForm {
    profile: Profile,
    toggles: [bool; 6],
    language: Language,
    timezone: Timezone,
    acknowledged: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            toggles: Toggle::ALL.map(Toggle::default_enabled),
            language: Language::default(),
            timezone: Timezone::default(),
            acknowledged: false,
        }
    }
}

impl SettingsForm {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.profile.first_name,
            ProfileField::LastName => &self.profile.last_name,
            ProfileField::Email => &self.profile.email,
            ProfileField::Phone => &self.profile.phone,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FirstName => &mut self.profile.first_name,
            ProfileField::LastName => &mut self.profile.last_name,
            ProfileField::Email => &mut self.profile.email,
            ProfileField::Phone => &mut self.profile.phone,
        };
        *slot = value.into();
        self.acknowledged = false;
    }

    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        self.toggles[toggle.index()]
    }

    /// Flip `toggle` and return its new value.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let slot = &mut self.toggles[toggle.index()];
        *slot = !*slot;
        self.acknowledged = false;
        *slot
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn cycle_language(&mut self) -> Language {
        self.language = self.language.next();
        self.acknowledged = false;
        self.language
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    pub fn cycle_timezone(&mut self) -> Timezone {
        self.timezone = self.timezone.next();
        self.acknowledged = false;
        self.timezone
    }

    /// Acknowledge the save. Nothing is written anywhere.
    pub fn save(&mut self) {
        self.acknowledged = true;
        info!("settings saved");
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}
