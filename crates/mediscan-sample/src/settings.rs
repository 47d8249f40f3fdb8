//! Settings defaults for the sample patient.

pub const FIRST_NAME: &str = "Sarah";
pub const LAST_NAME: &str = "Johnson";
pub const EMAIL: &str = "sarah.johnson@example.com";
pub const PHONE: &str = "+1 (555) 123-4567";
