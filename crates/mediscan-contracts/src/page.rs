//! Navigation types: the closed set of dashboard pages and the presentation
//! mode chosen from the viewport width.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::MediscanError;

/// One of the five dashboard pages reachable after login.
///
/// The set is closed: a page id that is not listed here is rejected when it is
/// parsed and can never reach the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Overview,
    SymptomCheck,
    ReportUpload,
    Chat,
    Settings,
}

impl Page {
    /// Every page, in sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::SymptomCheck,
        Page::ReportUpload,
        Page::Chat,
        Page::Settings,
    ];

    /// Stable, kebab-case identifier.
    pub fn id(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::SymptomCheck => "symptom-check",
            Page::ReportUpload => "report-upload",
            Page::Chat => "chat",
            Page::Settings => "settings",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "Dashboard",
            Page::SymptomCheck => "Symptom Analyzer",
            Page::ReportUpload => "Reports",
            Page::Chat => "Chat with Doctor",
            Page::Settings => "Settings",
        }
    }

    /// Position in `Page::ALL`.
    pub fn index(self) -> usize {
        match self {
            Page::Overview => 0,
            Page::SymptomCheck => 1,
            Page::ReportUpload => 2,
            Page::Chat => 3,
            Page::Settings => 4,
        }
    }

    /// The page after this one in sidebar order, wrapping around.
    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    /// The page before this one in sidebar order, wrapping around.
    pub fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = MediscanError;

    /// Accepts the kebab-case ids plus the older `dashboard`,
    /// `symptom-analyzer` and `reports` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" | "dashboard" => Ok(Page::Overview),
            "symptom-check" | "symptom-analyzer" => Ok(Page::SymptomCheck),
            "report-upload" | "reports" => Ok(Page::ReportUpload),
            "chat" => Ok(Page::Chat),
            "settings" => Ok(Page::Settings),
            _ => Err(MediscanError::UnknownPage { id: s.to_string() }),
        }
    }
}

/// What the shell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "page", rename_all = "kebab-case")]
pub enum View {
    Login,
    Page(Page),
}

/// How the navigation menu is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Wide viewport: the sidebar is always visible.
    #[default]
    Sidebar,
    /// Narrow viewport: the menu is an overlay opened on demand.
    Overlay,
}
