//! Notification severity and visibility gating.

use std::fmt;

/// Severity of a snackbar notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied switch deciding which notifications are shown.
///
/// Either a blanket on/off or an allow-list of severities. The switch
/// gates visibility only; `on_alert` relays fire regardless.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ShowAlerts {
    /// Show every notification.
    #[default]
    All,
    /// Show nothing.
    None,
    /// Show only the listed severities.
    Only(Vec<Severity>),
}

impl ShowAlerts {
    pub fn allows(&self, severity: Severity) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Only(severities) => severities.contains(&severity),
        }
    }
}

impl From<bool> for ShowAlerts {
    fn from(enabled: bool) -> Self {
        if enabled { Self::All } else { Self::None }
    }
}

impl From<Vec<Severity>> for ShowAlerts {
    fn from(severities: Vec<Severity>) -> Self {
        Self::Only(severities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blanket_gating() {
        assert!(ShowAlerts::from(true).allows(Severity::Error));
        assert!(!ShowAlerts::from(false).allows(Severity::Error));
    }

    #[test]
    fn test_severity_allow_list() {
        let gate = ShowAlerts::from(vec![Severity::Error, Severity::Info]);
        assert!(gate.allows(Severity::Error));
        assert!(gate.allows(Severity::Info));
        assert!(!gate.allows(Severity::Success));
    }

    #[test]
    fn test_empty_allow_list_shows_nothing() {
        let gate = ShowAlerts::Only(Vec::new());
        assert!(!gate.allows(Severity::Success));
        assert!(!gate.allows(Severity::Error));
    }

    #[test]
    fn test_default_shows_everything() {
        assert_eq!(ShowAlerts::default(), ShowAlerts::All);
    }
}
