use std::fmt;

use serde::{Deserialize, Serialize};

use crate::build::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    Socket,
    Clearance,
    Power,
    FormFactor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One violated or risky pairing in a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub severity: Severity,
    pub components: Vec<Slot>,
}

impl CompatibilityIssue {
    pub fn error(kind: IssueKind, message: impl Into<String>, components: &[Slot]) -> Self {
        Self {
            kind,
            message: message.into(),
            severity: Severity::Error,
            components: components.to_vec(),
        }
    }

    pub fn warning(kind: IssueKind, message: impl Into<String>, components: &[Slot]) -> Self {
        Self {
            kind,
            message: message.into(),
            severity: Severity::Warning,
            components: components.to_vec(),
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn implicates(&self, slot: Slot) -> bool {
        self.components.contains(&slot)
    }
}

impl fmt::Display for CompatibilityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        write!(f, "{}: {}", severity, self.message)
    }
}

/// Overall verdict for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityStatus {
    Compatible,
    Warning,
    Error,
}

impl CompatibilityStatus {
    pub fn from_issues(issues: &[CompatibilityIssue]) -> Self {
        match issues.iter().map(|issue| issue.severity).max() {
            Some(Severity::Error) => CompatibilityStatus::Error,
            Some(Severity::Warning) => CompatibilityStatus::Warning,
            None => CompatibilityStatus::Compatible,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CompatibilityStatus::Compatible => "All components are compatible",
            CompatibilityStatus::Warning => "Build has some compatibility warnings",
            CompatibilityStatus::Error => "Build has compatibility issues that must be resolved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_storefront_shape() {
        let issue = CompatibilityIssue::error(
            IssueKind::FormFactor,
            "Case does not support ATX motherboard form factor",
            &[Slot::Motherboard, Slot::Case],
        );
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "formFactor",
                "message": "Case does not support ATX motherboard form factor",
                "severity": "error",
                "components": ["motherboard", "case"]
            })
        );
    }

    #[test]
    fn status_takes_worst_severity() {
        let warning = CompatibilityIssue::warning(IssueKind::Power, "w", &[Slot::Psu]);
        let error = CompatibilityIssue::error(IssueKind::Socket, "e", &[Slot::Cpu]);

        assert_eq!(CompatibilityStatus::from_issues(&[]), CompatibilityStatus::Compatible);
        assert_eq!(
            CompatibilityStatus::from_issues(std::slice::from_ref(&warning)),
            CompatibilityStatus::Warning
        );
        assert_eq!(
            CompatibilityStatus::from_issues(&[warning, error]),
            CompatibilityStatus::Error
        );
    }

    #[test]
    fn implicated_slots() {
        let issue = CompatibilityIssue::error(IssueKind::Clearance, "x", &[Slot::Gpu, Slot::Case]);
        assert!(issue.implicates(Slot::Case));
        assert!(!issue.implicates(Slot::Cpu));
        assert!(issue.is_blocking());
    }
}
