//! # Validation Issues
//!
//! One diagnostic entry produced while classifying a shipment item. Issues
//! are surfaced to the person booking the shipment; they carry presentation
//! text but no control-flow meaning of their own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The item cannot ship as declared.
    Error,
    /// The item can ship but needs attention.
    Warning,
    /// Advisory only.
    Info,
}

impl IssueKind {
    /// Returns the snake_case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgent an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Returns the snake_case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic attached to a validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Error, warning or info.
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Urgency.
    pub severity: Severity,
    /// Short heading.
    pub title: String,
    /// Full explanation.
    pub message: String,
    /// Suggested next step, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl ValidationIssue {
    /// Create an issue without a recommendation.
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            message: message.into(),
            recommendation: None,
        }
    }

    /// Critical error.
    pub fn critical(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::Error, Severity::Critical, title, message)
    }

    /// Warning with the given severity.
    pub fn warning(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(IssueKind::Warning, severity, title, message)
    }

    /// Low-severity informational note.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueKind::Info, Severity::Low, title, message)
    }

    /// Attach a recommendation.
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// `true` for error-kind issues.
    pub fn is_error(&self) -> bool {
        self.kind == IssueKind::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}: {}", self.kind, self.severity, self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let e = ValidationIssue::critical("Prohibited Item", "cannot ship");
        assert_eq!(e.kind, IssueKind::Error);
        assert_eq!(e.severity, Severity::Critical);
        assert!(e.is_error());

        let w = ValidationIssue::warning(Severity::Medium, "Restricted", "needs papers");
        assert_eq!(w.kind, IssueKind::Warning);
        assert_eq!(w.severity, Severity::Medium);

        let i = ValidationIssue::info("Note", "fyi");
        assert_eq!(i.kind, IssueKind::Info);
        assert_eq!(i.severity, Severity::Low);
        assert!(i.recommendation.is_none());
    }

    #[test]
    fn test_serde_uses_type_field() {
        let issue = ValidationIssue::info("Note", "fyi").with_recommendation("read it");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "info");
        assert_eq!(json["severity"], "low");
        assert_eq!(json["recommendation"], "read it");

        let bare = serde_json::to_value(ValidationIssue::info("Note", "fyi")).unwrap();
        assert!(bare.get("recommendation").is_none());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_display() {
        let e = ValidationIssue::critical("Invalid HSN Code", "bad format");
        assert_eq!(e.to_string(), "[error/critical] Invalid HSN Code: bad format");
    }
}
