//! Submission rules for the blast scheduling form.
//!
//! The rules run synchronously inside the submit handler, against a plain
//! `FormSnapshot` read from the controls at that moment. Every rule is
//! evaluated; failures accumulate in rule order instead of short-circuiting,
//! so the user hears about all of them in one pass. The snapshot indirection
//! keeps the rules free of any DOM type and testable with plain values.

use std::fmt;

/// Earliest acceptable lead time for a blast, in milliseconds.
pub const MIN_LEAD_MS: f64 = 15.0 * 60_000.0;

/// Furthest ahead a blast may be scheduled, in milliseconds.
pub const MAX_AHEAD_MS: f64 = 35.0 * 24.0 * 60.0 * 60_000.0;

/// Plain-value snapshot of the form controls, read fresh at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    /// Name of the chosen contact list; `None` when no file was picked.
    pub file_name: Option<String>,
    /// Raw template text.
    pub template: String,
    /// Scheduled send time in epoch milliseconds; `None` when the control's
    /// value did not parse as a date.
    pub scheduled_ms: Option<f64>,
}

/// One failed submission rule. `Display` yields the alert text shown to the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    MissingFile,
    InvalidFileType,
    EmptyTemplate,
    TooSoon,
    TooLate,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RuleViolation::MissingFile => "Please upload a CSV file.",
            RuleViolation::InvalidFileType => "Please upload a valid CSV file.",
            RuleViolation::EmptyTemplate => "Please enter a message template.",
            RuleViolation::TooSoon => {
                "Scheduled time must be at least 15 minutes in the future."
            }
            RuleViolation::TooLate => "Scheduled time must be within 35 days from now.",
        };
        f.write_str(message)
    }
}

/// Checks every rule against `snapshot` and returns the violations in rule
/// order: file presence and `.csv` suffix (case-sensitive), non-blank
/// template, then the scheduling window `[now + 15 min, now + 35 days]`.
///
/// A snapshot without a parseable scheduled time fails closed as `TooSoon`;
/// comparisons against a garbage date must never let a submission through.
pub fn validate(snapshot: &FormSnapshot, now_ms: f64) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    match snapshot.file_name.as_deref() {
        None => violations.push(RuleViolation::MissingFile),
        Some(name) if !name.ends_with(".csv") => {
            violations.push(RuleViolation::InvalidFileType)
        }
        Some(_) => {}
    }

    if snapshot.template.trim().is_empty() {
        violations.push(RuleViolation::EmptyTemplate);
    }

    match snapshot.scheduled_ms {
        None => violations.push(RuleViolation::TooSoon),
        Some(at) if at < now_ms + MIN_LEAD_MS => violations.push(RuleViolation::TooSoon),
        Some(at) if at > now_ms + MAX_AHEAD_MS => violations.push(RuleViolation::TooLate),
        Some(_) => {}
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_700_000_000_000.0;
    const MINUTE: f64 = 60_000.0;
    const DAY: f64 = 86_400_000.0;

    fn snapshot() -> FormSnapshot {
        FormSnapshot {
            file_name: Some("contacts.csv".to_string()),
            template: "Hello {name}".to_string(),
            scheduled_ms: Some(NOW + 20.0 * MINUTE),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate(&snapshot(), NOW).is_empty());
    }

    #[test]
    fn missing_file_is_rejected() {
        let mut s = snapshot();
        s.file_name = None;
        assert_eq!(validate(&s, NOW), vec![RuleViolation::MissingFile]);
    }

    #[test]
    fn non_csv_suffix_is_rejected() {
        let mut s = snapshot();
        s.file_name = Some("contacts.txt".to_string());
        assert_eq!(validate(&s, NOW), vec![RuleViolation::InvalidFileType]);
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        let mut s = snapshot();
        s.file_name = Some("contacts.CSV".to_string());
        assert_eq!(validate(&s, NOW), vec![RuleViolation::InvalidFileType]);
    }

    #[test]
    fn whitespace_only_template_is_rejected() {
        let mut s = snapshot();
        s.template = "   ".to_string();
        assert_eq!(validate(&s, NOW), vec![RuleViolation::EmptyTemplate]);
    }

    #[test]
    fn ten_minutes_ahead_is_too_soon() {
        let mut s = snapshot();
        s.scheduled_ms = Some(NOW + 10.0 * MINUTE);
        assert_eq!(validate(&s, NOW), vec![RuleViolation::TooSoon]);
    }

    #[test]
    fn twenty_minutes_ahead_is_accepted() {
        let mut s = snapshot();
        s.scheduled_ms = Some(NOW + 20.0 * MINUTE);
        assert!(validate(&s, NOW).is_empty());
    }

    #[test]
    fn thirty_six_days_ahead_is_too_late() {
        let mut s = snapshot();
        s.scheduled_ms = Some(NOW + 36.0 * DAY);
        assert_eq!(validate(&s, NOW), vec![RuleViolation::TooLate]);
    }

    #[test]
    fn thirty_four_days_ahead_is_accepted() {
        let mut s = snapshot();
        s.scheduled_ms = Some(NOW + 34.0 * DAY);
        assert!(validate(&s, NOW).is_empty());
    }

    #[test]
    fn unparseable_time_fails_closed_as_too_soon() {
        let mut s = snapshot();
        s.scheduled_ms = None;
        assert_eq!(validate(&s, NOW), vec![RuleViolation::TooSoon]);
    }

    #[test]
    fn failures_accumulate_in_rule_order() {
        let s = FormSnapshot {
            file_name: None,
            template: "  ".to_string(),
            scheduled_ms: None,
        };
        assert_eq!(
            validate(&s, NOW),
            vec![
                RuleViolation::MissingFile,
                RuleViolation::EmptyTemplate,
                RuleViolation::TooSoon,
            ]
        );
    }

    #[test]
    fn alert_texts_match_the_page_wording() {
        assert_eq!(
            RuleViolation::MissingFile.to_string(),
            "Please upload a CSV file."
        );
        assert_eq!(
            RuleViolation::TooLate.to_string(),
            "Scheduled time must be within 35 days from now."
        );
    }
}
