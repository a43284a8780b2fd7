//! Validation report.

use crate::violation::Violation;

/// Ordered violations found by one [`validate`](crate::validate) call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// True when no rule was violated.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violation descriptions, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// `(passed, messages)`.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.passed(), self.messages())
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_passes() {
        let report = ValidationReport::new();
        assert!(report.passed());
        assert_eq!(report.into_parts(), (true, Vec::new()));
    }

    #[test]
    fn keeps_insertion_order() {
        let mut report = ValidationReport::new();
        report.add(Violation::MissingColumn {
            column: "b".to_string(),
        });
        report.add(Violation::MissingColumn {
            column: "a".to_string(),
        });

        assert!(!report.passed());
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.messages(),
            vec![
                "Required column 'b' is missing".to_string(),
                "Required column 'a' is missing".to_string(),
            ]
        );
    }
}
