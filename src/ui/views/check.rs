//! Invariant check view

use captable::InvariantViolation;

use crate::ui::theme::{colors, icons, paint};

pub struct CheckView<'a> {
    company: &'a str,
    violations: &'a [InvariantViolation],
}

impl<'a> CheckView<'a> {
    pub fn new(company: &'a str, violations: &'a [InvariantViolation]) -> Self {
        Self {
            company,
            violations,
        }
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();

        if self.violations.is_empty() {
            out.push_str(&format!(
                "{} {}: ownership structure is consistent\n",
                paint(icons::SUCCESS, colors::SUCCESS, color),
                self.company
            ));
            return out;
        }

        out.push_str(&format!(
            "{} {}: {} invariant violation(s)\n",
            paint(icons::ERROR, colors::ERROR, color),
            self.company,
            self.violations.len()
        ));
        for violation in self.violations {
            out.push_str(&format!(
                "  {} [{}] {}\n",
                icons::BULLET, violation.subject, violation.message
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use captable::sample_structure;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_render_consistent_structure() {
        let structure = sample_structure(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let violations = structure.check_invariants();
        let out = CheckView::new(&structure.company_name, &violations).render(false);
        assert!(out.contains("is consistent"));
    }

    #[test]
    fn test_render_violations() {
        let mut structure = sample_structure(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        structure.total_shares = 1;
        let violations = structure.check_invariants();
        let out = CheckView::new(&structure.company_name, &violations).render(false);
        assert!(out.contains("1 invariant violation(s)"));
        assert!(out.contains("[TechCorp Inc.]"));
    }
}
