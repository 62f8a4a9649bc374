//! Ordered-fallback pattern rules for statement fields.

pub mod amounts;

use regex::Regex;

use self::amounts::normalize_amount;
use crate::models::statement::FieldValue;

/// A priority-ordered sequence of pattern rules for one field.
///
/// Rules are tried top to bottom against the full statement text: the most
/// issuer-specific formatting variant comes first, the loosest variant
/// last. Case-insensitivity is opted into per rule with an inline `(?i)`,
/// so individual rules may demand exact case (card-number masks do).
pub struct RuleSet {
    rules: Vec<Regex>,
}

impl RuleSet {
    /// Compile a rule sequence. An invalid pattern is a programming error
    /// in a static rule table and panics at first use.
    pub fn new(patterns: &[&str]) -> Self {
        let rules = patterns
            .iter()
            .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid rule pattern {:?}: {}", p, e)))
            .collect();
        Self { rules }
    }

    /// First capture group of the first matching rule, trimmed.
    pub fn first_capture(&self, text: &str) -> FieldValue {
        for rule in &self.rules {
            if let Some(caps) = rule.captures(text) {
                if let Some(group) = caps.get(1) {
                    return FieldValue::found(group.as_str().trim());
                }
            }
        }
        FieldValue::NotFound
    }

    /// Both capture groups of the first matching two-capture rule, joined
    /// as `"<start> to <end>"`.
    pub fn capture_pair(&self, text: &str) -> FieldValue {
        for rule in &self.rules {
            if let Some(caps) = rule.captures(text) {
                if let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) {
                    return FieldValue::found(format!(
                        "{} to {}",
                        start.as_str().trim(),
                        end.as_str().trim()
                    ));
                }
            }
        }
        FieldValue::NotFound
    }

    /// First normalized amount strictly greater than `floor`.
    ///
    /// A single rule may match several times ("Amount Due" labels both the
    /// minimum and the total), so every match of a rule is normalized in
    /// document order and the first value clearing the floor wins. A rule
    /// whose matches all fall at or below the floor does not stop the
    /// scan: the next, looser rule is tried. `None` once every rule is
    /// exhausted.
    pub fn first_amount_above(&self, text: &str, floor: f64) -> Option<f64> {
        for rule in &self.rules {
            for caps in rule.captures_iter(text) {
                if let Some(group) = caps.get(1) {
                    let amount = normalize_amount(group.as_str());
                    if amount > floor {
                        return Some(amount);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_capture_respects_rule_order() {
        let rules = RuleSet::new(&[
            r"Customer\s+Name\s*:\s*(\w+)",
            r"Name\s*:\s*(\w+)",
        ]);

        // Both rules can match; the earlier one wins.
        let text = "Name: Loose\nCustomer Name: Specific";
        assert_eq!(rules.first_capture(text), FieldValue::found("Specific"));
    }

    #[test]
    fn test_first_capture_falls_through() {
        let rules = RuleSet::new(&[
            r"Customer\s+Name\s*:\s*(\w+)",
            r"Name\s*:\s*(\w+)",
        ]);

        assert_eq!(rules.first_capture("Name: Fallback"), FieldValue::found("Fallback"));
        assert_eq!(rules.first_capture("no labels here"), FieldValue::NotFound);
    }

    #[test]
    fn test_first_capture_trims() {
        let rules = RuleSet::new(&[r"Due\s+Date:(\s*\S+\s*)"]);
        assert_eq!(
            rules.first_capture("Due Date: 15-Dec-2024 "),
            FieldValue::found("15-Dec-2024")
        );
    }

    #[test]
    fn test_capture_pair_joins_with_to() {
        let rules = RuleSet::new(&[r"Period\s*:\s*(\S+)\s*-\s*(\S+)"]);
        assert_eq!(
            rules.capture_pair("Period: 01/11/2024 - 30/11/2024"),
            FieldValue::found("01/11/2024 to 30/11/2024")
        );
    }

    #[test]
    fn test_amount_skips_sub_floor_matches_of_same_rule() {
        let rules = RuleSet::new(&[r"(?i)Amount\s+Due\s*:?\s*([\d,]+\.?\d*)"]);
        let text = "Minimum Amount Due 2,000.00\nTotal Amount Due 39,432.00";

        // Both lines match the single rule; 2,000.00 clears a 1000 floor,
        // so a caller that wants the total must set the floor between the
        // two figures or order a total-specific rule first.
        assert_eq!(rules.first_amount_above(text, 3000.0), Some(39432.0));
        assert_eq!(rules.first_amount_above(text, 1000.0), Some(2000.0));
    }

    #[test]
    fn test_amount_falls_through_to_next_rule() {
        let rules = RuleSet::new(&[
            r"Minimum\s+Due\s*:\s*([\d,]+\.?\d*)",
            r"Total\s+Due\s*:\s*([\d,]+\.?\d*)",
        ]);
        let text = "Minimum Due: 500.00\nTotal Due: 12,345.00";

        // Rule 1 matches but never clears the floor; rule 2 is still tried.
        assert_eq!(rules.first_amount_above(text, 1000.0), Some(12345.0));
    }

    #[test]
    fn test_amount_exhaustion_is_none() {
        let rules = RuleSet::new(&[r"Total\s+Due\s*:\s*([\d,]+\.?\d*)"]);
        assert_eq!(rules.first_amount_above("Total Due: 999.00", 1000.0), None);
        assert_eq!(rules.first_amount_above("nothing labeled", 1000.0), None);
    }
}
