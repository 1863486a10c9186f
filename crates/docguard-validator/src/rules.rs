//! The four business rules

use crate::dates::parse_date;
use docguard_domain::{ApprovedVessels, Diagnostics, ExtractionRecord, Rule, Verdict};

/// Evaluate a single rule
pub fn evaluate(
    rule: Rule,
    record: &ExtractionRecord,
    vessels: &ApprovedVessels,
    diagnostics: &mut Diagnostics,
) -> Verdict {
    match rule {
        Rule::DateConsistency => date_consistency(record, diagnostics),
        Rule::ValueCheck => value_check(record),
        Rule::VesselNameMatch => vessel_name_match(record, vessels),
        Rule::CompletenessCheck => completeness_check(record),
    }
}

/// Policy end date must be strictly after the start date
///
/// A zero-length period (start == end) fails.
pub fn date_consistency(record: &ExtractionRecord, diagnostics: &mut Diagnostics) -> Verdict {
    let rule = Rule::DateConsistency;
    let start = parse_date(
        record.policy_start_date.as_ref(),
        "policy_start_date",
        diagnostics,
    );
    let end = parse_date(
        record.policy_end_date.as_ref(),
        "policy_end_date",
        diagnostics,
    );

    let (Some(start), Some(end)) = (start, end) else {
        return Verdict::fail(rule, "Could not parse dates to YYYY-MM-DD format.");
    };

    if end > start {
        Verdict::pass(rule, "Policy end date is after start date.")
    } else {
        Verdict::fail(rule, "Policy end date cannot be before the start date.")
    }
}

/// Insured value must coerce to a number greater than zero
pub fn value_check(record: &ExtractionRecord) -> Verdict {
    let rule = Rule::ValueCheck;
    let Some(value) = &record.insured_value else {
        return Verdict::fail(rule, "Insured value is missing or not parseable.");
    };

    match value.as_number() {
        None => Verdict::fail(rule, "Insured value is not a valid number."),
        Some(n) if n > 0.0 => Verdict::pass(rule, "Insured value is valid."),
        Some(_) => Verdict::fail(rule, "Insured value must be a positive number."),
    }
}

/// Vessel name must be on the approved list
///
/// Emptiness is judged on the raw value; a whitespace-only name is looked up
/// (and will not match) rather than reported as missing.
pub fn vessel_name_match(record: &ExtractionRecord, vessels: &ApprovedVessels) -> Verdict {
    let rule = Rule::VesselNameMatch;
    let vessel = match record.vessel_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Verdict::fail(rule, "Vessel name missing."),
    };

    if vessels.contains(vessel) {
        Verdict::pass(rule, format!("Vessel '{}' is on the approved list.", vessel))
    } else {
        Verdict::fail(
            rule,
            format!("Vessel '{}' is not on the approved list.", vessel),
        )
    }
}

/// Policy number must contain at least one non-whitespace character
pub fn completeness_check(record: &ExtractionRecord) -> Verdict {
    let rule = Rule::CompletenessCheck;
    match record.policy_number.as_deref() {
        Some(pn) if !pn.trim().is_empty() => Verdict::pass(rule, "Policy number is present."),
        _ => Verdict::fail(rule, "Policy number is missing."),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use docguard_domain::{InsuredValue, Status};
    use proptest::prelude::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    proptest! {
        /// Property: date ordering decides the verdict for well-formed dates
        #[test]
        fn test_date_ordering_property(a in 0i64..20_000, b in 0i64..20_000) {
            let start = base_date() + Duration::days(a);
            let end = base_date() + Duration::days(b);
            let record = ExtractionRecord::new()
                .with_start_date(start.format("%Y-%m-%d").to_string().as_str())
                .with_end_date(end.format("%Y-%m-%d").to_string().as_str());

            let verdict = date_consistency(&record, &mut Diagnostics::new());
            prop_assert_eq!(verdict.status == Status::Pass, end > start);
        }

        /// Property: any numeric value passes exactly when it is positive
        #[test]
        fn test_value_sign_property(n in any::<i64>(), x in -1.0e12f64..1.0e12) {
            let verdict = value_check(&ExtractionRecord::new().with_insured_value(InsuredValue::Integer(n)));
            prop_assert_eq!(verdict.status == Status::Pass, n > 0);

            let verdict = value_check(&ExtractionRecord::new().with_insured_value(InsuredValue::Decimal(x)));
            prop_assert_eq!(verdict.status == Status::Pass, x > 0.0);

            let text = x.to_string();
            let verdict = value_check(&ExtractionRecord::new().with_insured_value(text.as_str()));
            prop_assert_eq!(verdict.status == Status::Pass, x > 0.0);
        }

        /// Property: case and surrounding whitespace never affect a vessel match
        #[test]
        fn test_vessel_case_property(
            name in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]",
            pad_left in " {0,3}",
            pad_right in " {0,3}",
            upper in any::<bool>(),
        ) {
            let vessels = ApprovedVessels::new([name.clone()]);
            let cased = if upper { name.to_uppercase() } else { name.to_lowercase() };
            let candidate = format!("{}{}{}", pad_left, cased, pad_right);

            let verdict = vessel_name_match(&ExtractionRecord::new().with_vessel_name(candidate), &vessels);
            prop_assert_eq!(verdict.status, Status::Pass);
        }

        /// Property: whitespace-only policy numbers are never complete
        #[test]
        fn test_blank_policy_number_property(blank in "[ \t\n]{0,8}") {
            let verdict = completeness_check(&ExtractionRecord::new().with_policy_number(blank));
            prop_assert_eq!(verdict.status, Status::Fail);
        }

        /// Property: a policy number with visible characters is complete
        #[test]
        fn test_present_policy_number_property(pn in " {0,2}[A-Z0-9-]{1,12} {0,2}") {
            let verdict = completeness_check(&ExtractionRecord::new().with_policy_number(pn));
            prop_assert_eq!(verdict.status, Status::Pass);
        }
    }
}
