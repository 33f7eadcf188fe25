// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_rosters, create_test_rules, create_test_time};
use crate::{ComplianceReport, DeliveryDecision, build_report, delivery_decision, run_check};

fn clean_report() -> ComplianceReport {
    build_report(4, &create_test_rosters(), &[], create_test_time())
}

#[test]
fn test_clean_report_skipped_without_always_send() {
    let decision: DeliveryDecision = delivery_decision(&clean_report(), false);

    assert_eq!(decision, DeliveryDecision::Skip);
    assert!(!decision.should_send());
}

#[test]
fn test_clean_report_sent_optionally_with_always_send() {
    let decision: DeliveryDecision = delivery_decision(&clean_report(), true);

    assert_eq!(decision, DeliveryDecision::Send { mandatory: false });
    assert!(decision.should_send());
    assert!(!decision.is_mandatory());
}

#[test]
fn test_violations_always_sent_and_mandatory() {
    let report: ComplianceReport = run_check(
        4,
        &create_test_rosters(),
        &create_test_rules(),
        None,
        create_test_time(),
    )
    .unwrap();

    for always_send in [false, true] {
        let decision: DeliveryDecision = delivery_decision(&report, always_send);
        assert!(decision.is_mandatory());
    }
}
