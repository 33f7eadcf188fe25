// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, EligibilityRuleSet, MAX_WEEK, TeamRoster, parse_status_list,
    validate_team_rosters, validate_week,
};

#[test]
fn test_parse_status_list_accepts_mixed_case_and_spacing() {
    let rules: EligibilityRuleSet = parse_status_list("ir, o ,Pup").unwrap();

    assert_eq!(rules.code_list(), vec!["IR", "O", "PUP"]);
}

#[test]
fn test_parse_status_list_collapses_duplicates() {
    let rules: EligibilityRuleSet = parse_status_list("IR,ir,IR").unwrap();

    assert_eq!(rules.len(), 1);
}

#[test]
fn test_parse_status_list_blank_yields_empty_rule_set() {
    let rules: EligibilityRuleSet = parse_status_list("  ").unwrap();

    assert!(rules.is_empty());
}

#[test]
fn test_parse_status_list_rejects_blank_entry() {
    let result: Result<EligibilityRuleSet, DomainError> = parse_status_list("IR,,O");

    assert_eq!(
        result,
        Err(DomainError::MalformedStatusList {
            input: String::from("IR,,O"),
            position: 1,
        })
    );
}

#[test]
fn test_parse_status_list_rejects_trailing_comma() {
    let result: Result<EligibilityRuleSet, DomainError> = parse_status_list("IR,O,");

    assert!(matches!(
        result,
        Err(DomainError::MalformedStatusList { position: 2, .. })
    ));
}

#[test]
fn test_parse_status_list_rejects_unknown_code() {
    let result: Result<EligibilityRuleSet, DomainError> = parse_status_list("IR,BENCHED");

    assert_eq!(
        result,
        Err(DomainError::UnknownStatusCode(String::from("BENCHED")))
    );
}

#[test]
fn test_validate_week_bounds() {
    assert!(validate_week(1).is_ok());
    assert!(validate_week(MAX_WEEK).is_ok());
    assert!(matches!(
        validate_week(0),
        Err(DomainError::InvalidWeek { week: 0, .. })
    ));
    assert!(matches!(
        validate_week(MAX_WEEK + 1),
        Err(DomainError::InvalidWeek { .. })
    ));
}

#[test]
fn test_validate_team_rosters_rejects_empty_team_id() {
    let rosters: Vec<TeamRoster> = vec![
        TeamRoster::new("1", "Team One", "Alex", Vec::new()),
        TeamRoster::new(" ", "Nameless", "Jo", Vec::new()),
    ];

    let result: Result<(), DomainError> = validate_team_rosters(&rosters);

    assert!(matches!(result, Err(DomainError::InvalidTeam(msg)) if msg.contains("position 1")));
}

#[test]
fn test_validate_team_rosters_accepts_duplicates() {
    let rosters: Vec<TeamRoster> = vec![
        TeamRoster::new("1", "Team One", "Alex", Vec::new()),
        TeamRoster::new("1", "Team One", "Alex", Vec::new()),
    ];

    assert!(validate_team_rosters(&rosters).is_ok());
}
