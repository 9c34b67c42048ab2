use crate::domain::scoring::{triangular, ScoringPolicy};

#[test]
fn triangular_matches_closed_form_examples() {
    assert_eq!(triangular(0), 0);
    assert_eq!(triangular(1), 1);
    assert_eq!(triangular(3), 6);
    assert_eq!(triangular(10), 55);
}

#[test]
fn triangular_policy_scores_completed_levels() {
    // failing on level n means n - 1 levels were completed
    let policy = ScoringPolicy::Triangular;
    assert_eq!(policy.final_score(1), 0);
    assert_eq!(policy.final_score(2), 1);
    assert_eq!(policy.final_score(4), 6);
    assert_eq!(policy.final_score(11), 55);
}

#[test]
fn linear_policy_scores_completed_levels() {
    let policy = ScoringPolicy::Linear;
    assert_eq!(policy.final_score(1), 0);
    assert_eq!(policy.final_score(2), 1);
    assert_eq!(policy.final_score(11), 10);
}

#[test]
fn level_zero_never_underflows() {
    assert_eq!(ScoringPolicy::Triangular.final_score(0), 0);
    assert_eq!(ScoringPolicy::Linear.final_score(0), 0);
}

#[test]
fn triangular_is_the_default() {
    assert_eq!(ScoringPolicy::default(), ScoringPolicy::Triangular);
}

#[test]
fn parses_policy_names() {
    assert_eq!("linear".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::Linear);
    assert_eq!(
        " Triangular ".parse::<ScoringPolicy>().unwrap(),
        ScoringPolicy::Triangular
    );
    assert!("cubic".parse::<ScoringPolicy>().is_err());
}
