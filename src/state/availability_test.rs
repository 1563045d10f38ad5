use super::*;

#[test]
fn default_state_is_unknown() {
    assert_eq!(Availability::default(), Availability::Unknown);
}

#[test]
fn probe_results_map_onto_states() {
    assert_eq!(Availability::from_result(&Ok(true)), Availability::Available);
    assert_eq!(Availability::from_result(&Ok(false)), Availability::Taken);
    let err: Result<bool, ApiError> = Err(ApiError::Network("offline".to_owned()));
    assert_eq!(Availability::from_result(&err), Availability::Failed);
}

#[test]
fn only_available_allows_submit() {
    assert!(Availability::Available.allows_submit());
    assert!(!Availability::Unknown.allows_submit());
    assert!(!Availability::Checking.allows_submit());
    assert!(!Availability::Taken.allows_submit());
    assert!(!Availability::Failed.allows_submit());
}
