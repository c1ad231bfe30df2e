use super::*;

#[test]
fn can_read_full_config() {
    let json = r#"{
        "policy": "tolerant",
        "format": "txt",
        "skipDistanceCheck": true,
        "skipGivenCostCheck": false
    }"#;

    let config = read_config(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(config.policy, Some(FailurePolicy::Tolerant));
    assert_eq!(config.format.as_deref(), Some("txt"));
    assert_eq!(config.skip_distance_check, Some(true));
    assert_eq!(config.skip_given_cost_check, Some(false));
}

#[test]
fn can_read_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    assert!(config.policy.is_none());
    assert!(config.format.is_none());
    assert!(config.skip_distance_check.is_none());
    assert!(config.skip_given_cost_check.is_none());
}

#[test]
fn can_return_error_on_invalid_config() {
    let result = read_config(BufReader::new(r#"{ "policy": "unknown" }"#.as_bytes()));

    let err = result.expect_err("config should not be read");
    assert!(err.to_string().starts_with("cannot deserialize config:"), "{err}");
}
