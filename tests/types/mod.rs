use rop_rail::{ErrorKind, InvalidStateError, Outcome, RailError};


#[test]
fn rail_error_exposes_kind_and_message() {
    let err = RailError::too_long("too long by far");
    assert_eq!(err.kind(), ErrorKind::TooLong);
    assert_eq!(err.message(), "too long by far");
    assert_eq!(err.to_string(), "too long by far");
    assert_eq!(err.into_message(), "too long by far".to_string());
}

#[test]
fn rail_error_accepts_owned_messages() {
    let limit = 5;
    let err = RailError::new(ErrorKind::InvalidFormat, format!("needs {limit} digits"));
    assert_eq!(err.message(), "needs 5 digits");
    assert_eq!(err, RailError::invalid_format("needs 5 digits"));
}

#[test]
fn error_kind_codes_are_stable() {
    assert_eq!(ErrorKind::EmptyValue.code(), "empty_value");
    assert_eq!(ErrorKind::TooLong.code(), "too_long");
    assert_eq!(ErrorKind::InvalidFormat.code(), "invalid_format");
    assert_eq!(ErrorKind::InvalidFormat.to_string(), "invalid_format");
}

#[test]
fn rail_error_is_a_std_error() {
    fn takes_error(err: &dyn std::error::Error) -> String {
        err.to_string()
    }

    assert_eq!(takes_error(&RailError::empty("missing")), "missing");
    assert!(takes_error(&InvalidStateError::ValueOfFailure).contains("`value`"));
}

#[test]
fn invalid_state_names_the_misused_accessor() {
    assert_eq!(InvalidStateError::ValueOfFailure.accessor(), "value");
    assert_eq!(InvalidStateError::ErrorOfSuccess.accessor(), "error");
    assert!(InvalidStateError::ErrorOfSuccess.to_string().contains("successful outcome"));
}

#[test]
fn rail_outcome_alias_carries_rail_error() {
    let outcome: rop_rail::RailOutcome<u8> = Outcome::failure(RailError::empty("nothing"));
    assert_eq!(outcome.error().kind(), ErrorKind::EmptyValue);
}

#[cfg(feature = "serde")]
#[test]
fn outcome_and_rail_error_round_trip_through_json() {
    let failed: Outcome<u32, RailError> = Outcome::failure(RailError::too_long("way too long"));
    let json = serde_json::to_string(&failed).unwrap();
    assert!(json.contains("too_long"));

    let back: Outcome<u32, RailError> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, failed);
}
