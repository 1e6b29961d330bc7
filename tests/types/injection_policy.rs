use defer_chain::InjectionPolicy;

#[test]
fn unspecified_policy_defaults_to_previous_result() {
    assert_eq!(
        InjectionPolicy::default(),
        InjectionPolicy::UsePreviousResult
    );
}

#[test]
fn policy_is_copy_and_comparable() {
    let policy = InjectionPolicy::UseSuppliedValue;
    let copy = policy;
    assert_eq!(policy, copy);
    assert_ne!(policy, InjectionPolicy::UsePreviousResult);
}

#[cfg(feature = "serde")]
#[test]
fn policy_round_trips_through_serde() {
    let json = serde_json::to_string(&InjectionPolicy::UseSuppliedValue).unwrap();
    let back: InjectionPolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, InjectionPolicy::UseSuppliedValue);

    let back: InjectionPolicy =
        serde_json::from_str(&serde_json::to_string(&InjectionPolicy::default()).unwrap()).unwrap();
    assert_eq!(back, InjectionPolicy::UsePreviousResult);
}
