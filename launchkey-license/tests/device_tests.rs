use launchkey_license::current_machine_id;

#[test]
fn machine_id_is_available() {
    let id = current_machine_id();
    assert!(id.is_some());
    assert!(!id.unwrap().is_empty());
}

#[test]
fn machine_id_is_stable_across_calls() {
    assert_eq!(current_machine_id(), current_machine_id());
}

#[test]
fn machine_id_has_no_surrounding_whitespace() {
    // Validation hashes the id untrimmed, so the provider must not leak
    // stray whitespace into it.
    let id = current_machine_id().unwrap();
    assert_eq!(id, id.trim());
}
