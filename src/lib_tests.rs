use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_VIOLATIONS);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_VIOLATIONS, EXIT_CONFIG_ERROR);
}

#[test]
fn violations_exit_code_is_one() {
    assert_eq!(EXIT_VIOLATIONS, 1);
}
