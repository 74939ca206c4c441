use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_reads_required_values_and_defaults_endpoint() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[
        (SERVICE_ID_VAR, "service_abc"),
        (TEMPLATE_ID_VAR, "template_def"),
        (PUBLIC_KEY_VAR, "pk_123"),
    ]))
    .unwrap();

    assert_eq!(cfg.service_id, "service_abc");
    assert_eq!(cfg.template_id, "template_def");
    assert_eq!(cfg.account_id, "pk_123");
    assert_eq!(cfg.endpoint, DEFAULT_EMAILJS_ENDPOINT);
}

#[test]
fn from_lookup_trims_values_and_endpoint_slash() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[
        (SERVICE_ID_VAR, "  service_abc "),
        (TEMPLATE_ID_VAR, "template_def"),
        (PUBLIC_KEY_VAR, "pk_123"),
        (ENDPOINT_VAR, "https://relay.example.test/send/"),
    ]))
    .unwrap();

    assert_eq!(cfg.service_id, "service_abc");
    assert_eq!(cfg.endpoint, "https://relay.example.test/send");
}

#[test]
fn from_lookup_blank_endpoint_falls_back_to_default() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[
        (SERVICE_ID_VAR, "s"),
        (TEMPLATE_ID_VAR, "t"),
        (PUBLIC_KEY_VAR, "k"),
        (ENDPOINT_VAR, "   "),
    ]))
    .unwrap();
    assert_eq!(cfg.endpoint, DEFAULT_EMAILJS_ENDPOINT);
}

#[test]
fn from_lookup_reports_first_missing_value() {
    let err = RelayConfig::from_lookup(lookup_from(&[(SERVICE_ID_VAR, "s")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: TEMPLATE_ID_VAR.to_owned() });
}

#[test]
fn from_lookup_rejects_blank_required_value() {
    let err = RelayConfig::from_lookup(lookup_from(&[
        (SERVICE_ID_VAR, "s"),
        (TEMPLATE_ID_VAR, "t"),
        (PUBLIC_KEY_VAR, "  "),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::Blank { var: PUBLIC_KEY_VAR.to_owned() });
}

#[test]
fn from_lookup_with_nothing_set_is_missing_service_id() {
    let err = RelayConfig::from_lookup(|_| None).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: SERVICE_ID_VAR.to_owned() });
}
