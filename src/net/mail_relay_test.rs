use futures::executor::block_on;

use super::*;

fn config() -> RelayConfig {
    RelayConfig {
        endpoint: "https://relay.example.test/send".to_owned(),
        service_id: "service_abc".to_owned(),
        template_id: "template_def".to_owned(),
        account_id: "pk_123".to_owned(),
    }
}

fn request() -> ContactRequest {
    ContactRequest {
        from_name: "Ada".to_owned(),
        reply_to: "ada@example.com".to_owned(),
        message: "Need a site".to_owned(),
    }
}

#[test]
fn payload_carries_identifiers_and_template_params() {
    let relay = EmailJsRelay::new(config());
    let req = request();
    let value = serde_json::to_value(relay.payload(&req)).unwrap();

    assert_eq!(value["service_id"], "service_abc");
    assert_eq!(value["template_id"], "template_def");
    assert_eq!(value["user_id"], "pk_123");
    assert_eq!(value["template_params"]["from_name"], "Ada");
    assert_eq!(value["template_params"]["reply_to"], "ada@example.com");
    assert_eq!(value["template_params"]["message"], "Need a site");
}

#[test]
fn unconfigured_relay_always_fails() {
    let result = block_on(UnconfiguredRelay.send(&request()));
    assert_eq!(result, Err(SubmissionError::NotConfigured));
}

#[test]
fn handle_from_missing_config_refuses_sends() {
    let handle = RelayHandle::from_config(Err(ConfigError::Missing { var: "X".to_owned() }));
    assert_eq!(block_on(handle.send(&request())), Err(SubmissionError::NotConfigured));
}

#[cfg(not(feature = "csr"))]
#[test]
fn emailjs_relay_fails_outside_browser() {
    let handle = RelayHandle::from_config(Ok(config()));
    let result = block_on(handle.send(&request()));
    assert!(matches!(result, Err(SubmissionError::Transport(_))));
}
