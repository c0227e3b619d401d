use super::*;
use crate::foundation::error::{ServiceError, SlidecastError};

fn client() -> GatewayClient {
    let cfg = Config {
        pinata_gateway: "http://127.0.0.1:9/ipfs".to_string(),
        ..Config::default()
    };
    GatewayClient::new(&cfg).unwrap()
}

#[test]
fn resolves_ipfs_locators_through_gateway() {
    let c = client();
    assert_eq!(c.resolve("ipfs://QmAudio"), "http://127.0.0.1:9/ipfs/QmAudio");
    assert_eq!(
        c.resolve("https://cdn.example.com/a.mp3"),
        "https://cdn.example.com/a.mp3"
    );
}

#[test]
fn unreachable_gateway_is_a_request_error() {
    let err = client().fetch("ipfs://QmAudio").unwrap_err();
    assert!(matches!(
        err,
        SlidecastError::Service(ServiceError::Request { .. })
    ));
}
