use super::*;

const URL: &str = "https://api.pinata.cloud/pinning/pinFileToIPFS";
const GATEWAY: &str = "https://gateway.pinata.cloud/ipfs";

#[test]
fn builds_locators_from_hash() {
    let body = br#"{"IpfsHash": "QmTest", "PinSize": 1234, "Timestamp": "2024-01-01T00:00:00Z"}"#;
    let pinned = pinned_from_response(URL, body, GATEWAY).unwrap();
    assert_eq!(pinned.ipfs_hash, "QmTest");
    assert_eq!(pinned.ipfs_url, "ipfs://QmTest");
    assert_eq!(pinned.gateway_url, "https://gateway.pinata.cloud/ipfs/QmTest");
    assert_eq!(pinned.pinata["PinSize"], 1234);
}

#[test]
fn missing_hash_is_a_pinata_error() {
    let err = pinned_from_response(URL, br#"{"PinSize": 1}"#, GATEWAY).unwrap_err();
    assert!(matches!(err, SlidecastError::Pinning(_)));
    assert!(err.to_string().contains("IpfsHash"));

    let err = pinned_from_response(URL, br#"{"IpfsHash": ""}"#, GATEWAY).unwrap_err();
    assert!(matches!(err, SlidecastError::Pinning(_)));
}

#[test]
fn non_json_body_is_malformed() {
    let err = pinned_from_response(URL, b"<html>", GATEWAY).unwrap_err();
    assert!(matches!(
        err,
        SlidecastError::Service(ServiceError::MalformedResponse { .. })
    ));
}

#[test]
fn upload_without_credential_is_a_configuration_error() {
    let cfg = Config::default();
    let client = PinningClient::new(&cfg).unwrap();
    let err = client
        .upload_file(Path::new("does-not-matter.mp4"), None)
        .unwrap_err();
    assert!(matches!(err, SlidecastError::Configuration(_)));
    assert!(err.to_string().contains("PINATA_JWT"));
}

#[test]
fn upload_of_missing_file_fails_before_any_request() {
    let cfg = Config {
        pinata_jwt: Some("jwt".to_string()),
        pinata_api_url: "http://127.0.0.1:9/pin".to_string(),
        ..Config::default()
    };
    let client = PinningClient::new(&cfg).unwrap();
    let err = client
        .upload_file(Path::new("target/definitely/missing.mp4"), Some("x.mp4"))
        .unwrap_err();
    assert!(matches!(err, SlidecastError::Other(_)));
}
