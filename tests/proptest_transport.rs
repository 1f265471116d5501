//! Property-based tests using proptest
//!
//! These tests verify endpoint validation, URL construction, status
//! classification and collection ordering using randomized inputs.

use proptest::prelude::*;
use reqwest::StatusCode;
use rfwalk::common::get_collection;
use rfwalk::service::Verb;
use rfwalk::{Error, Transport};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Generate a plausible service endpoint
fn arb_endpoint() -> impl Strategy<Value = String> {
    (
        prop_oneof!["http", "https"],
        "[a-z][a-z0-9-]{0,20}(\\.[a-z]{2,6}){0,2}",
        prop::option::of(1u16..65535),
    )
        .prop_map(|(scheme, host, port)| match port {
            Some(port) => format!("{}://{}:{}", scheme, host, port),
            None => format!("{}://{}", scheme, host),
        })
}

/// Generate a service-relative resource path
fn arb_resource_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9_-]{1,12}", 1..6)
        .prop_map(|segments| format!("/redfish/v1/{}", segments.join("/")))
}

proptest! {
    /// Endpoints with an http(s) scheme are accepted
    #[test]
    fn test_http_endpoints_are_accepted(endpoint in arb_endpoint()) {
        prop_assert!(Transport::new(&endpoint, None).is_ok());
    }

    /// Anything not starting with "http" is rejected with the endpoint echoed back
    #[test]
    fn test_non_http_endpoints_are_rejected(endpoint in "[a-gi-z][a-z0-9:/.]{0,30}") {
        match Transport::new(&endpoint, None) {
            Err(Error::InvalidEndpoint(rejected)) => prop_assert_eq!(rejected, endpoint),
            other => prop_assert!(false, "expected InvalidEndpoint, got {:?}", other),
        }
    }

    /// URLs are the endpoint followed by the path, with no normalization
    #[test]
    fn test_url_is_plain_concatenation(endpoint in arb_endpoint(), path in arb_resource_path()) {
        let transport = Transport::new(&endpoint, None).unwrap();
        prop_assert_eq!(transport.url_for(&path), format!("{}{}", endpoint, path));
    }

    /// GET accepts exactly 200; DELETE never accepts 201
    #[test]
    fn test_status_classification(code in 100u16..600) {
        let status = StatusCode::from_u16(code).unwrap();
        prop_assert_eq!(Verb::Get.accepts(status), code == 200);
        if code == 201 {
            prop_assert!(!Verb::Delete.accepts(status));
            prop_assert!(Verb::Post.accepts(status));
        }
        if !(200..300).contains(&code) {
            for verb in [Verb::Post, Verb::Put, Verb::Patch, Verb::Delete] {
                prop_assert!(!verb.accepts(status));
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Collection members come back in wire order whatever count is reported
    #[test]
    fn test_collection_preserves_member_order(
        ids in prop::collection::vec("[a-z0-9]{1,8}", 0..12),
        reported in 0u64..50,
    ) {
        let members: Vec<String> = ids
            .iter()
            .map(|id| format!("/redfish/v1/Systems/{}", id))
            .collect();

        let result = tokio_test::block_on(async {
            let server = MockServer::start().await;

            let body = json!({
                "Members": members
                    .iter()
                    .map(|m| json!({"@odata.id": m}))
                    .collect::<Vec<_>>(),
                "Members@odata.count": reported
            });
            Mock::given(method("GET"))
                .and(path("/redfish/v1/Systems"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&server)
                .await;

            let transport = Transport::new(&server.uri(), None).unwrap();
            get_collection(&transport, "/redfish/v1/Systems").await
        });

        prop_assert_eq!(result.unwrap(), members);
    }
}
