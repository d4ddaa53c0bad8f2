//! Integration tests for the Fastly client using wiremock
//!
//! These tests drive the real `Client` against mocked endpoints, checking
//! request shape (paths, headers, form bodies) and response handling.

use fastly_mgmt::fastly::backend::{
    BackendFields, CreateBackendInput, DeleteBackendInput, ListBackendsInput, UpdateBackendInput,
};
use fastly_mgmt::fastly::director_backend::DirectorBackendInput;
use fastly_mgmt::fastly::http::FastlyHttpClient;
use fastly_mgmt::fastly::token::CreateTokenInput;
use fastly_mgmt::fastly::{ApiKey, Client, Compatibool, FastlyError};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "test-key";
const SERVICE: &str = "SU1Z0isxPaozGVKXdv0eY";

fn client_for(server: &MockServer) -> Client {
    Client::with_endpoint(ApiKey::new(KEY), &server.uri()).expect("client should build")
}

/// Test module for versioned configuration resources
mod versioned_tests {
    use super::*;

    /// Listing sends the key header and returns items sorted by name
    #[tokio::test]
    async fn test_list_backends_sorted_by_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/service/{}/version/1/backend", SERVICE)))
            .and(header("Fastly-Key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"service_id": SERVICE, "version": 1, "name": "origin-b", "port": "443"},
                {"service_id": SERVICE, "version": 1, "name": "origin-a", "port": 80}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let backends = client_for(&server)
            .list_backends(&ListBackendsInput::new(SERVICE, 1))
            .await
            .expect("list should succeed");

        assert_eq!(backends.len(), 2);
        assert_eq!(backends[0].name, "origin-a");
        assert_eq!(backends[0].port, Some(80));
        assert_eq!(backends[1].name, "origin-b");
        assert_eq!(backends[1].port, Some(443));
    }

    /// Create posts a url-encoded form with booleans as 1/0
    #[tokio::test]
    async fn test_create_backend_posts_form() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/service/{}/version/1/backend", SERVICE)))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("name=origin"))
            .and(body_string_contains("address=example.com"))
            .and(body_string_contains("use_ssl=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "service_id": SERVICE,
                "version": "1",
                "name": "origin",
                "address": "example.com",
                "use_ssl": true
            })))
            .mount(&server)
            .await;

        let fields = BackendFields {
            address: Some("example.com".to_string()),
            use_ssl: Some(Compatibool(true)),
            ..Default::default()
        };
        let backend = client_for(&server)
            .create_backend(&CreateBackendInput::new(SERVICE, 1, "origin", fields))
            .await
            .expect("create should succeed");

        assert_eq!(backend.version, 1);
        assert_eq!(backend.address.as_deref(), Some("example.com"));
        assert_eq!(backend.use_ssl, Some(true));
    }

    /// Update targets the old name and sends the new one as `name`
    #[tokio::test]
    async fn test_update_backend_renames() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("/service/{}/version/2/backend/old-origin", SERVICE)))
            .and(body_string_contains("name=new-origin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "service_id": SERVICE,
                "version": 2,
                "name": "new-origin"
            })))
            .mount(&server)
            .await;

        let input = UpdateBackendInput::new(SERVICE, 2, "old-origin", BackendFields::default())
            .rename("new-origin");
        let backend = client_for(&server)
            .update_backend(&input)
            .await
            .expect("update should succeed");

        assert_eq!(backend.name, "new-origin");
    }

    /// Delete succeeds on `{"status": "ok"}`
    #[tokio::test]
    async fn test_delete_backend_ok() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(format!("/service/{}/version/1/backend/origin", SERVICE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .delete_backend(&DeleteBackendInput::new(SERVICE, 1, "origin"))
            .await;

        assert!(result.is_ok());
    }

    /// Any other status is reported as NotOk
    #[tokio::test]
    async fn test_delete_backend_not_ok() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(format!("/service/{}/version/1/backend/origin", SERVICE)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "error", "msg": "version is locked"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete_backend(&DeleteBackendInput::new(SERVICE, 1, "origin"))
            .await
            .unwrap_err();

        match err {
            FastlyError::NotOk(msg) => assert_eq!(msg, "version is locked"),
            other => panic!("expected NotOk, got {:?}", other),
        }
    }

    /// Names are escaped as a single path segment
    #[tokio::test]
    async fn test_names_are_path_escaped() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/service/{}/version/1/logging/s3/logs%2Fmain", SERVICE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "logs/main",
                "bucket_name": "my-bucket",
                "period": "3600"
            })))
            .mount(&server)
            .await;

        let s3 = client_for(&server)
            .get_s3(&fastly_mgmt::fastly::logging::s3::GetS3Input::new(SERVICE, 1, "logs/main"))
            .await
            .expect("get should succeed");

        assert_eq!(s3.name, "logs/main");
        assert_eq!(s3.period, Some(3600));
    }

    /// Director backends are addressed by director and backend name
    #[tokio::test]
    async fn test_director_backend_create() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!(
                "/service/{}/version/3/director/pool/backend/origin",
                SERVICE
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "service_id": SERVICE,
                "version": 3,
                "director_name": "pool",
                "backend_name": "origin"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let link = client_for(&server)
            .create_director_backend(&DirectorBackendInput::new(SERVICE, 3, "pool", "origin"))
            .await
            .expect("create should succeed");

        assert_eq!(link.director, "pool");
        assert_eq!(link.backend, "origin");
        assert_eq!(link.version, 3);
    }

    /// A custom transport given to `with_http` carries every request
    #[tokio::test]
    async fn test_injected_transport_is_used() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tokens"))
            .and(header("X-Request-Source", "ci"))
            .and(header("Fastly-Key", KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("X-Request-Source", reqwest::header::HeaderValue::from_static("ci"));
        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("reqwest client should build");
        let client = Client::with_http(
            ApiKey::new(KEY),
            &server.uri(),
            FastlyHttpClient::with_client(inner),
        )
        .expect("client should build");

        let tokens = client.list_tokens().await.expect("list should succeed");
        assert!(tokens.is_empty());
    }

    /// Validation fails before any request is sent
    #[tokio::test]
    async fn test_missing_fields_send_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .list_backends(&ListBackendsInput::new("", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, FastlyError::MissingService));

        let err = client
            .list_backends(&ListBackendsInput::new(SERVICE, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, FastlyError::MissingVersion));
    }
}

/// Test module pinning the URL segment of every versioned kind
mod kind_path_tests {
    use super::*;
    use fastly_mgmt::fastly::backend::Backend;
    use fastly_mgmt::fastly::condition::Condition;
    use fastly_mgmt::fastly::director::Director;
    use fastly_mgmt::fastly::domain::Domain;
    use fastly_mgmt::fastly::health_check::HealthCheck;
    use fastly_mgmt::fastly::logging::{
        BigQuery, Cloudfiles, Ftp, Gcs, Logentries, Loggly, Papertrail, Splunk, Sumologic, Syslog,
        S3,
    };
    use fastly_mgmt::fastly::{VersionRef, VersionedResource};

    async fn assert_lists_under<R: VersionedResource>(server: &MockServer, segment: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/service/{}/version/5/{}", SERVICE, segment)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "second", "version": "5"},
                {"name": "first", "version": 5}
            ])))
            .expect(1)
            .mount(server)
            .await;

        let items = client_for(server)
            .list_versioned::<R>(&VersionRef::new(SERVICE, 5))
            .await
            .unwrap_or_else(|e| panic!("{} list failed: {}", segment, e));

        assert_eq!(R::KIND, segment);
        let names: Vec<&str> = items.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["first", "second"], "{} not sorted", segment);
    }

    #[tokio::test]
    async fn test_every_kind_lists_under_its_path() {
        let server = MockServer::start().await;

        assert_lists_under::<Backend>(&server, "backend").await;
        assert_lists_under::<Director>(&server, "director").await;
        assert_lists_under::<HealthCheck>(&server, "healthcheck").await;
        assert_lists_under::<Domain>(&server, "domain").await;
        assert_lists_under::<Condition>(&server, "condition").await;
        assert_lists_under::<BigQuery>(&server, "logging/bigquery").await;
        assert_lists_under::<Cloudfiles>(&server, "logging/cloudfiles").await;
        assert_lists_under::<Ftp>(&server, "logging/ftp").await;
        assert_lists_under::<Gcs>(&server, "logging/gcs").await;
        assert_lists_under::<Logentries>(&server, "logging/logentries").await;
        assert_lists_under::<Loggly>(&server, "logging/loggly").await;
        assert_lists_under::<Papertrail>(&server, "logging/papertrail").await;
        assert_lists_under::<S3>(&server, "logging/s3").await;
        assert_lists_under::<Splunk>(&server, "logging/splunk").await;
        assert_lists_under::<Sumologic>(&server, "logging/sumologic").await;
        assert_lists_under::<Syslog>(&server, "logging/syslog").await;
    }

    /// One record with an empty enum value must not fail the whole list
    #[tokio::test]
    async fn test_list_s3s_tolerates_empty_redundancy() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/service/{}/version/1/logging/s3", SERVICE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "a", "redundancy": "standard"},
                {"name": "b", "redundancy": ""}
            ])))
            .mount(&server)
            .await;

        let items = client_for(&server)
            .list_s3s(&VersionRef::new(SERVICE, 1))
            .await
            .expect("list should succeed");

        assert_eq!(items.len(), 2);
        assert!(items[0].redundancy.is_some());
        assert!(items[1].redundancy.is_none());
    }
}

/// Test module for error mapping
mod error_tests {
    use super::*;

    /// A 404 carries the API's msg and detail
    #[tokio::test]
    async fn test_404_maps_to_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/service/{}/version/1/backend/missing", SERVICE)))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "msg": "Record not found",
                "detail": "Couldn't find Backend 'missing'"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_backend(&fastly_mgmt::fastly::backend::GetBackendInput::new(SERVICE, 1, "missing"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        match err {
            FastlyError::Http { message, detail, .. } => {
                assert_eq!(message, "Record not found");
                assert_eq!(detail.as_deref(), Some("Couldn't find Backend 'missing'"));
            }
            other => panic!("expected Http, got {:?}", other),
        }
    }

    /// A non-JSON error body falls back to the status reason
    #[tokio::test]
    async fn test_401_without_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tokens"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server).list_tokens().await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(err.to_string(), "401 Unauthorized: Unauthorized");
    }
}

/// Test module for versions
mod version_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_versions_sorted_by_number() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/service/{}/version", SERVICE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"number": 3, "service_id": SERVICE, "active": false},
                {"number": 1, "service_id": SERVICE, "active": false, "locked": true},
                {"number": 2, "service_id": SERVICE, "active": true, "locked": "1"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let versions = client.list_versions(SERVICE).await.expect("list should succeed");
        let numbers: Vec<u32> = versions.iter().map(|v| v.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(versions[1].active);
        assert!(versions[1].locked);

        let latest = client.latest_version(SERVICE).await.expect("list should succeed");
        assert_eq!(latest.map(|v| v.number), Some(3));
    }

    #[tokio::test]
    async fn test_activate_version() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("/service/{}/version/4/activate", SERVICE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "number": 4,
                "service_id": SERVICE,
                "active": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let version = client_for(&server)
            .activate_version(SERVICE, 4)
            .await
            .expect("activate should succeed");

        assert_eq!(version.number, 4);
        assert!(version.active);
    }

    #[tokio::test]
    async fn test_validate_version_reports_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/service/{}/version/4/validate", SERVICE)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "error",
                "msg": "Version has no domains",
                "errors": ["no domains"],
                "warnings": null
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .validate_version(SERVICE, 4)
            .await
            .expect("validate should succeed");

        assert!(!result.is_valid());
        assert_eq!(result.errors, vec!["no domains".to_string()]);
        assert!(result.warnings.is_empty());
    }
}

/// Test module for account level resources
mod account_tests {
    use super::*;

    /// Token services repeat as `services[]`
    #[tokio::test]
    async fn test_create_token_repeats_services() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tokens"))
            .and(body_string_contains("username=ops%40example.com"))
            .and(body_string_contains("services%5B%5D=svc1"))
            .and(body_string_contains("services%5B%5D=svc2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "tok1",
                "name": "deploy",
                "services": ["svc1", "svc2"],
                "access_token": "secret"
            })))
            .mount(&server)
            .await;

        let input = CreateTokenInput {
            name: Some("deploy".to_string()),
            username: "ops@example.com".to_string(),
            password: "hunter2".to_string(),
            services: vec!["svc1".to_string(), "svc2".to_string()],
            ..Default::default()
        };
        let token = client_for(&server)
            .create_token(&input)
            .await
            .expect("create should succeed");

        assert_eq!(token.id, "tok1");
        assert_eq!(token.services.len(), 2);
    }

    /// Revoking the current token accepts an empty 204
    #[tokio::test]
    async fn test_delete_token_self_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/tokens/self"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).delete_token_self().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_reset_user_password() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/user/ops%40example.com/password/request_reset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .reset_user_password("ops@example.com")
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_search_service_by_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/service/search"))
            .and(query_param("name", "www"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": SERVICE,
                "name": "www",
                "version": 2
            })))
            .mount(&server)
            .await;

        let service = client_for(&server)
            .search_service("www")
            .await
            .expect("search should succeed");

        assert_eq!(service.id, SERVICE);
        assert_eq!(service.active_version, Some(2));
    }
}
