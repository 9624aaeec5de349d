//! Repository Integration Tests
//!
//! Tests for RestRepository against a mock HTTP backend.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ApiConfig;
    use crate::domain::{Currency, DomainError, InventoryLocation, SalesPerson};
    use crate::repository::{ApiClient, Repository, RestRepository};

    async fn setup<T: crate::repository::Resource>() -> (MockServer, RestRepository<T>) {
        let server = MockServer::start().await;
        let config = ApiConfig::default().with_base_url(format!("{}/api", server.uri()));
        let repo = RestRepository::new(ApiClient::new(&config));
        (server, repo)
    }

    #[tokio::test]
    async fn test_list_accepts_bare_array() {
        let (server, repo) = setup::<SalesPerson>().await;
        Mock::given(method("GET"))
            .and(path("/api/sales-persons"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "salesman_name": "Ann", "inactive": 0},
                {"id": 2, "salesman_name": "Bob", "inactive": 1}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let people = repo.list().await.expect("List failed");
        assert_eq!(people.len(), 2);
        assert!(people[1].inactive);
    }

    #[tokio::test]
    async fn test_list_accepts_data_envelope() {
        let (server, repo) = setup::<Currency>().await;
        Mock::given(method("GET"))
            .and(path("/api/currencies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 1, "currency_abbreviation": "USD", "currency_name": "US Dollar"}]
            })))
            .mount(&server)
            .await;

        let currencies = repo.list().await.expect("List failed");
        assert_eq!(currencies[0].currency_abbreviation, "USD");
    }

    #[tokio::test]
    async fn test_create_posts_snake_case_body() {
        let (server, repo) = setup::<SalesPerson>().await;
        Mock::given(method("POST"))
            .and(path("/api/sales-persons"))
            .and(body_json(json!({
                "salesman_name": "Cara",
                "salesman_phone": "",
                "salesman_fax": "",
                "salesman_email": "cara@example.com",
                "provision": 5.0,
                "break_pt": 1000.0,
                "provision2": 7.5,
                "inactive": false
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"id": 9, "salesman_name": "Cara", "salesman_email": "cara@example.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let person = SalesPerson {
            salesman_name: "Cara".into(),
            salesman_email: "cara@example.com".into(),
            provision: 5.0,
            break_pt: 1000.0,
            provision2: 7.5,
            ..Default::default()
        };
        let created = repo.create(&person).await.expect("Create failed");
        assert_eq!(created.id, 9);
    }

    #[tokio::test]
    async fn test_update_and_delete_use_escaped_id() {
        let (server, repo) = setup::<InventoryLocation>().await;
        Mock::given(method("PUT"))
            .and(path("/api/inventory-locations/MAIN%20ST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "loc_code": "MAIN ST", "location_name": "Main Street"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/inventory-locations/MAIN%20ST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let location = InventoryLocation {
            loc_code: "MAIN ST".into(),
            location_name: "Main Street".into(),
            ..Default::default()
        };
        repo.update(&location).await.expect("Update failed");
        repo.delete(&location.loc_code).await.expect("Delete failed");
    }

    #[tokio::test]
    async fn test_backend_message_is_surfaced() {
        let (server, repo) = setup::<SalesPerson>().await;
        Mock::given(method("DELETE"))
            .and(path("/api/sales-persons/4"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"message": "Sales person is used by customer branches."})),
            )
            .mount(&server)
            .await;

        let err = repo.delete(&4).await.unwrap_err();
        assert_eq!(err.user_message(), "Sales person is used by customer branches.");
    }

    #[tokio::test]
    async fn test_find_missing_record() {
        let (server, repo) = setup::<Currency>().await;
        Mock::given(method("GET"))
            .and(path("/api/currencies/77"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = repo.find_by_id(&77).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
