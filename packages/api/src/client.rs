//! # REST backend over `reqwest`
//!
//! [`RestBackend`] implements [`store::Backend`] against a JSON collection
//! service:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list` | `GET {base}/{collection}` |
//! | `create` | `POST {base}/{collection}` with the record (no `id`) |
//! | `update` | `PUT {base}/{collection}/{id}` with the full record |
//! | `delete` | `DELETE {base}/{collection}/{id}` |
//!
//! No authentication headers, pagination or query parameters are sent.
//!
//! ## Error mapping
//!
//! - transport failures (refused connection, DNS, aborted body) → `Network`
//! - non-2xx responses → [`BackendError::from_status`] (4xx `Validation`,
//!   everything else `Server`), with the response body as message
//! - a 2xx body that does not decode as the expected JSON → `Server`

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use store::{ApiConfig, Backend, BackendError, DashboardConfig, Record};
use tracing::{debug, warn};

/// HTTP client for the dashboard's backend.
#[derive(Clone, Debug)]
pub struct RestBackend {
    client: Client,
    api: ApiConfig,
}

impl RestBackend {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: Client::new(),
            api: config.api.clone(),
        }
    }

    /// Backend configured from the environment (see [`crate::config`]).
    pub fn from_env() -> Self {
        Self::new(&crate::config::load_config())
    }

    pub fn base_url(&self) -> &str {
        self.api.base()
    }

    fn collection_url(&self, collection: &str) -> Result<Url, BackendError> {
        let raw = self.api.collection_url(collection);
        Url::parse(&raw)
            .map_err(|e| BackendError::network(format!("invalid backend address '{raw}': {e}")))
    }

    fn record_url(&self, collection: &str, id: &str) -> Result<Url, BackendError> {
        let mut url = self.collection_url(collection)?;
        url.path_segments_mut()
            .map_err(|_| {
                BackendError::network(format!(
                    "backend address '{}' cannot take a path",
                    self.api.base()
                ))
            })?
            .push(id);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, BackendError> {
        debug!(%method, %url, "backend request");
        let request = build(self.client.request(method.clone(), url.clone()));
        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "backend unreachable");
            BackendError::network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = BackendError::from_status(status.as_u16(), &body);
        warn!(%method, %url, status = status.as_u16(), error = %err, "backend rejected request");
        Err(err)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status().as_u16();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| BackendError::network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::undecodable(status, e))
}

impl Backend for RestBackend {
    async fn list<R: Record>(&self) -> Result<Vec<R>, BackendError> {
        let url = self.collection_url(R::COLLECTION)?;
        let response = self.send(Method::GET, url, |req| req).await?;
        decode(response).await
    }

    async fn create<R: Record>(&self, record: &R) -> Result<R, BackendError> {
        let url = self.collection_url(R::COLLECTION)?;
        let response = self.send(Method::POST, url, |req| req.json(record)).await?;
        decode(response).await
    }

    async fn update<R: Record>(&self, id: &str, record: &R) -> Result<R, BackendError> {
        let url = self.record_url(R::COLLECTION, id)?;
        let response = self.send(Method::PUT, url, |req| req.json(record)).await?;
        decode(response).await
    }

    async fn delete<R: Record>(&self, id: &str) -> Result<(), BackendError> {
        let url = self.record_url(R::COLLECTION, id)?;
        self.send(Method::DELETE, url, |req| req).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use store::{sync, CollectionView, ModalState, Product, User};

    fn backend_for(server: &MockServer) -> RestBackend {
        RestBackend::new(&DashboardConfig::default().with_base_url(server.base_url()))
    }

    #[tokio::test]
    async fn test_list_products() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200).json_body(json!([
                    { "id": "1", "title": "Widget", "price": 9.99 },
                    { "id": "2", "title": "Gadget", "price": 19.99 }
                ]));
            })
            .await;

        let products = backend_for(&server).list::<Product>().await.unwrap();

        mock.assert_async().await;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Widget");
        assert_eq!(products[1].id, "2");
    }

    #[tokio::test]
    async fn test_create_sends_record_without_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/products")
                    .json_body(json!({ "title": "New", "price": 5.0 }));
                then.status(201)
                    .json_body(json!({ "id": "3", "title": "New", "price": 5.0 }));
            })
            .await;

        let created = backend_for(&server)
            .create(&Product::new("New", 5.0))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, "3");
    }

    #[tokio::test]
    async fn test_update_puts_full_record() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/users/7").json_body(json!({
                    "id": "7",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com",
                    "username": "ada",
                    "password": "secret",
                    "phone": "555-0100"
                }));
                then.status(200).json_body(json!({
                    "id": "7",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com",
                    "username": "ada",
                    "password": "secret",
                    "phone": "555-0100"
                }));
            })
            .await;

        let user = User {
            id: "7".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            password: "secret".to_string(),
            phone: "555-0100".to_string(),
        };
        let updated = backend_for(&server).update(&user.id, &user).await.unwrap();

        mock.assert_async().await;
        assert_eq!(updated, user);
    }

    #[tokio::test]
    async fn test_delete_targets_record_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/products/abc-123");
                then.status(200);
            })
            .await;

        backend_for(&server).delete::<Product>("abc-123").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_classification() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/products/1");
                then.status(422).body("price must be positive");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/products/1");
                then.status(500);
            })
            .await;
        let backend = backend_for(&server);

        let err = backend
            .update("1", &Product::new("Widget", -1.0))
            .await
            .unwrap_err();
        assert_eq!(err, BackendError::validation(422, "price must be positive"));

        let err = backend.delete::<Product>("1").await.unwrap_err();
        assert_eq!(err, BackendError::server(500, "internal server error"));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = backend_for(&server).list::<Product>().await.unwrap_err();
        assert!(matches!(err, BackendError::Server { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let backend =
            RestBackend::new(&DashboardConfig::default().with_base_url("http://127.0.0.1:1"));
        let err = backend.list::<Product>().await.unwrap_err();
        assert!(matches!(err, BackendError::Network { .. }));
    }

    #[tokio::test]
    async fn test_create_then_refetch_through_http() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path("/products");
                then.status(201)
                    .json_body(json!({ "id": "3", "title": "New", "price": 5.0 }));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200)
                    .json_body(json!([{ "id": "3", "title": "New", "price": 5.0 }]));
            })
            .await;
        let backend = backend_for(&server);

        let mut view = CollectionView::<Product>::new();
        view.modal.open_draft();
        *view.modal.working_mut().unwrap() = Product::new("New", 5.0);
        assert!(sync::submit(&mut view, &backend).await.unwrap());

        create.assert_async().await;
        list.assert_async().await;
        assert_eq!(
            view.snapshot(),
            &[Product {
                id: "3".to_string(),
                title: "New".to_string(),
                price: 5.0,
            }]
        );
        assert_eq!(view.modal, ModalState::Closed);
    }

    #[test]
    fn test_base_url_trims_slash() {
        let backend =
            RestBackend::new(&DashboardConfig::default().with_base_url("http://localhost:3000/"));
        assert_eq!(backend.base_url(), "http://localhost:3000");
    }
}
