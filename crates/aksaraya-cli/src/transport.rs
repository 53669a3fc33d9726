//! `reqwest` transport for the catalog API port.
//!
//! # Design
//! - Non-2xx responses become [`ClientError::Status`] carrying the backend's
//!   `message` field when the body has one.
//! - Catalog writes are multipart with the cover under the `cover` part.
//! - Bodies are read as bytes and decoded with `serde_json` so decode failures
//!   keep the operation name.

use aksaraya_api_models::{
    Catalog, CatalogId, CatalogList, CatalogPage, CurrentUserResponse, LoginRequest,
    LoginResponse, RegisterRequest, User,
};
use aksaraya_client::api::{CatalogApi, bearer, endpoints, join_url};
use aksaraya_client::config::ClientConfig;
use aksaraya_client::form::{COVER_FIELD, CatalogForm};
use aksaraya_client::query::CatalogQuery;
use aksaraya_client::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Catalog API over HTTP.
#[derive(Clone)]
pub(crate) struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub(crate) fn new(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ClientResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| ClientError::Transport {
                operation,
                detail: err.to_string(),
            })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await.unwrap_or_default();
        tracing::debug!(operation, status = status.as_u16(), "catalog api error status");
        Err(ClientError::from_status_body(operation, status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> ClientResult<T> {
        let body = response
            .bytes()
            .await
            .map_err(|err| ClientError::Transport {
                operation,
                detail: err.to_string(),
            })?;
        serde_json::from_slice(&body).map_err(|err| ClientError::Decode {
            operation,
            detail: err.to_string(),
        })
    }

    async fn send_catalog_form(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        token: &str,
        form: &CatalogForm,
    ) -> ClientResult<()> {
        let multipart = multipart_form(operation, form)?;
        let request = request
            .header(AUTHORIZATION, bearer(token))
            .multipart(multipart);
        self.execute(operation, request).await?;
        Ok(())
    }
}

fn multipart_form(operation: &'static str, form: &CatalogForm) -> ClientResult<Form> {
    let mut multipart = Form::new();
    for (name, value) in form.text_fields() {
        multipart = multipart.text(name, value);
    }
    if let Some(cover) = &form.cover {
        let part = Part::bytes(cover.bytes.clone())
            .file_name(cover.file_name.clone())
            .mime_str(&cover.content_type)
            .map_err(|err| ClientError::Transport {
                operation,
                detail: format!("invalid cover content type: {err}"),
            })?;
        multipart = multipart.part(COVER_FIELD, part);
    }
    Ok(multipart)
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let builder = self.client.post(self.url(endpoints::LOGIN)).json(request);
        let response = self.execute("login", builder).await?;
        Self::decode("login", response).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let builder = self.client.post(self.url(endpoints::REGISTER)).json(request);
        self.execute("register", builder).await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> ClientResult<User> {
        let builder = self
            .client
            .get(self.url(endpoints::ME))
            .header(AUTHORIZATION, bearer(token));
        let response = self.execute("current_user", builder).await?;
        let body: CurrentUserResponse = Self::decode("current_user", response).await?;
        Ok(body.into_user())
    }

    async fn list_catalogs(&self) -> ClientResult<Vec<Catalog>> {
        let builder = self.client.get(self.url(endpoints::CATALOGS));
        let response = self.execute("list_catalogs", builder).await?;
        let body: CatalogList = Self::decode("list_catalogs", response).await?;
        Ok(body.catalogs)
    }

    async fn search_catalogs(&self, query: &CatalogQuery) -> ClientResult<CatalogPage> {
        let builder = self
            .client
            .get(self.url(endpoints::CATALOG_SEARCH))
            .query(&query.query_pairs());
        let response = self.execute("search_catalogs", builder).await?;
        Self::decode("search_catalogs", response).await
    }

    async fn get_catalog(&self, id: CatalogId) -> ClientResult<Catalog> {
        let builder = self.client.get(self.url(&endpoints::catalog(id)));
        let response = self.execute("get_catalog", builder).await?;
        Self::decode("get_catalog", response).await
    }

    async fn create_catalog(&self, token: &str, form: &CatalogForm) -> ClientResult<()> {
        let request = self.client.post(self.url(endpoints::CATALOGS));
        self.send_catalog_form("create_catalog", request, token, form)
            .await
    }

    async fn update_catalog(
        &self,
        token: &str,
        id: CatalogId,
        form: &CatalogForm,
    ) -> ClientResult<()> {
        let request = self.client.put(self.url(&endpoints::catalog(id)));
        self.send_catalog_form("update_catalog", request, token, form)
            .await
    }

    async fn delete_catalog(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        let builder = self
            .client
            .delete(self.url(&endpoints::catalog(id)))
            .header(AUTHORIZATION, bearer(token));
        self.execute("delete_catalog", builder).await?;
        Ok(())
    }

    async fn add_to_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        let builder = self
            .client
            .post(self.url(&endpoints::wishlist(id)))
            .header(AUTHORIZATION, bearer(token));
        self.execute("add_to_wishlist", builder).await?;
        Ok(())
    }

    async fn remove_from_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        let builder = self
            .client
            .delete(self.url(&endpoints::wishlist(id)))
            .header(AUTHORIZATION, bearer(token));
        self.execute("remove_from_wishlist", builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aksaraya_client::form::CoverUpload;
    use aksaraya_test_support::fixtures;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    fn api_for(server: &MockServer) -> HttpCatalogApi {
        let config = ClientConfig::new(&server.base_url()).expect("valid base URL");
        HttpCatalogApi::new(Client::new(), &config)
    }

    fn form() -> CatalogForm {
        CatalogForm {
            title: "Laskar Pelangi".into(),
            author: "Andrea Hirata".into(),
            genre: "Fiksi".into(),
            year: 2005,
            kind: "Cetak".into(),
            publisher: "Bentang".into(),
            synopsis: "Sepuluh anak Belitung.".into(),
            cover: Some(CoverUpload {
                file_name: "laskar.png".into(),
                content_type: "image/png".into(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }),
        }
    }

    #[tokio::test]
    async fn search_sends_filters_as_query_parameters() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/catalogs/search")
                .query_param("keyword", "bumi manusia")
                .query_param("genre", "Sejarah")
                .query_param("page", "2")
                .query_param("limit", "12");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": [fixtures::catalog(1)], "lastPage": 3}));
        });

        let query = CatalogQuery::page(2, 12)
            .with_keyword("bumi manusia")
            .with_genre("Sejarah");
        let page = api_for(&server)
            .search_catalogs(&query)
            .await
            .expect("search succeeds");

        mock.assert();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.last_page, 3);
    }

    #[tokio::test]
    async fn authenticated_calls_send_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/wishlists/7")
                .header("authorization", "Bearer reader-token");
            then.status(201);
        });

        api_for(&server)
            .add_to_wishlist(fixtures::READER_TOKEN, 7)
            .await
            .expect("wishlist add succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn error_body_message_is_kept() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({"message": "Email atau password salah"}));
        });

        let err = api_for(&server)
            .login(&LoginRequest {
                email: "rina@example.com".into(),
                password: "salah".into(),
            })
            .await
            .expect_err("login rejected");

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.server_message(), Some("Email atau password salah"));
    }

    #[tokio::test]
    async fn current_user_accepts_wrapped_body() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/auth/me")
                .header("authorization", "Bearer admin-token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"user": fixtures::admin()}));
        });

        let user = api_for(&server)
            .current_user(fixtures::ADMIN_TOKEN)
            .await
            .expect("me succeeds");
        assert_eq!(user, fixtures::admin());
    }

    #[tokio::test]
    async fn catalog_list_unwraps_envelope() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/catalogs");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"catalogs": fixtures::catalogs(2)}));
        });

        let list = api_for(&server).list_catalogs().await.expect("list");
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn create_posts_multipart_with_cover() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/catalogs")
                .header("authorization", "Bearer admin-token")
                .header_includes("content-type", "multipart/form-data")
                .body_includes("name=\"title\"")
                .body_includes("Laskar Pelangi")
                .body_includes("name=\"cover\"; filename=\"laskar.png\"");
            then.status(201);
        });

        api_for(&server)
            .create_catalog(fixtures::ADMIN_TOKEN, &form())
            .await
            .expect("create succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn undecodable_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/catalogs/4");
            then.status(200).body("not json");
        });

        let err = api_for(&server).get_catalog(4).await.expect_err("decode");
        assert!(matches!(err, ClientError::Decode { operation: "get_catalog", .. }));
    }
}
