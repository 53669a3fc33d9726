//! `gloo-net` transport for the catalog API port.
//!
//! # Design
//! - Mirrors the native transport: non-2xx responses become
//!   [`ClientError::Status`] with the backend `message` when present.
//! - Catalog writes are `FormData` bodies; the browser sets the multipart boundary.

use aksaraya_api_models::{
    Catalog, CatalogId, CatalogList, CatalogPage, CurrentUserResponse, LoginRequest,
    LoginResponse, RegisterRequest, User,
};
use aksaraya_client::api::{CatalogApi, bearer, endpoints, join_url};
use aksaraya_client::form::{COVER_FIELD, CatalogForm};
use aksaraya_client::query::CatalogQuery;
use aksaraya_client::{ClientError, ClientResult};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use js_sys::{Array, Uint8Array};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn execute(operation: &'static str, request: Request) -> ClientResult<Response> {
        let response = request.send().await.map_err(|err| ClientError::Transport {
            operation,
            detail: err.to_string(),
        })?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.binary().await.unwrap_or_default();
        Err(ClientError::from_status_body(operation, status, &body))
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> ClientResult<T> {
        let body = response
            .binary()
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

    async fn send_json<B: serde::Serialize>(
        operation: &'static str,
        request: Request,
        body: &B,
    ) -> ClientResult<Response> {
        let request = request.json(body).map_err(|err| ClientError::Transport {
            operation,
            detail: err.to_string(),
        })?;
        Self::execute(operation, request).await
    }

    async fn send_catalog_form(
        operation: &'static str,
        request: Request,
        token: &str,
        form: &CatalogForm,
    ) -> ClientResult<()> {
        let body = form_data(form).map_err(|err| ClientError::Transport {
            operation,
            detail: format!("form encoding failed: {err:?}"),
        })?;
        let request = request.header(AUTHORIZATION, &bearer(token)).body(body);
        Self::execute(operation, request).await?;
        Ok(())
    }

    async fn send_authorized(
        operation: &'static str,
        request: Request,
        token: &str,
    ) -> ClientResult<()> {
        Self::execute(operation, request.header(AUTHORIZATION, &bearer(token))).await?;
        Ok(())
    }
}

fn form_data(form: &CatalogForm) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for (name, value) in form.text_fields() {
        data.append_with_str(name, &value)?;
    }
    if let Some(cover) = &form.cover {
        let bytes = Uint8Array::from(cover.bytes.as_slice());
        let options = BlobPropertyBag::new();
        options.set_type(&cover.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&Array::of1(&bytes), &options)?;
        data.append_with_blob_and_filename(COVER_FIELD, &blob, &cover.file_name)?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl CatalogApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let response =
            Self::send_json("login", Request::post(&self.url(endpoints::LOGIN)), request).await?;
        Self::decode("login", response).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        Self::send_json("register", Request::post(&self.url(endpoints::REGISTER)), request)
            .await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> ClientResult<User> {
        let request = Request::get(&self.url(endpoints::ME)).header(AUTHORIZATION, &bearer(token));
        let response = Self::execute("current_user", request).await?;
        let body: CurrentUserResponse = Self::decode("current_user", response).await?;
        Ok(body.into_user())
    }

    async fn list_catalogs(&self) -> ClientResult<Vec<Catalog>> {
        let response =
            Self::execute("list_catalogs", Request::get(&self.url(endpoints::CATALOGS))).await?;
        let body: CatalogList = Self::decode("list_catalogs", response).await?;
        Ok(body.catalogs)
    }

    async fn search_catalogs(&self, query: &CatalogQuery) -> ClientResult<CatalogPage> {
        let request = Request::get(&self.url(&query.search_path()));
        let response = Self::execute("search_catalogs", request).await?;
        Self::decode("search_catalogs", response).await
    }

    async fn get_catalog(&self, id: CatalogId) -> ClientResult<Catalog> {
        let request = Request::get(&self.url(&endpoints::catalog(id)));
        let response = Self::execute("get_catalog", request).await?;
        Self::decode("get_catalog", response).await
    }

    async fn create_catalog(&self, token: &str, form: &CatalogForm) -> ClientResult<()> {
        let request = Request::post(&self.url(endpoints::CATALOGS));
        Self::send_catalog_form("create_catalog", request, token, form).await
    }

    async fn update_catalog(
        &self,
        token: &str,
        id: CatalogId,
        form: &CatalogForm,
    ) -> ClientResult<()> {
        let request = Request::put(&self.url(&endpoints::catalog(id)));
        Self::send_catalog_form("update_catalog", request, token, form).await
    }

    async fn delete_catalog(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        let request = Request::delete(&self.url(&endpoints::catalog(id)));
        Self::send_authorized("delete_catalog", request, token).await
    }

    async fn add_to_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        let request = Request::post(&self.url(&endpoints::wishlist(id)));
        Self::send_authorized("add_to_wishlist", request, token).await
    }

    async fn remove_from_wishlist(&self, token: &str, id: CatalogId) -> ClientResult<()> {
        let request = Request::delete(&self.url(&endpoints::wishlist(id)));
        Self::send_authorized("remove_from_wishlist", request, token).await
    }
}
