//! API client context shared by every view.
//!
//! # Design
//! - Exactly one API client per app boot.
//! - The session token is passed per call, so the client never changes.

use crate::app::preferences::client_config;
use crate::services::api::ApiClient;
use aksaraya_client::config::ClientConfig;
use std::rc::Rc;
use yew::prelude::*;

/// Shared API client plus the configuration it was built from.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
    pub config: Rc<ClientConfig>,
}

impl ApiCtx {
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config.base_url())),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

/// Shared API context; a freshly configured client outside the provider.
#[hook]
pub(crate) fn use_api() -> ApiCtx {
    use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(client_config()))
}
