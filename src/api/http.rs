//! Reqwest-backed client for the mentoring backend.
//!
//! Every call goes through the shared `{responseCode, result, message?}`
//! envelope. Transport and HTTP-status failures are logged here and returned
//! unchanged; converting failures into user-facing state is the caller's job
//! (the list controller for listing calls).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{EntityListQuery, ListPage, RemoteLister};
use crate::controller::DEFAULT_PAGE_SIZE;
use crate::domain::entity::Entity;
use crate::domain::entity_type::EntityType;
use crate::domain::organization::Organization;
use crate::dto::api::{ApiEnvelope, ListResult};
use crate::dto::entity::{
    CreateEntityRequest, CreateEntityTypeRequest, EntitySearchBody, InheritEntityTypeRequest,
};
use crate::models::config::ApiConfig;

const ENTITY_TYPE_READ: &str = "/entity-type/read";
const ENTITY_TYPE_CREATE: &str = "/entity-type/create";
const ENTITY_LIST: &str = "/entity/list";
const ENTITY_CREATE: &str = "/entity/create";
const INHERIT_ENTITY_TYPE: &str = "/org-admin/inheritEntityType";
const ORGANIZATION_LIST: &str = "/organisation/list";

#[derive(Clone)]
pub struct MentoringApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MentoringApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> ApiResult<ApiEnvelope<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.client.post(self.url(path)).json(body);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetches every entity-type definition visible to the caller.
    pub async fn read_entity_types(&self) -> ApiResult<Vec<EntityType>> {
        let envelope = self
            .post_json(ENTITY_TYPE_READ, &[], &json!({}))
            .await
            .map_err(|e| {
                log::error!("Failed to read entity types: {e}");
                e
            })?;
        unwrap_envelope(envelope, "entity-type read")
    }

    /// Lists entities of one type; search is applied server-side.
    pub async fn list_entities(&self, query: &EntityListQuery) -> ApiResult<ListPage<Entity>> {
        let (page, per_page) = query
            .pagination
            .as_ref()
            .map(|p| (p.page, p.per_page))
            .unwrap_or((1, DEFAULT_PAGE_SIZE));

        let params = [
            ("entity_type_id", query.entity_type_id.to_string()),
            ("page", page.to_string()),
            ("limit", per_page.to_string()),
        ];
        let body = EntitySearchBody {
            search: query.search.clone(),
        };

        let envelope = self
            .post_json(ENTITY_LIST, &params, &body)
            .await
            .map_err(|e| {
                log::error!("Failed to list entities: {e}");
                e
            })?;
        Ok(to_list_page(envelope))
    }

    pub async fn create_entity_type(
        &self,
        request: &CreateEntityTypeRequest,
    ) -> ApiResult<EntityType> {
        let envelope = self
            .post_json(ENTITY_TYPE_CREATE, &[], request)
            .await
            .map_err(|e| {
                log::error!("Failed to create entity type: {e}");
                e
            })?;
        unwrap_envelope(envelope, "entity-type create")
    }

    pub async fn create_entity(&self, request: &CreateEntityRequest) -> ApiResult<Entity> {
        let envelope = self
            .post_json(ENTITY_CREATE, &[], request)
            .await
            .map_err(|e| {
                log::error!("Failed to create entity: {e}");
                e
            })?;
        unwrap_envelope(envelope, "entity create")
    }

    /// Copies an entity type from the parent tenant into an organization.
    /// Callers only act on success or failure, so the outcome stays untyped.
    pub async fn inherit_entity_type(
        &self,
        request: &InheritEntityTypeRequest,
    ) -> ApiResult<serde_json::Value> {
        let envelope = self
            .post_json(INHERIT_ENTITY_TYPE, &[], request)
            .await
            .map_err(|e| {
                log::error!("Failed to inherit entity type: {e}");
                e
            })?;
        unwrap_envelope(envelope, "entity-type inheritance")
    }

    pub async fn list_organizations(
        &self,
        page: usize,
        page_size: usize,
    ) -> ApiResult<ListPage<Organization>> {
        let params = [("page", page.to_string()), ("limit", page_size.to_string())];
        let envelope = self
            .post_json(ORGANIZATION_LIST, &params, &json!({}))
            .await
            .map_err(|e| {
                log::error!("Failed to list organizations: {e}");
                e
            })?;
        Ok(to_list_page(envelope))
    }
}

#[async_trait]
impl RemoteLister<Organization> for MentoringApi {
    async fn list(&self, page: usize, page_size: usize) -> ApiResult<ListPage<Organization>> {
        self.list_organizations(page, page_size).await
    }
}

/// Lister over the entities of a single type, with an optional fixed
/// server-side search string.
#[derive(Clone)]
pub struct EntityLister {
    api: MentoringApi,
    entity_type_id: i64,
    search: String,
}

impl EntityLister {
    pub fn new(api: MentoringApi, entity_type_id: i64) -> Self {
        Self {
            api,
            entity_type_id,
            search: String::new(),
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

#[async_trait]
impl RemoteLister<Entity> for EntityLister {
    async fn list(&self, page: usize, page_size: usize) -> ApiResult<ListPage<Entity>> {
        let query = EntityListQuery::new(self.entity_type_id)
            .search(self.search.clone())
            .paginate(page, page_size);
        self.api.list_entities(&query).await
    }
}

fn to_list_page<T>(envelope: ApiEnvelope<ListResult<T>>) -> ListPage<T> {
    if !envelope.is_ok() {
        return ListPage::failed(envelope.message);
    }
    match envelope.result {
        Some(result) => ListPage::ok(result.data, result.count),
        None => ListPage::failed(Some("listing returned no result payload".to_string())),
    }
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>, operation: &str) -> ApiResult<T> {
    if !envelope.is_ok() {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("{operation} rejected by the server"));
        return Err(ApiError::Backend(message));
    }
    envelope
        .result
        .ok_or_else(|| ApiError::InvalidResponse(format!("{operation}: missing result payload")))
}
