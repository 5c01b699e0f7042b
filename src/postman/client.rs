//! Postman API クライアント

use crate::config::{api_base_url, HttpConfig};
use crate::error::{AfmError, Result};
use crate::postman::models::{
    CollectionSummary, CollectionsEnvelope, CreateShape, CreateWorkspaceRequest, NewWorkspace,
    Workspace, WorkspaceEnvelope, WorkspaceType, WorkspacesEnvelope,
};
use crate::postman::PostmanApi;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// APIキーを渡すヘッダー
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Postman API クライアント
pub struct PostmanClient {
    http: Client,
    base_url: String,
}

impl PostmanClient {
    /// 環境変数またはデフォルトのベースURLで作成
    pub fn new(config: &HttpConfig) -> Self {
        Self::with_base_url(config, api_base_url())
    }

    /// ベースURLを指定して作成
    pub fn with_base_url(config: &HttpConfig, base_url: impl Into<String>) -> Self {
        Self {
            http: config.build_client(),
            base_url: base_url.into(),
        }
    }

    fn workspaces_url(&self) -> String {
        format!("{}/workspaces", self.base_url)
    }

    fn collections_url(&self) -> String {
        format!("{}/collections", self.base_url)
    }

    fn collection_url(&self, collection_id: &str) -> String {
        format!("{}/collections/{}", self.base_url, collection_id)
    }

    /// 認証済みリクエストを構築
    ///
    /// APIキーが空の場合はネットワークに触れる前に `Auth` で失敗する。
    fn request(&self, method: Method, url: &str, api_key: &str) -> Result<RequestBuilder> {
        if api_key.trim().is_empty() {
            return Err(AfmError::Auth);
        }
        debug!(%method, url, "postman request");
        Ok(self.http.request(method, url).header(API_KEY_HEADER, api_key))
    }

    /// ワークスペース指定があれば `?workspace=` を付与
    fn scoped(request: RequestBuilder, workspace_id: &str) -> RequestBuilder {
        if workspace_id.is_empty() {
            request
        } else {
            request.query(&[("workspace", workspace_id)])
        }
    }

    /// 送信してJSONとしてデコード
    async fn execute<T: DeserializeOwned>(
        request: RequestBuilder,
        action: &'static str,
        what: &'static str,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%status, action, "postman request failed");
            return Err(AfmError::http(action, status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| AfmError::Decode { what, source })
    }
}

impl PostmanApi for PostmanClient {
    fn list_workspaces<'a>(
        &'a self,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Workspace>>> + Send + 'a>> {
        Box::pin(async move {
            let req = self.request(Method::GET, &self.workspaces_url(), api_key)?;
            let envelope: WorkspacesEnvelope =
                Self::execute(req, "get postman workspace", "workspaces").await?;
            Ok(envelope.workspaces)
        })
    }

    fn create_workspace<'a>(
        &'a self,
        name: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Workspace>> + Send + 'a>> {
        Box::pin(async move {
            let body = CreateWorkspaceRequest {
                workspace: NewWorkspace {
                    name,
                    kind: WorkspaceType::Personal,
                },
            };
            let req = self
                .request(Method::POST, &self.workspaces_url(), api_key)?
                .json(&body);
            let envelope: WorkspaceEnvelope =
                Self::execute(req, "create postman workspace", "workspace").await?;
            Ok(envelope.workspace)
        })
    }

    fn list_collections<'a>(
        &'a self,
        workspace_id: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CollectionSummary>>> + Send + 'a>> {
        Box::pin(async move {
            let req = self.request(Method::GET, &self.collections_url(), api_key)?;
            let req = Self::scoped(req, workspace_id);
            let envelope: CollectionsEnvelope =
                Self::execute(req, "get postman collections", "collections").await?;
            Ok(envelope.collections)
        })
    }

    fn get_collection<'a>(
        &'a self,
        collection_id: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>> {
        Box::pin(async move {
            let req = self.request(Method::GET, &self.collection_url(collection_id), api_key)?;
            Self::execute(req, "get postman collection", "collection").await
        })
    }

    fn create_collection<'a>(
        &'a self,
        workspace_id: &'a str,
        document: &'a Value,
        api_key: &'a str,
        shape: CreateShape,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>> {
        Box::pin(async move {
            let req = self.request(Method::POST, &self.collections_url(), api_key)?;
            let req = Self::scoped(req, workspace_id);
            let req = match shape {
                CreateShape::Wrapped => req.json(&serde_json::json!({ "collection": document })),
                CreateShape::Raw => req.json(document),
            };
            Self::execute(req, "create postman collection", "collection").await
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
