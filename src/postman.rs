//! Postman リモートワークスペースクライアント
//!
//! ワークスペース・コレクションのエンドポイントを扱う trait と、
//! 名前からワークスペースIDを解決する（無ければ作成する）処理。

mod client;
mod models;

#[cfg(test)]
pub mod mock;

pub use client::{PostmanClient, API_KEY_HEADER};
pub use models::{CollectionSummary, CreateShape, Workspace, WorkspaceType};

use crate::error::Result;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::info;

/// Postman API の抽象
///
/// 全操作は空のAPIキーに対してネットワーク呼び出し前に `AfmError::Auth` を返す。
pub trait PostmanApi: Send + Sync {
    /// ワークスペース一覧を取得
    fn list_workspaces<'a>(
        &'a self,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Workspace>>> + Send + 'a>>;

    /// personal ワークスペースを作成
    fn create_workspace<'a>(
        &'a self,
        name: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Workspace>> + Send + 'a>>;

    /// コレクション一覧を取得（`workspace_id` が空なら全体）
    fn list_collections<'a>(
        &'a self,
        workspace_id: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CollectionSummary>>> + Send + 'a>>;

    /// コレクション全体を取得
    fn get_collection<'a>(
        &'a self,
        collection_id: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

    /// コレクションを作成（`workspace_id` が空ならキーのデフォルトスコープ）
    fn create_collection<'a>(
        &'a self,
        workspace_id: &'a str,
        document: &'a Value,
        api_key: &'a str,
        shape: CreateShape,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;
}

/// 名前に最初に一致するワークスペース
pub fn find_workspace<'a>(workspaces: &'a [Workspace], name: &str) -> Option<&'a Workspace> {
    workspaces.iter().find(|w| w.name == name)
}

/// 名前に最初に一致するコレクション
pub fn find_collection<'a>(
    collections: &'a [CollectionSummary],
    name: &str,
) -> Option<&'a CollectionSummary> {
    collections.iter().find(|c| c.name == name)
}

/// ワークスペース名をIDに解決する
///
/// 一致するワークスペースが無ければ同名で作成し、そのIDを返す。
pub async fn resolve_workspace_id(
    api: &dyn PostmanApi,
    name: &str,
    api_key: &str,
) -> Result<String> {
    let workspaces = api.list_workspaces(api_key).await?;

    if let Some(workspace) = find_workspace(&workspaces, name) {
        info!(workspace = name, id = %workspace.id, "found workspace");
        return Ok(workspace.id.clone());
    }

    let created = api.create_workspace(name, api_key).await?;
    info!(workspace = name, id = %created.id, "created workspace");
    Ok(created.id)
}

#[cfg(test)]
#[path = "postman_test.rs"]
mod tests;
