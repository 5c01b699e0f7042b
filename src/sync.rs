//! コレクション同期
//!
//! primary アカウントのコレクションを名前で探し、本体を取得して
//! secondary アカウントのワークスペースへ新規作成する。
//! 同名コレクションの存在確認は行わないため、再実行すると重複して作成される。

use crate::error::{AfmError, Result};
use crate::postman::{find_collection, CreateShape, PostmanApi};
use crate::store::Configuration;
use tracing::info;

/// 同期結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// 同期元コレクション名
    pub name: String,
    /// 同期元コレクションID
    pub source_id: String,
    /// 同期先ワークスペースID（空ならデフォルトスコープ）
    pub destination_workspace: String,
    /// 作成されたコレクションID（レスポンスから読めた場合）
    pub created_id: Option<String>,
}

/// コレクション同期
pub struct CollectionSync<'a> {
    api: &'a dyn PostmanApi,
    config: &'a Configuration,
}

impl<'a> CollectionSync<'a> {
    pub fn new(api: &'a dyn PostmanApi, config: &'a Configuration) -> Self {
        Self { api, config }
    }

    /// 名前を指定して1コレクションを同期
    pub async fn sync(&self, name: &str) -> Result<SyncReport> {
        let source_id = self.find_source_id(name).await?;
        info!(collection = name, id = %source_id, "found source collection");

        let document = self
            .api
            .get_collection(&source_id, &self.config.primary_api_key)
            .await?;

        let created = self
            .api
            .create_collection(
                &self.config.secondary_workspace_id,
                &document,
                &self.config.secondary_api_key,
                CreateShape::Raw,
            )
            .await?;

        let created_id = created
            .pointer("/collection/id")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        info!(collection = name, created = ?created_id, "created destination collection");

        Ok(SyncReport {
            name: name.to_string(),
            source_id,
            destination_workspace: self.config.secondary_workspace_id.clone(),
            created_id,
        })
    }

    /// primary アカウント全体から名前に一致するコレクションIDを探す
    async fn find_source_id(&self, name: &str) -> Result<String> {
        let collections = self
            .api
            .list_collections("", &self.config.primary_api_key)
            .await?;

        find_collection(&collections, name)
            .map(|c| c.id.clone())
            .ok_or_else(|| AfmError::collection_not_found(name))
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
