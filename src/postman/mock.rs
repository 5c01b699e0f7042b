//! テスト用モック Postman API

use super::*;
use crate::error::AfmError;
use std::collections::HashMap;
use std::sync::RwLock;

/// 記録された呼び出し
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListWorkspaces {
        api_key: String,
    },
    CreateWorkspace {
        name: String,
        api_key: String,
    },
    ListCollections {
        workspace_id: String,
        api_key: String,
    },
    GetCollection {
        collection_id: String,
        api_key: String,
    },
    CreateCollection {
        workspace_id: String,
        api_key: String,
        shape: CreateShape,
        document: Value,
    },
}

#[derive(Default)]
struct MockState {
    /// APIキー別のワークスペース
    workspaces: HashMap<String, Vec<Workspace>>,
    /// APIキー別のコレクション（一覧要素と本体）
    collections: HashMap<String, Vec<(CollectionSummary, Value)>>,
    /// ワークスペース一覧で失敗させるAPIキー
    failing_keys: Vec<String>,
    calls: Vec<Call>,
    next_id: usize,
}

/// テスト用モック Postman API
///
/// APIキーごとに別アカウントとして状態を保持する。
pub struct MockPostman {
    state: RwLock<MockState>,
}

impl MockPostman {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MockState::default()),
        }
    }

    /// ワークスペースを追加
    pub fn add_workspace(&self, api_key: &str, id: &str, name: &str) {
        self.state
            .write()
            .unwrap()
            .workspaces
            .entry(api_key.to_string())
            .or_default()
            .push(Workspace {
                id: id.to_string(),
                name: name.to_string(),
                kind: WorkspaceType::Personal,
            });
    }

    /// コレクションを追加
    pub fn add_collection(&self, api_key: &str, id: &str, name: &str, document: Value) {
        self.state
            .write()
            .unwrap()
            .collections
            .entry(api_key.to_string())
            .or_default()
            .push((
                CollectionSummary {
                    id: id.to_string(),
                    name: name.to_string(),
                    uid: None,
                    owner: None,
                },
                document,
            ));
    }

    /// 指定キーのワークスペース一覧を 503 で失敗させる
    pub fn fail_workspaces_for(&self, api_key: &str) {
        self.state
            .write()
            .unwrap()
            .failing_keys
            .push(api_key.to_string());
    }

    /// 記録された呼び出し
    pub fn calls(&self) -> Vec<Call> {
        self.state.read().unwrap().calls.clone()
    }

    /// 条件に一致する呼び出し回数
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state
            .read()
            .unwrap()
            .calls
            .iter()
            .filter(|c| pred(c))
            .count()
    }

    fn record(&self, api_key: &str, call: Call) -> Result<()> {
        if api_key.trim().is_empty() {
            return Err(AfmError::Auth);
        }
        self.state.write().unwrap().calls.push(call);
        Ok(())
    }
}

impl Default for MockPostman {
    fn default() -> Self {
        Self::new()
    }
}

impl PostmanApi for MockPostman {
    fn list_workspaces<'a>(
        &'a self,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Workspace>>> + Send + 'a>> {
        Box::pin(async move {
            self.record(
                api_key,
                Call::ListWorkspaces {
                    api_key: api_key.to_string(),
                },
            )?;
            let state = self.state.read().unwrap();
            if state.failing_keys.iter().any(|k| k == api_key) {
                return Err(AfmError::Http {
                    action: "get postman workspace",
                    status: "503 Service Unavailable".to_string(),
                });
            }
            Ok(state.workspaces.get(api_key).cloned().unwrap_or_default())
        })
    }

    fn create_workspace<'a>(
        &'a self,
        name: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Workspace>> + Send + 'a>> {
        Box::pin(async move {
            self.record(
                api_key,
                Call::CreateWorkspace {
                    name: name.to_string(),
                    api_key: api_key.to_string(),
                },
            )?;
            let mut state = self.state.write().unwrap();
            state.next_id += 1;
            let workspace = Workspace {
                id: format!("ws-new-{}", state.next_id),
                name: name.to_string(),
                kind: WorkspaceType::Personal,
            };
            state
                .workspaces
                .entry(api_key.to_string())
                .or_default()
                .push(workspace.clone());
            Ok(workspace)
        })
    }

    fn list_collections<'a>(
        &'a self,
        workspace_id: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CollectionSummary>>> + Send + 'a>> {
        Box::pin(async move {
            self.record(
                api_key,
                Call::ListCollections {
                    workspace_id: workspace_id.to_string(),
                    api_key: api_key.to_string(),
                },
            )?;
            let state = self.state.read().unwrap();
            Ok(state
                .collections
                .get(api_key)
                .map(|list| list.iter().map(|(s, _)| s.clone()).collect())
                .unwrap_or_default())
        })
    }

    fn get_collection<'a>(
        &'a self,
        collection_id: &'a str,
        api_key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>> {
        Box::pin(async move {
            self.record(
                api_key,
                Call::GetCollection {
                    collection_id: collection_id.to_string(),
                    api_key: api_key.to_string(),
                },
            )?;
            let state = self.state.read().unwrap();
            state
                .collections
                .get(api_key)
                .and_then(|list| list.iter().find(|(s, _)| s.id == collection_id))
                .map(|(_, doc)| doc.clone())
                .ok_or_else(|| AfmError::Http {
                    action: "get postman collection",
                    status: "404 Not Found".to_string(),
                })
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
            self.record(
                api_key,
                Call::CreateCollection {
                    workspace_id: workspace_id.to_string(),
                    api_key: api_key.to_string(),
                    shape,
                    document: document.clone(),
                },
            )?;
            let mut state = self.state.write().unwrap();
            state.next_id += 1;
            Ok(serde_json::json!({
                "collection": { "id": format!("col-new-{}", state.next_id) }
            }))
        })
    }
}
