//! Postman API のレスポンス/リクエスト型

use serde::{Deserialize, Serialize};

/// ワークスペース種別
///
/// 未知の値は `Other` として保持する。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkspaceType {
    #[default]
    Personal,
    Team,
    Private,
    Public,
    Partner,
    Other(String),
}

impl WorkspaceType {
    pub fn as_str(&self) -> &str {
        match self {
            WorkspaceType::Personal => "personal",
            WorkspaceType::Team => "team",
            WorkspaceType::Private => "private",
            WorkspaceType::Public => "public",
            WorkspaceType::Partner => "partner",
            WorkspaceType::Other(s) => s,
        }
    }
}

impl From<String> for WorkspaceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "personal" => WorkspaceType::Personal,
            "team" => WorkspaceType::Team,
            "private" => WorkspaceType::Private,
            "public" => WorkspaceType::Public,
            "partner" => WorkspaceType::Partner,
            _ => WorkspaceType::Other(value),
        }
    }
}

impl From<WorkspaceType> for String {
    fn from(value: WorkspaceType) -> Self {
        value.as_str().to_string()
    }
}

/// ワークスペース
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: WorkspaceType,
}

/// コレクション一覧の要素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// コレクション作成時のリクエストボディ形式
///
/// 同期処理は取得したレスポンスをそのまま送るため `Raw` のみを使う。
/// `Wrapped` は封筒を持たない素のドキュメントを送るライブラリ利用者向け。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateShape {
    /// `{ "collection": <document> }` で包んで送る
    Wrapped,
    /// ドキュメントをそのまま送る
    Raw,
}

/// `GET /workspaces`
#[derive(Debug, Deserialize)]
pub(crate) struct WorkspacesEnvelope {
    pub workspaces: Vec<Workspace>,
}

/// `POST /workspaces` のレスポンス
#[derive(Debug, Deserialize)]
pub(crate) struct WorkspaceEnvelope {
    pub workspace: Workspace,
}

/// `GET /collections`
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsEnvelope {
    pub collections: Vec<CollectionSummary>,
}

/// `POST /workspaces` のリクエストボディ
#[derive(Debug, Serialize)]
pub(crate) struct CreateWorkspaceRequest<'a> {
    pub workspace: NewWorkspace<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewWorkspace<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: WorkspaceType,
}
