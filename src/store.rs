//! 認証情報ストア（~/.afm-tools/config.yaml）

use crate::error::{AfmError, Result};
use crate::setup::CredentialSetup;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// 設定ディレクトリ名（ホーム直下）
pub const CONFIG_DIR_NAME: &str = ".afm-tools";

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// 永続化される認証情報
///
/// primary は同期元、secondary は同期先のアカウント。
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    #[serde(rename = "postman_api_key", deserialize_with = "null_as_empty")]
    pub primary_api_key: String,
    #[serde(rename = "postman_workspace_id", deserialize_with = "null_as_empty")]
    pub primary_workspace_id: String,
    #[serde(rename = "postman_personal_api_key", deserialize_with = "null_as_empty")]
    pub secondary_api_key: String,
    #[serde(rename = "postman_personal_workspace_id", deserialize_with = "null_as_empty")]
    pub secondary_workspace_id: String,
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("primary_api_key", &mask(&self.primary_api_key))
            .field("primary_workspace_id", &self.primary_workspace_id)
            .field("secondary_api_key", &mask(&self.secondary_api_key))
            .field("secondary_workspace_id", &self.secondary_workspace_id)
            .finish()
    }
}

/// `key:` のように値が空（null）のキーを空文字列として扱う
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn mask(key: &str) -> &'static str {
    if key.is_empty() {
        ""
    } else {
        "***"
    }
}

/// 設定ファイルの読み書き
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// デフォルトの場所（~/.afm-tools）
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or(AfmError::HomeDir)?;
        Ok(Self::at(home.join(CONFIG_DIR_NAME)))
    }

    /// 任意のディレクトリを使用
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// 設定を読み込む
    ///
    /// `init` が与えられた場合はファイルが無ければ作成し、対話的に値を更新する。
    /// モードに関わらず最後に必ずファイルへ書き戻す。対話中に失敗した場合も
    /// それまでに更新された値を書き戻したうえで元のエラーを返す。
    pub async fn load(&self, init: Option<&mut CredentialSetup<'_>>) -> Result<Configuration> {
        self.ensure_exists(init.is_some())?;

        let mut config = self.read()?;

        let outcome = match init {
            Some(setup) => setup.run(&mut config).await,
            None => Ok(()),
        };

        let written = self.write(&config);

        match (outcome, written) {
            (Ok(()), Ok(())) => Ok(config),
            (Ok(()), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(write_err)) => {
                warn!(error = %write_err, "failed to persist partial configuration");
                Err(e)
            }
        }
    }

    /// ディレクトリとファイルの存在を確認（init時は作成）
    fn ensure_exists(&self, init_mode: bool) -> Result<()> {
        if !self.dir.is_dir() {
            if !init_mode {
                return Err(AfmError::ConfigMissing {
                    kind: "directory",
                    path: self.dir.clone(),
                });
            }
            debug!(path = %self.dir.display(), "creating config directory");
            fs::create_dir_all(&self.dir)?;
        }

        let file = self.file_path();
        if !file.is_file() {
            if !init_mode {
                return Err(AfmError::ConfigMissing { kind: "file", path: file });
            }
            debug!(path = %file.display(), "creating empty config file");
            fs::File::create(&file)?;
        }

        Ok(())
    }

    /// ファイルを読み込んでパース（空ファイルは全フィールド空）
    pub fn read(&self) -> Result<Configuration> {
        let path = self.file_path();
        let content = fs::read_to_string(&path)?;

        if content.trim().is_empty() {
            return Ok(Configuration::default());
        }

        serde_yaml::from_str(&content).map_err(|source| AfmError::ConfigParse { path, source })
    }

    /// ファイルを上書き保存
    pub fn write(&self, config: &Configuration) -> Result<()> {
        let content = serde_yaml::to_string(config)?;
        fs::write(self.file_path(), content)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
