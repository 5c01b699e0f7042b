//! 設定の読み込みと --init-postman

use crate::output::CommandSummary;
use crate::postman::PostmanApi;
use crate::setup::{stdin_prompter, CredentialSetup};
use crate::store::{ConfigStore, Configuration};

/// 設定を読み込む（`init_mode` なら対話的に更新）
pub async fn run(api: &dyn PostmanApi, init_mode: bool) -> Result<Configuration, String> {
    let store = ConfigStore::default_location().map_err(|e| e.to_string())?;

    if !init_mode {
        return store.load(None).await.map_err(|e| e.to_string());
    }

    let mut prompter = stdin_prompter();
    let mut setup = CredentialSetup::new(api, prompter.as_mut());
    let config = store
        .load(Some(&mut setup))
        .await
        .map_err(|e| e.to_string())?;

    CommandSummary::configured(&store.file_path().display().to_string()).print();
    Ok(config)
}
