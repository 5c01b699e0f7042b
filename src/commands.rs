use crate::cli::Cli;
use crate::config::HttpConfig;
use crate::postman::PostmanClient;

pub mod init;
pub mod list;
pub mod sync;

/// 設定を読み込んだうえで、指定されたモードを順に実行
pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let client = PostmanClient::new(&HttpConfig::default());

    let config = init::run(&client, cli.init_postman).await?;

    if cli.list {
        list::run(&client, &config).await?;
    }

    if cli.sync_postman {
        let name = cli
            .collection_name
            .ok_or_else(|| "Collection name is required with --sync-postman".to_string())?;
        sync::run(&client, &config, &name).await?;
    }

    Ok(())
}
