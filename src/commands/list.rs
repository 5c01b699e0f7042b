//! --list: primary アカウントのコレクション一覧

use crate::output::collections_table;
use crate::postman::PostmanApi;
use crate::store::Configuration;

pub async fn run(api: &dyn PostmanApi, config: &Configuration) -> Result<(), String> {
    let collections = api
        .list_collections("", &config.primary_api_key)
        .await
        .map_err(|e| e.to_string())?;

    match collections_table(&collections) {
        Some(table) => println!("{table}"),
        None => {
            println!("No collections found.");
            println!("Create one in Postman or check the main API key with 'afm-tools --init-postman'.");
        }
    }

    Ok(())
}
