//! --sync-postman <COLLECTION>

use crate::output::CommandSummary;
use crate::postman::PostmanApi;
use crate::store::Configuration;
use crate::sync::CollectionSync;

pub async fn run(api: &dyn PostmanApi, config: &Configuration, name: &str) -> Result<(), String> {
    let report = CollectionSync::new(api, config)
        .sync(name)
        .await
        .map_err(|e| e.to_string())?;

    CommandSummary::synced(&report).print();
    Ok(())
}
