use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "afm-tools")]
#[command(about = "Postman collection sync CLI", long_about = None)]
#[command(override_usage = "afm-tools [OPTIONS] [COLLECTION]")]
pub struct Cli {
    /// Initialize postman credential
    #[arg(long = "init-postman")]
    pub init_postman: bool,

    /// Sync postman collection
    #[arg(long = "sync-postman", requires = "collection_name")]
    pub sync_postman: bool,

    /// List all available postman collections
    #[arg(long)]
    pub list: bool,

    /// Collection name to sync (used with --sync-postman)
    #[arg(value_name = "COLLECTION", requires = "sync_postman")]
    pub collection_name: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
