use crate::postman::CollectionSummary;
use crate::sync::SyncReport;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// 同期結果のサマリー
    pub fn synced(report: &SyncReport) -> Self {
        let destination = if report.destination_workspace.is_empty() {
            "default workspace".to_string()
        } else {
            format!("workspace {}", report.destination_workspace)
        };

        let created = report
            .created_id
            .as_deref()
            .map(|id| format!(" as {}", id))
            .unwrap_or_default();

        Self {
            prefix: "✓".green().to_string(),
            message: format!(
                "Collection {} ({}) synced to {}{}",
                report.name.cyan(),
                report.source_id,
                destination,
                created
            ),
        }
    }

    /// 設定保存のサマリー
    pub fn configured(path: &str) -> Self {
        Self {
            prefix: "✓".green().to_string(),
            message: format!("Configuration saved to {}", path),
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}

/// コレクション一覧テーブル
pub fn collections_table(collections: &[CollectionSummary]) -> Option<Table> {
    if collections.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["NAME", "ID", "OWNER"]);

    for collection in collections {
        table.add_row(vec![
            collection.name.as_str(),
            collection.id.as_str(),
            collection.owner.as_deref().unwrap_or("-"),
        ]);
    }

    Some(table)
}
