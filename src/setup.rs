//! 初回セットアップ（--init-postman）
//!
//! APIキーとワークスペースを順に尋ね、ワークスペース名をIDへ解決して
//! 設定に書き込む。途中で失敗した場合はそこで中断する。

use crate::error::Result;
use crate::postman::{resolve_workspace_id, PostmanApi};
use crate::store::Configuration;
use inquire::Text;
use std::io::{BufRead, IsTerminal, Write};
use tracing::info;

/// ワークスペース名のデフォルト
pub const DEFAULT_WORKSPACE_NAME: &str = "My Workspace";

/// 対話入力の抽象
pub trait Prompter {
    /// `default` を提示して1行入力を受け取る（空入力なら `default`）
    fn ask(&mut self, label: &str, default: &str) -> Result<String>;
}

/// 端末向け（inquire）
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = Text::new(label).with_default(default).prompt()?;
        Ok(keep_default(&answer, default))
    }
}

/// 行単位の入力（パイプ入力・テスト用）
///
/// `Label [default]: ` を出力して1行読む。EOF は空入力として扱う。
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str, default: &str) -> Result<String> {
        write!(self.writer, "{} [{}]: ", label, default)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(keep_default(&line, default))
    }
}

/// 標準入力が端末なら inquire、そうでなければ行入力
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        Box::new(InquirePrompter)
    } else {
        Box::new(LinePrompter::new(
            std::io::stdin().lock(),
            std::io::stderr(),
        ))
    }
}

/// 行末の改行のみ取り除く（前後の空白は名前の一部として保持）
fn keep_default(answer: &str, default: &str) -> String {
    let line = answer.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        default.to_string()
    } else {
        line.to_string()
    }
}

/// 認証情報の対話的解決
pub struct CredentialSetup<'a> {
    api: &'a dyn PostmanApi,
    prompter: &'a mut dyn Prompter,
}

impl<'a> CredentialSetup<'a> {
    pub fn new(api: &'a dyn PostmanApi, prompter: &'a mut dyn Prompter) -> Self {
        Self { api, prompter }
    }

    /// Main → Personal の順にキーとワークスペースを解決
    pub async fn run(&mut self, config: &mut Configuration) -> Result<()> {
        config.primary_api_key = self
            .prompter
            .ask("Main API Key", &config.primary_api_key)?;
        config.primary_workspace_id = self
            .resolve_workspace("Main Workspace", &config.primary_api_key)
            .await?;

        config.secondary_api_key = self
            .prompter
            .ask("Personal API Key", &config.secondary_api_key)?;
        config.secondary_workspace_id = self
            .resolve_workspace("Personal Workspace", &config.secondary_api_key)
            .await?;

        Ok(())
    }

    async fn resolve_workspace(&mut self, label: &str, api_key: &str) -> Result<String> {
        let name = self.prompter.ask(label, DEFAULT_WORKSPACE_NAME)?;
        let id = resolve_workspace_id(self.api, &name, api_key).await?;
        info!(label, workspace = %name, id = %id, "resolved workspace");
        Ok(id)
    }
}

#[cfg(test)]
#[path = "setup_test.rs"]
mod tests;
