//! # afm-tools
//!
//! Postman のコレクションをアカウント間で同期する CLI。
//!
//! - `store`: ~/.afm-tools/config.yaml の読み書き
//! - `setup`: --init-postman の対話的な認証情報解決
//! - `postman`: ワークスペース/コレクション API クライアント
//! - `sync`: コレクションの取得と再作成

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod output;
pub mod postman;
pub mod setup;
pub mod store;
pub mod sync;
