// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod time;

// 時刻関連
pub use time::{FixedClock, SteppingClock, fixed_now};

// 記事リポジトリ
pub use article_repos::{FAILING_SAVER_MESSAGE, FailingSaver, RecordingStore};
