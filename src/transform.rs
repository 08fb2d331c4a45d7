//! テキスト変換
//!
//! スクリーンファイルに対する純粋なテキスト変換。
//! import 挿入とスタイル値の書き換えはどちらも正規表現ベースで、
//! 対象言語の構文解析は行わない。

pub mod imports;
pub mod styles;

pub use imports::ImportInsertion;
pub use styles::StyleRules;
