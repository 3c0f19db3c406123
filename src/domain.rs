// ドメイン層
// 種の在庫に関するビジネスルールと外部依存のポートを定義する

pub mod error;
pub mod model;
pub mod port;
