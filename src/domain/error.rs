/// ドメイン層のエラー型
/// 値オブジェクトの検証失敗と在庫数のビジネスルール違反を表現する
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// 無効な種名（例: 空文字、50文字超）
    #[error("Invalid species name: {0}")]
    InvalidSpeciesName(String),
    /// 無効な数量（例: 登録時に1〜10の範囲外）
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    /// 無効な列挙値（例: 未知の界・門）
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// 増加後の数量が上限を超える
    #[error("Can't have more animals of species {species_name}.")]
    LimitExceeded { species_name: String },
    /// 減少後の数量が0を下回る
    #[error("Can't make the number of animals negative.")]
    AlreadyZero,
}
