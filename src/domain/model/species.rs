use crate::domain::error::DomainError;
use crate::domain::model::{
    AdjustmentAmount, Kingdom, Phylum, SpeciesId, SpeciesName, MAX_QUANTITY, MIN_QUANTITY,
};

/// 種集約
/// 動物園で飼育している種ごとの頭数を管理する
///
/// IDはストアへの初回保存時に採番される。未保存の種は`id()`が`None`を返す。
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    id: Option<SpeciesId>,
    species_name: SpeciesName,
    kingdom: Kingdom,
    phylum: Phylum,
    quantity: u32,
}

impl Species {
    /// 新しい（未保存の）種を作成
    /// 登録時の数量は1〜10である必要がある
    ///
    /// # Arguments
    /// * `species_name` - 種名
    /// * `kingdom` - 界
    /// * `phylum` - 門
    /// * `quantity` - 初期頭数
    pub fn new(
        species_name: SpeciesName,
        kingdom: Kingdom,
        phylum: Phylum,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(DomainError::InvalidQuantity(format!(
                "数量は{}〜{}の範囲である必要があります: {}",
                MIN_QUANTITY, MAX_QUANTITY, quantity
            )));
        }
        Ok(Self {
            id: None,
            species_name,
            kingdom,
            phylum,
            quantity,
        })
    }

    /// 永続化済みのデータから種を再構築する
    /// 減少操作で0になった種も読み戻せるよう、数量の下限は検証しない
    pub fn reconstruct(
        id: SpeciesId,
        species_name: SpeciesName,
        kingdom: Kingdom,
        phylum: Phylum,
        quantity: u32,
    ) -> Self {
        Self {
            id: Some(id),
            species_name,
            kingdom,
            phylum,
            quantity,
        }
    }

    /// 種IDを取得（未保存の場合はNone）
    pub fn id(&self) -> Option<SpeciesId> {
        self.id
    }

    /// 種名を取得
    pub fn species_name(&self) -> &SpeciesName {
        &self.species_name
    }

    /// 界を取得
    pub fn kingdom(&self) -> Kingdom {
        self.kingdom
    }

    /// 門を取得
    pub fn phylum(&self) -> Phylum {
        self.phylum
    }

    /// 頭数を取得
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// 頭数を増やす
    ///
    /// # Returns
    /// * `Ok(())` - 増加成功
    /// * `Err(DomainError::LimitExceeded)` - 増加後が上限を超える（頭数は変わらない）
    pub fn increase(&mut self, amount: AdjustmentAmount) -> Result<(), DomainError> {
        let increased = self.quantity + amount.value();
        if increased > MAX_QUANTITY {
            return Err(DomainError::LimitExceeded {
                species_name: self.species_name.to_string(),
            });
        }
        self.quantity = increased;
        Ok(())
    }

    /// 頭数を減らす
    /// ちょうど0になる減少は許可する
    ///
    /// # Returns
    /// * `Ok(())` - 減少成功
    /// * `Err(DomainError::AlreadyZero)` - 減少後が0未満になる（頭数は変わらない）
    pub fn decrease(&mut self, amount: AdjustmentAmount) -> Result<(), DomainError> {
        let decreased = self
            .quantity
            .checked_sub(amount.value())
            .ok_or(DomainError::AlreadyZero)?;
        self.quantity = decreased;
        Ok(())
    }
}
