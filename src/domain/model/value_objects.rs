use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// 登録時の最小数量
pub const MIN_QUANTITY: u32 = 1;

/// 保有できる最大数量
pub const MAX_QUANTITY: u32 = 10;

/// 種名の最大文字数
pub const MAX_SPECIES_NAME_LENGTH: usize = 50;

/// 種の一意識別子
/// ストアが登録時に採番する
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpeciesId(i64);

impl SpeciesId {
    /// 数値からSpeciesIdを作成
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// 文字列からSpeciesIdを作成
    pub fn from_string(s: &str) -> Result<Self, DomainError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidValue(format!("無効な種ID: {}", s)))
    }

    /// 内部の数値を取得
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 種名を表す値オブジェクト
/// 1〜50文字で、空白のみは許可しない
/// 一意性と検索は大文字小文字を区別した完全一致で行う
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeciesName(String);

impl SpeciesName {
    /// 新しい種名を作成
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidSpeciesName(
                "種名は空にできません".to_string(),
            ));
        }
        if name.chars().count() > MAX_SPECIES_NAME_LENGTH {
            return Err(DomainError::InvalidSpeciesName(format!(
                "種名は{}文字以内である必要があります",
                MAX_SPECIES_NAME_LENGTH
            )));
        }
        Ok(Self(name))
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 界（生物分類の最上位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kingdom {
    Animal,
    Plant,
    Fungi,
    Protist,
    Monera,
}

impl Kingdom {
    /// 永続化・API上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            Kingdom::Animal => "ANIMAL",
            Kingdom::Plant => "PLANT",
            Kingdom::Fungi => "FUNGI",
            Kingdom::Protist => "PROTIST",
            Kingdom::Monera => "MONERA",
        }
    }
}

impl fmt::Display for Kingdom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kingdom {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANIMAL" => Ok(Kingdom::Animal),
            "PLANT" => Ok(Kingdom::Plant),
            "FUNGI" => Ok(Kingdom::Fungi),
            "PROTIST" => Ok(Kingdom::Protist),
            "MONERA" => Ok(Kingdom::Monera),
            _ => Err(DomainError::InvalidValue(format!("無効な界: {}", s))),
        }
    }
}

/// 門
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phylum {
    Chordata,
    Arthropoda,
    Mollusca,
    Annelida,
    Cnidaria,
    Echinodermata,
    Porifera,
    Platyhelminthes,
    Nematoda,
}

impl Phylum {
    /// 永続化・API上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            Phylum::Chordata => "CHORDATA",
            Phylum::Arthropoda => "ARTHROPODA",
            Phylum::Mollusca => "MOLLUSCA",
            Phylum::Annelida => "ANNELIDA",
            Phylum::Cnidaria => "CNIDARIA",
            Phylum::Echinodermata => "ECHINODERMATA",
            Phylum::Porifera => "PORIFERA",
            Phylum::Platyhelminthes => "PLATYHELMINTHES",
            Phylum::Nematoda => "NEMATODA",
        }
    }
}

impl fmt::Display for Phylum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phylum {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHORDATA" => Ok(Phylum::Chordata),
            "ARTHROPODA" => Ok(Phylum::Arthropoda),
            "MOLLUSCA" => Ok(Phylum::Mollusca),
            "ANNELIDA" => Ok(Phylum::Annelida),
            "CNIDARIA" => Ok(Phylum::Cnidaria),
            "ECHINODERMATA" => Ok(Phylum::Echinodermata),
            "PORIFERA" => Ok(Phylum::Porifera),
            "PLATYHELMINTHES" => Ok(Phylum::Platyhelminthes),
            "NEMATODA" => Ok(Phylum::Nematoda),
            _ => Err(DomainError::InvalidValue(format!("無効な門: {}", s))),
        }
    }
}

/// 在庫の増減量
/// 1〜10の範囲であることを生成時に保証する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustmentAmount(u32);

impl AdjustmentAmount {
    /// 新しい増減量を作成
    pub fn new(amount: u32) -> Result<Self, DomainError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&amount) {
            return Err(DomainError::InvalidQuantity(format!(
                "増減量は{}〜{}の範囲である必要があります: {}",
                MIN_QUANTITY, MAX_QUANTITY, amount
            )));
        }
        Ok(Self(amount))
    }

    /// 数値を取得
    pub fn value(&self) -> u32 {
        self.0
    }
}
