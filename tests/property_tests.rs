use proptest::prelude::*;
use zoo_species_inventory::domain::error::DomainError;
use zoo_species_inventory::domain::model::{
    AdjustmentAmount, Kingdom, Phylum, Species, SpeciesId, SpeciesName, MAX_QUANTITY,
    MAX_SPECIES_NAME_LENGTH,
};

fn stored_species(quantity: u32) -> Species {
    Species::reconstruct(
        SpeciesId::new(1),
        SpeciesName::new("Dromedary").unwrap(),
        Kingdom::Animal,
        Phylum::Chordata,
        quantity,
    )
}

// 頭数増加のプロパティベーステスト
proptest! {
    /// 上限以内なら current + amount になる
    #[test]
    fn test_increase_within_limit_adds_amount(
        current in 0u32..=MAX_QUANTITY,
        amount in 1u32..=10,
    ) {
        prop_assume!(current + amount <= MAX_QUANTITY);
        let mut species = stored_species(current);

        species.increase(AdjustmentAmount::new(amount).unwrap()).unwrap();

        prop_assert_eq!(species.quantity(), current + amount);
    }

    /// 上限を超える場合はLimitExceededとなり、数量は変わらない
    #[test]
    fn test_increase_over_limit_is_rejected(
        current in 0u32..=MAX_QUANTITY,
        amount in 1u32..=10,
    ) {
        prop_assume!(current + amount > MAX_QUANTITY);
        let mut species = stored_species(current);

        let result = species.increase(AdjustmentAmount::new(amount).unwrap());

        prop_assert_eq!(
            result,
            Err(DomainError::LimitExceeded { species_name: "Dromedary".to_string() })
        );
        prop_assert_eq!(species.quantity(), current);
    }

    /// 増加後の数量は常に上限以下
    #[test]
    fn test_quantity_never_exceeds_limit(
        current in 0u32..=MAX_QUANTITY,
        amounts in prop::collection::vec(1u32..=10, 1..20),
    ) {
        let mut species = stored_species(current);
        for amount in amounts {
            let _ = species.increase(AdjustmentAmount::new(amount).unwrap());
            prop_assert!(species.quantity() <= MAX_QUANTITY);
        }
    }
}

// 頭数減少のプロパティベーステスト
proptest! {
    /// 0以上に収まるなら current - amount になる（0ちょうども可）
    #[test]
    fn test_decrease_within_floor_subtracts_amount(
        current in 0u32..=MAX_QUANTITY,
        amount in 1u32..=10,
    ) {
        prop_assume!(amount <= current);
        let mut species = stored_species(current);

        species.decrease(AdjustmentAmount::new(amount).unwrap()).unwrap();

        prop_assert_eq!(species.quantity(), current - amount);
    }

    /// 0を下回る場合はAlreadyZeroとなり、数量は変わらない
    #[test]
    fn test_decrease_below_zero_is_rejected(
        current in 0u32..=MAX_QUANTITY,
        amount in 1u32..=10,
    ) {
        prop_assume!(amount > current);
        let mut species = stored_species(current);

        let result = species.decrease(AdjustmentAmount::new(amount).unwrap());

        prop_assert_eq!(result, Err(DomainError::AlreadyZero));
        prop_assert_eq!(species.quantity(), current);
    }

    /// 成功した増加はその直後の同量の減少で元に戻る
    #[test]
    fn test_increase_then_decrease_restores_quantity(
        current in 0u32..=MAX_QUANTITY,
        amount in 1u32..=10,
    ) {
        let mut species = stored_species(current);
        let amount = AdjustmentAmount::new(amount).unwrap();

        if species.increase(amount).is_ok() {
            species.decrease(amount).unwrap();
            prop_assert_eq!(species.quantity(), current);
        }
    }
}

// 入力値のプロパティベーステスト
proptest! {
    /// 増減量は1〜10のみ受け付ける
    #[test]
    fn test_adjustment_amount_bounds(amount in 0u32..100) {
        let result = AdjustmentAmount::new(amount);
        prop_assert_eq!(result.is_ok(), (1..=10).contains(&amount));
    }

    /// 登録時の数量は1〜10のみ受け付ける
    #[test]
    fn test_registration_quantity_bounds(quantity in 0u32..100) {
        let result = Species::new(
            SpeciesName::new("Okapi").unwrap(),
            Kingdom::Animal,
            Phylum::Chordata,
            quantity,
        );
        prop_assert_eq!(result.is_ok(), (1..=MAX_QUANTITY).contains(&quantity));
    }

    /// 種名は空白のみでなく、最大文字数以内であれば受け付ける
    #[test]
    fn test_species_name_length(name in "[A-Za-z]{1,80}") {
        let result = SpeciesName::new(name.clone());
        prop_assert_eq!(result.is_ok(), name.chars().count() <= MAX_SPECIES_NAME_LENGTH);
    }
}
