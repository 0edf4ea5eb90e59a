//! # Qiming Pallet Weights
//!
//! 起名模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
    fn create_analysis() -> Weight;
    fn delete_analysis() -> Weight;
    fn batch_set_candidates(n: u32) -> Weight;
    fn clear_candidates() -> Weight;
    fn add_authority() -> Weight;
    fn remove_authority() -> Weight;
}

/// Substrate 权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn create_analysis() -> Weight {
        Weight::from_parts(40_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn delete_analysis() -> Weight {
        Weight::from_parts(25_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn batch_set_candidates(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(2_000_000, 0).saturating_mul(n as u64))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(n as u64))
    }
    fn clear_candidates() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn add_authority() -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn remove_authority() -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

/// 默认权重实现（用于测试）
impl WeightInfo for () {
    fn create_analysis() -> Weight {
        Weight::from_parts(40_000_000, 0)
    }
    fn delete_analysis() -> Weight {
        Weight::from_parts(25_000_000, 0)
    }
    fn batch_set_candidates(n: u32) -> Weight {
        Weight::from_parts(10_000_000 + 2_000_000 * n as u64, 0)
    }
    fn clear_candidates() -> Weight {
        Weight::from_parts(15_000_000, 0)
    }
    fn add_authority() -> Weight {
        Weight::from_parts(10_000_000, 0)
    }
    fn remove_authority() -> Weight {
        Weight::from_parts(10_000_000, 0)
    }
}
