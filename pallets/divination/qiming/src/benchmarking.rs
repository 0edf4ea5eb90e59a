//! # Qiming Pallet Benchmarking
//!
//! 起名模块基准测试

use super::*;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::prelude::*;

use crate::types::{CandidateChar, ChartIndex, WuXing};

/// 一张索引合法的样例命盘（壬子 癸亥 壬子 癸亥）
fn sample_chart() -> ChartIndex {
    ChartIndex {
        year_gan: 8,
        year_zhi: 0,
        month_gan: 9,
        month_zhi: 11,
        day_gan: 8,
        day_zhi: 0,
        hour_gan: 9,
        hour_zhi: 11,
    }
}

/// 生成第 i 个互不重复的候选字（从 U+4E00 起顺序取码点）
fn nth_candidate(i: u32) -> CandidateChar {
    let cp = 0x4E00 + i;
    let bytes = sp_std::vec![
        0xE0 | (cp >> 12) as u8,
        0x80 | ((cp >> 6) & 0x3F) as u8,
        0x80 | (cp & 0x3F) as u8,
    ];
    CandidateChar {
        character: bytes.try_into().expect("3 字节 UTF-8 不超上限"),
        strokes: (i % 20 + 1) as u8,
        wuxing: WuXing::Mu,
    }
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_analysis() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), None, sample_chart());
    }

    #[benchmark]
    fn delete_analysis() {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::create_analysis(
            RawOrigin::Signed(caller.clone()).into(),
            None,
            sample_chart(),
        )
        .expect("创建样例命盘不应失败");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 0);
    }

    #[benchmark]
    fn batch_set_candidates(n: Linear<1, 8>) {
        let caller: T::AccountId = whitelisted_caller();
        DataAuthorities::<T>::insert(&caller, true);
        let rows: Vec<CandidateChar> = (0..n).map(nth_candidate).collect();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), rows);
    }

    #[benchmark]
    fn clear_candidates() {
        let caller: T::AccountId = whitelisted_caller();
        DataAuthorities::<T>::insert(&caller, true);
        let rows: Vec<CandidateChar> = (0..4).map(nth_candidate).collect();
        Pallet::<T>::batch_set_candidates(RawOrigin::Signed(caller.clone()).into(), rows)
            .expect("导入样例字库不应失败");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), WuXing::Mu);
    }

    #[benchmark]
    fn add_authority() {
        let account: T::AccountId = account("authority", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Root, account);
    }

    #[benchmark]
    fn remove_authority() {
        let account: T::AccountId = account("authority", 0, 0);
        DataAuthorities::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Root, account);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
