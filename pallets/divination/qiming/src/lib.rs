//! # 起名 Pallet (Pallet Qiming)
//!
//! ## 概述
//!
//! 本 Pallet 实现了链上八字五行平衡分析与吉名搜索，包括：
//! - 四柱五行计分（天干地支固定归属表）
//! - 旺衰排名与命局分类（独旺 / 偏弱 / 均衡 / 驳杂）
//! - 弱项检出与调衡建议（依生克循环推导）
//! - 五格数理推算（天人地外总，81 数理）
//! - 单字名 / 双字名吉名搜索（按五行分组的候选字库）
//! - 生肖合冲刑害破关系查询
//!
//! ## 数据流
//!
//! 两条相互独立的管线：
//! 1. 四柱索引 → 五行计分 → 旺衰分类 → 调衡建议
//! 2. 候选字库 → 五格数理 → 吉名筛选（以管线 1 检出的弱项
//!    限定搜索的五行分组）
//!
//! 四柱由外部排盘方提供（本模块不做历法换算）；候选字库由
//! 授权账户批量导入，只读共享给所有查询。
//!
//! ## 存储设计
//!
//! 命盘仅存四柱索引等精简数据（~60 bytes），平衡分析、命局
//! 解读与吉名搜索全部通过 Runtime API 实时计算，免费且不上链。
//!
//! ## 使用示例
//!
//! ```ignore
//! // 存入一张命盘（四柱干支索引由排盘方算好）
//! Qiming::create_analysis(
//!     origin,
//!     Some(b"长子".to_vec().try_into().unwrap()),
//!     ChartIndex {
//!         year_gan: 8, year_zhi: 0,   // 壬子
//!         month_gan: 9, month_zhi: 11, // 癸亥
//!         day_gan: 8, day_zhi: 0,     // 壬子
//!         hour_gan: 9, hour_zhi: 11,  // 癸亥
//!     },
//! )?;
//! // 之后经 Runtime API 免费查询平衡分析与吉名
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod algorithm;
pub mod constants;
pub mod interpretation;
pub mod naming;
pub mod runtime_api;
pub mod types;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;


#[frame_support::pallet]
pub mod pallet {
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;
    use sp_std::prelude::*;

    use crate::weights::WeightInfo;
    use crate::{algorithm, constants, interpretation, naming};

    pub use crate::types::*;

    /// Pallet 配置 Trait
    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// 权重信息
        type WeightInfo: WeightInfo;

        /// 每个账户最多保存的命盘分析数量
        #[pallet::constant]
        type MaxAnalysesPerAccount: Get<u32>;

        /// 每个五行分组的候选字上限
        #[pallet::constant]
        type MaxCandidatesPerElement: Get<u32>;

        /// 单次批量导入候选字的上限
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    // ========================================================================
    // 存储项
    // ========================================================================

    /// 下一个命盘分析 ID
    #[pallet::storage]
    #[pallet::getter(fn next_analysis_id)]
    pub type NextAnalysisId<T> = StorageValue<_, u64, ValueQuery>;

    /// 命盘分析记录
    ///
    /// 键：分析 ID
    /// 值：精简记录（所有者、名称、四柱索引、创建区块）
    #[pallet::storage]
    #[pallet::getter(fn analysis_by_id)]
    pub type AnalysisById<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        u64,
        ChartAnalysis<T::AccountId, BlockNumberFor<T>>,
    >;

    /// 用户命盘索引
    ///
    /// 键：用户账户
    /// 值：该用户的所有分析 ID 列表
    #[pallet::storage]
    #[pallet::getter(fn user_analyses)]
    pub type UserAnalyses<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxAnalysesPerAccount>,
        ValueQuery,
    >;

    /// 候选字库（按五行分组）
    ///
    /// 键：五行
    /// 值：该五行的候选字列表（导入顺序存放，搜索时排序）
    #[pallet::storage]
    #[pallet::getter(fn candidate_pool)]
    pub type CandidatePool<T: Config> = StorageMap<
        _,
        Twox64Concat,
        WuXing,
        BoundedVec<CandidateChar, T::MaxCandidatesPerElement>,
        ValueQuery,
    >;

    /// 有权限维护字库的账户
    #[pallet::storage]
    #[pallet::getter(fn data_authorities)]
    pub type DataAuthorities<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 命盘分析已创建 [所有者, 分析ID]
        AnalysisCreated {
            owner: T::AccountId,
            analysis_id: u64,
        },
        /// 命盘分析已删除 [所有者, 分析ID]
        AnalysisDeleted {
            owner: T::AccountId,
            analysis_id: u64,
        },
        /// 候选字库已更新 [维护者, 入库条数]
        CandidatePoolUpdated {
            updater: T::AccountId,
            accepted: u32,
        },
        /// 某五行分组的候选字已清空
        CandidatePoolCleared { wuxing: WuXing },
        /// 添加了字库维护权限
        AuthorityAdded { account: T::AccountId },
        /// 移除了字库维护权限
        AuthorityRemoved { account: T::AccountId },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 无效的天干索引（应为 0-9）
        InvalidTianGan,
        /// 无效的地支索引（应为 0-11）
        InvalidDiZhi,
        /// 命盘分析数量超限
        TooManyAnalyses,
        /// 命盘分析不存在
        AnalysisNotFound,
        /// 非记录所有者
        NotOwner,
        /// 无字库维护权限
        NoPermission,
        /// 批量导入数量超限
        BatchTooLarge,
        /// 候选字分组容量已满
        PoolCapacityExceeded,
        /// 分析 ID 已达到最大值
        AnalysisIdOverflow,
    }

    // ========================================================================
    // 可调用函数
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 创建命盘分析
        ///
        /// 存入一张四柱命盘的精简记录。四柱的干支索引由外部
        /// 排盘方计算（公历农历换算、真太阳时等均不在本模块
        /// 职责内），此处仅做索引合法性校验。
        ///
        /// # 参数
        /// - `origin`: 交易发起者
        /// - `name`: 命盘名称（可选，最大 32 字节 UTF-8）
        /// - `chart`: 四柱干支索引
        ///
        /// # 注意
        /// 平衡分析与吉名搜索不在此处计算，经 Runtime API
        /// 免费查询即可，避免无谓的链上开销。
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_analysis())]
        pub fn create_analysis(
            origin: OriginFor<T>,
            name: Option<BoundedVec<u8, ConstU32<32>>>,
            chart: ChartIndex,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            // 入口处严格校验；算法层对脏索引另有宽容处理
            for gan in chart.gans() {
                ensure!(TianGan::from_index(gan).is_some(), Error::<T>::InvalidTianGan);
            }
            for zhi in chart.zhis() {
                ensure!(DiZhi::from_index(zhi).is_some(), Error::<T>::InvalidDiZhi);
            }

            let existing = UserAnalyses::<T>::get(&who);
            ensure!(
                (existing.len() as u32) < T::MaxAnalysesPerAccount::get(),
                Error::<T>::TooManyAnalyses
            );

            let analysis_id = NextAnalysisId::<T>::get();
            ensure!(analysis_id < u64::MAX, Error::<T>::AnalysisIdOverflow);

            let record = ChartAnalysis {
                owner: who.clone(),
                name: name.unwrap_or_default(),
                chart,
                created_at: frame_system::Pallet::<T>::block_number(),
            };

            AnalysisById::<T>::insert(analysis_id, record);
            UserAnalyses::<T>::try_mutate(&who, |list| {
                list.try_push(analysis_id).map_err(|_| Error::<T>::TooManyAnalyses)
            })?;
            NextAnalysisId::<T>::put(analysis_id + 1);

            log::debug!(target: "qiming", "命盘分析已创建: id={}", analysis_id);

            Self::deposit_event(Event::AnalysisCreated { owner: who, analysis_id });

            Ok(())
        }

        /// 删除命盘分析
        ///
        /// 只有记录所有者可以删除自己的命盘。
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::delete_analysis())]
        pub fn delete_analysis(origin: OriginFor<T>, analysis_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let record = AnalysisById::<T>::get(analysis_id).ok_or(Error::<T>::AnalysisNotFound)?;
            ensure!(record.owner == who, Error::<T>::NotOwner);

            AnalysisById::<T>::remove(analysis_id);
            UserAnalyses::<T>::mutate(&who, |list| {
                list.retain(|id| *id != analysis_id);
            });

            Self::deposit_event(Event::AnalysisDeleted { owner: who, analysis_id });

            Ok(())
        }

        /// 批量导入候选字
        ///
        /// 由授权账户把外部字库（字、笔画、五行）分批写入链上。
        /// 笔画为 0 或并非单个汉字的行、以及组内已存在的重复字
        /// 静默跳过——与计分环节对脏数据的宽容处理一致；入库
        /// 条数在事件中给出。
        ///
        /// # 权限
        /// 需要字库维护权限（见 `add_authority`）。
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::batch_set_candidates(rows.len() as u32))]
        pub fn batch_set_candidates(
            origin: OriginFor<T>,
            rows: Vec<CandidateChar>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::has_authority(&who), Error::<T>::NoPermission);
            ensure!(rows.len() as u32 <= T::MaxBatchSize::get(), Error::<T>::BatchTooLarge);

            let submitted = rows.len();
            let mut accepted = 0u32;
            for row in rows {
                if !row.is_well_formed() {
                    continue;
                }
                CandidatePool::<T>::try_mutate(row.wuxing, |pool| -> DispatchResult {
                    if pool.iter().any(|c| c.character == row.character) {
                        return Ok(());
                    }
                    pool.try_push(row).map_err(|_| Error::<T>::PoolCapacityExceeded)?;
                    accepted += 1;
                    Ok(())
                })?;
            }

            log::info!(
                target: "qiming",
                "字库更新: 提交 {} 条, 入库 {} 条",
                submitted,
                accepted
            );

            Self::deposit_event(Event::CandidatePoolUpdated { updater: who, accepted });

            Ok(())
        }

        /// 清空某一五行分组的候选字
        ///
        /// # 权限
        /// 需要字库维护权限。
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::clear_candidates())]
        pub fn clear_candidates(origin: OriginFor<T>, wuxing: WuXing) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::has_authority(&who), Error::<T>::NoPermission);

            CandidatePool::<T>::remove(wuxing);

            Self::deposit_event(Event::CandidatePoolCleared { wuxing });

            Ok(())
        }

        /// 添加字库维护权限
        ///
        /// # 权限
        /// 必须是 Root。
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::add_authority())]
        pub fn add_authority(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            ensure_root(origin)?;

            DataAuthorities::<T>::insert(&account, true);

            Self::deposit_event(Event::AuthorityAdded { account });

            Ok(())
        }

        /// 移除字库维护权限
        ///
        /// # 权限
        /// 必须是 Root。
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::remove_authority())]
        pub fn remove_authority(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            ensure_root(origin)?;

            DataAuthorities::<T>::remove(&account);

            Self::deposit_event(Event::AuthorityRemoved { account });

            Ok(())
        }
    }

    // ========================================================================
    // 内部辅助与免费查询
    // ========================================================================

    impl<T: Config> Pallet<T> {
        /// 检查账户是否有字库维护权限
        pub fn has_authority(account: &T::AccountId) -> bool {
            DataAuthorities::<T>::get(account)
        }

        /// RPC 接口：实时计算某张命盘的五行平衡分析
        ///
        /// 由 Runtime API 调用，不消耗 gas，不上链。
        pub fn api_get_balance_analysis(analysis_id: u64) -> Option<BalanceAnalysis> {
            let record = AnalysisById::<T>::get(analysis_id)?;
            Some(algorithm::analyze(&record.chart))
        }

        /// RPC 接口：实时渲染某张命盘的命局解读文案
        pub fn api_get_balance_reading(analysis_id: u64) -> Option<interpretation::BalanceReading> {
            let analysis = Self::api_get_balance_analysis(analysis_id)?;
            Some(interpretation::interpret(&analysis))
        }

        /// RPC 接口：临时分析（不存储，免费）
        ///
        /// 直接对给定四柱做平衡分析，用于排盘预览。
        pub fn api_analyze_chart(chart: ChartIndex) -> BalanceAnalysis {
            algorithm::analyze(&chart)
        }

        /// RPC 接口：依命盘弱项搜索吉名
        ///
        /// 以该命盘检出的弱项为目标五行，在候选字库中搜索
        /// 五格合吉的单字名与双字名。
        ///
        /// # 参数
        /// - `analysis_id`: 命盘分析 ID
        /// - `surname_strokes`: 姓氏笔画（未知传 None，按 0 计）
        /// - `limit`: 返回条数上限（0 表示不限）
        pub fn api_search_names(
            analysis_id: u64,
            surname_strokes: Option<u8>,
            limit: u32,
        ) -> Option<Vec<AuspiciousName>> {
            let record = AnalysisById::<T>::get(analysis_id)?;
            let analysis = algorithm::analyze(&record.chart);
            Some(Self::api_search_names_for(analysis.weak, surname_strokes, limit))
        }

        /// RPC 接口：按指定五行搜索吉名
        pub fn api_search_names_for(
            desired: Vec<WuXing>,
            surname_strokes: Option<u8>,
            limit: u32,
        ) -> Vec<AuspiciousName> {
            let groups = naming::assemble_pool(&desired, |wuxing| {
                CandidatePool::<T>::get(wuxing).into_inner()
            });
            let mut results = naming::search_names(&groups, surname_strokes.unwrap_or(0));

            log::debug!(
                target: "qiming",
                "吉名搜索: 目标五行 {} 组, 命中 {} 条",
                groups.len(),
                results.len()
            );

            // limit 仅裁剪传输层输出，搜索本身不截断
            if limit > 0 && results.len() > limit as usize {
                results.truncate(limit as usize);
            }
            results
        }

        /// RPC 接口：查询某字的笔画数
        ///
        /// 在整个候选字库中检索（姓氏与名字用字同源）；
        /// 查不到返回 None，调用方按 0 计即可。
        pub fn api_surname_strokes(character: Vec<u8>) -> Option<u8> {
            for wuxing in WuXing::ALL {
                if let Some(found) = CandidatePool::<T>::get(wuxing)
                    .iter()
                    .find(|c| c.character.as_slice() == character.as_slice())
                {
                    return Some(found.strokes);
                }
            }
            None
        }

        /// RPC 接口：查询某一地支的生肖合冲刑害破关系
        pub fn api_zodiac_compatibility(zhi: u8) -> Option<ZodiacCompatibility> {
            constants::zodiac_compatibility(zhi)
        }
    }
}
