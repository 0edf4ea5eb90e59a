//! # 起名模块 Runtime API
//!
//! 把 pallet 的免费查询（`api_*` 系列）声明为 Runtime API，
//! 节点侧据此提供不消耗 gas 的 RPC 查询。运行时按惯例逐一
//! 委托给 `Pallet` 的同名实现。

use sp_std::vec::Vec;

use crate::interpretation::BalanceReading;
use crate::types::{AuspiciousName, BalanceAnalysis, ChartIndex, WuXing, ZodiacCompatibility};

sp_api::decl_runtime_apis! {
    /// 五行平衡分析与吉名搜索查询接口
    pub trait QimingApi {
        /// 实时计算某张命盘的五行平衡分析
        fn get_balance_analysis(analysis_id: u64) -> Option<BalanceAnalysis>;

        /// 实时渲染某张命盘的命局解读文案
        fn get_balance_reading(analysis_id: u64) -> Option<BalanceReading>;

        /// 临时分析给定四柱（不存储）
        fn analyze_chart(chart: ChartIndex) -> BalanceAnalysis;

        /// 依命盘弱项搜索吉名；limit 为 0 表示不限
        fn search_names(
            analysis_id: u64,
            surname_strokes: Option<u8>,
            limit: u32,
        ) -> Option<Vec<AuspiciousName>>;

        /// 按指定五行搜索吉名
        fn search_names_for(
            desired: Vec<WuXing>,
            surname_strokes: Option<u8>,
            limit: u32,
        ) -> Vec<AuspiciousName>;

        /// 查询某字的笔画数（查不到按 0 计）
        fn surname_strokes(character: Vec<u8>) -> Option<u8>;

        /// 查询某一地支的生肖合冲刑害破关系
        fn zodiac_compatibility(zhi: u8) -> Option<ZodiacCompatibility>;
    }
}
