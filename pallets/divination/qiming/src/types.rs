//! # 起名模块类型定义
//!
//! 五行、天干地支、四柱索引与分析结果的核心类型。
//! 所有类型均支持 SCALE 编解码，可直接用于存储与 Runtime API。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;
use sp_std::prelude::*;

use crate::constants;

/// 五行
///
/// 变体声明顺序（木、火、土、金、水）即为全模块统一的
/// 平局裁决顺序：排序、取旺衰、收集弱项时同分先论前者。
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    Clone,
    Copy,
    RuntimeDebug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    TypeInfo,
    MaxEncodedLen,
)]
pub enum WuXing {
    /// 木
    Mu,
    /// 火
    Huo,
    /// 土
    Tu,
    /// 金
    Jin,
    /// 水
    Shui,
}

impl WuXing {
    /// 声明顺序的全量列表
    pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

    /// 声明顺序下标（0-4）
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// 从下标构造（0-4 有效）
    pub fn from_index(index: u8) -> Option<WuXing> {
        Self::ALL.get(index as usize).copied()
    }

    /// 我生者（生之循环：木→火→土→金→水→木）
    pub fn generates(&self) -> WuXing {
        Self::ALL[constants::SHENG[self.index()] as usize]
    }

    /// 生我者
    pub fn generated_by(&self) -> WuXing {
        Self::ALL[constants::SHENG_NI[self.index()] as usize]
    }

    /// 我克者（克之循环：木→土→水→火→金→木）
    pub fn controls(&self) -> WuXing {
        Self::ALL[constants::KE[self.index()] as usize]
    }

    /// 克我者
    pub fn controlled_by(&self) -> WuXing {
        Self::ALL[constants::KE_NI[self.index()] as usize]
    }

    /// 汉字名
    pub fn name(&self) -> &'static str {
        constants::WUXING_NAMES[self.index()]
    }
}

/// 天干（索引 0-9：甲乙丙丁戊己庚辛壬癸）
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    Clone,
    Copy,
    RuntimeDebug,
    PartialEq,
    Eq,
    TypeInfo,
    MaxEncodedLen,
)]
pub struct TianGan(pub u8);

impl TianGan {
    /// 从索引构造，越界返回 None
    pub fn from_index(index: u8) -> Option<TianGan> {
        (index < 10).then_some(TianGan(index))
    }

    /// 所属五行
    pub fn wuxing(&self) -> WuXing {
        constants::GAN_WUXING[(self.0 % 10) as usize]
    }

    /// 阳干为偶数位（甲丙戊庚壬）
    pub fn is_yang(&self) -> bool {
        self.0 % 2 == 0
    }
}

/// 地支（索引 0-11：子丑寅卯辰巳午未申酉戌亥）
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    Clone,
    Copy,
    RuntimeDebug,
    PartialEq,
    Eq,
    TypeInfo,
    MaxEncodedLen,
)]
pub struct DiZhi(pub u8);

impl DiZhi {
    /// 从索引构造，越界返回 None
    pub fn from_index(index: u8) -> Option<DiZhi> {
        (index < 12).then_some(DiZhi(index))
    }

    /// 所属五行
    pub fn wuxing(&self) -> WuXing {
        constants::ZHI_WUXING[(self.0 % 12) as usize]
    }

    /// 阳支为偶数位（子寅辰午申戌）
    pub fn is_yang(&self) -> bool {
        self.0 % 2 == 0
    }
}

/// 四柱索引
///
/// 四柱（年月日时）的干支原始索引，由外部排盘方提供；
/// 本模块不做任何历法换算。
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    Clone,
    Copy,
    RuntimeDebug,
    PartialEq,
    Eq,
    TypeInfo,
    MaxEncodedLen,
)]
pub struct ChartIndex {
    pub year_gan: u8,
    pub year_zhi: u8,
    pub month_gan: u8,
    pub month_zhi: u8,
    pub day_gan: u8,
    pub day_zhi: u8,
    pub hour_gan: u8,
    pub hour_zhi: u8,
}

impl ChartIndex {
    /// 四柱天干索引（年月日时序）
    pub fn gans(&self) -> [u8; 4] {
        [self.year_gan, self.month_gan, self.day_gan, self.hour_gan]
    }

    /// 四柱地支索引（年月日时序）
    pub fn zhis(&self) -> [u8; 4] {
        [self.year_zhi, self.month_zhi, self.day_zhi, self.hour_zhi]
    }

    /// 八字全部索引是否有效
    pub fn is_valid(&self) -> bool {
        self.gans().iter().all(|g| *g < 10) && self.zhis().iter().all(|z| *z < 12)
    }
}

/// 五行计数向量
///
/// 按五行声明顺序记录出现次数；完整八字合计为 8，
/// 但所有运算必须容忍合计为 0 的退化输入。
#[derive(
    Encode, Decode, Clone, Copy, Default, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen,
)]
pub struct WuXingScores(pub [u8; 5]);

impl WuXingScores {
    /// 指定五行的计数
    pub fn get(&self, wuxing: WuXing) -> u8 {
        self.0[wuxing.index()]
    }

    /// 计数加一
    pub fn add(&mut self, wuxing: WuXing) {
        self.0[wuxing.index()] = self.0[wuxing.index()].saturating_add(1);
    }

    /// 总计数
    pub fn total(&self) -> u32 {
        self.0.iter().map(|c| *c as u32).sum()
    }
}

/// 四柱阴阳属性统计
#[derive(Encode, Decode, Clone, Copy, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub enum YinYangBalance {
    /// 四支皆阳
    AllYang,
    /// 四支皆阴
    AllYin,
    /// 阴阳相济
    Mixed,
}

/// 命局分类
#[derive(Encode, Decode, Clone, Copy, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub enum BalanceCategory {
    /// 某行独旺（占比 ≥ 30%）
    Dominant(WuXing),
    /// 某行偏弱（最弱占比 ≤ 10%）
    Weak(WuXing),
    /// 五行均衡（各行占比均在 15%-25%）
    Balanced,
    /// 五行驳杂
    Mixed,
}

/// 调衡建议类别
#[derive(Encode, Decode, Clone, Copy, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub enum RemedyKind {
    /// 生我者有力（计数 ≥ 2），借其生扶弱项
    EnhanceSource { via: WuXing },
    /// 生我者亦弱，直取弱项所生之行补益
    DirectGenerate { via: WuXing },
    /// 削减克我者的压制（无条件给出）
    ReduceController { controller: WuXing },
}

/// 一条调衡建议
#[derive(Encode, Decode, Clone, Copy, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct RemedyNote {
    /// 待扶助的弱项
    pub target: WuXing,
    pub kind: RemedyKind,
}

/// 五行平衡分析结果
///
/// 占比以基点表示（10000 = 100%），链上无浮点；
/// 合计为 0 的退化输入下所有占比为 0。
#[derive(Encode, Decode, Clone, RuntimeDebug, PartialEq, Eq, TypeInfo)]
pub struct BalanceAnalysis {
    /// 各行计数
    pub scores: WuXingScores,
    /// 有效计数合计（完整八字为 8）
    pub total: u8,
    /// 按计数降序（同分按声明顺序）的排名
    pub ranked: [WuXing; 5],
    /// 各行占比（基点，按声明顺序索引）
    pub percent_bp: [u16; 5],
    /// 最旺之行
    pub dominant: WuXing,
    /// 最弱之行
    pub weakest: WuXing,
    /// 命局分类
    pub category: BalanceCategory,
    /// 弱项（检出顺序 = 排名顺序）
    pub weak: Vec<WuXing>,
    /// 调衡建议（每个弱项两条：补益 + 减克）
    pub remedies: Vec<RemedyNote>,
    /// 四支阴阳统计
    pub yin_yang: YinYangBalance,
    /// 日柱旬空的两个地支索引（日柱干支无效时为 None）
    pub xun_kong: Option<[u8; 2]>,
    /// 地支落空亡的柱序（0=年 1=月 2=日 3=时）
    pub kong_pillars: Vec<u8>,
}

/// 候选用字
///
/// 外部字库导入的一行：单个汉字、康熙笔画数与五行归属。
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    Clone,
    RuntimeDebug,
    PartialEq,
    Eq,
    TypeInfo,
    MaxEncodedLen,
)]
pub struct CandidateChar {
    /// UTF-8 编码的单个汉字（至多 4 字节）
    pub character: BoundedVec<u8, ConstU32<4>>,
    /// 笔画数（> 0）
    pub strokes: u8,
    /// 五行归属
    pub wuxing: WuXing,
}

impl CandidateChar {
    /// 行数据是否合规：笔画为正且恰为一个合法 UTF-8 字符
    pub fn is_well_formed(&self) -> bool {
        if self.strokes == 0 {
            return false;
        }
        match core::str::from_utf8(&self.character) {
            Ok(s) => {
                let mut chars = s.chars();
                chars.next().is_some() && chars.next().is_none()
            }
            Err(_) => false,
        }
    }
}

/// 五格数理
///
/// 天、人、地、外、总五格，均为对 81 取模后的数理（0-80）。
#[derive(Encode, Decode, Clone, Copy, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct WuGe {
    pub tian: u8,
    pub ren: u8,
    pub di: u8,
    pub wai: u8,
    pub zong: u8,
}

impl WuGe {
    /// 五格全吉（单字名的入选门槛）
    pub fn all_lucky(&self) -> bool {
        constants::is_lucky(self.tian)
            && constants::is_lucky(self.ren)
            && constants::is_lucky(self.di)
            && constants::is_lucky(self.wai)
            && constants::is_lucky(self.zong)
    }

    /// 人、地、外三格吉（双字名的入选门槛，天总二格不作要求）
    pub fn core_lucky(&self) -> bool {
        constants::is_lucky(self.ren) && constants::is_lucky(self.di) && constants::is_lucky(self.wai)
    }
}

/// 一条吉名结果
///
/// 仅作为查询输出，不上链存储。
#[derive(Encode, Decode, Clone, RuntimeDebug, PartialEq, Eq, TypeInfo)]
pub struct AuspiciousName {
    /// 名字用字（1 或 2 个，有序）
    pub chars: Vec<CandidateChar>,
    /// 对应的五格数理（完整给出，便于前端展示）
    pub wu_ge: WuGe,
}

/// 生肖六亲关系
///
/// 以地支索引表示的合冲刑害破关系集。
#[derive(Encode, Decode, Clone, Copy, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct ZodiacCompatibility {
    /// 本命地支
    pub zhi: u8,
    /// 六合
    pub liu_he: u8,
    /// 三合（另两支）
    pub san_he: [u8; 2],
    /// 三会（另两支）
    pub san_hui: [u8; 2],
    /// 相冲
    pub chong: u8,
    /// 我刑者
    pub xing: u8,
    /// 刑我者
    pub bei_xing: u8,
    /// 相害
    pub hai: u8,
    /// 相破
    pub po: u8,
}

/// 链上存储的命盘分析记录
///
/// 仅存四柱索引等精简数据，派生结果（平衡分析、吉名搜索）
/// 由免费查询实时计算，不占用链上存储。
#[derive(Encode, Decode, Clone, RuntimeDebug, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct ChartAnalysis<AccountId, BlockNumber> {
    /// 记录所有者
    pub owner: AccountId,
    /// 命盘名称（可选，至多 32 字节 UTF-8）
    pub name: BoundedVec<u8, ConstU32<32>>,
    /// 四柱干支索引
    pub chart: ChartIndex,
    /// 创建区块
    pub created_at: BlockNumber,
}
