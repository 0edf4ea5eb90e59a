//! # 起名模块常量表
//!
//! 天干地支五行归属、生克循环、五格吉数、旬空与生肖关系等
//! 固定查询表。全部为编译期常量，进程生命周期内不可变。

use crate::types::{WuXing, ZodiacCompatibility};

/// 五行汉字名（按声明顺序）
pub const WUXING_NAMES: [&str; 5] = ["木", "火", "土", "金", "水"];

/// 天干五行归属：甲乙木、丙丁火、戊己土、庚辛金、壬癸水
pub const GAN_WUXING: [WuXing; 10] = [
    WuXing::Mu,
    WuXing::Mu,
    WuXing::Huo,
    WuXing::Huo,
    WuXing::Tu,
    WuXing::Tu,
    WuXing::Jin,
    WuXing::Jin,
    WuXing::Shui,
    WuXing::Shui,
];

/// 地支五行归属：寅卯木、巳午火、辰戌丑未土、申酉金、亥子水
pub const ZHI_WUXING: [WuXing; 12] = [
    WuXing::Shui, // 子
    WuXing::Tu,   // 丑
    WuXing::Mu,   // 寅
    WuXing::Mu,   // 卯
    WuXing::Tu,   // 辰
    WuXing::Huo,  // 巳
    WuXing::Huo,  // 午
    WuXing::Tu,   // 未
    WuXing::Jin,  // 申
    WuXing::Jin,  // 酉
    WuXing::Tu,   // 戌
    WuXing::Shui, // 亥
];

// 生克两个循环以下标表编码（见 types::WuXing 声明顺序），
// 互逆表满足 SHENG_NI[SHENG[x]] == x、KE_NI[KE[x]] == x。

/// 相生：木→火→土→金→水→木
pub const SHENG: [u8; 5] = [1, 2, 3, 4, 0];
/// 相生逆查（生我者）
pub const SHENG_NI: [u8; 5] = [4, 0, 1, 2, 3];
/// 相克：木→土→水→火→金→木
pub const KE: [u8; 5] = [2, 3, 4, 0, 1];
/// 相克逆查（克我者）
pub const KE_NI: [u8; 5] = [3, 4, 0, 1, 2];

/// 五格吉数表（81 数理中的吉数，升序）
///
/// 注意：数理先对 81 取模再查表，因此余数 0 永不为吉——
/// 表中 81 实际不可达，保留是沿用数理口诀的原始写法。
pub const LUCKY_NUMBERS: [u8; 35] = [
    1, 3, 5, 6, 7, 8, 11, 13, 15, 16, 17, 18, 21, 23, 24, 25, 29, 31, 32, 33, 35, 37, 39, 41, 45,
    47, 48, 52, 57, 61, 63, 65, 67, 68, 81,
];

/// 数理是否为吉
pub fn is_lucky(number: u8) -> bool {
    LUCKY_NUMBERS.binary_search(&number).is_ok()
}

/// 旬空表：六甲旬各旬空亡的两个地支索引
///
/// 甲子旬空戌亥、甲戌旬空申酉、甲申旬空午未、
/// 甲午旬空辰巳、甲辰旬空寅卯、甲寅旬空子丑。
pub const XUN_KONG: [[u8; 2]; 6] = [[10, 11], [8, 9], [6, 7], [4, 5], [2, 3], [0, 1]];

/// 由干支索引求六十甲子序号（0-59）
///
/// 干支阴阳属性不同（奇偶不一致）的组合不存在，返回 None。
pub fn ganzhi_index(gan: u8, zhi: u8) -> Option<u8> {
    if gan >= 10 || zhi >= 12 || gan % 2 != zhi % 2 {
        return None;
    }
    Some((6 * gan as i32 - 5 * zhi as i32).rem_euclid(60) as u8)
}

// ============================================================================
// 生肖（地支）关系表
// ============================================================================

/// 六合：子丑、寅亥、卯戌、辰酉、巳申、午未
pub const LIU_HE: [u8; 12] = [1, 0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// 三合局（申子辰、巳酉丑、寅午戌、亥卯未）中本支之外的两支
pub const SAN_HE: [[u8; 2]; 12] = [
    [4, 8],  // 子
    [5, 9],  // 丑
    [6, 10], // 寅
    [7, 11], // 卯
    [0, 8],  // 辰
    [1, 9],  // 巳
    [2, 10], // 午
    [3, 11], // 未
    [0, 4],  // 申
    [1, 5],  // 酉
    [2, 6],  // 戌
    [3, 7],  // 亥
];

/// 三会方（亥子丑、寅卯辰、巳午未、申酉戌）中本支之外的两支
pub const SAN_HUI: [[u8; 2]; 12] = [
    [1, 11], // 子
    [0, 11], // 丑
    [3, 4],  // 寅
    [2, 4],  // 卯
    [2, 3],  // 辰
    [6, 7],  // 巳
    [5, 7],  // 午
    [5, 6],  // 未
    [9, 10], // 申
    [8, 10], // 酉
    [8, 9],  // 戌
    [0, 1],  // 亥
];

/// 相害：子未、丑午、寅巳、卯辰、申亥、酉戌
pub const HAI: [u8; 12] = [7, 6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8];

/// 相破：子酉、丑辰、寅亥、卯午、巳申、未戌
pub const PO: [u8; 12] = [9, 4, 11, 6, 1, 8, 3, 10, 5, 0, 7, 2];

/// 相刑（我刑者）：子刑卯、丑戌未三刑、寅巳申三刑、辰午酉亥自刑
pub const XING: [u8; 12] = [3, 10, 5, 0, 4, 8, 6, 1, 2, 9, 7, 11];

/// 被刑（刑我者），为 XING 的逆置换
pub const BEI_XING: [u8; 12] = [3, 7, 8, 0, 4, 2, 6, 10, 5, 9, 1, 11];

/// 相冲：六位对冲
pub fn chong(zhi: u8) -> u8 {
    (zhi + 6) % 12
}

/// 汇总某一地支的生肖关系，索引越界返回 None
pub fn zodiac_compatibility(zhi: u8) -> Option<ZodiacCompatibility> {
    if zhi >= 12 {
        return None;
    }
    let i = zhi as usize;
    Some(ZodiacCompatibility {
        zhi,
        liu_he: LIU_HE[i],
        san_he: SAN_HE[i],
        san_hui: SAN_HUI[i],
        chong: chong(zhi),
        xing: XING[i],
        bei_xing: BEI_XING[i],
        hai: HAI[i],
        po: PO[i],
    })
}
