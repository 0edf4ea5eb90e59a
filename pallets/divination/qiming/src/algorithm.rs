//! # 五行平衡算法
//!
//! 四柱计分、旺衰排名、命局分类与调衡建议的纯函数实现。
//! 所有函数无副作用，仅依赖 constants 中的固定表；
//! 占比一律用基点（10000 = 100%）整数运算，链上无浮点。

use sp_std::prelude::*;

use crate::constants;
use crate::types::*;

/// 四柱计分
///
/// 将八个干支索引逐一映射到五行并累计计数。
/// 无法识别的索引静默跳过（宽容处理上游脏数据，不报错）；
/// 需要严格校验的调用方应在入口处先行验证。
pub fn count_elements(chart: &ChartIndex) -> WuXingScores {
    let mut scores = WuXingScores::default();
    for index in chart.gans() {
        if let Some(gan) = TianGan::from_index(index) {
            scores.add(gan.wuxing());
        }
    }
    for index in chart.zhis() {
        if let Some(zhi) = DiZhi::from_index(index) {
            scores.add(zhi.wuxing());
        }
    }
    scores
}

/// 旺衰排名：按计数降序，同分按五行声明顺序（稳定排序）
pub fn rank(scores: &WuXingScores) -> [WuXing; 5] {
    let mut ranked = WuXing::ALL;
    ranked.sort_by(|a, b| scores.get(*b).cmp(&scores.get(*a)));
    ranked
}

/// 各行占比（基点，四舍五入）
///
/// 合计为 0 时全部占比定义为 0，不做除法。
pub fn percentages(scores: &WuXingScores) -> [u16; 5] {
    let total = scores.total();
    let mut percent_bp = [0u16; 5];
    if total == 0 {
        return percent_bp;
    }
    for (i, count) in scores.0.iter().enumerate() {
        percent_bp[i] = ((*count as u32 * 10_000 + total / 2) / total) as u16;
    }
    percent_bp
}

/// 最旺与最弱之行
///
/// 最旺取排名首位；最弱在其余四行中取计数最小者，
/// 同分先论声明顺序靠前者。五行全部同分（如合计为 0）时
/// 退化为声明顺序的前两行（木旺火弱），不报错。
pub fn dominant_and_weakest(scores: &WuXingScores, ranked: &[WuXing; 5]) -> (WuXing, WuXing) {
    let dominant = ranked[0];
    let mut weakest = dominant;
    let mut min = u8::MAX;
    for wuxing in WuXing::ALL {
        if wuxing == dominant {
            continue;
        }
        if scores.get(wuxing) < min {
            min = scores.get(wuxing);
            weakest = wuxing;
        }
    }
    (dominant, weakest)
}

/// 检出弱项
///
/// 门槛为计数均值的六成：floor((total / 5) × 0.6)，
/// 整数算法即 total × 3 / 25；计数不高于门槛者为弱。
/// 合计为 0 时门槛为 0、计数全 0，五行皆弱——这是有意的
/// 边界行为而非错误。返回顺序与排名顺序一致。
pub fn detect_weak(scores: &WuXingScores, ranked: &[WuXing; 5]) -> Vec<WuXing> {
    let threshold = scores.total() * 3 / 25;
    ranked
        .iter()
        .copied()
        .filter(|wuxing| (scores.get(*wuxing) as u32) <= threshold)
        .collect()
}

/// 命局分类，按优先级逐条匹配，先中先得：
///
/// 1. 最旺占比 ≥ 30% → 某行独旺
/// 2. 最弱占比 ≤ 10% → 某行偏弱
/// 3. 各行占比均在 15%-25% → 五行均衡
/// 4. 其余 → 五行驳杂
pub fn classify(percent_bp: &[u16; 5], dominant: WuXing, weakest: WuXing) -> BalanceCategory {
    if percent_bp[dominant.index()] >= 3000 {
        return BalanceCategory::Dominant(dominant);
    }
    if percent_bp[weakest.index()] <= 1000 {
        return BalanceCategory::Weak(weakest);
    }
    if percent_bp.iter().all(|bp| (1500..=2500).contains(bp)) {
        return BalanceCategory::Balanced;
    }
    BalanceCategory::Mixed
}

/// 四支阴阳统计：四支皆阳或皆阴为纯局，其余为相济
pub fn yin_yang_census(chart: &ChartIndex) -> YinYangBalance {
    let mut yang = 0u8;
    let mut yin = 0u8;
    for index in chart.zhis() {
        if let Some(zhi) = DiZhi::from_index(index) {
            if zhi.is_yang() {
                yang += 1;
            } else {
                yin += 1;
            }
        }
    }
    match (yang, yin) {
        (4, 0) => YinYangBalance::AllYang,
        (0, 4) => YinYangBalance::AllYin,
        _ => YinYangBalance::Mixed,
    }
}

/// 日柱旬空的两个地支
///
/// 由日柱干支定六甲旬，查旬空表；干支组合无效时返回 None。
pub fn empty_branches(day_gan: u8, day_zhi: u8) -> Option<[u8; 2]> {
    let index = constants::ganzhi_index(day_gan, day_zhi)?;
    Some(constants::XUN_KONG[(index / 10) as usize])
}

/// 地支落空亡的柱序（0=年 1=月 2=日 3=时）
pub fn kong_pillars(chart: &ChartIndex, kong: &[u8; 2]) -> Vec<u8> {
    chart
        .zhis()
        .iter()
        .enumerate()
        .filter(|(_, zhi)| kong.contains(zhi))
        .map(|(i, _)| i as u8)
        .collect()
}

/// 生成调衡建议
///
/// 对每个弱项（按检出顺序）给出两条：
/// - 补益：生我者计数 ≥ 2 时借其生扶；否则直取弱项所生之行补益
///   （沿用传统口诀的取法，不以克我者反推）。
/// - 减克：无条件提示削减克我者的压制，不论其实际计数。
pub fn balance_remedies(scores: &WuXingScores, weak: &[WuXing]) -> Vec<RemedyNote> {
    let mut notes = Vec::with_capacity(weak.len() * 2);
    for &target in weak {
        let source = target.generated_by();
        let kind = if scores.get(source) >= 2 {
            RemedyKind::EnhanceSource { via: source }
        } else {
            RemedyKind::DirectGenerate { via: target.generates() }
        };
        notes.push(RemedyNote { target, kind });
        notes.push(RemedyNote {
            target,
            kind: RemedyKind::ReduceController { controller: target.controlled_by() },
        });
    }
    notes
}

/// 一站式分析：计分 → 排名 → 分类 → 弱项 → 建议 → 阴阳/旬空
pub fn analyze(chart: &ChartIndex) -> BalanceAnalysis {
    let scores = count_elements(chart);
    let total = scores.total();
    let ranked = rank(&scores);
    let percent_bp = percentages(&scores);
    let (dominant, weakest) = dominant_and_weakest(&scores, &ranked);
    let category = classify(&percent_bp, dominant, weakest);
    let weak = detect_weak(&scores, &ranked);
    let remedies = balance_remedies(&scores, &weak);
    let yin_yang = yin_yang_census(chart);
    let xun_kong = empty_branches(chart.day_gan, chart.day_zhi);
    let kong_pillars = match &xun_kong {
        Some(kong) => kong_pillars(chart, kong),
        None => Vec::new(),
    };

    BalanceAnalysis {
        scores,
        total: total as u8,
        ranked,
        percent_bp,
        dominant,
        weakest,
        category,
        weak,
        remedies,
        yin_yang,
        xun_kong,
        kong_pillars,
    }
}
