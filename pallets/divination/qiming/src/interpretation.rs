//! # 解读文案
//!
//! 命局分类、五行性情与调衡建议的静态文案渲染。
//! 仅做查表与拼接，不含任何计算逻辑。

use codec::{Decode, Encode};
use frame_support::pallet_prelude::RuntimeDebug;
use scale_info::TypeInfo;
use sp_std::prelude::*;

use crate::types::*;

/// 五行性情文案（特质，宜忌建议），按五行声明顺序
const WUXING_READINGS: [(&str, &str); 5] = [
    (
        "木主仁，其性直，其情和，重生发而喜条达",
        "宜亲东方青碧之色，从事生发长养之业，如园艺、教育、文创",
    ),
    (
        "火主礼，其性急，其情恭，重光明而喜炎上",
        "宜亲南方赤红之色，从事光热明亮之业，如能源、传媒、餐饮",
    ),
    (
        "土主信，其性重，其情厚，重承载而喜稼穑",
        "宜居中宫黄色之地，从事承载厚实之业，如地产、农业、仓储",
    ),
    (
        "金主义，其性刚，其情烈，重果断而喜从革",
        "宜亲西方素白之色，从事刚健决断之业，如金融、机械、司法",
    ),
    (
        "水主智，其性聪，其情善，重流通而喜润下",
        "宜亲北方玄黑之色，从事流通往来之业，如贸易、物流、信息",
    ),
];

/// 某一五行的性情特质
pub fn trait_text(wuxing: WuXing) -> &'static str {
    WUXING_READINGS[wuxing.index()].0
}

/// 某一五行的宜忌建议
pub fn advice_text(wuxing: WuXing) -> &'static str {
    WUXING_READINGS[wuxing.index()].1
}

/// 命局分类标签
pub fn category_label(category: &BalanceCategory) -> Vec<u8> {
    match category {
        BalanceCategory::Dominant(wuxing) => concat(&[wuxing.name(), "旺之局"]),
        BalanceCategory::Weak(wuxing) => concat(&[wuxing.name(), "弱之局"]),
        BalanceCategory::Balanced => concat(&["五行均衡之局"]),
        BalanceCategory::Mixed => concat(&["五行驳杂之局"]),
    }
}

/// 单条调衡建议文案
pub fn remedy_text(note: &RemedyNote) -> Vec<u8> {
    let target = note.target.name();
    match note.kind {
        RemedyKind::EnhanceSource { via } => {
            concat(&["补", target, "：", via.name(), "旺而能生", target, "，宜增强", via.name(), "之气"])
        }
        RemedyKind::DirectGenerate { via } => {
            concat(&["补", target, "：直取", via.name(), "之气助长补益"])
        }
        RemedyKind::ReduceController { controller } => {
            concat(&["抑", controller.name(), "：", controller.name(), "克", target, "，宜削减其过度压制"])
        }
    }
}

/// 命局解读
///
/// 面向展示层的汇总文案：分类标签、旺衰两行的性情与建议、
/// 调衡建议列表。由免费查询实时渲染，不上链存储。
#[derive(Encode, Decode, Clone, RuntimeDebug, PartialEq, Eq, TypeInfo)]
pub struct BalanceReading {
    /// 命局分类标签
    pub category_label: Vec<u8>,
    /// 最旺之行
    pub dominant: WuXing,
    /// 最旺之行的性情特质
    pub dominant_trait: Vec<u8>,
    /// 最旺之行的宜忌建议
    pub dominant_advice: Vec<u8>,
    /// 最弱之行
    pub weakest: WuXing,
    /// 最弱之行的性情特质
    pub weakest_trait: Vec<u8>,
    /// 最弱之行的宜忌建议
    pub weakest_advice: Vec<u8>,
    /// 调衡建议文案（与分析结果中的建议一一对应）
    pub remedies: Vec<Vec<u8>>,
}

/// 渲染命局解读
pub fn interpret(analysis: &BalanceAnalysis) -> BalanceReading {
    BalanceReading {
        category_label: category_label(&analysis.category),
        dominant: analysis.dominant,
        dominant_trait: trait_text(analysis.dominant).as_bytes().to_vec(),
        dominant_advice: advice_text(analysis.dominant).as_bytes().to_vec(),
        weakest: analysis.weakest,
        weakest_trait: trait_text(analysis.weakest).as_bytes().to_vec(),
        weakest_advice: advice_text(analysis.weakest).as_bytes().to_vec(),
        remedies: analysis.remedies.iter().map(remedy_text).collect(),
    }
}

fn concat(parts: &[&str]) -> Vec<u8> {
    let mut out = Vec::new();
    for part in parts {
        out.extend_from_slice(part.as_bytes());
    }
    out
}
