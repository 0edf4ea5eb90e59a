//! # 五格数理与吉名搜索
//!
//! 由姓氏与候选字笔画推算天人地外总五格，在按五行分组的
//! 字库中枚举单字名与双字名，筛出数理合吉者。
//! 纯函数实现；字库来源与取舍由调用方（pallet 层）负责。

use sp_std::prelude::*;

use crate::types::*;

/// 笔画和化为 81 数理（0-80）
pub fn structure_number(strokes: u32) -> u8 {
    (strokes % 81) as u8
}

/// 单字名五格
///
/// 天=姓+1，人=姓+名，地=名+1，外=姓+1，总=姓+名。
pub fn wu_ge_single(surname_strokes: u8, given: u8) -> WuGe {
    let s = surname_strokes as u32;
    let c = given as u32;
    WuGe {
        tian: structure_number(s + 1),
        ren: structure_number(s + c),
        di: structure_number(c + 1),
        wai: structure_number(s + 1),
        zong: structure_number(s + c),
    }
}

/// 双字名五格
///
/// 天=姓+1，人=姓+首字，地=首字+次字，外=次字+1，总=三者之和。
pub fn wu_ge_double(surname_strokes: u8, first: u8, second: u8) -> WuGe {
    let s = surname_strokes as u32;
    let c1 = first as u32;
    let c2 = second as u32;
    WuGe {
        tian: structure_number(s + 1),
        ren: structure_number(s + c1),
        di: structure_number(c1 + c2),
        wai: structure_number(c2 + 1),
        zong: structure_number(s + c1 + c2),
    }
}

/// 组装待搜索字库
///
/// 按目标五行逐组取字（重复的目标五行只取一次），组内按
/// （笔画升序，字符字节升序）排序。该排序是输出顺序契约的
/// 一部分，枚举必须在排序后进行。
pub fn assemble_pool<F>(desired: &[WuXing], mut fetch: F) -> Vec<(WuXing, Vec<CandidateChar>)>
where
    F: FnMut(WuXing) -> Vec<CandidateChar>,
{
    let mut groups: Vec<(WuXing, Vec<CandidateChar>)> = Vec::new();
    for &wuxing in desired {
        if groups.iter().any(|(w, _)| *w == wuxing) {
            continue;
        }
        let mut chars = fetch(wuxing);
        chars.sort_by(|a, b| {
            a.strokes
                .cmp(&b.strokes)
                .then_with(|| a.character.as_slice().cmp(b.character.as_slice()))
        });
        groups.push((wuxing, chars));
    }
    groups
}

/// 吉名搜索
///
/// 单字名：逐组逐字推五格，五格全吉方入选。
/// 双字名：对组×组的笛卡尔积做有序配对（两侧独立取遍所有
/// 目标组，含同组配对），人地外三格皆吉即入选——天总二格
/// 照算但不作门槛，沿用数理成法。`&&` 短路即配对级的提前
/// 退出：任一门槛格不吉立即放弃该配对。
///
/// 某组为空仅意味着该组无产出，其余组照常搜索；全空则返回
/// 空集，不报错。结果集合约定为无序，内部顺序仅由组序与
/// 组内排序自然决定。
pub fn search_names(
    groups: &[(WuXing, Vec<CandidateChar>)],
    surname_strokes: u8,
) -> Vec<AuspiciousName> {
    let mut results = Vec::new();

    // 单字名
    for (_, chars) in groups {
        for candidate in chars {
            let wu_ge = wu_ge_single(surname_strokes, candidate.strokes);
            if wu_ge.all_lucky() {
                results.push(AuspiciousName { chars: sp_std::vec![candidate.clone()], wu_ge });
            }
        }
    }

    // 双字名：显式二重枚举，组对之间互不依赖
    for (_, first_group) in groups {
        for (_, second_group) in groups {
            for first in first_group {
                for second in second_group {
                    let wu_ge = wu_ge_double(surname_strokes, first.strokes, second.strokes);
                    if wu_ge.core_lucky() {
                        results.push(AuspiciousName {
                            chars: sp_std::vec![first.clone(), second.clone()],
                            wu_ge,
                        });
                    }
                }
            }
        }
    }

    results
}
