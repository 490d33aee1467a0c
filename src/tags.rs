//! 种子名称标签提取
//! 按固定顺序逐个匹配分辨率 / 语言 / 编码 / 字幕 / 容器标记

use crate::types::TagMatch;
use once_cell::sync::Lazy;
use regex::Regex;

/// 标签正则，顺序决定 matches 的排列
pub const TAG_PATTERNS: &[&str] = &[
    "1920[Xx]1080",
    "3840[Xx]2160",
    "1080[Pp]",
    "4[Kk]",
    "720[Pp]",
    "繁",
    "简",
    "日",
    "cht|Cht|CHT",
    "chs|Chs|CHS",
    "hevc|Hevc|HEVC",
    "10bit|10Bit|10BIT",
    "h265|H265",
    "h264|H264",
    "内嵌",
    "内封",
    "外挂",
    "mp4|MP4",
    "mkv|MKV",
];

static TAG_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TAG_PATTERNS
        .iter()
        .map(|p| (*p, Regex::new(p).expect("Invalid tag pattern")))
        .collect()
});

/// 单个名称的提取结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTags {
    /// 去重标签，保留首次出现顺序
    pub tags: Vec<String>,
    /// 所有命中，标签相同也各自保留
    pub matches: Vec<TagMatch>,
}

pub fn extract_tags(name: &str) -> ExtractedTags {
    let mut extracted = ExtractedTags::default();

    for (pattern, regex) in TAG_REGEXES.iter() {
        let Some(found) = regex.find(name) else {
            continue;
        };
        let label = found.as_str().to_uppercase();
        push_unique(&mut extracted.tags, &label);
        extracted.matches.push(TagMatch {
            label,
            pattern: pattern.to_string(),
        });
    }

    extracted
}

/// 追加到有序去重集合
pub fn push_unique(tags: &mut Vec<String>, label: &str) {
    if !tags.iter().any(|t| t == label) {
        tags.push(label.to_string());
    }
}
