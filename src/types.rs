//! 抓取结果数据结构
//! 字段名保持与原有工具输出一致 (url / cover / rss / regexList ...)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// 番剧条目 (搜索结果 / 季度列表)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeInfo {
    pub title: String,
    #[serde(rename = "url")]
    pub detail_url: String,
    /// 取自 data-src，条目没有该属性时为空串
    #[serde(rename = "cover")]
    pub cover_url: String,
    pub bangumi_id: String,
}

/// 单个种子发布
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentInfo {
    pub name: String,
    #[serde(rename = "magnet")]
    pub magnet_uri: String,
    /// 站点原样文本，如 "1.2GB"
    #[serde(rename = "sizeStr")]
    pub size_text: String,
    #[serde(rename = "dateStr")]
    pub date_text: String,
    #[serde(rename = "torrent")]
    pub torrent_url: String,
}

/// 标签匹配项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMatch {
    pub label: String,
    #[serde(rename = "regex")]
    pub pattern: String,
}

/// 字幕组精简信息 (不含种子列表)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgroupBasic {
    pub subgroup_id: String,
    pub label: String,
    #[serde(rename = "rss")]
    pub rss_url: String,
    pub tags: Vec<String>,
    /// 观察到的发布行数，不是番剧总集数
    pub episode_count: usize,
    pub update_dates: Vec<String>,
}

/// 字幕组完整信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subgroup {
    pub subgroup_id: String,
    pub label: String,
    #[serde(rename = "rss")]
    pub rss_url: String,
    pub update_day: String,
    pub items: Vec<TorrentInfo>,
    /// 与 items 按下标一一对应
    #[serde(rename = "regexList")]
    pub tag_matches_per_item: Vec<Vec<TagMatch>>,
    pub tags: Vec<String>,
}

/// 番剧详情 (精简模式)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BangumiDetailBasic {
    pub title: String,
    #[serde(rename = "url")]
    pub detail_url: String,
    #[serde(rename = "cover")]
    pub cover_url: String,
    #[serde(rename = "bgmUrl", skip_serializing_if = "Option::is_none")]
    pub external_info_url: Option<String>,
    pub bangumi_id: String,
    pub subgroups: Vec<SubgroupBasic>,
}

/// 番剧详情 (完整模式)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BangumiDetail {
    pub title: String,
    #[serde(rename = "url")]
    pub detail_url: String,
    #[serde(rename = "cover")]
    pub cover_url: String,
    #[serde(rename = "bgmUrl", skip_serializing_if = "Option::is_none")]
    pub external_info_url: Option<String>,
    pub bangumi_id: String,
    pub subgroups: Vec<Subgroup>,
}

/// 详情查询结果，两种模式结构不同
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BangumiDetailResult {
    Basic(BangumiDetailBasic),
    Full(BangumiDetail),
}

impl BangumiDetailResult {
    pub fn title(&self) -> &str {
        match self {
            BangumiDetailResult::Basic(d) => &d.title,
            BangumiDetailResult::Full(d) => &d.title,
        }
    }

    pub fn subgroup_ids(&self) -> Vec<&str> {
        match self {
            BangumiDetailResult::Basic(d) => {
                d.subgroups.iter().map(|s| s.subgroup_id.as_str()).collect()
            }
            BangumiDetailResult::Full(d) => {
                d.subgroups.iter().map(|s| s.subgroup_id.as_str()).collect()
            }
        }
    }
}

/// 详情查询选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOptions {
    pub include_torrents: bool,
    pub subgroup_ids: Option<HashSet<String>>,
}

impl DetailOptions {
    /// 过滤为空或未设置时保留全部字幕组
    pub fn keeps(&self, subgroup_id: &str) -> bool {
        match &self.subgroup_ids {
            Some(ids) if !ids.is_empty() => ids.contains(subgroup_id),
            _ => true,
        }
    }
}

/// 季度选择器中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonOption {
    pub year: i32,
    #[serde(rename = "season")]
    pub season_label: String,
    #[serde(rename = "select")]
    pub is_selected: bool,
}

/// 按星期 (或搜索) 分组的番剧列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayGroup {
    pub label: String,
    pub items: Vec<AnimeInfo>,
}

/// 季度浏览 / 搜索结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseResult {
    pub seasons: Vec<SeasonOption>,
    #[serde(rename = "items")]
    pub groups: Vec<WeekdayGroup>,
    #[serde(rename = "totalItem")]
    pub total_item_count: usize,
}

impl BrowseResult {
    pub fn new(seasons: Vec<SeasonOption>, groups: Vec<WeekdayGroup>) -> Self {
        let total_item_count = groups.iter().map(|g| g.items.len()).sum();
        Self {
            seasons,
            groups,
            total_item_count,
        }
    }
}

/// 季度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "冬")]
    Winter,
    #[serde(rename = "春")]
    Spring,
    #[serde(rename = "夏")]
    Summer,
    #[serde(rename = "秋")]
    Autumn,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "冬",
            Season::Spring => "春",
            Season::Summer => "夏",
            Season::Autumn => "秋",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "冬" => Ok(Season::Winter),
            "春" => Ok(Season::Spring),
            "夏" => Ok(Season::Summer),
            "秋" => Ok(Season::Autumn),
            other => Err(format!("未知季度: {}", other)),
        }
    }
}
