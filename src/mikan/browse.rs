//! 季度页 / 搜索页解析

use super::anime_list::parse_anime_list;
use super::selectors::{
    ATTR_DATA_SEASON, ATTR_DATA_YEAR, DATE_SELECT, DATE_TEXT, LINK, SEARCH_GROUP_LABEL,
    SEARCH_LIST, SEASON_ITEM, WEEKDAY_BLOCK,
};
use crate::dom::DocumentNode;
use crate::types::{AnimeInfo, BrowseResult, SeasonOption, WeekdayGroup};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

/// "bangumiId: 3878" 形式的直查关键词
static BANGUMI_ID_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^bangumiId:\s*(\d+)$").expect("Invalid bangumiId query regex"));

/// 关键词为直查形式时返回番剧 ID
pub fn bangumi_id_query(text: &str) -> Option<&str> {
    BANGUMI_ID_QUERY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 解析季度选择器与分组列表
pub fn parse_browse_page(html: &str, host: &str) -> BrowseResult {
    let document = Html::parse_document(html);
    let root = document.root_element();
    BrowseResult::new(parse_seasons(&root), parse_groups(&root, host))
}

/// 搜索页的平铺列表
pub fn parse_search_list(html: &str, host: &str) -> Vec<AnimeInfo> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .find_first(&SEARCH_LIST)
        .map(|list| parse_anime_list(&list, host))
        .unwrap_or_default()
}

fn parse_seasons<N: DocumentNode>(root: &N) -> Vec<SeasonOption> {
    let Some(date_select) = root.find_first(&DATE_SELECT) else {
        return Vec::new();
    };
    let date_text = date_select
        .find_first(&DATE_TEXT)
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default();

    date_select
        .find_all(&SEASON_ITEM)
        .iter()
        .filter_map(|li| {
            let anchor = li.find_first(&LINK)?;
            let year = anchor.attr(ATTR_DATA_YEAR)?;
            let season = anchor.attr(ATTR_DATA_SEASON)?;
            let parsed_year = year.trim().parse().ok()?;

            // 文本比对，格式对不上时视为未选中
            let label = format!("{} {}", year, anchor.text().trim());
            Some(SeasonOption {
                year: parsed_year,
                season_label: season.to_string(),
                is_selected: date_text == label,
            })
        })
        .collect()
}

fn parse_groups<N: DocumentNode>(root: &N, host: &str) -> Vec<WeekdayGroup> {
    let blocks = root.find_all(&WEEKDAY_BLOCK);

    if blocks.is_empty() {
        // 搜索结果只有一个列表
        return root
            .find_first(&SEARCH_LIST)
            .map(|list| parse_anime_list(&list, host))
            .filter(|items| !items.is_empty())
            .map(|items| {
                vec![WeekdayGroup {
                    label: SEARCH_GROUP_LABEL.to_string(),
                    items,
                }]
            })
            .unwrap_or_default();
    }

    blocks
        .iter()
        .filter_map(|block| {
            let items = parse_anime_list(block, host);
            if items.is_empty() {
                return None;
            }
            let label = block
                .element_children()
                .first()
                .map(|el| el.text().trim().to_string())
                .unwrap_or_default();
            Some(WeekdayGroup { label, items })
        })
        .collect()
}
