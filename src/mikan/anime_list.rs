//! 番剧列表解析 (搜索结果与季度页共用)

use super::selectors::{ATTR_DATA_SRC, ATTR_HREF, COVER_SPAN, LINK, LIST_ITEM};
use super::{absolute_url, extract_bangumi_id};
use crate::dom::DocumentNode;
use crate::types::AnimeInfo;

/// 解析容器内的所有 li 条目，保持文档顺序
pub fn parse_anime_list<N: DocumentNode>(container: &N, host: &str) -> Vec<AnimeInfo> {
    container
        .find_all(&LIST_ITEM)
        .iter()
        .filter_map(|item| parse_anime_item(item, host))
        .collect()
}

fn parse_anime_item<N: DocumentNode>(item: &N, host: &str) -> Option<AnimeInfo> {
    let anchor = item.find_first(&LINK)?;

    // 封面懒加载，src 不可靠，取 data-src
    let cover_url = item
        .find_first(&COVER_SPAN)
        .and_then(|span| span.attr(ATTR_DATA_SRC).map(|src| absolute_url(host, src)))
        .unwrap_or_default();

    let detail_url = absolute_url(host, anchor.attr(ATTR_HREF).unwrap_or_default());
    let bangumi_id = extract_bangumi_id(&detail_url);

    Some(AnimeInfo {
        title: anchor.text().trim().to_string(),
        detail_url,
        cover_url,
        bangumi_id,
    })
}
