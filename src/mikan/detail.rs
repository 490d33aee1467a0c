//! 番剧详情页解析
//! 标题 / 封面 / 番组计划链接，以及按字幕组拆分的 RSS 与种子表

use super::absolute_url;
use super::release_table::{parse_release_summary, parse_release_table};
use super::selectors::{
    ATTR_DATA_ANCHOR, ATTR_HREF, ATTR_SRC, BANGUMI_INFO, BANGUMI_TITLE, COVER_IMAGE,
    EXTERNAL_INFO_MARKERS, LINK, RSS_LINK, SUBGROUP_ITEM, SUBGROUP_NAME, UPDATE_DAY,
};
use crate::dom::DocumentNode;
use crate::types::{BangumiDetail, BangumiDetailBasic, DetailOptions, Subgroup, SubgroupBasic};
use scraper::Html;
use tracing::debug;

/// 详情页头部信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DetailHeader {
    title: String,
    cover_url: String,
    external_info_url: Option<String>,
}

/// 侧栏中的一个字幕组
struct SubgroupBlock<N> {
    subgroup_id: String,
    label: String,
    update_day: String,
    /// 页面中 id 与字幕组编号相同的区块
    target: Option<N>,
}

impl<N: DocumentNode> SubgroupBlock<N> {
    fn rss_url(&self, host: &str) -> String {
        self.target
            .as_ref()
            .and_then(|target| target.find_first(&RSS_LINK))
            .and_then(|link| link.attr(ATTR_HREF).map(|href| absolute_url(host, href)))
            .unwrap_or_default()
    }

    fn into_basic(self, host: &str) -> SubgroupBasic {
        let summary = self
            .target
            .as_ref()
            .map(parse_release_summary)
            .unwrap_or_default();

        SubgroupBasic {
            rss_url: self.rss_url(host),
            episode_count: summary.episode_count(),
            tags: summary.tags,
            update_dates: summary.update_dates,
            subgroup_id: self.subgroup_id,
            label: self.label,
        }
    }

    fn into_full(self, host: &str) -> Subgroup {
        let table = self
            .target
            .as_ref()
            .map(|target| parse_release_table(target, host))
            .unwrap_or_default();

        Subgroup {
            rss_url: self.rss_url(host),
            items: table.items,
            tag_matches_per_item: table.tag_matches_per_item,
            tags: table.tags,
            subgroup_id: self.subgroup_id,
            label: self.label,
            update_day: self.update_day,
        }
    }
}

fn parse_header<N: DocumentNode>(root: &N, host: &str) -> DetailHeader {
    let title = root
        .find_first(&BANGUMI_TITLE)
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default();

    let cover_url = root
        .find_first(&COVER_IMAGE)
        .and_then(|img| img.attr(ATTR_SRC).map(|src| absolute_url(host, src)))
        .unwrap_or_default();

    // 只看信息块自身的文字，避免链接文本干扰判断；多个匹配时取最后一个
    let external_info_url = root.find_all(&BANGUMI_INFO).iter().rev().find_map(|info| {
        let label = info.own_text();
        if !EXTERNAL_INFO_MARKERS.iter().any(|m| label.contains(m)) {
            return None;
        }
        info.find_first(&LINK)
            .and_then(|a| a.attr(ATTR_HREF).map(String::from))
    });

    DetailHeader {
        title,
        cover_url,
        external_info_url,
    }
}

/// 按文档顺序列出字幕组，无锚点或被过滤的丢弃
fn subgroup_blocks<N: DocumentNode>(root: &N, options: &DetailOptions) -> Vec<SubgroupBlock<N>> {
    root.find_all(&SUBGROUP_ITEM)
        .iter()
        .filter_map(|item| {
            let link = item.find_first(&SUBGROUP_NAME)?;
            let anchor = link.attr(ATTR_DATA_ANCHOR).unwrap_or_default();
            if anchor.is_empty() {
                return None;
            }

            let subgroup_id = anchor.replacen('#', "", 1).trim().to_string();
            if !options.keeps(&subgroup_id) {
                return None;
            }

            Some(SubgroupBlock {
                target: root.find_by_id(&subgroup_id),
                label: link.text().trim().to_string(),
                update_day: item
                    .find_first(&UPDATE_DAY)
                    .map(|el| el.text().trim().to_string())
                    .unwrap_or_default(),
                subgroup_id,
            })
        })
        .collect()
}

/// 精简模式详情
pub fn parse_detail_basic(
    html: &str,
    host: &str,
    bangumi_id: &str,
    detail_url: &str,
    options: &DetailOptions,
) -> BangumiDetailBasic {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let header = parse_header(&root, host);

    let subgroups: Vec<SubgroupBasic> = subgroup_blocks(&root, options)
        .into_iter()
        .map(|block| block.into_basic(host))
        .collect();
    debug!("番剧 {} 解析到 {} 个字幕组 (精简)", bangumi_id, subgroups.len());

    BangumiDetailBasic {
        title: header.title,
        detail_url: detail_url.to_string(),
        cover_url: header.cover_url,
        external_info_url: header.external_info_url,
        bangumi_id: bangumi_id.to_string(),
        subgroups,
    }
}

/// 完整模式详情
pub fn parse_detail_full(
    html: &str,
    host: &str,
    bangumi_id: &str,
    detail_url: &str,
    options: &DetailOptions,
) -> BangumiDetail {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let header = parse_header(&root, host);
    let subgroups = parse_subgroups(&root, host, options);
    debug!("番剧 {} 解析到 {} 个字幕组 (完整)", bangumi_id, subgroups.len());

    BangumiDetail {
        title: header.title,
        detail_url: detail_url.to_string(),
        cover_url: header.cover_url,
        external_info_url: header.external_info_url,
        bangumi_id: bangumi_id.to_string(),
        subgroups,
    }
}

/// 任意详情页 HTML 的完整字幕组列表
pub fn parse_subgroup_page(html: &str, host: &str) -> Vec<Subgroup> {
    let document = Html::parse_document(html);
    parse_subgroups(&document.root_element(), host, &DetailOptions::default())
}

fn parse_subgroups<N: DocumentNode>(root: &N, host: &str, options: &DetailOptions) -> Vec<Subgroup> {
    subgroup_blocks(root, options)
        .into_iter()
        .map(|block| block.into_full(host))
        .collect()
}
