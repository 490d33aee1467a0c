//! 字幕组种子表解析
//! 完整模式与精简模式共用同一套行遍历，只是累加器不同

use super::absolute_url;
use super::selectors::{
    ATTR_HREF, ATTR_MAGNET, EPISODE_TABLE, LINK, TABLE, TABLE_BODY, TABLE_CELL, TABLE_ROW,
};
use crate::dom::DocumentNode;
use crate::tags::{extract_tags, push_unique};
use crate::types::{TagMatch, TorrentInfo};

/// 有效行至少包含的链接数: 名称 / 磁力 / 种子
const MIN_ROW_LINKS: usize = 3;

const SIZE_CELL: usize = 2;
const DATE_CELL: usize = 3;

/// 一行种子记录
struct ReleaseRow<N> {
    links: Vec<N>,
    cells: Vec<N>,
}

impl<N: DocumentNode> ReleaseRow<N> {
    /// 名称可能很长或换行，读全部文本而不是属性
    fn name(&self) -> String {
        self.links[0].text().trim().to_string()
    }

    fn magnet(&self) -> String {
        self.links[1].attr(ATTR_MAGNET).unwrap_or_default().to_string()
    }

    fn torrent_href(&self) -> &str {
        self.links[2].attr(ATTR_HREF).unwrap_or_default()
    }

    /// 缺失的单元格按空文本处理
    fn cell_text(&self, index: usize) -> String {
        self.cells
            .get(index)
            .map(|cell| cell.text().trim().to_string())
            .unwrap_or_default()
    }
}

trait RowAccumulator {
    fn accept<N: DocumentNode>(&mut self, row: &ReleaseRow<N>);
}

/// 完整模式结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseTable {
    pub items: Vec<TorrentInfo>,
    pub tag_matches_per_item: Vec<Vec<TagMatch>>,
    pub tags: Vec<String>,
}

/// 精简模式结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSummary {
    pub tags: Vec<String>,
    pub update_dates: Vec<String>,
}

impl ReleaseSummary {
    pub fn episode_count(&self) -> usize {
        self.update_dates.len()
    }
}

struct TableBuilder<'h> {
    host: &'h str,
    table: ReleaseTable,
}

impl RowAccumulator for TableBuilder<'_> {
    fn accept<N: DocumentNode>(&mut self, row: &ReleaseRow<N>) {
        let name = row.name();
        let extracted = extract_tags(&name);
        for tag in &extracted.tags {
            push_unique(&mut self.table.tags, tag);
        }

        self.table.items.push(TorrentInfo {
            magnet_uri: row.magnet(),
            size_text: row.cell_text(SIZE_CELL),
            date_text: row.cell_text(DATE_CELL),
            torrent_url: absolute_url(self.host, row.torrent_href()),
            name,
        });
        self.table.tag_matches_per_item.push(extracted.matches);
    }
}

impl RowAccumulator for ReleaseSummary {
    fn accept<N: DocumentNode>(&mut self, row: &ReleaseRow<N>) {
        let date = row.cell_text(DATE_CELL);
        if !date.is_empty() {
            self.update_dates.push(date);
        }
        for tag in extract_tags(&row.name()).tags {
            push_unique(&mut self.tags, &tag);
        }
    }
}

/// 定位锚点之后紧邻的 .episode-table，取出所有有效行
/// 任何一层结构缺失都返回空，字幕组可能还没有发布
fn release_rows<N: DocumentNode>(anchor: &N) -> Vec<ReleaseRow<N>> {
    let Some(body) = anchor
        .next_sibling_matching(&EPISODE_TABLE)
        .and_then(|wrapper| wrapper.find_first(&TABLE))
        .and_then(|table| table.find_first(&TABLE_BODY))
    else {
        return Vec::new();
    };

    body.find_all(&TABLE_ROW)
        .into_iter()
        .filter_map(|tr| {
            let links = tr.find_all(&LINK);
            // 广告行或残缺行
            if links.len() < MIN_ROW_LINKS {
                return None;
            }
            Some(ReleaseRow {
                links,
                cells: tr.find_all(&TABLE_CELL),
            })
        })
        .collect()
}

fn scan_rows<N: DocumentNode, A: RowAccumulator>(anchor: &N, mut acc: A) -> A {
    for row in release_rows(anchor) {
        acc.accept(&row);
    }
    acc
}

/// 完整解析: 种子列表、逐条标签命中与汇总标签
pub fn parse_release_table<N: DocumentNode>(anchor: &N, host: &str) -> ReleaseTable {
    scan_rows(
        anchor,
        TableBuilder {
            host,
            table: ReleaseTable::default(),
        },
    )
    .table
}

/// 精简解析: 只统计标签与更新日期，不构造种子链接
pub fn parse_release_summary<N: DocumentNode>(anchor: &N) -> ReleaseSummary {
    scan_rows(anchor, ReleaseSummary::default())
}
