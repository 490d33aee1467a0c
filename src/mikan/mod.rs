//! Mikan 直连抓取
//! 每次调用只请求一个页面，解析失败的局部结构降级为空，只有请求失败会返回错误

mod anime_list;
mod browse;
mod detail;
mod release_table;
mod selectors;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::config;
use crate::http_client::{FetchError, HttpFetcher, PageFetcher};
use crate::types::{
    AnimeInfo, BangumiDetailResult, BrowseResult, DetailOptions, Season, Subgroup, WeekdayGroup,
};
use once_cell::sync::Lazy;
use regex::Regex;
use selectors::{BANGUMI_PATH, SEARCH_GROUP_LABEL, SEARCH_PATH, SEASON_PATH};
use std::sync::Arc;
use tracing::debug;

pub type Result<T> = std::result::Result<T, FetchError>;

/// 详情页 URL 末尾的数字 ID
static BANGUMI_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)/?$").expect("Invalid bangumi id regex"));

/// 以 http 开头视为绝对地址，否则拼接站点地址
pub(crate) fn absolute_url(host: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", host, href)
    }
}

/// 取 URL 末尾的数字，找不到时为空串
pub(crate) fn extract_bangumi_id(url: &str) -> String {
    BANGUMI_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub struct MikanClient {
    fetcher: Arc<dyn PageFetcher>,
    host: String,
}

impl MikanClient {
    pub fn new(fetcher: Arc<dyn PageFetcher>, host: impl Into<String>) -> Self {
        Self {
            fetcher,
            host: host.into(),
        }
    }

    /// 使用真实网络请求与 MIKAN_HOST 配置
    pub fn from_env() -> Self {
        Self::new(Arc::new(HttpFetcher), config::mikan_host())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}{}?searchstr={}",
            self.host,
            SEARCH_PATH,
            urlencoding::encode(keyword)
        )
    }

    fn season_url(&self, year: i32, season: Season) -> String {
        format!(
            "{}{}?year={}&seasonStr={}",
            self.host,
            SEASON_PATH,
            year,
            urlencoding::encode(season.label())
        )
    }

    fn bangumi_url(&self, bangumi_id: &str) -> String {
        format!("{}{}/{}", self.host, BANGUMI_PATH, bangumi_id)
    }

    /// 关键词搜索，只返回平铺的番剧列表
    pub async fn search_anime(&self, keyword: &str) -> Result<Vec<AnimeInfo>> {
        let html = self.fetcher.fetch(&self.search_url(keyword)).await?;
        let items = browse::parse_search_list(&html, &self.host);
        debug!("搜索 {} 找到 {} 个结果", keyword, items.len());
        Ok(items)
    }

    /// 关键词搜索，支持 "bangumiId: <数字>" 直查
    pub async fn search(&self, keyword: &str) -> Result<BrowseResult> {
        self.list(Some(keyword), None).await
    }

    /// 按年份与季度浏览
    pub async fn browse_season(&self, year: i32, season: Season) -> Result<BrowseResult> {
        self.list(None, Some((year, season))).await
    }

    /// 组合入口: 有关键词时搜索，其次按季度浏览，都没有时取首页
    pub async fn list(
        &self,
        text: Option<&str>,
        season: Option<(i32, Season)>,
    ) -> Result<BrowseResult> {
        let text = text.filter(|t| !t.trim().is_empty());

        let url = match (text, season) {
            (Some(text), _) => {
                if let Some(bangumi_id) = browse::bangumi_id_query(text) {
                    return self.lookup_bangumi(bangumi_id).await;
                }
                self.search_url(text)
            }
            (None, Some((year, season))) => self.season_url(year, season),
            (None, None) => self.host.clone(),
        };

        let html = self.fetcher.fetch(&url).await?;
        let result = browse::parse_browse_page(&html, &self.host);
        debug!(
            "{} 解析到 {} 个季度, {} 个分组, 共 {} 部",
            url,
            result.seasons.len(),
            result.groups.len(),
            result.total_item_count
        );
        Ok(result)
    }

    /// 直查单个番剧，包装为一个 Search 分组
    async fn lookup_bangumi(&self, bangumi_id: &str) -> Result<BrowseResult> {
        let url = self.bangumi_url(bangumi_id);
        let html = self.fetcher.fetch(&url).await?;
        let detail =
            detail::parse_detail_basic(&html, &self.host, bangumi_id, &url, &DetailOptions::default());

        let item = AnimeInfo {
            title: detail.title,
            detail_url: detail.detail_url,
            cover_url: detail.cover_url,
            bangumi_id: detail.bangumi_id,
        };
        Ok(BrowseResult::new(
            Vec::new(),
            vec![WeekdayGroup {
                label: SEARCH_GROUP_LABEL.to_string(),
                items: vec![item],
            }],
        ))
    }

    /// 番剧详情，include_torrents 决定返回精简或完整结构
    pub async fn bangumi_detail(
        &self,
        bangumi_id: &str,
        options: &DetailOptions,
    ) -> Result<BangumiDetailResult> {
        let url = self.bangumi_url(bangumi_id);
        let html = self.fetcher.fetch(&url).await?;

        let result = if options.include_torrents {
            BangumiDetailResult::Full(detail::parse_detail_full(
                &html, &self.host, bangumi_id, &url, options,
            ))
        } else {
            BangumiDetailResult::Basic(detail::parse_detail_basic(
                &html, &self.host, bangumi_id, &url, options,
            ))
        };
        Ok(result)
    }

    /// 按详情页 URL 获取全部字幕组 (完整模式，不过滤)
    pub async fn subgroups(&self, detail_page_url: &str) -> Result<Vec<Subgroup>> {
        let html = self.fetcher.fetch(detail_page_url).await?;
        let groups = detail::parse_subgroup_page(&html, &self.host);
        debug!("{} 解析到 {} 个字幕组", detail_page_url, groups.len());
        Ok(groups)
    }
}
