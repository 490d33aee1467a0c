//! Mikan 页面结构表
//! 站点改版时只需修改这里

use once_cell::sync::Lazy;
use scraper::Selector;

fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("Invalid Mikan selector")
}

// 页面路径
pub const SEARCH_PATH: &str = "/Home/Search";
pub const SEASON_PATH: &str = "/Home/BangumiCoverFlowByDayOfWeek";
pub const BANGUMI_PATH: &str = "/Home/Bangumi";

// 番剧列表
pub static LIST_ITEM: Lazy<Selector> = Lazy::new(|| css("li"));
pub static COVER_SPAN: Lazy<Selector> = Lazy::new(|| css("span"));
pub static LINK: Lazy<Selector> = Lazy::new(|| css("a"));

// 种子表
pub static EPISODE_TABLE: Lazy<Selector> = Lazy::new(|| css(".episode-table"));
pub static TABLE: Lazy<Selector> = Lazy::new(|| css("table"));
pub static TABLE_BODY: Lazy<Selector> = Lazy::new(|| css("tbody"));
pub static TABLE_ROW: Lazy<Selector> = Lazy::new(|| css("tr"));
pub static TABLE_CELL: Lazy<Selector> = Lazy::new(|| css("td"));

// 详情页
pub static BANGUMI_TITLE: Lazy<Selector> = Lazy::new(|| css(".bangumi-title"));
pub static COVER_IMAGE: Lazy<Selector> = Lazy::new(|| css(".content > img"));
pub static BANGUMI_INFO: Lazy<Selector> = Lazy::new(|| css(".bangumi-info"));
pub static SUBGROUP_ITEM: Lazy<Selector> = Lazy::new(|| css(".leftbar-item"));
pub static SUBGROUP_NAME: Lazy<Selector> = Lazy::new(|| css("a.subgroup-name"));
pub static UPDATE_DAY: Lazy<Selector> = Lazy::new(|| css(".date"));
pub static RSS_LINK: Lazy<Selector> = Lazy::new(|| css(".mikan-rss"));

// 季度页 / 搜索页
pub static DATE_SELECT: Lazy<Selector> = Lazy::new(|| css(".date-select"));
pub static DATE_TEXT: Lazy<Selector> = Lazy::new(|| css(".date-text"));
pub static SEASON_ITEM: Lazy<Selector> = Lazy::new(|| css(".dropdown-menu li"));
pub static WEEKDAY_BLOCK: Lazy<Selector> = Lazy::new(|| css(".sk-bangumi"));
pub static SEARCH_LIST: Lazy<Selector> = Lazy::new(|| css(".an-ul"));

// 属性
pub const ATTR_HREF: &str = "href";
pub const ATTR_SRC: &str = "src";
pub const ATTR_DATA_SRC: &str = "data-src";
pub const ATTR_DATA_ANCHOR: &str = "data-anchor";
pub const ATTR_MAGNET: &str = "data-clipboard-text";
pub const ATTR_DATA_YEAR: &str = "data-year";
pub const ATTR_DATA_SEASON: &str = "data-season";

/// 外部信息块 (番组计划) 的标识文字
pub const EXTERNAL_INFO_MARKERS: &[&str] = &["Bangumi", "番组计划"];

/// 单组搜索结果的分组名
pub const SEARCH_GROUP_LABEL: &str = "Search";
