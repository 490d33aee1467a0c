mod config;
mod dom;
mod http_client;
mod mikan;
mod tags;
mod types;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::http_client::FetchError;
use crate::mikan::MikanClient;
use crate::types::{DetailOptions, Season};

/// 季度浏览允许的年份范围
const MIN_YEAR: i32 = 2000;
const MAX_YEAR: i32 = 2100;

#[derive(Clone)]
struct AppState {
    mikan: Arc<MikanClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    let mikan = Arc::new(MikanClient::from_env());
    info!("🌐 Mikan 站点: {}", mikan.host());

    let app = router(AppState { mikan });

    // 启动服务器
    let addr = SocketAddr::from(([0, 0, 0, 0], config::server_port()));
    info!("🚀 Mikan 抓取 API 启动在 http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法监听 {}", addr))?;
    axum::serve(listener, app).await.context("服务异常退出")?;
    Ok(())
}

fn router(state: AppState) -> Router {
    // CORS 配置
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(api_info_handler))
        .route("/api", get(api_info_handler))
        .route("/health", get(health_handler))
        // Mikan 直连抓取
        .route("/mikan/search/{keyword}", get(search_handler))
        .route("/mikan/anime/{keyword}", get(anime_search_handler))
        .route("/mikan/season/{year}/{season}", get(season_handler))
        .route("/mikan/list", get(list_handler))
        .route("/mikan/bangumi/{id}", get(bangumi_detail_handler))
        .route("/mikan/groups", get(groups_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// 统一响应结构
#[derive(Debug, Serialize)]
struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn success<T: Serialize>(data: T) -> Response {
    Json(Envelope {
        success: true,
        data: Some(data),
        message: None,
    })
    .into_response()
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(Envelope::<()> {
            success: false,
            data: None,
            message: Some(message.into()),
        }),
    )
        .into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    failure(StatusCode::BAD_REQUEST, message)
}

/// 抓取失败整体返回错误，不带部分结果
fn respond<T: Serialize>(action: &str, result: Result<T, FetchError>) -> Response {
    match result {
        Ok(data) => success(data),
        Err(e) => {
            warn!("{} 失败 (状态码 {:?}): {}", action, e.status(), e);
            failure(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

fn validate_year(year: i32) -> Result<i32, Response> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(bad_request(format!(
            "year 需在 {} 到 {} 之间",
            MIN_YEAR, MAX_YEAR
        )))
    }
}

fn validate_season(season: &str) -> Result<Season, Response> {
    season.parse().map_err(bad_request)
}

/// GET /api - API 信息
async fn api_info_handler() -> impl IntoResponse {
    Json(json!({
        "name": "Mikan Search API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Mikan 番剧站点直连抓取",
        "endpoints": {
            "GET /mikan/search/{keyword}": "搜索番剧 (支持 bangumiId: <ID> 直查)",
            "GET /mikan/anime/{keyword}": "搜索番剧 (平铺列表)",
            "GET /mikan/season/{year}/{season}": "按季度浏览 (season: 冬/春/夏/秋)",
            "GET /mikan/list": "组合查询 (?text= 或 ?year=&season=，都不填时为首页)",
            "GET /mikan/bangumi/{id}": "番剧详情 (?includeTorrents=true&subgroupIds=370,209)",
            "GET /mikan/groups": "按详情页 URL 获取字幕组 (?url=)",
            "GET /health": "健康检查"
        }
    }))
}

/// 健康检查
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET /mikan/search/{keyword}
async fn search_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Response {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return bad_request("keyword 不能为空");
    }

    info!("🔍 搜索: {}", keyword);
    respond("搜索", state.mikan.search(keyword).await)
}

/// GET /mikan/anime/{keyword}
async fn anime_search_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Response {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return bad_request("keyword 不能为空");
    }

    info!("🔍 搜索: {}", keyword);
    respond("搜索", state.mikan.search_anime(keyword).await)
}

/// GET /mikan/season/{year}/{season}
async fn season_handler(
    State(state): State<AppState>,
    Path((year, season)): Path<(i32, String)>,
) -> Response {
    let year = match validate_year(year) {
        Ok(year) => year,
        Err(response) => return response,
    };
    let season = match validate_season(&season) {
        Ok(season) => season,
        Err(response) => return response,
    };

    info!("📅 季度浏览: {} {}", year, season);
    respond("季度浏览", state.mikan.browse_season(year, season).await)
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    text: Option<String>,
    year: Option<i32>,
    season: Option<String>,
}

/// GET /mikan/list
async fn list_handler(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let season = match (query.year, query.season.as_deref()) {
        (None, None) => None,
        (Some(year), Some(season)) => {
            let year = match validate_year(year) {
                Ok(year) => year,
                Err(response) => return response,
            };
            match validate_season(season) {
                Ok(season) => Some((year, season)),
                Err(response) => return response,
            }
        }
        _ => return bad_request("year 与 season 需同时提供"),
    };

    info!("📋 组合查询: text={:?} season={:?}", query.text, season);
    respond(
        "组合查询",
        state.mikan.list(query.text.as_deref(), season).await,
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailQuery {
    #[serde(default)]
    include_torrents: bool,
    /// 逗号分隔的字幕组 ID
    subgroup_ids: Option<String>,
}

impl DetailQuery {
    fn into_options(self) -> DetailOptions {
        DetailOptions {
            include_torrents: self.include_torrents,
            subgroup_ids: self.subgroup_ids.map(|ids| {
                ids.split(',')
                    .map(|id| id.trim())
                    .filter(|id| !id.is_empty())
                    .map(String::from)
                    .collect::<HashSet<_>>()
            }),
        }
    }
}

/// GET /mikan/bangumi/{id}
async fn bangumi_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Response {
    let id = id.trim();
    if id.is_empty() {
        return bad_request("bangumiId 不能为空");
    }

    let options = query.into_options();
    info!(
        "📖 番剧详情: {} (种子: {}, 字幕组过滤: {:?})",
        id, options.include_torrents, options.subgroup_ids
    );

    let result = state.mikan.bangumi_detail(id, &options).await;
    if let Ok(detail) = &result {
        debug!("{} 字幕组: {:?}", detail.title(), detail.subgroup_ids());
    }
    respond("番剧详情", result)
}

#[derive(Debug, Deserialize)]
struct GroupsQuery {
    url: Option<String>,
}

/// GET /mikan/groups
async fn groups_handler(
    State(state): State<AppState>,
    Query(query): Query<GroupsQuery>,
) -> Response {
    let Some(url) = query.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        return bad_request("url 不能为空");
    };

    info!("👥 字幕组列表: {}", url);
    respond("字幕组列表", state.mikan.subgroups(url).await)
}
