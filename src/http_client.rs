use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

const ACCEPT_LANGUAGE_ZH: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// 全局 HTTP 客户端
/// 不设置超时，单次请求，失败不重试
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to create HTTP client")
});

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("请求 {url} 失败: {status} {status_text}")]
    BadStatus {
        url: String,
        status: u16,
        status_text: String,
    },
    #[error("请求 {url} 失败: {message}")]
    Request { url: String, message: String },
}

impl FetchError {
    /// 非 2xx 响应的状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::BadStatus { status, .. } => Some(*status),
            FetchError::Request { .. } => None,
        }
    }
}

/// 页面抓取接口
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 对绝对 URL 发起一次 GET，返回页面文本
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// 基于全局 reqwest 客户端的抓取器
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        get_text(url).await
    }
}

/// GET 请求并返回文本
pub async fn get_text(url: &str) -> Result<String, FetchError> {
    debug!("GET {}", url);

    let response = HTTP_CLIENT
        .get(url)
        .header(ACCEPT, ACCEPT_HTML)
        .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_ZH)
        .send()
        .await
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    response.text().await.map_err(|e| FetchError::Request {
        url: url.to_string(),
        message: e.to_string(),
    })
}
