//! 运行配置
//! 全部来自环境变量，未设置时使用内置默认值

/// Mikan 站点默认地址
pub const DEFAULT_MIKAN_HOST: &str = "https://mikanime.tv";

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 3000;

/// 站点地址覆盖变量
const MIKAN_HOST_ENV: &str = "MIKAN_HOST";

/// 获取 Mikan 站点地址 (MIKAN_HOST，空值视为未设置)
pub fn mikan_host() -> String {
    resolve_host(std::env::var(MIKAN_HOST_ENV).ok())
}

/// 获取服务监听端口 (PORT)
pub fn server_port() -> u16 {
    resolve_port(std::env::var("PORT").ok())
}

fn resolve_host(value: Option<String>) -> String {
    // 不校验格式，非法地址会在请求时暴露为抓取失败
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_MIKAN_HOST.to_string())
}

fn resolve_port(value: Option<String>) -> u16 {
    value
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
