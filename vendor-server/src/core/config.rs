use std::path::PathBuf;

/// 服务器配置 - 商家仪表盘后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、上传文件、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | THEME_PREFERS_DARK | false | 系统深色模式偏好 |
/// | MAX_UPLOAD_BYTES | 5242880 | 单个上传文件上限 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/dabbzo HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 存储中没有主题模式时使用深色
    pub theme_prefers_dark: bool,
    /// 单个上传文件上限 (字节)
    pub max_upload_bytes: usize,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: env_parse("HTTP_PORT").unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON").unwrap_or(false),
            theme_prefers_dark: env_parse("THEME_PREFERS_DARK").unwrap_or(false),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES").unwrap_or(5 * 1024 * 1024),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS").unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn work_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    /// redb 数据库文件
    pub fn database_path(&self) -> PathBuf {
        self.work_dir_path().join(crate::db::DB_FILE)
    }

    /// 上传文件目录
    pub fn uploads_dir(&self) -> PathBuf {
        self.work_dir_path().join("uploads")
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        self.work_dir_path().join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_and_paths() {
        let config = Config::with_overrides("/tmp/dabbzo", 4000);
        assert_eq!(config.http_port, 4000);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/dabbzo/dabbzo.redb"));
        assert_eq!(config.uploads_dir(), PathBuf::from("/tmp/dabbzo/uploads"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/dabbzo/logs"));
    }
}
