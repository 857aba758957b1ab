//! Dabbzo Vendor Server - 家庭厨房商家后台服务
//!
//! # 架构概述
//!
//! 为 Dabbzo 商家仪表盘提供 HTTP API：
//!
//! - **订单** (`orders`): 事件记录的订单生命周期 (接单 / 拒单 / 完成)
//! - **数据库** (`db`): 嵌入式 redb 存储
//! - **主题** (`theme`): 配色与明暗模式，持久化到偏好表
//! - **业务服务** (`services`): 菜品、收益、资料、入驻、KYC、客服
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! vendor-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # redb 数据库层
//! ├── orders/        # 订单动作、状态归约、事件存储
//! ├── theme/         # 主题服务和偏好存储
//! ├── services/      # 业务服务
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由装配和中间件层
//! ├── seed.rs        # 演示数据
//! └── utils/         # 日志、错误、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod orders;
pub mod routes;
pub mod seed;
pub mod services;
pub mod theme;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use orders::{OrderStorage, OrdersManager};
pub use theme::{ThemeService, ThemeStore};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorCategory, ErrorCode, ErrorResponse};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 日志保留天数
const LOG_RETENTION_DAYS: u64 = 14;

/// 加载 .env，创建工作目录并初始化日志
pub fn setup_environment() -> Result<Config, std::io::Error> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    init_logger_with_file(Some(&config.log_level), config.log_json, Some(&log_dir));

    match cleanup_old_logs(&log_dir, LOG_RETENTION_DAYS) {
        Ok(0) => {}
        Ok(removed) => tracing::info!(removed, "Removed old log files"),
        Err(e) => tracing::warn!("Failed to clean up old logs: {}", e),
    }

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____        __    __
   / __ \____ _/ /_  / /_  ____  ____
  / / / / __ `/ __ \/ __ \/_  / / __ \
 / /_/ / /_/ / /_/ / /_/ / / /_/ /_/ /
/_____/\__,_/_.___/_.___/ /___/\____/
    "#
    );
}
