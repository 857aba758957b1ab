//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`dashboard`] - 首页统计
//! - [`orders`] - 订单管理接口 (接单 / 拒单 / 完成 / 历史)
//! - [`menu`] - 菜品管理接口
//! - [`earnings`] - 收益和提现接口
//! - [`profile`] - 商家资料接口
//! - [`onboarding`] - 入驻向导接口
//! - [`kyc`] - KYC 文件提交接口
//! - [`support`] - 客服聊天接口
//! - [`theme`] - 主题配色接口
//! - [`uploads`] - 上传文件读取

pub mod dashboard;
pub mod earnings;
pub mod health;
pub mod kyc;
pub mod menu;
pub mod onboarding;
pub mod orders;
pub mod profile;
pub mod support;
pub mod theme;
pub mod uploads;

// Re-export common types for handlers
pub use crate::utils::AppResult;
