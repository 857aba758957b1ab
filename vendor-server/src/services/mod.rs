//! 服务层 - 仪表盘各页面的业务服务
//!
//! # 服务列表
//!
//! - [`MenuService`] - 菜品目录 (内存)
//! - [`EarningsService`] - 收益账单与提现申请
//! - [`ProfileService`] - 商家资料 (草稿编辑)
//! - [`OnboardingService`] - 入驻向导
//! - [`KycService`] - KYC 文件提交
//! - [`SupportService`] - 客服聊天
//! - [`DashboardService`] - 首页统计
//! - [`FileStore`] - 上传文件存储 (SHA-256 去重)

pub mod dashboard;
pub mod earnings;
pub mod kyc;
pub mod menu;
pub mod onboarding;
pub mod profile;
pub mod support;
pub mod uploads;

pub use dashboard::DashboardService;
pub use earnings::EarningsService;
pub use kyc::KycService;
pub use menu::MenuService;
pub use onboarding::OnboardingService;
pub use profile::ProfileService;
pub use support::SupportService;
pub use uploads::{FileStore, StoredFile, UploadedFile};
