use std::sync::Arc;

use crate::core::{Config, Result};
use crate::orders::{OrderStorage, OrdersManager};
use crate::seed;
use crate::services::{
    DashboardService, EarningsService, FileStore, KycService, MenuService, OnboardingService,
    ProfileService, SupportService,
};
use crate::theme::{ThemeService, ThemeStore};

/// 服务器状态 - 持有所有服务的单例引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | orders | Arc<OrdersManager> | 订单状态流转 (redb) |
/// | theme | Arc<ThemeService> | 主题配色 (redb) |
/// | menu | MenuService | 菜品目录 |
/// | earnings | EarningsService | 收益与提现 |
/// | profile | ProfileService | 商家资料 |
/// | onboarding | OnboardingService | 入驻向导 |
/// | kyc | KycService | KYC 文件 |
/// | support | SupportService | 客服聊天 |
/// | dashboard | DashboardService | 首页统计 |
/// | files | FileStore | 上传文件存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    pub orders: Arc<OrdersManager>,
    pub theme: Arc<ThemeService>,
    pub menu: MenuService,
    pub earnings: EarningsService,
    pub profile: ProfileService,
    pub onboarding: OnboardingService,
    pub kyc: KycService,
    pub support: SupportService,
    pub dashboard: DashboardService,
    pub files: FileStore,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录 (uploads / logs)
    /// 2. 打开 redb，首次启动写入演示订单
    /// 3. 恢复主题，构建其余内存服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        // 0. Ensure work_dir structure exists
        std::fs::create_dir_all(config.uploads_dir())?;
        std::fs::create_dir_all(config.log_dir())?;

        // 1. Storage
        let db = crate::db::open(config.database_path())?;
        tracing::info!(path = %config.database_path().display(), "Database opened");

        let orders = OrdersManager::with_storage(OrderStorage::new(db.clone())?);
        orders.seed(&seed::live_orders(), &seed::archived_orders())?;

        let theme = ThemeService::load(ThemeStore::new(db)?, config.theme_prefers_dark)?;

        // 2. In-memory services
        let files = FileStore::new(config.uploads_dir(), config.max_upload_bytes);
        let orders = Arc::new(orders);
        let earnings = EarningsService::new(seed::earnings_summary(), seed::transactions());
        let profile = ProfileService::new(seed::vendor_profile());

        Ok(Self {
            config: config.clone(),
            dashboard: DashboardService::new(orders.clone(), earnings.clone()),
            onboarding: OnboardingService::new(profile.clone()),
            menu: MenuService::new(seed::dishes(), files.clone()),
            kyc: KycService::new(files.clone()),
            support: SupportService::new(shared::util::now_millis()),
            theme: Arc::new(theme),
            orders,
            earnings,
            profile,
            files,
        })
    }
}
