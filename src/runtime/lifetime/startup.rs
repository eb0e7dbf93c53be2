use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化默认管理员账号
/// 如果管理员表为空，则创建一个默认管理员
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_admins().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} admin(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No admins found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count admins: {}, skipping admin seed", e);
            return;
        }
    }

    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "admin".to_string());

    match storage.create_admin(&name).await {
        Ok(admin) => {
            info!(
                "Default admin account created successfully (ID: {}, name: {})",
                admin.id, admin.name
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 打印各数据表的行数
pub async fn report_table_stats(storage: &Arc<dyn Storage>) -> Result<()> {
    for stat in storage.table_stats().await? {
        info!("{:<24} {:<12} {} row(s)", stat.table, stat.verbose_name, stat.rows);
    }
    Ok(())
}

/// 准备启动上下文
/// 包括数据库连接、迁移和默认管理员
pub async fn prepare_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    if config.app.seed_admin {
        seed_admin(&storage).await;
    }

    Ok(StartupContext { storage })
}
