//! 日志初始化
//!
//! 默认级别为 info，可用 `RUST_LOG` 覆盖

use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 重复调用是安全的（测试里可能多次调用）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
