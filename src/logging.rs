use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// 初始化日志输出
///
/// 日志写到 stderr，stdout 只留给摘要信息。`RUST_LOG` 优先于命令行参数。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（如测试中）时忽略错误
    let _ = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
