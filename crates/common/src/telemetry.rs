/// 初始化日志：默认 info 级别，可通过 RUST_LOG 覆盖
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // 测试中可能重复初始化，忽略错误
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();
}
