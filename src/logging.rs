use tracing_subscriber::EnvFilter;

/// stderr로 로그를 내보내는 구독자를 설치한다. `RUST_LOG`가 없으면 `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
