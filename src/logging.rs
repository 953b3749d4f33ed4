use tracing_subscriber::EnvFilter;

/// tracing の初期化
///
/// RUST_LOG があればそれを使い、なければ warn（--verbose で debug）。
pub fn init(verbose: bool) {
    let default = if verbose { "goldenrecord=debug,goldenrecord_common=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
