pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    // Panels go to stdout, so keep log lines on stderr out of their way.
    builder.target(env_logger::Target::Stderr);

    builder.init();
}
