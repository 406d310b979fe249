use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Fixed filter for `hello-world`; the greeter never reads `RUST_LOG`.
pub const GREETER_LOG_FILTER: &str = "hello_backend=warn,hello_world=warn";

// 日誌一律寫到 stderr，stdout 只留給程式輸出
pub fn init_greeter_logger() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(GREETER_LOG_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

pub fn init_server_logger(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("hello_backend=debug,hello_server=debug,info")
        })
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hello_backend=info,hello_server=info"))
    };

    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("logger already initialized: {}", e);
    }
}
