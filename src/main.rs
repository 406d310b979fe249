use hello_backend::core::greeter;
use hello_backend::utils::logger;

fn main() {
    logger::init_greeter_logger();

    // 參數一律忽略
    tracing::debug!(
        "ignoring {} command-line argument(s)",
        std::env::args_os().len().saturating_sub(1)
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = greeter::greet(&mut out) {
        tracing::debug!("failed to write greeting: {:?}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
