use std::thread;
use std::time::Duration;

use anyhow::Result;
use rst_style_language_server::lsp::server::serve;
use rst_style_language_server::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    // stderr only; stdout carries the protocol
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    // If running under the integration test, exit after a short delay so the test can read stdout to EOF.
    if std::env::var("RST_STYLE_LS_TEST_EXIT").as_deref() == Ok("1") {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs(1));
            std::process::exit(0);
        });
    }

    serve(config).await
}
