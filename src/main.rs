//! `set-slack-message` 바이너리 진입점.

use slack_templates::interface::cli::{AppComposition, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let options = match Cli::parse_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();
    if let Err(err) = composition.set_slack_message_usecase().execute(options).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
