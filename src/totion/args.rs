use clap::Parser;
use std::sync::OnceLock;

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds.
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "totion", version = version())]
#[command(
    about = "Futuristic notes for your terminal",
    long_about = "Browse, write and delete plain-text notes kept in ~/.totion.\n\n\
                  Keys: Ctrl+N new, Ctrl+L list, Ctrl+S save, Ctrl+D delete (in the list), \
                  Esc back, Ctrl+Q quit."
)]
pub struct Cli {
    /// Log debug detail (the log lives in the cache directory; RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}
