use clap::Parser as _;
use unbound_blocker::{setup_logging, App, Args};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logging = setup_logging()?;

    App::run_until_completion(args).await
}
