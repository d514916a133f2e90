use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use unbound_blocker_lib::Whitelist;

use crate::{read_lines, Args, BlocklistFetcher, ControlCommand, ResolverSync, UnboundControl};

pub struct App;

impl App {
    pub async fn run_until_completion(args: Args) -> anyhow::Result<()> {
        let fetcher = BlocklistFetcher::new(Duration::from_secs(args.request_timeout))?;
        let control = UnboundControl::new(args.unbound_control);

        App::run(&args.sources, args.whitelist.as_deref(), &fetcher, &control).await
    }

    /// Retrieves the blocklist, applies the whitelist and hands the result over to the resolver
    pub async fn run<C: ControlCommand>(
        sources_path: &Path,
        whitelist_path: Option<&Path>,
        fetcher: &BlocklistFetcher,
        control: &C,
    ) -> anyhow::Result<()> {
        let sources = read_lines(sources_path)
            .await
            .context("failed to read the blocklist sources")?;

        let mut blocklist = fetcher.retrieve_blocklist(&sources).await;

        if let Some(path) = whitelist_path {
            let entries = read_lines(path)
                .await
                .context("failed to read the whitelist")?;
            let whitelist = Whitelist::from_lines(entries);
            blocklist = whitelist.apply(blocklist);
        }

        ResolverSync::new(control)
            .synchronize(&blocklist)
            .await
            .context("failed to synchronize the blocklist with the resolver")
    }
}
