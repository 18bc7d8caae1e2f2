//! Run command - monitor the subreddit until interrupted

use log::info;

use super::super::app::Settings;
use statsbot::adapters::reddit::RedditClient;
use statsbot::adapters::stats::SubredditStats;
use statsbot::config;
use statsbot::core::services::{Classifier, Dispatcher, Monitor};
use statsbot::shutdown::Shutdown;

/// Start the monitor loop
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    let site = config::load_site(&settings.config, &settings.site)?;
    info!("Using site `{}` as /u/{}", settings.site, site.username);

    let shutdown = Shutdown::new();
    shutdown.install_ctrlc_handler()?;

    let client = RedditClient::new(site.credentials())?.with_stream(site.stream_settings(), shutdown.clone());
    let stats = SubredditStats::new(&client);
    let classifier = Classifier::new(site.grammar()?);
    let dispatcher = Dispatcher::new(
        &client,
        &client,
        &client,
        &stats,
        settings.subreddit.as_str(),
        site.operator.as_str(),
    );

    Monitor::new(&client, &classifier, &dispatcher, shutdown)
        .with_retry_delay(site.stream_settings().poll_interval)
        .run()?;
    Ok(())
}
