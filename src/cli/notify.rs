//! The single command: record one merge event

use crate::cli::Args;
use crate::cli::style::{Stylize, check};
use anstream::println;
use anyhow::Context;
use notion_merge_log::config::{Config, ConfigFile};
use notion_merge_log::event::EventSource;
use notion_merge_log::notion::CreatePageRequest;
use notion_merge_log::page::PageDraft;
use notion_merge_log::{NotionClient, RunOutcome, UpsertOutcome, run};

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load configuration, with CLI flags applied on top.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let file = args
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()
        .context("failed to load config file")?;

    let mut config = Config::load(file.as_ref(), env_lookup)?;
    if let Some(language) = args.lang {
        config.language = language;
    }
    if let Some(limit) = args.summary_limit {
        config.summary_limit = limit;
    }
    if let Some(limit) = args.error_body_limit {
        config.error_body_limit = limit;
    }
    Ok(config)
}

/// Run the notify command
pub async fn run_notify(args: &Args) -> anyhow::Result<()> {
    // Config and payload are both validated before any request is sent
    let config = load_config(args)?;
    let source = EventSource::resolve(args.event.as_deref(), env_lookup)?;
    let payload = source.load()?;

    let Some(pr) = payload.pull_request else {
        println!("{}", "No pull_request in payload; skipping".muted());
        return Ok(());
    };

    if args.dry_run {
        if !pr.is_merged() {
            println!("{}", "Not merged; skipping".muted());
            return Ok(());
        }
        let draft = PageDraft::from_event(&pr, &config);
        let request =
            CreatePageRequest::new(&config.database_id, &draft.properties, &draft.children);
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let client = NotionClient::new(&config)?;
    match run(&pr, &config, &client).await? {
        RunOutcome::Skipped => println!("{}", "Not merged; skipping".muted()),
        RunOutcome::Written(UpsertOutcome::Updated(page)) => println!(
            "{} Updated existing Notion page {}",
            check(),
            page.id.emphasis()
        ),
        RunOutcome::Written(UpsertOutcome::Created(page)) => {
            println!("{} Created Notion page: {}", check(), page.accent());
        }
    }
    Ok(())
}
