//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed
//! arguments and returns a `Result`; `run_command` owns the tokio runtime.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::brainz::{
    CoverArtClient, ListenBrainzClient, MusicBrainzClient, RecordingMatch, StatsPeriod,
    UpstreamError,
};
use crate::cloud::{CloudService, RenderInput};
use crate::config::{self, Config};
use crate::error::{Error, Result};

/// brainzcloud CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate word-cloud input from your recent listens
    Cloud {
        /// ListenBrainz username (defaults to the logged-in account)
        #[arg(short, long)]
        user: Option<String>,
        /// ListenBrainz user token (or set LISTENBRAINZ_TOKEN)
        #[arg(long, env = "LISTENBRAINZ_TOKEN")]
        token: Option<String>,
        /// How many recent listens to aggregate
        #[arg(long)]
        listens: Option<u32>,
        /// How many ranked tags to keep
        #[arg(long)]
        tags: Option<usize>,
        /// Write the renderer input JSON here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show the currently playing (or most recent) track
    Now {
        /// ListenBrainz username (defaults to the logged-in account)
        #[arg(short, long)]
        user: Option<String>,
        /// ListenBrainz user token (or set LISTENBRAINZ_TOKEN)
        #[arg(long, env = "LISTENBRAINZ_TOKEN")]
        token: Option<String>,
    },
    /// Download grid-stats chart art as SVG
    Chart {
        /// ListenBrainz username (defaults to the logged-in account)
        #[arg(short, long)]
        user: Option<String>,
        /// ListenBrainz user token (or set LISTENBRAINZ_TOKEN)
        #[arg(long, env = "LISTENBRAINZ_TOKEN")]
        token: Option<String>,
        /// Time period: week, month, half_yearly, year, all_time
        #[arg(long, default_value = "week")]
        period: StatsPeriod,
        /// Grid dimension (2x2 through 5x5)
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=5))]
        dimension: u8,
        /// Output file
        #[arg(short, long, default_value = "chart.svg")]
        out: PathBuf,
    },
    /// Validate a user token and save it to the config file
    Login {
        /// Your 36-character ListenBrainz user token
        /// (from https://listenbrainz.org/profile/)
        token: String,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Cloud {
            user,
            token,
            listens,
            tags,
            out,
        } => {
            cmd_cloud(
                &rt,
                user.as_deref(),
                token.as_deref(),
                *listens,
                *tags,
                out.as_deref(),
            )?;
        }
        Commands::Now { user, token } => {
            cmd_now(&rt, user.as_deref(), token.as_deref())?;
        }
        Commands::Chart {
            user,
            token,
            period,
            dimension,
            out,
        } => {
            cmd_chart(&rt, user.as_deref(), token.as_deref(), *period, *dimension, out)?;
        }
        Commands::Login { token } => {
            cmd_login(&rt, token)?;
        }
    }
    Ok(())
}

// ============================================================================
// Individual command implementations
// ============================================================================

fn cmd_cloud(
    rt: &Runtime,
    user: Option<&str>,
    token: Option<&str>,
    listens: Option<u32>,
    tags: Option<usize>,
    out: Option<&Path>,
) -> Result<()> {
    let config = config::load();
    let (username, token) = resolve_auth(&config, user, token)?;
    let max_listens = listens.unwrap_or(config.cloud.max_listens);
    let tag_limit = tags.unwrap_or(config.cloud.tag_limit);

    rt.block_on(async {
        let client = ListenBrainzClient::new(&token);
        let service = CloudService::new(client.clone(), client);

        let words = service
            .build_word_cloud_input(&username, max_listens, tag_limit)
            .await?;

        if words.is_empty() {
            println!("No tags found in {username}'s recent listens - nothing to show.");
            return Ok(());
        }

        let input = RenderInput::from_config(&config.cloud, words);
        let json = serde_json::to_string_pretty(&input)?;

        match out {
            Some(path) => {
                std::fs::write(path, json)?;
                println!(
                    "Wrote {} tags for {} to {}",
                    input.words.len(),
                    username,
                    path.display()
                );
            }
            None => println!("{json}"),
        }
        Ok(())
    })
}

fn cmd_now(rt: &Runtime, user: Option<&str>, token: Option<&str>) -> Result<()> {
    let config = config::load();
    let (username, token) = resolve_auth(&config, user, token)?;

    rt.block_on(async {
        let client = ListenBrainzClient::new(&token);

        // Prefer what is playing right now; fall back to the last listen
        let (listen, live) = match client.playing_now(&username).await? {
            Some(listen) => (listen, true),
            None => match client.most_recent_listen(&username).await? {
                Some(listen) => (listen, false),
                None => {
                    println!("No listens found for {username}.");
                    return Ok(());
                }
            },
        };

        if live {
            println!("Now playing - {username}");
        } else {
            println!("Last played - {username}");
        }
        println!("  {}", listen.track);
        if listen.release.is_empty() {
            println!("  {}", listen.artist);
        } else {
            println!("  {} - {}", listen.artist, listen.release);
        }
        if !live
            && let Some(ts) = listen.listened_at
            && let Some(when) = chrono::DateTime::from_timestamp(ts, 0)
        {
            println!("  at {}", when.format("%Y-%m-%d %H:%M UTC"));
        }

        // Resolve the recording: trust the listen's mapping, otherwise search
        let matched = match &listen.recording_mbid {
            Some(mbid) if !mbid.is_empty() => Some(RecordingMatch {
                recording_mbid: mbid.clone(),
                release_mbid: listen.release_mbid.clone(),
            }),
            _ => {
                let musicbrainz = MusicBrainzClient::new();
                match musicbrainz
                    .search_recording(&listen.artist, &listen.release, &listen.track)
                    .await
                {
                    Ok(matched) => matched,
                    Err(e) => {
                        tracing::warn!("MusicBrainz search failed: {}", e);
                        None
                    }
                }
            }
        };

        if let Some(matched) = matched {
            println!(
                "  https://musicbrainz.org/recording/{}",
                matched.recording_mbid
            );

            if let Some(release_mbid) = matched.release_mbid {
                let coverart = CoverArtClient::new();
                match coverart.front_cover_url(&release_mbid).await {
                    Ok(url) => println!("  Cover: {url}"),
                    Err(UpstreamError::NotFound) => {}
                    Err(e) => tracing::warn!("Cover art lookup failed: {}", e),
                }
            }
        }

        // Account total, shown as a footer when the endpoint cooperates
        match client.listen_count(&username).await {
            Ok(total) => println!("  {total} total scrobbles"),
            Err(e) => tracing::warn!("Listen count lookup failed: {}", e),
        }

        Ok(())
    })
}

fn cmd_chart(
    rt: &Runtime,
    user: Option<&str>,
    token: Option<&str>,
    period: StatsPeriod,
    dimension: u8,
    out: &Path,
) -> Result<()> {
    let config = config::load();
    let (username, token) = resolve_auth(&config, user, token)?;

    rt.block_on(async {
        let client = ListenBrainzClient::new(&token);
        let svg = client
            .fetch_grid_stats_art(&username, period, dimension)
            .await?;

        std::fs::write(out, svg)?;
        println!(
            "Wrote {}x{} {} chart for {} to {}",
            dimension,
            dimension,
            period.as_str(),
            username,
            out.display()
        );
        Ok(())
    })
}

fn cmd_login(rt: &Runtime, token: &str) -> Result<()> {
    if token.len() != 36 {
        return Err(Error::auth(
            "Expected a 36-character ListenBrainz user token \
             (find yours at https://listenbrainz.org/profile/)",
        ));
    }

    let validation = rt.block_on(async {
        let client = ListenBrainzClient::new(token);
        client.validate_token().await
    })?;

    if !validation.valid {
        return Err(Error::auth(format!(
            "Token rejected by ListenBrainz: {}",
            validation.message
        )));
    }

    let Some(username) = validation.user_name else {
        return Err(Error::auth(
            "Token validated but no account name was returned",
        ));
    };

    let mut config = config::load();
    config.credentials.token = Some(token.to_string());
    config.credentials.username = Some(username.clone());
    config::save(&config)?;

    println!("Logged in as {username}.");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

/// Resolve the username and token for a command, preferring explicit
/// arguments over stored credentials.
fn resolve_auth(
    config: &Config,
    user: Option<&str>,
    token: Option<&str>,
) -> Result<(String, String)> {
    let token = token
        .map(String::from)
        .or_else(|| config.credentials.token.clone())
        .ok_or_else(|| {
            Error::auth(
                "No ListenBrainz token configured. Run `brainzcloud login <token>` \
                 or set LISTENBRAINZ_TOKEN.",
            )
        })?;

    let user = user
        .map(String::from)
        .or_else(|| config.credentials.username.clone())
        .ok_or_else(|| {
            Error::auth("No username given. Pass --user or run `brainzcloud login <token>`.")
        })?;

    Ok((user, token))
}
