//! Command line entry point
//!
//! Wires the file store and system clock into a `Session` and prints plain
//! text results.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use next_moderator::{
    core::roster,
    services::{FileHistoryStore, SystemClock},
    Draw, DrawRequest, LeaderboardRow, Leaderboards, ModeratorError, Overview, Session, StoreConfig,
};
use shared::{logging, EventKind, Moderator};

/// Randomly picks the next meeting moderator
#[derive(Parser)]
#[command(name = "next-moderator")]
#[command(about = "Draws the next stand-up or retrospective moderator and keeps score")]
struct Args {
    /// History artifact path (overrides NEXT_MODERATOR_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an empty history artifact unless one exists
    Init,

    /// Show who moderates the current or last session
    Show {
        /// standup or retro
        kind: EventKind,
    },

    /// Draw the next moderator
    Draw {
        /// standup or retro
        kind: EventKind,

        /// Session date (YYYY-MM-DD), defaults to the next session
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Only draw from these moderators (defaults to the active roster)
        #[arg(long = "only")]
        only: Vec<String>,

        /// Leave these moderators out of the draw
        #[arg(long)]
        exclude: Vec<String>,

        /// Draw without saving the result
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the leaderboards
    Leaderboard {
        /// standup or retro
        kind: EventKind,
    },

    /// Manage the moderator roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },
}

#[derive(Subcommand)]
enum RosterAction {
    /// List all moderators
    List,
    /// Add a new, active moderator
    Add { name: String },
    /// Make a moderator available for draws again
    Activate { name: String },
    /// Take a moderator out of future draws (keeps their history)
    Deactivate { name: String },
    /// Delete a moderator (prefer deactivate)
    Remove { name: String },
    /// Replace the whole roster
    Replace {
        /// Active moderators
        #[arg(long)]
        active: Vec<String>,
        /// Inactive moderators
        #[arg(long)]
        inactive: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));

    let config = StoreConfig::resolve(args.store.clone()).context("resolving store configuration")?;
    let store = FileHistoryStore::new(&config.path);
    logging::log_startup(&format!("next-moderator with history at {}", config.path.display()));

    if let Command::Init = args.command {
        if store.init().await? {
            logging::log_success(&format!("Created {}", config.path.display()));
        }
        println!("History artifact: {}", config.path.display());
        return Ok(());
    }

    let mut session = Session::new(store, SystemClock);

    match args.command {
        Command::Init => {}
        Command::Show { kind } => {
            let overview = session.overview(kind).await?;
            print_overview(&overview);
        }
        Command::Draw {
            kind,
            date,
            only,
            exclude,
            dry_run,
        } => {
            let snapshot = session.snapshot().await?;
            let pool = if only.is_empty() { snapshot.active_names() } else { only };
            let excluded: BTreeSet<String> = exclude.into_iter().collect();
            let candidates = pool.into_iter().filter(|name| !excluded.contains(name));

            let mut request = DrawRequest::new(kind, candidates);
            if let Some(date) = date {
                request = request.on(date);
            }
            if dry_run {
                request = request.dry_run();
            }

            let draw = match session.draw(request).await {
                Ok(draw) => draw,
                Err(ModeratorError::Persist { message }) => session
                    .retry_save()
                    .await
                    .with_context(|| format!("the draw could not be saved (first attempt: {message})"))?
                    .context("no unsaved draw to retry")?,
                Err(e) => return Err(e.into()),
            };
            print_draw(&draw);
            print_leaderboards(&session.leaderboards(kind).await?);
        }
        Command::Leaderboard { kind } => {
            print_leaderboards(&session.leaderboards(kind).await?);
        }
        Command::Roster { action } => {
            let roster = match action {
                RosterAction::List => session.snapshot().await?.roster.clone(),
                RosterAction::Add { name } => session.update_roster(|r| roster::add(r, &name)).await?,
                RosterAction::Activate { name } => {
                    session.update_roster(|r| roster::set_active(r, &name, true)).await?
                }
                RosterAction::Deactivate { name } => {
                    session.update_roster(|r| roster::set_active(r, &name, false)).await?
                }
                RosterAction::Remove { name } => {
                    session.update_roster(|r| roster::remove(r, &name).map(|_| ())).await?
                }
                RosterAction::Replace { active, inactive } => {
                    let replacement = active
                        .into_iter()
                        .map(Moderator::active)
                        .chain(inactive.into_iter().map(|name| Moderator::new(name, false)))
                        .collect();
                    session.save_roster(replacement).await?
                }
            };
            print_roster(&roster);
        }
    }

    Ok(())
}

fn print_overview(overview: &Overview) {
    let label = overview.kind.label();
    if overview.off_day {
        println!("Tool is under contract, and weekends are off! 🛌");
    }
    match &overview.last {
        Some(last) if overview.is_today => println!("Today's moderator: {}", last.moderator),
        Some(last) => println!("{} {}'s moderator: {}", last.date, label, last.moderator),
        None => println!("No {label} has been moderated yet"),
    }
    if let Some(date) = overview.default_date {
        println!("Next {label}: {date}");
    }
    println!("Available: {}", overview.available.join(", "));
}

fn print_draw(draw: &Draw) {
    if draw.lone_candidate {
        println!("There's only one team member available... why did you even run this thing? 🤨");
    }
    if let Some(replaced) = &draw.replaced {
        println!("Replacing pending moderator {}", replaced.moderator);
    }
    println!("{} {}'s moderator: {}", draw.date, draw.kind.label(), draw.moderator);
    if !draw.persisted {
        println!("(not saved)");
    }
}

fn print_leaderboards(boards: &Leaderboards) {
    print_board("This month's leaderboard", &boards.this_month);
    print_board("All time leaderboard", &boards.all_time);

    println!();
    println!("Previous moderators");
    for event in &boards.recent {
        println!("  {event}");
    }
}

fn print_board(title: &str, rows: &[LeaderboardRow]) {
    println!();
    println!("{title}");
    let width = rows.iter().map(|row| row.moderator.len()).max().unwrap_or(0);
    for row in rows {
        let marker = if row.leader { "*" } else { " " };
        println!(
            "{marker} {:<width$}  {:>3}  {}",
            row.moderator,
            row.count,
            "#".repeat(row.count)
        );
    }
}

fn print_roster(roster: &[Moderator]) {
    for moderator in roster {
        let status = if moderator.active { "active" } else { "inactive" };
        println!("{:<20} {}", moderator.name, status);
    }
}
