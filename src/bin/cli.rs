//! ChronoLearn CLI
//!
//! Terminal front end for the ChronoLearn backend:
//! - Log in / register / log out
//! - Import and schedule playlists
//! - Track video status
//! - Browse the calendar and analytics

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chronolearn::analytics::format_seconds;
use chronolearn::api::ApiError;
use chronolearn::calendar::{CalendarView, DaySelection, EMPTY_DAY_MESSAGE};
use chronolearn::client::{HttpClient, TrackerApi};
use chronolearn::config::{generate_default_config, Config};
use chronolearn::import::{format_duration, ImportFlow};
use chronolearn::model::{Credentials, Id, VideoStatus};
use chronolearn::progress::VideoBoard;
use chronolearn::schedule::{ScheduleForm, ScheduleMode};
use chronolearn::session::{gate, Gate, Session, SessionStore};
use chronolearn::store::FileSessionStore;

#[derive(Parser)]
#[command(name = "chronolearn")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn YouTube playlists into a study schedule")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and CHRONOLEARN_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/chronolearn/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the session
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Register {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Import a YouTube playlist
    Import {
        /// Playlist URL
        url: String,
        /// Schedule right away at this many hours per day
        #[arg(long)]
        hours: Option<f64>,
        /// Start date for the schedule (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// List playlists with progress
    Dashboard,

    /// Schedule (or reschedule) a playlist
    Schedule {
        playlist: String,
        /// Hours per day (at least 0.5)
        #[arg(long, conflicts_with = "target")]
        hours: Option<f64>,
        /// Finish by this date (YYYY-MM-DD)
        #[arg(long)]
        target: Option<NaiveDate>,
        /// Start date (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// List a playlist's videos
    Videos {
        playlist: String,
        /// Only show videos with this status (not-started, in-progress, completed)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Change a video's status
    Status {
        playlist: String,
        video: String,
        /// not-started, in-progress or completed
        status: String,
    },

    /// Show the schedule of a playlist
    Calendar {
        playlist: String,
        /// Only this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Progress, watch time and streaks of a playlist
    Analytics { playlist: String },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    Ok(config)
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn session_store(config: &Config) -> anyhow::Result<FileSessionStore> {
    let path = config
        .session
        .path()
        .context("No config directory available for the session file")?;
    Ok(FileSessionStore::new(path))
}

/// Session for a protected command; fails before any request without one
fn require_session(config: &Config) -> anyhow::Result<Session> {
    let session = session_store(config)?.load()?;
    match gate(&session) {
        Gate::Proceed(_) => Ok(session),
        Gate::Redirect(_) => bail!("Not logged in. Run `chronolearn login <email> -p <password>` first."),
    }
}

/// One line per backend field error
fn registration_error(e: &ApiError) -> anyhow::Error {
    anyhow::anyhow!(e.items("Registration failed.").join("\n"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_status(value: &str) -> anyhow::Result<VideoStatus> {
    VideoStatus::parse(value).with_context(|| {
        format!(
            "Unknown status {:?} (expected not-started, in-progress or completed)",
            value
        )
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config);

    let json = cli.format == "json";
    let client = HttpClient::new(config.api.base_url.clone());
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Login { email, password } => {
            let response = client
                .login(&Credentials::new(email, password))
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Login failed.")))?;

            let session = Session::new(
                response.access_token,
                response.users_id.map(|id| id.to_string()),
            );
            session_store(&config)?.save(&session)?;
            println!("Login successful.");
        }

        Commands::Register { email, password } => {
            client
                .register(&Credentials::new(email, password))
                .await
                .map_err(|e| registration_error(&e))?;
            println!("Registration successful! You can now log in.");
        }

        Commands::Logout => {
            session_store(&config)?.clear()?;
            println!("Logged out.");
        }

        Commands::Import { url, hours, start } => {
            let client = client.with_session(require_session(&config)?);
            let mut flow = ImportFlow {
                url,
                imported: None,
            };
            let request = flow.request()?;
            let response = client
                .import_playlist(&request)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Import failed.")))?;

            if json {
                print_json(&response)?;
            } else {
                println!("{}", response.message);
                println!("Playlist ID: {}", response.playlist_id);
                println!();
                for video in &response.videos {
                    println!("  {:>6}  {}", format_duration(video.duration_seconds), video.title);
                }
            }
            flow.complete(response);

            if let Some(hours) = hours {
                let mut form = ImportFlow::schedule_form(start.unwrap_or(today));
                form.hours_per_day = Some(hours);
                if let Some(request) = flow.schedule(&form) {
                    client
                        .schedule(&request?)
                        .await
                        .map_err(|e| anyhow::anyhow!(e.user_message("Scheduling failed.")))?;
                    println!();
                    println!("Playlist scheduled successfully.");
                }
            }
        }

        Commands::Dashboard => {
            let client = client.with_session(require_session(&config)?);
            let playlists = client
                .dashboard()
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load dashboard.")))?;

            if json {
                print_json(&playlists)?;
            } else if playlists.is_empty() {
                println!("No playlists yet.");
                println!();
                println!("Import your first one with:");
                println!("  chronolearn import <playlist-url> --hours 1.5");
            } else {
                println!(
                    "{:<8} {:<40} {:>9} {:>7} {:<23}",
                    "ID", "Title", "Videos", "Done", "Schedule"
                );
                println!("{}", "-".repeat(90));
                for p in &playlists {
                    let schedule = match (&p.scheduled_start, &p.scheduled_end) {
                        (Some(start), Some(end)) if p.is_scheduled() => format!("{} → {}", start, end),
                        _ => "not scheduled".to_string(),
                    };
                    println!(
                        "{:<8} {:<40} {:>4}/{:<4} {:>6.0}% {:<23}",
                        p.playlist_id.to_string(),
                        truncate(&p.title, 40),
                        p.completed,
                        p.total_videos,
                        p.progress_width(),
                        schedule
                    );
                }
            }
        }

        Commands::Schedule {
            playlist,
            hours,
            target,
            start,
        } => {
            let client = client.with_session(require_session(&config)?);
            let form = ScheduleForm {
                mode: if target.is_some() {
                    ScheduleMode::ByDate
                } else {
                    ScheduleMode::ByHours
                },
                start_date: Some(start.unwrap_or(today)),
                hours_per_day: hours,
                target_date: target,
            };
            let request = form.build(Id::from(playlist))?;
            client
                .schedule(&request)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Scheduling failed.")))?;
            println!("Playlist scheduled successfully ({}).", request.mode().label());
        }

        Commands::Videos { playlist, status } => {
            let client = client.with_session(require_session(&config)?);
            let filter = status.as_deref().map(parse_status).transpose()?;
            let videos = client
                .playlist_videos(&Id::from(playlist))
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load videos.")))?;
            let board = VideoBoard::new(videos);
            let shown = board.filtered(filter);

            if json {
                print_json(&shown)?;
            } else {
                let (done, total) = board.completed();
                println!("{} of {} videos completed", done, total);
                println!();
                println!("{:<8} {:<12} {:<12} {:>6}  {}", "ID", "Status", "Scheduled", "Length", "Title");
                println!("{}", "-".repeat(80));
                for video in shown {
                    println!(
                        "{:<8} {:<12} {:<12} {:>6}  {}",
                        video.id.to_string(),
                        video.status.label(),
                        video.scheduled_day(),
                        format_duration(video.duration_seconds),
                        video.title
                    );
                }
            }
        }

        Commands::Status {
            playlist,
            video,
            status,
        } => {
            let client = client.with_session(require_session(&config)?);
            let status = parse_status(&status)?;
            let videos = client
                .playlist_videos(&Id::from(playlist))
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load videos.")))?;

            let mut board = VideoBoard::new(videos);
            let video_id = Id::from(video);
            if board.get(&video_id).is_none() {
                bail!("No video {} in this playlist", video_id);
            }

            match board.begin(&video_id, status) {
                None => println!("Video {} is already {}.", video_id, status),
                Some(update) => match client.update_status(&update).await {
                    Ok(()) => {
                        board.confirm(&update);
                        println!("Video {} marked {}.", video_id, status);
                    }
                    Err(e) => {
                        let message = e.user_message("Failed to update status.");
                        board.fail(&update, message.clone());
                        bail!(message);
                    }
                },
            }
        }

        Commands::Calendar { playlist, date } => {
            let client = client.with_session(require_session(&config)?);
            let entries = client
                .calendar_view(&Id::from(playlist))
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message("Failed to load calendar.")))?;
            let view = CalendarView::new(entries);

            match date {
                Some(date) => match view.select(Some(date)) {
                    DaySelection::Videos(videos) => {
                        if json {
                            print_json(&videos)?;
                        } else {
                            println!("{}", date.format("%A, %B %-d, %Y"));
                            for video in videos {
                                println!("  [{}] {}", video.status.label(), video.title);
                            }
                        }
                    }
                    DaySelection::Empty | DaySelection::None => println!("{}", EMPTY_DAY_MESSAGE),
                },
                None if json => print_json(&view.entries())?,
                None => {
                    if view.entries().is_empty() {
                        println!("This playlist has no schedule yet.");
                    }
                    for entry in view.entries() {
                        println!("{}  ({} videos)", entry.date, entry.videos.len());
                        for video in &entry.videos {
                            println!("  [{}] {}", video.status.label(), video.title);
                        }
                    }
                }
            }
        }

        Commands::Analytics { playlist } => {
            let client = client.with_session(require_session(&config)?);
            let bundle = client.analytics(&Id::from(playlist)).await;

            if let Ok(info) = &bundle.info {
                println!("{}", info.title);
                println!();
            }
            if let Ok(progress) = &bundle.progress {
                println!(
                    "Progress:    {}/{} videos ({:.1}%)",
                    progress.completed, progress.total_videos, progress.percentage
                );
            }
            if let Ok(watch) = &bundle.watch_time {
                println!("Total time:  {}", format_seconds(watch.total_time_sec));
                println!("Watched:     {}", format_seconds(watch.completed_sec));
                println!("Remaining:   {}", format_seconds(watch.remaining_sec));
            }
            if let Ok(streak) = &bundle.streak {
                println!(
                    "Streak:      {} days (best {})",
                    streak.current_streak, streak.max_streak
                );
            }
            if let Some(pie) = bundle.pie() {
                println!("Chart:       {} completed / {} remaining", pie.completed, pie.remaining);
            }
            if let Some(banner) = bundle.banner() {
                eprintln!();
                eprintln!("{} ({})", banner, bundle.failed_panels().join(", "));
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, &content)?;
                println!("Config written to {:?}", path);
            } else {
                println!("{}", content);
            }
        }
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
