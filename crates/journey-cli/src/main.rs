//! Journey CLI - Member health journey in the terminal
//!
//! Reads the Journey API and prints the profile card, KPI tiles,
//! decision timeline, conversation search and metrics range.

mod api;
mod config;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{JourneyClient, KpiResponse, MessageResponse};
use config::Config;

#[derive(Parser)]
#[command(name = "journey")]
#[command(about = "Journey CLI - Member health journey viewer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the member profile card and dataset coverage
    Profile,

    /// Show KPI tiles (column totals and percent change)
    Kpis,

    /// Decision timeline with message trails
    Timeline {
        /// Text matched against title, type and rationale
        query: Option<String>,
        /// Only decisions tagged with this pillar
        #[arg(short, long)]
        pillar: Option<String>,
        /// Only decisions of this type (e.g. "Medication")
        #[arg(short = 't', long)]
        r#type: Option<String>,
        /// Hide the message trails
        #[arg(long)]
        no_trail: bool,
    },

    /// Search the conversation log, newest first
    Chat {
        /// Text matched against message bodies
        query: Option<String>,
        /// Max messages
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Metrics rows within an inclusive date range
    Metrics {
        /// First day (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<NaiveDate>,
        /// Last day (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<NaiveDate>,
    },

    /// Show or change configuration
    Config {
        /// Set the API base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile => cmd_profile().await,
        Commands::Kpis => cmd_kpis().await,
        Commands::Timeline { query, pillar, r#type, no_trail } => {
            cmd_timeline(query, pillar, r#type, no_trail).await
        }
        Commands::Chat { query, limit } => cmd_chat(query, limit).await,
        Commands::Metrics { start, end } => cmd_metrics(start, end).await,
        Commands::Config { base_url } => cmd_config(base_url).await,
    }
}

fn client() -> Result<JourneyClient> {
    let config = Config::load()?;
    Ok(JourneyClient::new(&config.base_url))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_profile() -> Result<()> {
    let dashboard = client()?.dashboard().await?;
    let profile = dashboard.profile;

    println!("{}", profile.member.cyan().bold());
    println!("  Age: {}", profile.age);
    println!("  Occupation: {}", profile.occupation);
    println!("  Snapshot: {}", profile.snapshot_date.dimmed());

    println!("\n{}", "Goals:".bold());
    if profile.goals.is_empty() {
        println!("  {}", "None recorded".dimmed());
    }
    for goal in &profile.goals {
        println!("  • {}", goal);
    }

    println!("\n{}", "Summary:".bold());
    println!("  {}", profile.executive_summary);

    println!("\n{}", "Key metrics:".bold());
    print_kpis(&dashboard.kpis);

    let stats = dashboard.stats;
    let span = match (stats.first_metrics_date, stats.last_metrics_date) {
        (Some(first), Some(last)) => format!("{} → {}", first, last),
        _ => "no metrics".to_string(),
    };
    println!(
        "\n{}",
        format!(
            "{} messages, {} decisions, {} days of metrics ({})",
            stats.message_count, stats.decision_count, stats.metrics_days, span
        )
        .dimmed()
    );

    Ok(())
}

async fn cmd_kpis() -> Result<()> {
    let kpis = client()?.kpis().await?;

    println!("{}", "Key metrics:".bold());
    print_kpis(&kpis);

    Ok(())
}

async fn cmd_timeline(
    query: Option<String>,
    pillar: Option<String>,
    decision_type: Option<String>,
    no_trail: bool,
) -> Result<()> {
    let timeline = client()?
        .timeline(query.as_deref(), pillar.as_deref(), decision_type.as_deref())
        .await?;

    if let Some(message) = &timeline.empty_state {
        println!("{}", message.yellow());
        return Ok(());
    }

    println!("{} decisions:", timeline.count.to_string().green());

    for entry in &timeline.entries {
        let decision = &entry.decision;
        println!(
            "\n{} {} {} {}",
            entry.icon,
            decision.date.dimmed(),
            decision.title.cyan().bold(),
            format!("[{} #{}]", decision.decision_type, decision.id).dimmed()
        );
        if let Some(pillar) = &decision.pillar {
            println!("  Pillar: {}", pillar);
        }
        if !decision.rationale.is_empty() {
            println!("  {}", truncate_string(&decision.rationale, 120));
        }
        if decision.before.is_some() || decision.after.is_some() {
            println!(
                "  {} → {}",
                decision.before.as_deref().unwrap_or("-").red(),
                decision.after.as_deref().unwrap_or("-").green()
            );
        }

        if no_trail {
            continue;
        }
        if entry.trail.is_empty() {
            println!("  {}", "No linked messages".dimmed());
        }
        for message in &entry.trail {
            print_message(message, 80);
        }
    }

    Ok(())
}

async fn cmd_chat(query: Option<String>, limit: Option<usize>) -> Result<()> {
    if limit == Some(0) {
        bail!("--limit must be at least 1");
    }

    let results = client()?.conversation(query.as_deref(), limit).await?;

    if let Some(message) = &results.empty_state {
        println!("{}", message.yellow());
        return Ok(());
    }

    println!(
        "{} messages (limit {}):",
        results.count.to_string().green(),
        results.limit
    );
    for message in &results.messages {
        print_message(message, 100);
    }

    Ok(())
}

async fn cmd_metrics(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    let range = client()?.metrics_range(start, end).await?;

    if let Some(message) = &range.empty_state {
        println!("{}", message.yellow());
        return Ok(());
    }

    println!("{} days:", range.count.to_string().green());
    println!(
        "  {:<10}  {:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7}",
        "date".bold(),
        "doctor",
        "pt",
        "ruby",
        "perf",
        "nutr",
        "hrv",
        "fatigue"
    );
    for row in &range.rows {
        println!(
            "  {:<10}  {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6} {:>7}",
            row.date,
            row.doctor_hours,
            row.pt_hours,
            row.ruby_hours,
            row.performance_hours,
            row.nutrition_hours,
            optional_reading(row.hrv),
            optional_reading(row.fatigue)
        );
    }

    Ok(())
}

async fn cmd_config(base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = base_url {
        config.set_base_url(&url);
        config.save()?;
        println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);

    let reachable = matches!(JourneyClient::new(&config.base_url).health().await, Ok(true));
    println!(
        "  Server: {}",
        if reachable { "Reachable".green() } else { "Unreachable".red() }
    );

    Ok(())
}

// ============================================
// Output helpers
// ============================================

fn print_kpis(kpis: &[KpiResponse]) {
    for kpi in kpis {
        println!("  {:<20} {:>8.1}  {}", kpi.label, kpi.total, format_change(kpi.change_pct));
    }
}

fn format_change(change_pct: Option<f64>) -> colored::ColoredString {
    match change_pct {
        Some(pct) if pct > 0.0 => format!("▲ {:.1}%", pct).green(),
        Some(pct) if pct < 0.0 => format!("▼ {:.1}%", pct.abs()).red(),
        Some(_) => "0.0%".normal(),
        None => "unavailable".dimmed(),
    }
}

fn print_message(message: &MessageResponse, width: usize) {
    println!(
        "  {} {} {} {}",
        format!("#{}", message.id).dimmed(),
        message.timestamp.dimmed(),
        format!("{}:", message.speaker).bold(),
        truncate_string(&message.text, width)
    );
}

fn optional_reading(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
