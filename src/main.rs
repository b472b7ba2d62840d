use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use rayon::prelude::*;
use schedscraper::{
    export::{output_file_name, write_csv_file},
    Alignment, FetchConfig, ScheduleFetcher,
};
use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tracing::{error, info};
use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Scrape per-game runs and win flags from team season schedule pages into CSV"
)]
struct Args {
    /// Team abbreviations, e.g. NYY BOS LAD
    #[arg(required = true)]
    teams: Vec<String>,
    /// Season year; defaults to the current year
    #[arg(short, long)]
    year: Option<u16>,
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// Fetch teams concurrently
    #[arg(long)]
    parallel: bool,
    /// Log and skip a failed team instead of stopping
    #[arg(long)]
    keep_going: bool,
    /// Truncate to the shortest column instead of failing on mismatch
    #[arg(long)]
    lenient: bool,
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn scrape_team(fetcher: &ScheduleFetcher, team: &str, year: u16, out_dir: &Path) -> Result<PathBuf> {
    let start = Instant::now();
    let table = fetcher
        .fetch(team, year)
        .with_context(|| format!("fetching {} {}", team, year))?;
    let path = out_dir.join(output_file_name(team));
    write_csv_file(&table, &path).with_context(|| format!("writing {}", path.display()))?;
    info!(
        team,
        rows = table.len(),
        wins = table.wins(),
        elapsed = ?start.elapsed(),
        path = %path.display(),
        "saved"
    );
    Ok(path)
}

fn log_filter(level: &str) -> Result<EnvFilter> {
    let directive: Directive = level
        .parse()
        .with_context(|| format!("parsing --log-level {:?}", level))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    fmt().with_env_filter(log_filter(&args.log_level)?).init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    // ─── 2) configure fetcher ────────────────────────────────────────
    let mut config = FetchConfig::from_env().context("reading SCHEDULE_* environment")?;
    if let Some(base) = &args.base_url {
        config = config.with_base_url(base).context("parsing --base-url")?;
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if args.lenient {
        config = config.with_alignment(Alignment::Lenient);
    }

    let year = match args.year {
        Some(y) => y,
        None => u16::try_from(Local::now().year()).context("current year out of range")?,
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let fetcher = ScheduleFetcher::new(config)?;
    info!(
        teams = args.teams.len(),
        year,
        base = %fetcher.config().base_url,
        alignment = %fetcher.config().alignment,
        "startup"
    );

    // ─── 3) fetch + export each team ─────────────────────────────────
    let results: Vec<(&String, Result<PathBuf>)> = if args.parallel {
        args.teams
            .par_iter()
            .map(|team| (team, scrape_team(&fetcher, team, year, &args.out_dir)))
            .collect()
    } else {
        let mut done = Vec::with_capacity(args.teams.len());
        for team in &args.teams {
            let res = scrape_team(&fetcher, team, year, &args.out_dir);
            let failed = res.is_err();
            done.push((team, res));
            if failed && !args.keep_going {
                break;
            }
        }
        done
    };

    // ─── 4) report ───────────────────────────────────────────────────
    let mut failed = 0;
    for (team, res) in results {
        if let Err(err) = res {
            if !args.keep_going {
                return Err(err);
            }
            error!(team = %team, "skipped: {:#}", err);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{} of {} teams failed", failed, args.teams.len());
    }
    info!("all done");
    Ok(())
}
