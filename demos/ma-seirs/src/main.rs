//! ma-seirs — agent-based SEIRS epidemic on a toroidal grid.
//!
//! Writes one row of compartment counts per day (`t,S,E,I,R`).  With
//! `--replicates k` the run is repeated for seeds `seed..seed+k`, each
//! replicate gets its own `<stem>_repNN` file, and the first epidemic peak
//! of every replicate is summarised in `<stem>_peaks.csv`.
//!
//! Set `RUST_LOG=info` (or `debug` for per-day censuses) to see progress.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;

use seirs_core::{InitialCounts, MeanDurations, SimParams};
use seirs_output::{
    CsvWriter, DailyRow, OutputWriter, ParquetWriter, PeakRow, PeaksCsvWriter, SimOutputObserver,
    SqliteWriter,
};
use seirs_sim::{PeakStats, Replicate, SimBuilder, run_replicates};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
    Parquet,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Csv     => "csv",
            Format::Sqlite  => "db",
            Format::Parquet => "parquet",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ma-seirs", version, about = "Agent-based SEIRS simulation on a toroidal grid")]
struct Cli {
    /// Master RNG seed (first seed of a replicate batch).
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (default `data/ma_seirs.<csv|db|parquet>`).  Replicate
    /// files are derived from its stem.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Number of simulated days T.
    #[arg(long)]
    days: Option<u32>,

    /// Side length L of the grid.
    #[arg(long)]
    grid_side: Option<u32>,

    /// Population size N.  Without `--initial`, the susceptible quota absorbs
    /// the difference.
    #[arg(long)]
    agents: Option<usize>,

    /// Day-0 quotas as `S,E,I,R`.
    #[arg(long, value_parser = parse_initial)]
    initial: Option<InitialCounts>,

    /// Mean sojourn lengths as `E,I,R` (days).
    #[arg(long, value_parser = parse_means)]
    means: Option<MeanDurations>,

    /// Coefficient in p = 1 - exp(-force * NI).
    #[arg(long)]
    infection_force: Option<f64>,

    /// JSON file with any subset of the run parameters.  Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run this many replicates with consecutive seeds.
    #[arg(long)]
    replicates: Option<u32>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

impl Cli {
    fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(path) => path.clone(),
            None => PathBuf::from("data/ma_seirs").with_extension(self.format.extension()),
        }
    }
}

fn parse_list<const N: usize, T: std::str::FromStr>(s: &str) -> Result<[T; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated values, got {}", parts.len()));
    }
    let mut values = Vec::with_capacity(N);
    for p in parts {
        values.push(p.parse::<T>().map_err(|_| format!("invalid value {p:?}"))?);
    }
    values.try_into().map_err(|_| "wrong number of values".to_owned())
}

fn parse_initial(s: &str) -> Result<InitialCounts, String> {
    let [susceptible, exposed, infectious, removed] = parse_list::<4, usize>(s)?;
    Ok(InitialCounts::new(susceptible, exposed, infectious, removed))
}

fn parse_means(s: &str) -> Result<MeanDurations, String> {
    let [exposed, infectious, removed] = parse_list::<3, f64>(s)?;
    Ok(MeanDurations { exposed, infectious, removed })
}

// ── Parameters ────────────────────────────────────────────────────────────────

fn load_params(cli: &Cli) -> Result<SimParams> {
    let mut params = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SimParams>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimParams::default(),
    };

    if let Some(seed) = cli.seed {
        params.seed = seed;
    }
    if let Some(days) = cli.days {
        params.days = days;
    }
    if let Some(side) = cli.grid_side {
        params.grid_side = side;
    }
    if let Some(force) = cli.infection_force {
        params.infection_force = force;
    }
    if let Some(means) = cli.means {
        params.mean_duration = means;
    }
    if let Some(agents) = cli.agents {
        params.agent_count = agents;
        if cli.initial.is_none() {
            let seeded = params.initial.exposed + params.initial.infectious + params.initial.removed;
            if let Some(susceptible) = agents.checked_sub(seeded) {
                params.initial.susceptible = susceptible;
            }
        }
    }
    if let Some(initial) = cli.initial {
        params.initial = initial;
    }

    params.validate()?;
    Ok(params)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn write_series<W: OutputWriter>(mut writer: W, replicate: &Replicate) -> Result<usize> {
    for (day, census) in &replicate.series {
        writer.write_daily(&DailyRow::new(*day, census))?;
    }
    writer.finish()?;
    Ok(replicate.series.len())
}

fn write_replicate(format: Format, path: &Path, replicate: &Replicate) -> Result<usize> {
    match format {
        Format::Csv     => write_series(CsvWriter::create(path)?, replicate),
        Format::Sqlite  => write_series(SqliteWriter::create(path)?, replicate),
        Format::Parquet => write_series(ParquetWriter::create(path)?, replicate),
    }
}

fn sibling(out: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ma_seirs".to_owned());
    out.with_file_name(format!("{stem}_{suffix}.{extension}"))
}

// ── Runs ──────────────────────────────────────────────────────────────────────

fn run_single<W: OutputWriter>(params: SimParams, writer: W) -> Result<usize> {
    let mut sim = SimBuilder::new(params).build()?;
    let mut obs = SimOutputObserver::new(writer);
    sim.run(&mut obs)?;
    let census = sim.census();
    println!(
        "Final day {}: S={} E={} I={} R={}",
        sim.day.0, census.susceptible, census.exposed, census.infectious, census.removed
    );
    Ok(obs.rows_written())
}

fn run_batch(params: &SimParams, count: u32, format: Format, out: &Path) -> Result<()> {
    let seeds: Vec<u64> = (0..u64::from(count)).map(|k| params.seed.wrapping_add(k)).collect();
    let replicates = run_replicates(params, &seeds)?;

    let peaks_path = sibling(out, "peaks", "csv");
    let mut peaks_csv = PeaksCsvWriter::create(&peaks_path)?;
    let mut peaks = Vec::with_capacity(replicates.len());

    for (k, rep) in replicates.iter().enumerate() {
        let label = format!("rep{:02}", k + 1);
        let path = sibling(out, &label, format.extension());
        let rows = write_replicate(format, &path, rep)?;
        info!(seed = rep.seed, rows, path = %path.display(), "replicate written");

        if let Some(peak) = rep.peak() {
            let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or(label);
            peaks_csv.write_peak(&PeakRow::new(stem, &peak))?;
            peaks.push(peak);
        }
    }
    peaks_csv.finish()?;

    if let Some(stats) = PeakStats::from_peaks(&peaks) {
        println!(
            "Peaks over {} replicates: I = {:.1} ± {:.1}, day = {:.1} ± {:.1}",
            stats.count, stats.mean_height, stats.std_height, stats.mean_day, stats.std_day
        );
    }
    println!("Peak summary: {}", peaks_path.display());
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let params = load_params(&cli)?;

    let out = cli.out_path();
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    println!(
        "L={}  N={}  T={}  seed={}  init=({},{},{},{})",
        params.grid_side,
        params.agent_count,
        params.days,
        params.seed,
        params.initial.susceptible,
        params.initial.exposed,
        params.initial.infectious,
        params.initial.removed,
    );

    let t0 = Instant::now();
    match cli.replicates {
        Some(0) => bail!("--replicates must be at least 1"),
        Some(count) => run_batch(&params, count, cli.format, &out)?,
        None => {
            let rows = match cli.format {
                Format::Csv     => run_single(params, CsvWriter::create(&out)?)?,
                Format::Sqlite  => run_single(params, SqliteWriter::create(&out)?)?,
                Format::Parquet => run_single(params, ParquetWriter::create(&out)?)?,
            };
            println!("{rows} rows → {}", out.display());
        }
    }

    info!(elapsed_secs = t0.elapsed().as_secs_f64(), "ma-seirs finished");
    Ok(())
}
