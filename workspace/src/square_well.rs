use std::{ io, path::PathBuf };
use anyhow::Context;
use clap::{ Parser, ValueEnum };
use flexi_logger::Logger;
use log::info;
use sqwell::{
    config::Config,
    plot::{ Gnuplot, Json, Plotter },
    units::Units,
};

// integrate the first few levels of the infinite square well and write the
// normalized wavefunctions to stdout for plotting

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// gnuplot data blocks, one `index` per level
    Gnuplot,
    /// a single JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "square_well", about = "Forward-integrate infinite square well eigenstates")]
struct Cli {
    /// Number of levels to compute [default: 5].
    #[arg(short = 'n', long = "levels")]
    levels: Option<usize>,
    /// Integration step size [default: 0.001].
    #[arg(short, long)]
    step: Option<f64>,
    /// Do not offset each curve by its level's energy.
    #[arg(long)]
    no_shift: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Gnuplot)]
    format: Format,
    /// JSON configuration file; explicit flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Particle mass in kg, for reporting energies in eV.
    #[arg(long, requires = "width")]
    mass: Option<f64>,
    /// Well width in m, for reporting energies in eV.
    #[arg(long, requires = "mass")]
    width: Option<f64>,
    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let config
            = match &self.config {
                Some(path) => {
                    let s = std::fs::read_to_string(path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    Config::from_json(&s)
                        .with_context(|| format!("loading {}", path.display()))?
                },
                None => Config::default(),
            };
        Ok(config.with_overrides(self.levels, self.step, self.no_shift.then_some(false))?)
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_env_or_str(cli.log_level())?
        .log_to_stderr()
        .start()?;

    let config = cli.config()?;
    info!(
        "n_max={} step={} shift={}",
        config.n_max, config.step, config.shift,
    );
    let sys = config.system()?;
    let spectrum = sys.solve(config.n_max).context("solving levels")?;

    let uu
        = cli.mass.zip(cli.width)
        .map(|(m, a)| Units::from_mks(m, a))
        .transpose()
        .context("physical units")?;
    for level in spectrum.levels() {
        match uu {
            Some(uu) => {
                let joules: f64 = uu.from_nat_energy(level.e);
                info!("n={} E={:.6} ({:.6e} eV)", level.n, level.e, Units::to_ev(joules));
            },
            None => info!("n={} E={:.6}", level.n, level.e),
        }
    }

    let figure = spectrum.figure(config.shift)?;
    let stdout = io::stdout().lock();
    match cli.format {
        Format::Gnuplot => Gnuplot::new(stdout).plot(&figure)?,
        Format::Json => Json::new(stdout).plot(&figure)?,
    }
    Ok(())
}
