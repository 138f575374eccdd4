use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};

use mspiral::config::SpiralConfig;
use mspiral::utils::{logger, report};
use mspiral::{io, physics};

#[derive(Parser, Debug)]
#[command(name = "mspiral")]
#[command(about = "Generate a 3D magnetic spiral supercell and export it as XSF")]
#[command(version)]
struct Cli {
    /// Atoms per full spiral cycle; derives q and the supercell
    #[arg(short = 'n', long)]
    atoms_in_spiral: Option<u32>,

    /// Spiral wave vector in fractional units
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, value_name = "QX,QY,QZ")]
    q: Option<Vec<f64>>,

    /// Moment at site (0,0,0)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, value_name = "MX,MY,MZ")]
    moment: Option<Vec<f64>>,

    /// Supercell dimensions
    #[arg(long, value_delimiter = ',', value_name = "NX,NY,NZ")]
    supercell: Option<Vec<usize>>,

    /// Distance between neighbouring sites in the written file
    #[arg(long)]
    scale: Option<f64>,

    /// Directory the XSF file is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output file name
    #[arg(short, long)]
    filename: Option<String>,

    /// Element symbol written for every site
    #[arg(long)]
    species: Option<String>,

    /// JSON settings file (defaults to the user config dir when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Store the resolved settings in the user config dir
    #[arg(long)]
    save_config: bool,

    /// Skip the per-site table
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn vec3<T: Copy>(flag: &str, v: &[T]) -> Result<[T; 3]> {
    ensure!(v.len() == 3, "--{} takes exactly three comma-separated values, got {}", flag, v.len());
    Ok([v[0], v[1], v[2]])
}

impl Cli {
    fn resolve_config(&self) -> Result<SpiralConfig> {
        let mut cfg = match &self.config {
            Some(path) => SpiralConfig::load_from(path)
                .with_context(|| format!("Could not load settings from {:?}", path))?,
            None => {
                let (cfg, msg) = SpiralConfig::load();
                debug!("{}", msg);
                cfg
            }
        };

        if let Some(n) = self.atoms_in_spiral {
            cfg = cfg.with_spiral_period(n);
        }
        if let Some(q) = &self.q {
            cfg.wave_vector = vec3("q", q)?;
        }
        if let Some(m) = &self.moment {
            cfg.initial_moment = vec3("moment", m)?;
        }
        if let Some(n) = &self.supercell {
            cfg.supercell = vec3("supercell", n)?;
        }
        if let Some(scale) = self.scale {
            cfg.scale = scale;
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(name) = &self.filename {
            cfg.filename = name.clone();
        }
        if let Some(species) = &self.species {
            cfg.species = species.clone();
        }

        Ok(cfg)
    }
}

fn save_settings(cfg: &SpiralConfig, path: &Path) -> Result<()> {
    cfg.save_to(path)
        .with_context(|| format!("Could not save settings to {:?}", path))?;
    info!("Config saved to {:?}", path);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    info!("Starting mspiral v{}", mspiral::VERSION);

    let cfg = cli.resolve_config()?;
    cfg.validate().context("Refusing to generate spiral")?;

    if cli.save_config {
        save_settings(&cfg, &SpiralConfig::get_path())?;
    }

    print!("{}", report::parameters_summary(&cfg));

    let structure = physics::generate(cfg.supercell, cfg.wave_vector, cfg.initial_moment);

    if !cli.quiet {
        println!();
        print!("{}", report::report_structure(&structure));
    }

    let path = io::save_structure(&cfg, &structure)
        .with_context(|| format!("Could not write {:?}", cfg.output_path()))?;

    println!();
    print!("{}", report::viewer_instructions(&cfg.filename, &path));

    Ok(())
}
