use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use compound_eye::interfaces::Winding;
use compound_eye::lattice::HexLattice;
use compound_eye::optic_axis::{PhotoreceptorSlot, WiringMap};
use compound_eye::retina::{Retina, RetinaConfig, RuleSelection};
use compound_eye::EyeError;
use env_logger::Env;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compound-eye")]
#[command(about = "Hexagonal ommatidia lattices and neural-superposition wiring")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Args)]
struct LatticeArgs {
    /// Rings around the central ommatidium
    #[arg(short, long, default_value_t = compound_eye::config::DEFAULT_RINGS)]
    rings: usize,

    /// Radius of the lattice disc
    #[arg(long, default_value_t = compound_eye::config::DEFAULT_RADIUS)]
    radius: f64,

    /// Number the lattice counter-clockwise (left eye)
    #[arg(long)]
    counter_clockwise: bool,
}

impl LatticeArgs {
    fn winding(&self) -> Winding {
        if self.counter_clockwise {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a lattice and print its elements
    Lattice {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Print every element as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve the photoreceptor wiring of a lattice
    Wiring {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Plain, SuperpositionTop, SuperpositionBottom or Hemispheric
        #[arg(long, default_value = "Hemispheric", value_parser = parse_rule)]
        rule: RuleSelection,

        /// Print the wiring map as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a full retina model
    Retina {
        /// JSON configuration file; missing fields take their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the ring count of the configuration
        #[arg(short, long)]
        rings: Option<usize>,

        /// Print every photoreceptor as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_rule(s: &str) -> std::result::Result<RuleSelection, EyeError> {
    if s == "Hemispheric" {
        return Ok(RuleSelection::Hemispheric);
    }
    Ok(RuleSelection::Fixed(s.parse()?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting compound-eye v{}", compound_eye::VERSION);

    match cli.command {
        Commands::Lattice { lattice, json } => print_lattice(&lattice, json),
        Commands::Wiring {
            lattice,
            rule,
            json,
        } => print_wiring(&lattice, rule, json),
        Commands::Retina {
            config,
            rings,
            json,
        } => print_retina(config, rings, json),
    }
}

fn print_lattice(args: &LatticeArgs, json: bool) -> Result<()> {
    let lattice = HexLattice::new(args.rings, args.radius, None, args.winding())?;

    if json {
        println!("{}", serde_json::to_string_pretty(lattice.elements())?);
        return Ok(());
    }

    println!(
        "{} rings, {} elements, spacing {:.6}, max radius {:.6}",
        lattice.num_rings(),
        lattice.num_elements(),
        lattice.spacing(),
        lattice.max_radius()
    );
    let mut bands: BTreeMap<&str, usize> = BTreeMap::new();
    for el in lattice.elements() {
        *bands.entry(el.band.label()).or_default() += 1;
    }
    for (band, count) in &bands {
        println!("band {}: {}", band, count);
    }
    println!("id\tring\tsection\tlocal\tx\ty\tband\tneighbors");
    for el in lattice.elements() {
        let neighbors: Vec<String> = el.neighbors[1..]
            .iter()
            .map(|n| n.id().map_or_else(|| "-".to_string(), |id| id.to_string()))
            .collect();
        println!(
            "{}\t{}\t{}\t{}\t{:.6}\t{:.6}\t{}\t{}",
            el.gid().unwrap_or_default(),
            el.coordinate.ring,
            el.coordinate.section,
            el.coordinate.local,
            el.position.x,
            el.position.y,
            el.band,
            neighbors.join(",")
        );
    }
    Ok(())
}

fn print_wiring(args: &LatticeArgs, rule: RuleSelection, json: bool) -> Result<()> {
    let lattice = HexLattice::new(args.rings, args.radius, None, args.winding())?;
    let wiring = WiringMap::resolve(&lattice, |el| rule.rule_at(el.position.y))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&wiring)?);
        return Ok(());
    }

    let header: Vec<&str> = PhotoreceptorSlot::ALL.iter().map(|s| s.name()).collect();
    println!("element\t{}", header.join("\t"));
    for element in 0..wiring.num_elements() {
        let row = PhotoreceptorSlot::ALL
            .iter()
            .map(|slot| -> compound_eye::Result<String> {
                Ok(wiring
                    .receiver(element, *slot)?
                    .map_or_else(|| "-".to_string(), |t| t.to_string()))
            })
            .collect::<compound_eye::Result<Vec<String>>>()?;
        println!("{}\t{}", element, row.join("\t"));
    }

    let unwired = wiring.receivers().filter(|(_, _, t)| t.is_none()).count();
    info!(
        "{} unwired entries, {} ambiguous",
        unwired,
        wiring.ambiguous().len()
    );
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<RetinaConfig> {
    let Some(path) = path else {
        return Ok(RetinaConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn print_retina(config: Option<PathBuf>, rings: Option<usize>, json: bool) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(rings) = rings {
        config = config.with_rings(rings);
    }
    let retina = Retina::new(config)?;

    if json {
        let photoreceptors: Vec<_> = retina.all_photoreceptors().collect();
        println!("{}", serde_json::to_string_pretty(&photoreceptors)?);
        return Ok(());
    }

    println!(
        "{}: {} ommatidia, {} photoreceptors",
        retina.neuropil_name(),
        retina.num_ommatidia(),
        retina.num_photoreceptors()
    );
    println!(
        "interommatidial angle {:.4}°, acceptance angle {:.4}°",
        retina.interommatidial_angle(),
        retina.acceptance_angle()
    );
    for omma in retina.ommatidia() {
        let pos = omma.sphere_pos();
        println!(
            "{}\t{}\tband {}\televation {:.4}\tazimuth {:.4}",
            omma.uid(),
            omma.rule(),
            omma.equator_band(),
            pos.elevation.to_degrees(),
            pos.azimuth.to_degrees()
        );
    }
    Ok(())
}
