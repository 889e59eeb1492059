//! Tabulate radius and effective temperature along one axis
//!
//! Usage: cargo run -p accretion-shock --example rp_teff_sweep -- --axis mdot --population cold
//!
//! Output: one block per curve on stdout, headed by `# <label> <fixed value>`,
//! with columns Mdot [ME/yr], Mp [MJ], Rp [RJ], Teff [K]. Without `--fixed`
//! one curve is drawn for each reference mass (or accretion rate).

use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use units::Temperature;

use accretion_shock::sweep::{SweepAxis, SweepConfig, REFERENCE_ACCRETION_RATES, REFERENCE_MASSES};
use accretion_shock::{Population, ShockParameters};

#[derive(Parser, Debug)]
#[command(about = "Radius and hot-spot Teff of accreting planets along one axis")]
struct Args {
    /// Swept input: "mdot" (log-spaced) or "mp" (linear)
    #[arg(long, default_value = "mdot")]
    axis: SweepAxis,

    /// Held input (MJ for an mdot sweep, ME/yr for an mp sweep)
    #[arg(long)]
    fixed: Option<f64>,

    /// "warm" or "cold"
    #[arg(long, default_value = "warm")]
    population: Population,

    /// Fraction of the surface covered by the shock
    #[arg(long, default_value_t = 1.0)]
    ffill: f64,

    /// Interior temperature (K)
    #[arg(long, default_value_t = 1000.0)]
    tint: f64,

    /// Samples per curve
    #[arg(long, default_value_t = 70)]
    samples: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let fixed_values: Vec<f64> = match (args.fixed, args.axis) {
        (Some(value), _) => vec![value],
        (None, SweepAxis::AccretionRate) => REFERENCE_MASSES.to_vec(),
        (None, SweepAxis::Mass) => REFERENCE_ACCRETION_RATES.to_vec(),
    };

    let shock = ShockParameters::new(args.ffill, Temperature::from_kelvin(args.tint));

    for fixed in &fixed_values {
        let base = match args.axis {
            SweepAxis::AccretionRate => SweepConfig::accretion_rates(*fixed),
            SweepAxis::Mass => SweepConfig::masses(*fixed),
        };
        let config = base
            .with_population(args.population)
            .with_shock(shock)
            .with_range(base.start, base.end, args.samples);

        let rows = config.run()?;

        println!("# {} {}", config.label(), fixed);
        for row in &rows {
            println!("{row}");
        }
        println!();
    }

    info!(
        curves = fixed_values.len(),
        samples = args.samples,
        axis = %args.axis,
        "finished sweep"
    );

    Ok(())
}
