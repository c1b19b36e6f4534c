use hc_optimizer::{ClimbConfig, HillClimber};
use tracing_subscriber::EnvFilter;

fn sphere(x: &[f64]) -> Result<f64, std::convert::Infallible> {
    Ok(x.iter().map(|v| v * v).sum())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClimbConfig::new("sphere", 500).with_seed(42);
    println!("Config:\n{}", config.to_json()?);

    let climber = HillClimber::new(config)?;
    let outcome = climber.run_seeded(sphere, &[5.0, -3.0, 2.0])?;

    println!("Best point: {:?}", outcome.best);
    println!("Best value: {:.6}", outcome.best_value);
    println!(
        "Accepted {} of {} candidates ({:.1}%)",
        outcome.report.accepted,
        outcome.report.evaluations - 1,
        outcome.report.acceptance_rate() * 100.0
    );
    println!("Report:\n{}", serde_json::to_string_pretty(&outcome.report)?);

    Ok(())
}
