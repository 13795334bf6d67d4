use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};

use digitwise::{Calculator, CalculatorConfig, Grouping};

#[derive(Parser)]
#[command(name = "digitwise")]
#[command(about = "Add, subtract and multiply arbitrarily large non-negative integers", long_about = None)]
struct Cli {
    /// First operand: decimal digits, or JSON (number, string, or digit array)
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second operand
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Digit group separator
    #[arg(long, default_value_t = ',')]
    separator: char,

    /// Digits per group (0 disables grouping)
    #[arg(long, default_value_t = 3)]
    group_width: usize,

    /// Print only the magnitude of the difference
    #[arg(long, default_value_t = false)]
    unsigned: bool,

    /// Emit the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn config(&self) -> CalculatorConfig {
        CalculatorConfig {
            grouping: Grouping::new(self.separator, self.group_width),
            signed_difference: !self.unsigned,
        }
    }
}

/// Evaluate the operands and render the output printed on stdout.
fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.config();
    debug!("Calculator config: {:?}", config);

    let calculator = Calculator::new(config);
    let report = calculator
        .evaluate_text(&cli.a, &cli.b)
        .context("failed to evaluate operands")?;

    if cli.json {
        Ok(report.to_json()?)
    } else {
        Ok(report.to_string())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    println!("{}", run(&cli)?);
    Ok(())
}
