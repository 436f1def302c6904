//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvPriceAdapter;
use crate::adapters::ini_config_adapter::IniConfigAdapter;
use crate::adapters::report_adapter::FileReportAdapter;
use crate::domain::config_validation::validate_walkforward_config;
use crate::domain::error::SigwalkError;
use crate::domain::features::add_features;
use crate::domain::metrics::{TRADING_DAYS_PER_YEAR, equity_curve, max_drawdown, sharpe};
use crate::domain::walkforward::{self, WalkForwardSpec};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "sigwalk", about = "Walk-forward trading signal evaluator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the walk-forward evaluation
    Run {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        ticker: Option<String>,
        #[arg(long)]
        train_years: Option<usize>,
        #[arg(long)]
        test_years: Option<usize>,
        #[arg(long)]
        fee_bps: Option<f64>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the available data range for a ticker
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        ticker: Option<String>,
    },
    /// List tickers available in the price store
    ListTickers {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run {
            config,
            ticker,
            train_years,
            test_years,
            fee_bps,
            dry_run,
        } => run_walkforward(
            &config,
            ticker.as_deref(),
            train_years,
            test_years,
            fee_bps,
            dry_run,
        ),
        Command::Validate { config } => run_validate(&config),
        Command::Info { config, ticker } => run_info(&config, ticker.as_deref()),
        Command::ListTickers { config } => run_list_tickers(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<IniConfigAdapter, ExitCode> {
    IniConfigAdapter::from_file(path).map_err(|e| {
        let err = SigwalkError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Builds the run spec from config defaults plus CLI overrides.
pub fn build_spec(
    config: &dyn ConfigPort,
    ticker_override: Option<&str>,
    train_years_override: Option<usize>,
    test_years_override: Option<usize>,
    fee_bps_override: Option<f64>,
) -> WalkForwardSpec {
    let defaults = WalkForwardSpec::default();
    WalkForwardSpec {
        ticker: ticker_override
            .map(str::to_uppercase)
            .or_else(|| config.get_string("walkforward", "ticker"))
            .unwrap_or(defaults.ticker),
        train_years: train_years_override.unwrap_or_else(|| {
            config.get_int("walkforward", "train_years", defaults.train_years as i64) as usize
        }),
        test_years: test_years_override.unwrap_or_else(|| {
            config.get_int("walkforward", "test_years", defaults.test_years as i64) as usize
        }),
        fee_bps: fee_bps_override
            .unwrap_or_else(|| config.get_double("walkforward", "fee_bps", defaults.fee_bps)),
    }
}

fn run_walkforward(
    config_path: &PathBuf,
    ticker_override: Option<&str>,
    train_years_override: Option<usize>,
    test_years_override: Option<usize>,
    fee_bps_override: Option<f64>,
    dry_run: bool,
) -> ExitCode {
    // Stage 1: load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Err(e) = validate_walkforward_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: resolve the run spec
    let spec = build_spec(
        &config,
        ticker_override,
        train_years_override,
        test_years_override,
        fee_bps_override,
    );
    eprintln!(
        "Evaluating {}: train {}y / test {}y, fee {} bps",
        spec.ticker, spec.train_years, spec.test_years, spec.fee_bps
    );

    if dry_run {
        eprintln!("Dry run complete: configuration is valid");
        return ExitCode::SUCCESS;
    }

    // Stage 3: fetch prices and build features
    let data_port = match CsvPriceAdapter::from_config(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let bars = match data_port.fetch_prices(&spec.ticker) {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} price rows", bars.len());

    let frame = add_features(&bars);
    let report_port = FileReportAdapter::from_config(&config);

    if frame.is_empty() {
        eprintln!(
            "warning: {} has too little history for feature warm-up; nothing to evaluate",
            spec.ticker
        );
        return write_reports(&report_port, &spec, &walkforward::WalkForwardResult::default());
    }

    // Stage 4: walk-forward evaluation
    let result = walkforward::run(&frame, &spec);
    if result.summary.is_empty() {
        eprintln!(
            "warning: fewer than {} distinct years of usable data; no windows evaluated",
            spec.train_years + spec.test_years
        );
    }

    // Stage 5: console summary
    eprintln!("\n=== Walk-forward Summary ({} windows) ===", result.summary.len());
    for row in &result.summary {
        eprintln!(
            "  {}-{} -> {}-{}: trend sharpe {:>6.2} mdd {:>6.1}% | mr sharpe {:>6.2} mdd {:>6.1}%",
            row.train_start,
            row.train_end,
            row.test_start,
            row.test_end,
            row.trend_sharpe,
            row.trend_mdd * 100.0,
            row.mr_sharpe,
            row.mr_mdd * 100.0,
        );
    }
    if !result.trend_returns.is_empty() {
        let trend_eq = equity_curve(&result.trend_returns);
        let mr_eq = equity_curve(&result.mr_returns);
        eprintln!("\n=== Full Out-of-sample History ===");
        eprintln!(
            "  Trend:          sharpe {:>6.2}, mdd {:>6.1}%, final equity {:.4}",
            sharpe(&result.trend_returns, TRADING_DAYS_PER_YEAR),
            max_drawdown(&trend_eq) * 100.0,
            trend_eq.last().copied().unwrap_or(1.0),
        );
        eprintln!(
            "  Mean Reversion: sharpe {:>6.2}, mdd {:>6.1}%, final equity {:.4}",
            sharpe(&result.mr_returns, TRADING_DAYS_PER_YEAR),
            max_drawdown(&mr_eq) * 100.0,
            mr_eq.last().copied().unwrap_or(1.0),
        );
    }

    // Stage 6: write reports
    write_reports(&report_port, &spec, &result)
}

fn write_reports(
    report_port: &dyn ReportPort,
    spec: &WalkForwardSpec,
    result: &walkforward::WalkForwardResult,
) -> ExitCode {
    match report_port.write_summary(&spec.ticker, &result.summary) {
        Ok(path) => eprintln!("\nWrote results: {}", path.display()),
        Err(e) => {
            eprintln!("error: failed to write summary: {e}");
            return (&e).into();
        }
    }

    if !result.summary.is_empty() {
        let trend_eq = equity_curve(&result.trend_returns);
        let mr_eq = equity_curve(&result.mr_returns);
        match report_port.write_equity_chart(&spec.ticker, &trend_eq, &mr_eq) {
            Ok(path) => eprintln!("Wrote figure: {}", path.display()),
            Err(e) => {
                eprintln!("error: failed to write chart: {e}");
                return (&e).into();
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match validate_walkforward_config(&config) {
        Ok(()) => {
            let spec = build_spec(&config, None, None, None, None);
            eprintln!("Config validated successfully");
            eprintln!("  ticker:      {}", spec.ticker);
            eprintln!("  train_years: {}", spec.train_years);
            eprintln!("  test_years:  {}", spec.test_years);
            eprintln!("  fee_bps:     {}", spec.fee_bps);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_info(config_path: &PathBuf, ticker_override: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let data_port = match CsvPriceAdapter::from_config(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let spec = build_spec(&config, ticker_override, None, None, None);
    match data_port.get_data_range(&spec.ticker) {
        Ok(Some((first, last, count))) => {
            println!("{}: {} rows, {} to {}", spec.ticker, count, first, last);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            let err = SigwalkError::NoData {
                ticker: spec.ticker,
            };
            eprintln!("error: {err}");
            (&err).into()
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_list_tickers(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let data_port = match CsvPriceAdapter::from_config(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match data_port.list_tickers() {
        Ok(tickers) => {
            if tickers.is_empty() {
                eprintln!("No price files found");
            } else {
                for ticker in &tickers {
                    println!("{ticker}");
                }
                eprintln!("{} tickers found", tickers.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
