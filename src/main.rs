use anyhow::Context;
use clap::Parser;
use gem_growth::app::interactive::run_interactive;
use gem_growth::app::report::{ignored_days_warning, render_presets, render_result, GrowthReport};
use gem_growth::config::{load_rates, Command, DurationArgs};
use gem_growth::utils::error::ErrorSeverity;
use gem_growth::utils::logger;
use gem_growth::{format_amount, parse_amount, CalcError, CalculatorSession, CliConfig, Result};
use std::io::Write;

/// Exit code when inputs do not support a calculation.
const EXIT_NOT_COMPUTABLE: i32 = 2;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(code) => {
            std::io::stdout().flush().context("failed to flush stdout")?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ gem-growth failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn run(config: &CliConfig) -> Result<i32> {
    let rates = load_rates(config.config.as_deref())?;
    let mut session = CalculatorSession::new(rates.as_ref());

    match &config.command {
        Command::Calc {
            amount,
            duration,
            json,
        } => {
            session.set_amount_input(amount);
            if !apply_duration(&mut session, duration) {
                return Ok(1);
            }

            session.calculate();
            let Some(result) = session.result() else {
                eprintln!("Not computable: enter a positive amount and duration");
                return Ok(EXIT_NOT_COMPUTABLE);
            };

            if *json {
                let report = GrowthReport::from_result(result);
                println!("{}", serde_json::to_string_pretty(&report).map_err(CalcError::from)?);
            } else {
                println!("{}", render_result(result, session.model()));
            }
        }
        Command::Parse { text } => println!("{}", parse_amount(text)),
        Command::Format { value } => println!("{}", format_amount(*value)),
        Command::Presets => println!("{}", render_presets(session.presets(), session.duration())),
        Command::Interactive => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_interactive(&mut session, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(0)
}

fn apply_duration(session: &mut CalculatorSession, duration: &DurationArgs) -> bool {
    if let Some(days) = &duration.days {
        let hours = session.set_custom_days(days);
        if let Some(warning) = ignored_days_warning(days, hours) {
            tracing::warn!("{}", warning);
            eprintln!("⚠️ {}", warning);
        }
    } else if let Some(number) = duration.preset {
        let found = number
            .checked_sub(1)
            .and_then(|index| session.select_preset(index))
            .is_some();
        if !found {
            eprintln!(
                "Unknown preset {}, choose 1..={}",
                number,
                session.presets().len()
            );
            return false;
        }
    }
    true
}
