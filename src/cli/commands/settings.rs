use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::DistanceUnit;
use crate::repo::Repos;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, RESET};

/// View or field-replace the application settings singleton.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        unit,
        currency,
        deduction_rate,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut repos = Repos::load(&pool)?;

        let no_changes = unit.is_none() && currency.is_none() && deduction_rate.is_none();

        if no_changes {
            print_settings(&repos);
            return Ok(());
        }

        let mut settings = repos.settings.get().clone();

        if let Some(code) = unit {
            settings.unit = DistanceUnit::from_code(code).ok_or_else(|| {
                AppError::Validation(format!(
                    "invalid unit '{code}': use 'miles' or 'kilometers'"
                ))
            })?;
        }

        if let Some(code) = currency {
            if code.trim().is_empty() {
                return Err(AppError::Validation(
                    "currency code cannot be empty".to_string(),
                ));
            }
            settings.currency = code.trim().to_uppercase();
        }

        if let Some(rate) = deduction_rate {
            if *rate < 0.0 || !rate.is_finite() {
                return Err(AppError::Validation(format!(
                    "deduction rate must be a non-negative number, got {rate}"
                )));
            }
            settings.deduction_rate = *rate;
        }

        repos.settings.set(&pool.conn, settings)?;
        success("Settings updated.");
        print_settings(&repos);
    }

    Ok(())
}

fn print_settings(repos: &Repos) {
    let settings = repos.settings.get();
    println!();
    println!(
        "{}• Unit:{} {}",
        CYAN,
        RESET,
        match settings.unit {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "kilometers",
        }
    );
    println!("{}• Currency:{} {}", CYAN, RESET, settings.currency);
    println!(
        "{}• Deduction rate:{} {:.2} per {}",
        CYAN,
        RESET,
        settings.deduction_rate,
        settings.unit.singular()
    );
    println!();
}
