use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::odometer::OdometerLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::repo::Repos;
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Odometer {
        vehicle,
        reading,
        date: date_arg,
        list,
        year,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut repos = Repos::load(&pool)?;

        //
        // 1. RECORD A CHECK-IN
        //
        if let Some(value) = reading {
            let vehicle_id = vehicle.clone().ok_or_else(|| {
                AppError::Validation("--vehicle is required when recording a reading".to_string())
            })?;

            let d = match date_arg {
                Some(s) => {
                    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?
                }
                None => date::today(),
            };

            let reading = OdometerLogic::add(&mut pool, &mut repos, &vehicle_id, d, *value)?;
            success(format!(
                "Odometer reading recorded: {} on {}",
                reading.odometer, reading.date
            ));
        }

        //
        // 2. LIST
        //
        if *list {
            print_readings(&repos, *year);
        }
    }

    Ok(())
}

fn print_readings(repos: &Repos, year: Option<i32>) {
    let readings: Vec<_> = repos
        .odometer
        .list()
        .iter()
        .filter(|r| year.is_none_or(|y| r.date.year() == y))
        .collect();

    if readings.is_empty() {
        println!("{GREY}No odometer readings recorded.{RESET}");
        return;
    }

    println!("🧭 Odometer readings:\n");

    let mut table = Table::new(vec![
        Column {
            header: "Date".to_string(),
            width: 10,
        },
        Column {
            header: "Odometer".to_string(),
            width: 10,
        },
        Column {
            header: "Vehicle".to_string(),
            width: 24,
        },
    ]);

    for r in readings {
        let vehicle = repos
            .vehicles
            .get(&r.vehicle_id)
            .map(|v| v.label())
            .unwrap_or_else(|| "--".to_string());

        table.add_row(vec![r.date.to_string(), r.odometer.to_string(), vehicle]);
    }

    print!("{}", table.render());
}
