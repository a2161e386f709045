use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{group_by_year, per_trip_metrics};
use crate::core::timeline::{TimelineItem, build_timeline};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Trip;
use crate::repo::Repos;
use crate::utils::colors::{GREY, RESET, color_for_net};
use crate::utils::date::current_year;
use crate::utils::formatting::{format_currency, format_distance};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        year,
        all,
        timeline,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let repos = Repos::load(&pool)?;

        if *all {
            //
            // Every year, newest first.
            //
            let grouped = group_by_year(repos.trips.list());

            if grouped.is_empty() {
                println!("{GREY}No trips recorded.{RESET}");
                return Ok(());
            }

            for (year, trips) in grouped.iter().rev() {
                println!("📅 Trips for year {}:\n", year);
                print_trips(&repos, trips);
                println!();
            }
            return Ok(());
        }

        let y = (*year).unwrap_or_else(current_year);

        if *timeline {
            print_timeline(&repos, y);
            return Ok(());
        }

        let grouped = group_by_year(repos.trips.list());
        match grouped.get(&y) {
            Some(trips) => {
                println!("📅 Trips for year {}:\n", y);
                print_trips(&repos, trips);
            }
            None => println!("{GREY}No trips recorded for year {y}.{RESET}"),
        }
    }

    Ok(())
}

fn print_trips(repos: &Repos, trips: &[Trip]) {
    let settings = repos.settings.get();

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 36,
        },
        Column {
            header: "Date".to_string(),
            width: 10,
        },
        Column {
            header: "Time".to_string(),
            width: 11,
        },
        Column {
            header: "Duration".to_string(),
            width: 8,
        },
        Column {
            header: "Dist".to_string(),
            width: 7,
        },
        Column {
            header: "Gross".to_string(),
            width: 10,
        },
        Column {
            header: "Expenses".to_string(),
            width: 10,
        },
        Column {
            header: "Net".to_string(),
            width: 10,
        },
        Column {
            header: "Rate/h".to_string(),
            width: 10,
        },
        Column {
            header: "Vehicle".to_string(),
            width: 20,
        },
    ]);

    for trip in trips {
        let metrics = per_trip_metrics(trip, settings.deduction_rate);
        let vehicle = trip
            .vehicle_id
            .as_deref()
            .and_then(|id| repos.vehicles.get(id))
            .map(|v| v.label())
            .unwrap_or_else(|| "--".to_string());

        table.add_row(vec![
            trip.id.clone(),
            trip.date_str(),
            trip.time_range_str(),
            format_minutes(metrics.duration_minutes),
            format!("{:.1}", trip.miles),
            format!("{:.2}", trip.gross_earnings),
            format!("{:.2}", metrics.total_expenses),
            format!(
                "{}{:.2}{}",
                color_for_net(metrics.net),
                metrics.net,
                RESET
            ),
            format!("{:.2}", metrics.hourly_rate),
            vehicle,
        ]);
    }

    print!("{}", table.render());
}

fn print_timeline(repos: &Repos, year: i32) {
    let items = build_timeline(repos.trips.list(), repos.odometer.list(), year);
    let settings = repos.settings.get();

    if items.is_empty() {
        println!("{GREY}No activity recorded for year {year}.{RESET}");
        return;
    }

    println!("📅 Timeline for year {}:\n", year);

    for item in items {
        match item {
            TimelineItem::Trip(trip) => {
                let metrics = per_trip_metrics(&trip, settings.deduction_rate);
                println!(
                    "{}  TRIP      {}  {}  gross {}  net {}{}{}",
                    trip.date_str(),
                    trip.time_range_str(),
                    format_distance(trip.miles, settings.unit.abbrev()),
                    format_currency(trip.gross_earnings, &settings.currency),
                    color_for_net(metrics.net),
                    format_currency(metrics.net, &settings.currency),
                    RESET,
                );
            }
            TimelineItem::Odometer(reading) => {
                let vehicle = repos
                    .vehicles
                    .get(&reading.vehicle_id)
                    .map(|v| v.label())
                    .unwrap_or_else(|| "--".to_string());
                println!(
                    "{}  {}ODOMETER  update to {} for {}{}",
                    reading.date, GREY, reading.odometer, vehicle, RESET,
                );
            }
        }
    }
}
