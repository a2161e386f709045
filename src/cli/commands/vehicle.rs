use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::vehicles::VehicleLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Vehicle;
use crate::repo::Repos;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::{Column, Table};
use std::io::{Write, stdin, stdout};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Vehicle {
        add,
        list,
        del,
        make,
        model,
        year,
        license_plate,
        odometer,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut repos = Repos::load(&pool)?;

        //
        // 1. ADD
        //
        if *add {
            let make = make.clone().ok_or_else(|| {
                AppError::Validation("--make is required when adding a vehicle".to_string())
            })?;
            let model = model.clone().ok_or_else(|| {
                AppError::Validation("--model is required when adding a vehicle".to_string())
            })?;

            let vehicle = Vehicle::new(
                *year,
                make,
                model,
                license_plate.clone().unwrap_or_default(),
                *odometer,
            );

            let vehicle = VehicleLogic::add(&mut pool, &mut repos, vehicle)?;
            success(format!("Vehicle added: {} (id {})", vehicle.label(), vehicle.id));
        }

        //
        // 2. DELETE (cascades to attributed trips)
        //
        if let Some(id) = del {
            let Some(vehicle) = repos.vehicles.get(id).cloned() else {
                return Err(AppError::VehicleNotFound(id.clone()));
            };

            let attributed = repos
                .trips
                .list()
                .iter()
                .filter(|t| t.vehicle_id.as_deref() == Some(id.as_str()))
                .count();

            if !*force && !confirm_delete(&vehicle.label(), attributed)? {
                println!("❌ Vehicle deletion cancelled by user.");
                return Ok(());
            }

            let cascaded = VehicleLogic::delete(&mut pool, &mut repos, id)?;
            if cascaded > 0 {
                warning(format!(
                    "Deleted {cascaded} trip(s) attributed to the vehicle."
                ));
            }
            success(format!("Vehicle deleted: {}", vehicle.label()));
        }

        //
        // 3. LIST
        //
        if *list {
            print_vehicles(&repos);
        }
    }

    Ok(())
}

fn confirm_delete(label: &str, attributed_trips: usize) -> AppResult<bool> {
    warning(format!(
        "Deleting '{}' also deletes {} attributed trip(s).",
        label, attributed_trips
    ));
    print!("Continue? [y/N]: ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

fn print_vehicles(repos: &Repos) {
    let vehicles = repos.vehicles.list();

    if vehicles.is_empty() {
        println!("{GREY}No vehicles recorded.{RESET}");
        return;
    }

    println!("🚗 Vehicles:\n");

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 36,
        },
        Column {
            header: "Vehicle".to_string(),
            width: 24,
        },
        Column {
            header: "Plate".to_string(),
            width: 10,
        },
        Column {
            header: "Odometer".to_string(),
            width: 10,
        },
    ]);

    for v in vehicles {
        table.add_row(vec![
            v.id.clone(),
            v.label(),
            if v.license_plate.is_empty() {
                "--".to_string()
            } else {
                v.license_plate.clone()
            },
            v.odometer.map(|o| o.to_string()).unwrap_or_else(|| "--".to_string()),
        ]);
    }

    print!("{}", table.render());
}
