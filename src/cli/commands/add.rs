use crate::cli::parser::Commands;
use crate::core::trips::TripLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Expenses, Trip};
use crate::repo::Repos;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Add or edit a trip.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        miles,
        gross,
        gasoline,
        tolls,
        food,
        vehicle,
        odo_start,
        odo_end,
        edit_id,
        edit,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let mut repos = Repos::load(&pool)?;

        //
        // 2. EDIT MODE: full-record overwrite of an existing trip.
        //    The record starts from the stored values (the prefilled form)
        //    and every provided option replaces its field.
        //
        if *edit {
            let id = edit_id
                .clone()
                .ok_or_else(|| AppError::Validation("--id is required with --edit".to_string()))?;

            let mut trip = repos
                .trips
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::TripNotFound(id.clone()))?;

            trip.date = d;
            if let Some(s) = start {
                trip.start_time = parse_required_time(s)?;
            }
            if let Some(s) = end {
                trip.end_time = parse_required_time(s)?;
            }
            if let Some(v) = miles {
                trip.miles = *v;
            }
            if let Some(v) = gross {
                trip.gross_earnings = *v;
            }
            if let Some(v) = gasoline {
                trip.expenses.gasoline = *v;
            }
            if let Some(v) = tolls {
                trip.expenses.tolls = *v;
            }
            if let Some(v) = food {
                trip.expenses.food = *v;
            }
            if let Some(v) = vehicle {
                trip.vehicle_id = Some(v.clone());
            }
            if let Some(v) = odo_start {
                trip.odometer_start = Some(*v);
            }
            if let Some(v) = odo_end {
                trip.odometer_end = Some(*v);
            }

            TripLogic::update(&mut pool, &mut repos, trip.clone())?;
            success(format!("Trip {} updated.", trip.id));
            return Ok(());
        }

        //
        // 3. ADD MODE: start and end times are mandatory, amounts default 0.
        //
        let start = start
            .as_ref()
            .ok_or_else(|| AppError::Validation("--in (start time) is required".to_string()))?;
        let end = end
            .as_ref()
            .ok_or_else(|| AppError::Validation("--out (end time) is required".to_string()))?;

        let mut trip = Trip::new(
            d,
            parse_required_time(start)?,
            parse_required_time(end)?,
            (*miles).unwrap_or(0.0),
            (*gross).unwrap_or(0.0),
            Expenses {
                gasoline: (*gasoline).unwrap_or(0.0),
                tolls: (*tolls).unwrap_or(0.0),
                food: (*food).unwrap_or(0.0),
            },
            vehicle.clone(),
        );
        trip.odometer_start = *odo_start;
        trip.odometer_end = *odo_end;

        let trip = TripLogic::add(&mut pool, &mut repos, trip)?;
        success(format!(
            "Trip added on {} (id {}).",
            trip.date_str(),
            trip.id
        ));
    }

    Ok(())
}
