use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};

fn color_for_operation(op: &str) -> &'static str {
    match op {
        "trip-add" | "vehicle-add" | "odometer" => GREEN,
        "trip-del" | "vehicle-del" => RED,
        "trip-edit" | "restore" => YELLOW,
        _ => RESET,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        print_log(&mut pool)?;
    }

    Ok(())
}

fn print_log(pool: &mut DbPool) -> AppResult<()> {
    let entries = load_log(&pool.conn)?;

    println!("📜 Internal log:\n");

    for (date, operation, target, message) in entries {
        let color = color_for_operation(&operation);
        let op_target = if target.is_empty() {
            operation.clone()
        } else {
            format!("{operation} ({target})")
        };

        println!(
            "{GREY}{}{RESET} | {}{:<28}{RESET} => {}",
            date, color, op_target, message
        );
    }

    Ok(())
}
