use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{SummaryWindow, windowed_summary};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repo::Repos;
use crate::utils::colors::{CYAN, RESET, color_for_net};
use crate::utils::date::today;
use crate::utils::formatting::format_currency;
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { window } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let repos = Repos::load(&pool)?;
        let settings = repos.settings.get();

        let result = windowed_summary(repos.trips.list(), *window, today());
        let summary = result.summary;
        let currency = settings.currency.as_str();

        let label = match window {
            SummaryWindow::Last7Days => "Last 7 Days",
            SummaryWindow::Last30Days => "Last 30 Days",
            SummaryWindow::CurrentYear => "This Year",
        };

        let total_deductions = summary.total_distance * settings.deduction_rate;

        println!("📊 Summary — {}\n", label);

        println!("{}• Trips:{}            {}", CYAN, RESET, summary.trip_count);
        println!(
            "{}• Driving time:{}     {}",
            CYAN,
            RESET,
            format_minutes(result.driving_minutes)
        );
        println!(
            "{}• Total {}:{}       {:.1}",
            CYAN,
            settings.unit.abbrev(),
            RESET,
            summary.total_distance
        );
        println!(
            "{}• Gross earnings:{}   {}",
            CYAN,
            RESET,
            format_currency(summary.gross_earnings, currency)
        );
        println!(
            "{}• Avg hourly rate:{}  {}",
            CYAN,
            RESET,
            format_currency(result.avg_hourly_rate, currency)
        );
        println!(
            "{}• Total expenses:{}   {}",
            CYAN,
            RESET,
            format_currency(summary.total_expenses, currency)
        );
        println!(
            "{}• Expense ratio:{}    {:.1}%",
            CYAN,
            RESET,
            result.expense_ratio * 100.0
        );
        println!(
            "{}• Total deductions:{} {}",
            CYAN,
            RESET,
            format_currency(total_deductions, currency)
        );
        println!(
            "{}• Total net:{}        {}{}{}",
            CYAN,
            RESET,
            color_for_net(summary.net_earnings),
            format_currency(summary.net_earnings, currency),
            RESET
        );
        println!();
    }

    Ok(())
}
