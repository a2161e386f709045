use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::trips::TripLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repo::Repos;
use crate::ui::messages::success;

/// Delete a trip by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut repos = Repos::load(&pool)?;

        TripLogic::delete(&mut pool, &mut repos, id)?;
        success(format!("Trip {} deleted.", id));
    }

    Ok(())
}
