use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repo::Repos;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, force } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut repos = Repos::load(&pool)?;
        BackupLogic::restore(&mut pool, &mut repos, file, *force)?;
    }
    Ok(())
}
