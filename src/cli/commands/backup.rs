use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repo::Repos;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let repos = Repos::load(&pool)?;
        BackupLogic::backup(&mut pool, &repos, file.as_deref(), *compress, *force)?;
    }
    Ok(())
}
