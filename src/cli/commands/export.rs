use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::repo::Repos;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        year,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let repos = Repos::load(&pool)?;
        ExportLogic::export(&mut pool, &repos, format.clone(), file, *year, *force)?;
    }
    Ok(())
}
