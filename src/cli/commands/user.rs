use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::repo::Repos;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, GREY, RESET};

/// View or field-replace the user information singleton.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        name,
        address,
        city_state,
        country,
        zip_code,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut repos = Repos::load(&pool)?;

        let no_changes = name.is_none()
            && address.is_none()
            && city_state.is_none()
            && country.is_none()
            && zip_code.is_none();

        if no_changes {
            print_user(&repos);
            return Ok(());
        }

        let mut info = repos.user_info.get().clone();

        if let Some(v) = name {
            info.name = v.clone();
        }
        if let Some(v) = address {
            info.address = v.clone();
        }
        if let Some(v) = city_state {
            info.city_state = v.clone();
        }
        if let Some(v) = country {
            info.country = v.clone();
        }
        if let Some(v) = zip_code {
            info.zip_code = v.clone();
        }

        repos.user_info.set(&pool.conn, info)?;
        success("User information updated.");
        print_user(&repos);
    }

    Ok(())
}

fn print_user(repos: &Repos) {
    let info = repos.user_info.get();

    let field = |value: &str| {
        if value.trim().is_empty() {
            format!("{GREY}--{RESET}")
        } else {
            value.to_string()
        }
    };

    println!();
    println!("{}• Name:{}       {}", CYAN, RESET, field(&info.name));
    println!("{}• Address:{}    {}", CYAN, RESET, field(&info.address));
    println!("{}• City/State:{} {}", CYAN, RESET, field(&info.city_state));
    println!("{}• Country:{}    {}", CYAN, RESET, field(&info.country));
    println!("{}• Zip code:{}   {}", CYAN, RESET, field(&info.zip_code));
    println!();
}
