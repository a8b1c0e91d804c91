//! Demo entry point for usercrud core.
//!
//! Runs a fixed create/get/list/update/delete sequence against the
//! configured database. Any error is fatal.

mod config;

use config::CliConfig;
use log::{error, info};
use std::error::Error;
use std::process::ExitCode;
use usercrud_core::{open_db, SqliteUserRepository, User, UserRepository, UserService};

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = usercrud_core::init_logging(&config.log_level, log_dir) {
            eprintln!("usercrud: logging disabled: {err}");
        }
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=demo_run module=cli status=error error={err}");
            eprintln!("usercrud: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn Error>> {
    info!(
        "event=demo_run module=cli status=start version={} db_path={}",
        usercrud_core::core_version(),
        config.db_path.display()
    );
    let conn = open_db(&config.db_path)?;
    let service = UserService::new(SqliteUserRepository::new(&conn));

    run_demo(&service)?;

    info!("event=demo_run module=cli status=ok");
    Ok(())
}

fn run_demo<R: UserRepository>(service: &UserService<R>) -> Result<(), Box<dyn Error>> {
    service.create_user("John Doe", "john@example.com")?;

    let user = service.get_user(1)?;
    println!("{}", format_user(&user));

    for user in service.get_all_users()? {
        println!("{}", format_user(&user));
    }

    service.update_user(1, "John Smith", "john.smith@example.com")?;
    service.delete_user(1)?;
    Ok(())
}

fn format_user(user: &User) -> String {
    let id = user.id.map_or_else(String::new, |id| id.to_string());
    format!("{} {} {}", id, user.name, user.email)
}
