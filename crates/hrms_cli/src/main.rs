//! CLI smoke entry point.
//!
//! Loads `.env`, opens the configured database and prints today's dashboard,
//! which is enough to check the core wiring without any web layer.

use chrono::Local;
use hrms_core::db::open_db;
use hrms_core::{init_logging, CoreConfig, HrmsStore};
use log::info;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hrms: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = CoreConfig::from_env()?;

    if let Some(log_dir) = config.log_dir.as_ref() {
        init_logging(config.log_level.as_str(), log_dir)?;
    }

    println!("hrms_core ping={}", hrms_core::ping());
    println!("hrms_core version={}", hrms_core::core_version());

    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = open_db(&config.database_path)?;
    let store = HrmsStore::try_new(&conn)?;

    let today = Local::now().date_naive();
    let stats = store.stats.dashboard_stats(today)?;
    info!(
        "event=cli_dashboard module=cli status=ok total_employees={}",
        stats.total_employees
    );

    println!("date={today}");
    println!("total_employees={}", stats.total_employees);
    println!("present_today={}", stats.present_today);
    println!("absent_today={}", stats.absent_today);
    println!("attendance_rate={}", stats.attendance_rate);
    println!("department_count={}", stats.department_count);
    Ok(())
}
