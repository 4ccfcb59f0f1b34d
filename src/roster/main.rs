use clap::Parser;
use directories::ProjectDirs;
use roster::api::{CmdResult, ConfigAction, RosterApi, RosterPaths};
use roster::commands::config;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::logging::init_logging;
use roster::store::fs_backend::FsBackend;
use std::path::PathBuf;

mod cli;
use cli::args::{Cli, Commands, EmployeeFields};
use cli::print::{
    print_config, print_employees, print_messages, print_profile, print_summary,
};

const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// The store is opened on first use, so `config` never seeds a fresh data dir.
struct AppContext {
    paths: RosterPaths,
    api: Option<RosterApi<FsBackend>>,
}

impl AppContext {
    fn api(&mut self) -> Result<&mut RosterApi<FsBackend>> {
        let api = match self.api.take() {
            Some(api) => api,
            None => open_api(&self.paths)?,
        };
        Ok(self.api.insert(api))
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let mut ctx = AppContext {
        paths: RosterPaths { data_dir },
        api: None,
    };

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Search { terms }) => handle_list(&mut ctx, Some(terms.join(" "))),
        Some(Commands::Add(fields)) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { reference, fields }) => handle_edit(&mut ctx, &reference, fields),
        Some(Commands::Delete { reference }) => handle_delete(&mut ctx, &reference),
        Some(Commands::Bonus { reference, amount }) => handle_bonus(&mut ctx, &reference, amount),
        Some(Commands::View { reference }) => handle_view(&mut ctx, &reference),
        Some(Commands::Dashboard) => handle_dashboard(&mut ctx),
        Some(Commands::Report { reference }) => handle_report(&mut ctx, &reference),
        Some(Commands::Config { key, value }) => handle_config(&ctx.paths, key, value),
        None => handle_home(&mut ctx),
    }
}

fn open_api(paths: &RosterPaths) -> Result<RosterApi<FsBackend>> {
    // A broken config.json must not silently drop settings such as `strict`.
    let config = RosterConfig::load(&paths.data_dir)?;
    let backend = FsBackend::new(paths.data_dir.clone());
    RosterApi::open(backend, paths.clone(), config)
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Store("Could not determine data directory".to_string()))
}

fn handle_home(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api()?.list_employees()?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
        println!();
    }
    print_employees(&result.listed);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let api = ctx.api()?;
    let result = match search {
        Some(term) => api.search_employees(&term)?,
        None => api.list_employees()?,
    };
    print_employees(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: EmployeeFields) -> Result<()> {
    let result = ctx.api()?.add_employee(fields.into_draft())?;
    print_result(&result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, reference: &str, fields: EmployeeFields) -> Result<()> {
    let result = ctx.api()?.update_employee(reference, fields.into_draft())?;
    print_result(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let result = ctx.api()?.delete_employee(reference)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_bonus(ctx: &mut AppContext, reference: &str, amount: Option<f64>) -> Result<()> {
    let result = ctx.api()?.give_bonus(reference, amount)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let result = ctx.api()?.view_employee(reference)?;
    if let Some(profile) = &result.profile {
        print_profile(profile);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_dashboard(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api()?.dashboard()?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    Ok(())
}

fn handle_report(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let result = ctx.api()?.report(reference)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(paths: &RosterPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = config::run(paths, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    print_employees(&result.affected);
}
