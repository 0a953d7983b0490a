use crate::conf::{ReportsConfig, load_config};
use crate::report::registry::{self, PluginRegistry};
use crate::request_log::{MemoryStore, QueryScope};
use crate::template::{FragmentTemplates, render_dashboard};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the config file or its directory (built-in defaults when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request log as JSON lines, `-` for stdin
    #[arg(long, default_value = "-")]
    pub log: PathBuf,

    /// Write the dashboard here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => ReportsConfig::default(),
    };

    let store = read_log(&args.log)?;
    info!(records = store.len(), "request log ready");

    let registry = registry::install(PluginRegistry::from_config(&cfg));
    let plugins = registry.plugins()?;

    let scope = QueryScope::new(&store).with_settings(cfg.scope_settings());
    let page = render_dashboard(plugins, &scope, &FragmentTemplates::default())?;

    match &args.output {
        Some(path) => fs::write(path, page)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{page}"),
    }

    Ok(())
}

fn read_log(path: &PathBuf) -> Result<MemoryStore> {
    if path.as_os_str() == "-" {
        return Ok(MemoryStore::from_json_lines(io::stdin().lock())?);
    }

    let file =
        File::open(path).with_context(|| format!("failed to open request log {}", path.display()))?;
    MemoryStore::from_json_lines(BufReader::new(file))
        .with_context(|| format!("failed to load request log {}", path.display()))
}
