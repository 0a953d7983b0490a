use crate::conf::{ConfigError, load_config};
use crate::report::PluginRegistry;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    let result = load_config(&path).and_then(|cfg| {
        let registry = PluginRegistry::from_config(&cfg);
        let names = registry
            .plugins()?
            .iter()
            .map(|p| format!("{} ({})", p.verbose_name(), p.module_name()))
            .collect::<Vec<_>>();
        Ok((cfg, names))
    });

    match result {
        Ok((cfg, names)) => {
            println!("{} Config loaded successfully", "✔".green());
            println!("{} {} plugins", "✔".green(), names.len());
            for name in names {
                println!("  - {name}");
            }
            if let Some(base_url) = &cfg.base_url {
                println!("{} base url {base_url}", "✔".green());
            }
            println!(
                "{} {} search engines",
                "✔".green(),
                cfg.search_engines.len()
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{} {}", "✘".red(), err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::MalformedIdentifier { .. } => Some(
            "Plugins are referenced as <namespace>.<Name>.\n\
             \n\
             Example:\n\
             \n\
             plugins = [\"reports.TopPaths\"]",
        ),

        ConfigError::UnknownNamespace { .. } | ConfigError::MissingPlugin { .. } => Some(
            "Run `trafficlens plugin list` to see every available plugin.",
        ),

        ConfigError::ReadFile { .. } => Some(
            "Create a config with `trafficlens config init`, or pass the path to an existing one.",
        ),

        ConfigError::Parse { .. } => None,
    }
}
