use crate::report::registry::split_identifier;
use crate::report::{BuiltinModules, ModuleResolver};
use crate::translate::NoTranslation;
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PluginCmd {
    /// List every built-in plugin identifier
    List,

    /// Show how a plugin resolves and which templates it tries
    Show {
        /// Plugin identifier, e.g. reports.TopPaths
        identifier: String,
    },
}

pub fn run(cmd: PluginCmd) -> Result<()> {
    let modules = BuiltinModules::default();

    match cmd {
        PluginCmd::List => {
            for identifier in modules.identifiers() {
                println!("{identifier}");
            }
            Ok(())
        }
        PluginCmd::Show { identifier } => {
            let (namespace, name) = split_identifier(&identifier)?;

            let builder = modules.resolve(namespace, name)?;
            let plugin = builder(&NoTranslation);

            println!("identifier:   {identifier}");
            println!("module name:  {}", plugin.module_name());
            println!("verbose name: {}", plugin.verbose_name());
            println!("templates:");
            for template in plugin.template_candidates() {
                println!("  - {template}");
            }
            Ok(())
        }
    }
}
