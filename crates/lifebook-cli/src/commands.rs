use crate::args::{Cli, Commands};
use crate::handlers;
use crate::ui::Console;
use anyhow::Result;
use lifebook_runtime::{resolve_data_dir, Config, Journal};
use lifebook_store::FileStore;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let config = Config::load_from(&data_dir.join("config.toml"));
    let store = FileStore::open(config.store_file(&data_dir));

    let mut journal = Journal::open(store);
    let console = Console::new();

    match cli.command {
        Commands::List { search } => handlers::list::run(&mut journal, &console, search),
        Commands::Add { name } => handlers::page::add(&mut journal, &console, &name),
        Commands::Show { id } => handlers::page::show(&journal, &console, &id),
        Commands::Edit { id, text, file } => {
            handlers::page::edit(&mut journal, &console, &id, text, file)
        }
        Commands::Retitle { id, name } => {
            handlers::page::retitle(&mut journal, &console, &id, &name)
        }
        Commands::Toggle { id } => handlers::page::toggle(&mut journal, &console, &id),
        Commands::Font { command } => handlers::page::font(&mut journal, &console, command),
        Commands::Delete { id, yes } => handlers::delete::run(&mut journal, &console, &id, yes),
        Commands::Sort { command } => handlers::sort::run(&mut journal, &console, command),
        Commands::Destiny { command } => handlers::destiny::run(&mut journal, &console, command),
        Commands::Reset { yes } => handlers::reset::run(&mut journal, &console, yes),
    }
}
