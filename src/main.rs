use clap::Parser;
use sonnet_search::cli::Cli;
use sonnet_search::config::{Config, default_config_path};
use sonnet_search::corpus::{default_cache_path, load_corpus};
use sonnet_search::repl::{BANNER, Session};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    sonnet_search::tracing::init(cli.verbose);

    println!("{}", BANNER);

    let config_path = cli.config.or_else(default_config_path);
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => {
            tracing::warn!("No config directory available, settings will not persist");
            Config::default()
        }
    };

    let loaded = load_corpus(cli.corpus.as_deref(), default_cache_path().as_deref())?;
    println!(
        "Loading sonnets took: {:.3} [ms]",
        loaded.elapsed.as_secs_f64() * 1000.0
    );
    println!("Loaded {} sonnets.", loaded.corpus.len());

    let mut session = Session::new(loaded.corpus, config, config_path);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
