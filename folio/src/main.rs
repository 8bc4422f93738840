#[cfg(not(target_family = "wasm"))]
mod cli;
#[cfg(not(target_family = "wasm"))]
mod output;

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use folio::FolioConfig;
    use tracing::debug;

    let cli = cli::Cli::parse();
    let config = FolioConfig::load(cli.config.as_deref())?;

    let filter = if cli.verbose {
        "folio=debug,folio_ui=debug"
    } else {
        config.logging.filter.as_str()
    };
    folio_ui::init_tracing(filter);
    debug!(?config, "loaded configuration");

    cli::run(cli, &config)
}

// The browser entry point is `folio::run`, started by wasm-bindgen.
#[cfg(target_family = "wasm")]
fn main() {}
