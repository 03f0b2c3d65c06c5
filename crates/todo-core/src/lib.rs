pub mod cli;
pub mod commands;
pub mod config;
pub mod datastore;
pub mod render;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use todo_model::Controller;
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli = match cli::GlobalCli::try_parse_from(
    raw_args
  ) {
    | Ok(cli) => cli,
    | Err(err)
      if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
          | ErrorKind::DisplayVersion
      ) =>
    {
      err.print()?;
      return Ok(());
    }
    | Err(err) => return Err(err.into())
  };

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting todo CLI"
  );
  debug!(?cli.rc_overrides, "rc overrides");

  let mut cfg = config::Config::load(
    cli.config.as_deref()
  )?;
  cfg.apply_overrides(
    cli
      .rc_overrides
      .into_iter()
      .map(|kv| (kv.key, kv.value))
  );

  let data_dir =
    config::resolve_data_dir(
      &cfg,
      cli.data.as_deref()
    )
    .context(
      "failed to resolve data \
       directory"
    )?;

  let store =
    datastore::FileStore::open(
      &data_dir
    )
    .with_context(|| {
      format!(
        "failed to open datastore at \
         {}",
        data_dir.display()
      )
    })?;
  let key = cfg.storage_key()?;

  let mut controller =
    Controller::open(store, &key)
      .context(
        "failed to load task list"
      )?;
  let renderer =
    render::Renderer::new(&cfg);

  commands::execute(
    &mut controller,
    &renderer,
    cli.command.unwrap_or(
      cli::Command::List {
        filter: None
      }
    )
  )?;

  info!("done");
  Ok(())
}
