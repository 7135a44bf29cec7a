mod archive;
mod args;
mod config;
mod context;
mod error;
mod files;
mod mutate;
mod name;
mod pipeline;
mod platform;
mod result;
mod ui;
mod utils;

use args::Args;
use config::Config;
use context::Context;
use std::path::PathBuf;

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let ctx = Context::new(args.path.unwrap_or_else(|| PathBuf::from(".")), args.silent)
        .with_verbose(args.verbose)
        .with_config(args.config);

    let code = match run(&ctx) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            ui::fatal(&ctx, &e);
            e.exit_code()
        }
    };

    ui::exit_prompt(&ctx);
    std::process::exit(code);
}

fn run(ctx: &Context) -> result::Result<()> {
    let root = utils::containing_dir(&ctx.root)?;
    let ctx = Context {
        root,
        ..ctx.clone()
    };

    ui::intro(&ctx, "build-zipper")?;

    let config = Config::load(&ctx)?;
    let report = pipeline::run(&ctx, &config)?;

    ui::outro(
        &ctx,
        format!(
            "Packaged {} build(s) of {}",
            report.archives.len(),
            report.name
        ),
    )?;
    Ok(())
}
