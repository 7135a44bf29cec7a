//! Terminal status output. Everything here is a no-op in silent mode.

use crate::context::Context;
use crate::result::Result;

pub fn intro(ctx: &Context, title: &str) -> Result<()> {
    if !ctx.silent {
        cliclack::intro(title)?;
    }
    Ok(())
}

pub fn step(ctx: &Context, msg: impl std::fmt::Display) -> Result<()> {
    if !ctx.silent {
        cliclack::log::step(msg)?;
    }
    Ok(())
}

pub fn info(ctx: &Context, msg: impl std::fmt::Display) -> Result<()> {
    if !ctx.silent {
        cliclack::log::info(msg)?;
    }
    Ok(())
}

pub fn success(ctx: &Context, msg: impl std::fmt::Display) -> Result<()> {
    if !ctx.silent {
        cliclack::log::success(msg)?;
    }
    Ok(())
}

/// Per-member detail, only shown with `--verbose`
pub fn detail(ctx: &Context, msg: impl std::fmt::Display) -> Result<()> {
    if ctx.verbose && !ctx.silent {
        cliclack::log::remark(msg)?;
    }
    Ok(())
}

pub fn outro(ctx: &Context, msg: impl std::fmt::Display) -> Result<()> {
    if !ctx.silent {
        cliclack::outro(msg)?;
    }
    Ok(())
}

/// Report a fatal error. Failures to write to the terminal are ignored.
pub fn fatal(ctx: &Context, msg: impl std::fmt::Display) {
    if !ctx.silent {
        let _ = cliclack::outro_cancel(format!("Fatal: {}", msg));
    }
}

/// Hold the terminal open so the output can be reviewed when the tool was
/// launched by double-clicking it
pub fn exit_prompt(ctx: &Context) {
    if ctx.silent {
        return;
    }
    let _ = cliclack::input("Press enter to exit...")
        .required(false)
        .interact::<String>();
}
