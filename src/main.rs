use std::{io::Write, path::Path};

use anyhow::Context as _;
use cli::Invocation;
use context::Context;
use generator::{
    generate_post, generate_standalone, generate_summary, ComposeError, POST_DOCROOT,
    SUMMARY_DOCROOT,
};
use log::{error, info};

mod cli;
mod context;
mod date;
mod generator;
mod index;
mod metadata;
mod renderer;

fn render(ctx: &Context, invocation: &Invocation) -> Result<String, ComposeError> {
    match invocation {
        Invocation::Standalone(post) => generate_standalone(ctx, post),
        Invocation::Summary { tag } => generate_summary(ctx, tag, ctx.docroot(SUMMARY_DOCROOT)),
        Invocation::Post { date_key, article } => {
            generate_post(ctx, date_key, article, ctx.docroot(POST_DOCROOT))
        }
    }
}

/// Writes the requested page and a newline to `out`. A failed composition is
/// logged and leaves `out` untouched.
fn run(ctx: &Context, invocation: &Invocation, out: &mut impl Write) -> std::io::Result<()> {
    match render(ctx, invocation) {
        Ok(page) => writeln!(out, "{page}"),
        Err(e) => {
            error!("{:#}", anyhow::Error::new(e));
            Ok(())
        }
    }
}

fn write_page(page: &[u8], output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, page).with_context(|| format!("{path:?}"))?;
            info!("Wrote {path:?}");
        }
        None => std::io::stdout().lock().write_all(page)?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (invocation, settings) = match cli::parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(usage) => {
            println!("{usage}");
            return Ok(());
        }
    };

    let ctx = Context::load(&settings.template_dir, &settings.index_path, settings.options)?;
    let mut page = Vec::new();
    run(&ctx, &invocation, &mut page)?;
    if page.is_empty() {
        return Ok(());
    }
    write_page(&page, settings.output.as_deref())
}
