use std::{fs, net::IpAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use mdtoc::{
    Converter, DEFAULT_THEME, MarkdownRenderer, PageTemplate,
    server::{self, Preview},
};

#[derive(Parser)]
#[command(
    version,
    about = "Render a Markdown document with a linked table of contents",
    long_about = "Render a Markdown document with a linked table of contents.\n\n\
        Headings join the table of contents when they end in `# identifier`, \
        e.g. `## Install # install`. With OUTPUT the page is written there; \
        otherwise it is served on localhost and re-rendered on every request."
)]
struct Cli {
    /// Markdown document to render
    input: PathBuf,
    /// Write the page to this file instead of serving it
    output: Option<PathBuf>,
    /// Address the preview server listens on
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    /// First port to try; the next nine follow before any free port is used
    #[arg(long, default_value_t = 6060)]
    port: u16,
    /// Handlebars page layout replacing the built-in one
    #[arg(long)]
    template: Option<PathBuf>,
    /// Highlighting theme for code blocks
    #[arg(long, default_value = DEFAULT_THEME)]
    theme: String,
    /// Value of the page's `lang` attribute
    #[arg(long, default_value = "en")]
    lang: String,
}

fn build_converter(cli: &Cli) -> anyhow::Result<Converter> {
    let template = match &cli.template {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("cannot read template {}", path.display()))?;
            PageTemplate::from_source(&source)?
        }
        None => PageTemplate::builtin()?,
    };
    let markdown = MarkdownRenderer::new(&cli.theme)?;
    Ok(Converter::new(markdown, template, cli.lang.clone()))
}

/// Entry point for the `mdtoc` command.
///
/// With an output path the page is rendered once and written out. Without
/// one a preview server starts and keeps running until interrupted.
///
/// # Examples
///
/// ```sh
/// # Serve project.md on localhost
/// mdtoc project.md
///
/// # Render project.md into project.html
/// mdtoc project.md project.html
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let converter = build_converter(&cli)?;

    if let Some(output) = &cli.output {
        converter
            .render_to_file(&cli.input, output)
            .with_context(|| format!("cannot render {}", cli.input.display()))?;
        log::info!("wrote {}", output.display());
        return Ok(());
    }

    let listener = server::bind_preview_listener(cli.host, cli.port)
        .await
        .context("cannot bind preview server")?;
    let addr = listener.local_addr()?;
    println!("serving {} at {addr}", cli.input.display());
    log::info!("listening on http://{addr}/");
    server::serve(
        listener,
        Arc::new(Preview {
            converter,
            source: cli.input,
        }),
    )
    .await
    .context("preview server failed")
}
