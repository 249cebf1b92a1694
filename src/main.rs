#![doc = include_str!("../README.md")]

use clap::Parser;
use core::error::Error;
use env_logger::Env;
use fitchner::{
    Config, HtmlParser, HttpClient, Predicate, RenderFormat, RenderOptions, ReqwestHttpClient,
    compile_config, filter_with, images_with, links_with, read_config, render_elements,
    render_values,
};
use std::{path::PathBuf, process::exit};
use tokio::{
    fs::read,
    io::{AsyncReadExt, AsyncWriteExt, stdin, stdout},
};
use url::Url;

const STANDARD_INPUT: &str = "-";
const HTTP_SCHEMES: &[&str] = &["http", "https"];

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A document URL, file path, or `-` for standard input.
    source: String,
    /// Keeps elements with a tag name.
    #[arg(long)]
    tag: Option<String>,
    /// Keeps elements with a class containing a string.
    #[arg(long)]
    class: Option<String>,
    /// Keeps elements with an ID containing a string.
    #[arg(long)]
    id: Option<String>,
    /// Keeps elements with an attribute.
    #[arg(long)]
    attribute: Option<String>,
    /// Prints link targets.
    #[arg(long, conflicts_with_all = ["images", "tag", "class", "id", "attribute"])]
    links: bool,
    /// Prints image sources.
    #[arg(long, conflicts_with_all = ["tag", "class", "id", "attribute"])]
    images: bool,
    /// Sets an output format.
    #[arg(long, default_value = "text")]
    format: RenderFormat,
    /// Uses a configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        source,
        tag,
        class,
        id,
        attribute,
        links,
        images,
        format,
        config,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::from_env(
        Env::default().default_filter_or(if verbose { "trace" } else { "info" }),
    )
    .init();

    let config = if let Some(path) = &config {
        compile_config(read_config(path).await?)?
    } else {
        Config::default()
    };
    let body = read_source(&source, &config).await?;
    let parser = HtmlParser::new(*config.parser());
    let options = RenderOptions::new().set_format(format);
    let mut output = stdout();

    if links {
        render_values(&links_with(&parser, body.as_slice())?, &options, &mut output).await?;
    } else if images {
        render_values(&images_with(&parser, body.as_slice())?, &options, &mut output).await?;
    } else {
        let predicates = [
            tag.and_then(Predicate::tag),
            class.and_then(Predicate::class),
            id.and_then(Predicate::id),
            attribute.and_then(Predicate::attribute),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        render_elements(
            &filter_with(&parser, body.as_slice(), &predicates)?,
            &options,
            &mut output,
        )
        .await?;
    }

    output.flush().await?;

    Ok(())
}

async fn read_source(source: &str, config: &Config) -> Result<Vec<u8>, Box<dyn Error>> {
    if source == STANDARD_INPUT {
        let mut buffer = vec![];
        stdin().read_to_end(&mut buffer).await?;
        return Ok(buffer);
    }

    if let Ok(url) = Url::parse(source)
        && HTTP_SCHEMES.contains(&url.scheme())
    {
        return Ok(HttpClient::new(
            ReqwestHttpClient::new(config.http())?,
            config.http().clone(),
        )
        .fetch(&url)
        .await?);
    }

    Ok(read(source).await?)
}
