mod options;

pub use self::options::{RenderFormat, RenderOptions};
use crate::{element::Element, error::Error};
use colored::Colorize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Renders elements.
pub async fn render_elements(
    elements: &[Element],
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    match options.format() {
        RenderFormat::Json => render_line(writer, &serde_json::to_string(elements)?).await,
        RenderFormat::Text => {
            for element in elements {
                render_line(
                    writer,
                    &[element.tag().yellow().to_string()]
                        .into_iter()
                        .chain(
                            element
                                .attributes()
                                .map(|(key, value)| format!("{key}=\"{value}\"")),
                        )
                        .collect::<Vec<_>>()
                        .join(" "),
                )
                .await?;
            }

            Ok(())
        }
    }
}

/// Renders attribute values, such as links or image sources.
pub async fn render_values(
    values: &[String],
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    match options.format() {
        RenderFormat::Json => render_line(writer, &serde_json::to_string(values)?).await,
        RenderFormat::Text => {
            for value in values {
                render_line(writer, value).await?;
            }

            Ok(())
        }
    }
}

async fn render_line(writer: &mut (impl AsyncWrite + Unpin), string: &str) -> Result<(), Error> {
    writer.write_all(string.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    Ok(())
}
