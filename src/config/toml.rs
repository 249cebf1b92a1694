use super::{ConfigError, SerializableConfig};
use std::path::Path;
use tokio::fs::read_to_string;

/// Reads a configuration file.
pub async fn read_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    parse_config(&read_to_string(path).await?)
}

/// Parses a configuration in TOML.
pub fn parse_config(string: &str) -> Result<SerializableConfig, ConfigError> {
    Ok(toml::from_str(string)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_USER_AGENT, compile_config};
    use core::time::Duration;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tokio::fs::write;

    #[tokio::test]
    async fn read_file() {
        let directory = tempdir().unwrap();
        let file = directory.path().join("fitchner.toml");

        write(
            &file,
            indoc! {r#"
                [parser]
                max_input_size = 1048576

                [http]
                timeout = "5s"
                proxy = "http://localhost:8080"
                accept_html_only = false
                headers = { accept = "text/html" }
            "#},
        )
        .await
        .unwrap();

        let config = compile_config(read_config(&file).await.unwrap()).unwrap();

        assert_eq!(config.parser().max_input_size(), Some(1 << 20));
        assert_eq!(config.http().timeout(), Some(Duration::from_secs(5)));
        assert_eq!(
            config.http().proxy().map(|url| url.as_str()),
            Some("http://localhost:8080/")
        );
        assert!(!config.http().accept_html_only());
        assert_eq!(config.http().headers()["accept"], "text/html");
        assert_eq!(config.http().user_agent(), DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn fail_on_missing_file() {
        let directory = tempdir().unwrap();

        assert!(matches!(
            read_config(&directory.path().join("missing.toml")).await,
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(
            compile_config(parse_config("").unwrap()).unwrap(),
            Default::default()
        );
    }

    #[test]
    fn fail_on_unknown_field() {
        assert!(matches!(
            parse_config(indoc! {r#"
                [http]
                retries = 3
            "#}),
            Err(ConfigError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn fail_on_invalid_proxy() {
        assert!(matches!(
            parse_config(indoc! {r#"
                [http]
                proxy = "not a url"
            "#}),
            Err(ConfigError::TomlDeserialize(_))
        ));
    }
}
