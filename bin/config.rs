use derive_more::{Display, Error, From};
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

/// The reason why parsing the bot configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse bot configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

/// Runtime configuration for the bot.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The bot's authentication token.
    #[serde(default)]
    pub token: Option<String>,

    /// The guilds slash commands are registered in.
    #[serde(default)]
    pub guilds: Vec<u64>,

    /// The directory holding the board template and piece sprites.
    #[serde(default = "Config::default_assets")]
    pub assets: PathBuf,
}

impl Config {
    fn default_assets() -> PathBuf {
        PathBuf::from("assets")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token: None,
            guilds: Vec::new(),
            assets: Config::default_assets(),
        }
    }
}

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        assert_eq!("()".parse(), Ok(Config::default()));
    }

    #[test]
    fn config_is_deserializable() {
        let config = r#"(
            token: Some("secret"),
            guilds: [899049400867881002, 42],
            assets: "/srv/chessbot/assets",
        )"#;

        assert_eq!(
            config.parse(),
            Ok(Config {
                token: Some("secret".into()),
                guilds: vec![899049400867881002, 42],
                assets: "/srv/chessbot/assets".into(),
            })
        );
    }

    #[test]
    fn token_may_be_a_bare_string() {
        let config = r#"(token: "secret", guilds: [1], assets: "./assets")"#;

        assert_eq!(
            config.parse(),
            Ok(Config {
                token: Some("secret".into()),
                guilds: vec![1],
                assets: "./assets".into(),
            })
        );
    }

    #[test]
    fn token_may_be_explicitly_absent() {
        assert_eq!("(token: None)".parse(), Ok(Config::default()));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!("(prefix: \"!\")".parse::<Config>().is_err());
    }

    #[proptest]
    fn parsing_printed_config_is_an_identity(
        #[strategy(proptest::option::of("[A-Za-z0-9._-]{1,72}"))] token: Option<String>,
        guilds: Vec<u64>,
        #[strategy("[a-z/]{1,16}")] assets: String,
    ) {
        let config = Config {
            token,
            guilds,
            assets: assets.into(),
        };

        assert_eq!(ron::ser::to_string(&config)?.parse(), Ok(config));
    }
}
