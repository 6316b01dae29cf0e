use {
    crate::error::Error,
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Load a TOML file, then let environment variables override its values.
///
/// Nested keys are addressed with `__`, e.g. `LOG__FORMAT=json` sets `format`
/// in the `[log]` table.
pub fn parse_config<D, P>(path: P) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }

    let env_override = Environment::default().separator("__");

    let config = Config::builder()
        .add_source(File::from(path))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, assertor::*};

    #[derive(Debug, serde::Deserialize)]
    struct TestSettings {
        log_level: String,
        contract: String,
        gateway: GatewaySettings,
    }

    #[derive(Debug, serde::Deserialize)]
    struct GatewaySettings {
        fail: bool,
    }

    #[test]
    fn test_parse_config_file() {
        std::env::set_var("GATEWAY__FAIL", "true");

        let config: TestSettings =
            parse_config("fixtures/config_test1.toml").expect("Failed to parse file");

        assert_that!(config.log_level.as_str()).is_equal_to("debug");
        assert_that!(config.contract.as_str()).is_equal_to("simpleswap");
        assert_that!(config.gateway.fail).is_true();
    }

    #[test]
    fn test_missing_config_file() {
        let result = parse_config::<TestSettings, _>("fixtures/does_not_exist.toml");

        assert_that!(matches!(result, Err(Error::NotFound(_)))).is_true();
    }
}
