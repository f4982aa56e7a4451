use figment::Jail;
use pretty_assertions::assert_eq;
use sigi_config::SigiConfig;

#[test]
fn env_overrides_beat_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("SIGI_GENERAL__DB_PATH", "/tmp/override.db");
        jail.set_env("SIGI_GENERAL__ROL", "tutor");

        let config: SigiConfig = SigiConfig::figment().extract().expect("config loads");
        assert_eq!(config.general.db_path, "/tmp/override.db");
        assert_eq!(config.general.rol, "tutor");
        Ok(())
    });
}

#[test]
fn local_toml_fills_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "sigi.toml",
            r#"
            [general]
            db_path = "registros.db"
            "#,
        )?;

        let config: SigiConfig = SigiConfig::figment().extract().expect("config loads");
        assert_eq!(config.general.db_path, "registros.db");
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "sigi.toml",
            r#"
            [general]
            db_path = "from_toml.db"
            "#,
        )?;
        jail.set_env("SIGI_GENERAL__DB_PATH", "from_env.db");

        let config: SigiConfig = SigiConfig::figment().extract().expect("config loads");
        assert_eq!(config.general.db_path, "from_env.db");
        Ok(())
    });
}
