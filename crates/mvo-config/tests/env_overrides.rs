use figment::Jail;
use mvo_config::MvoConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("MVO_FEED__BATCH_SIZE", "7");
        jail.set_env("MVO_CATALOG__PATH", "/tmp/catalog.json");

        let config = MvoConfig::load().expect("config loads");
        assert_eq!(config.feed.batch_size, 7);
        assert_eq!(config.catalog.path, "/tmp/catalog.json");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mvo")?;
        jail.create_file(".mvo/config.toml", "[feed]\nmax_items = 30\n")?;
        jail.set_env("MVO_FEED__MAX_ITEMS", "50");

        let config = MvoConfig::load().expect("config loads");
        assert_eq!(config.feed.max_items, 50);
        Ok(())
    });
}

#[test]
fn zero_batch_size_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("MVO_FEED__BATCH_SIZE", "0");
        assert!(MvoConfig::load().is_err());
        Ok(())
    });
}
