use figment::Jail;
use desk_config::DeskConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("NEWSDESK_STORAGE__DIR", "/srv/newsdesk");
        jail.set_env("NEWSDESK_DASHBOARD__ROWS_PER_PAGE", "50");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.storage.dir, "/srv/newsdesk");
        assert_eq!(config.dashboard.rows_per_page, 50);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".newsdesk")?;
        jail.create_file(
            ".newsdesk/config.toml",
            r#"
[storage]
key = "from_toml"
"#,
        )?;
        jail.set_env("NEWSDESK_STORAGE__KEY", "from_env");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.storage.key, "from_env");
        Ok(())
    });
}

#[test]
fn unrelated_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("OTHERAPP_STORAGE__KEY", "nope");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.storage.key, "cms_articles");
        Ok(())
    });
}
