use std::ops::Deref;

use abi::Config;
use sqlx_db_test::TestDb;

const FIXTURE: &str = "fixtures/config.yml";
const MIGRATIONS: &str = "../migrations";

/// the fixture config pointed at a fresh, migrated database that lives as
/// long as this value
#[derive(Debug)]
pub struct TestConfig {
    config: Config,
    _db: TestDb,
}

impl TestConfig {
    pub fn new() -> Self {
        let mut config = Config::load(FIXTURE).unwrap();
        let db = TestDb::new(
            &config.db.host,
            config.db.port,
            &config.db.user,
            &config.db.password,
            MIGRATIONS,
        );
        config.db.dbname = db.dbname.clone();
        // every test gets its own database, keep the pool small
        config.db.max_connections = 2;

        Self { config, _db: db }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TestConfig {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.config
    }
}
