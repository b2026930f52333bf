//! Per-test PostgreSQL databases inside one shared container.

use std::{env, thread};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::{runtime::Builder, sync::OnceCell};
use uuid::Uuid;

use crate::database;

const USER: &str = "boxoffice_test";
const PASSWORD: &str = "boxoffice_test_password";

static HOST: Lazy<String> = Lazy::new(|| {
    env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string())
});

static CONTAINER: OnceCell<ContainerAsync<PostgresImage>> = OnceCell::const_new();

async fn container_port() -> u16 {
    let container = CONTAINER
        .get_or_init(|| async {
            PostgresImage::default()
                .with_user(USER)
                .with_password(PASSWORD)
                .with_db_name(USER)
                .with_tag("16-alpine")
                .start()
                .await
                .expect("postgres container should start")
        })
        .await;

    container
        .get_host_port_ipv4(5432)
        .await
        .expect("postgres port should be mapped")
}

fn url(port: u16, database: &str) -> String {
    format!("postgresql://{USER}:{PASSWORD}@{}:{port}/{database}", *HOST)
}

async fn drop_database(admin_url: &str, name: &str) {
    let result = async {
        let mut admin = PgConnection::connect(admin_url).await?;

        sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
            .execute(&mut admin)
            .await?;

        admin.close().await
    }
    .await;

    if let Err(error) = result {
        eprintln!("failed to drop test database {name}: {error}");
    }
}

/// A freshly migrated database, dropped again when this value is.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
    port: u16,
}

impl TestDb {
    pub async fn new() -> Self {
        let port = container_port().await;
        let name = format!("boxoffice_test_{}", Uuid::now_v7().simple());

        let mut admin = PgConnection::connect(&url(port, "postgres"))
            .await
            .expect("admin connection should open");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("test database should be created");

        admin
            .close()
            .await
            .expect("admin connection should close");

        let pool = PgPool::connect(&url(port, &name))
            .await
            .expect("test database pool should connect");

        database::migrate(&pool)
            .await
            .expect("migrations should apply");

        Self { pool, name, port }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let admin_url = url(self.port, "postgres");
        let name = self.name.clone();

        // The owning test's runtime may be shutting down, so cleanup gets its own.
        let cleanup = thread::spawn(move || {
            match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(drop_database(&admin_url, &name)),
                Err(error) => eprintln!("failed to start cleanup runtime for {name}: {error}"),
            }
        });

        if cleanup.join().is_err() {
            eprintln!("test database cleanup thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn databases_are_migrated_and_dropped() -> TestResult {
        let test_db = TestDb::new().await;
        let name = test_db.name.clone();
        let admin_url = url(test_db.port, "postgres");

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_name IN ('tickets', 'cart_lines')",
        )
        .fetch_one(test_db.pool())
        .await?;

        assert_eq!(tables, 2);

        drop(test_db);

        let mut admin = PgConnection::connect(&admin_url).await?;

        let remaining: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM pg_database WHERE datname = $1")
                .bind(&name)
                .fetch_one(&mut admin)
                .await?;

        assert_eq!(remaining, 0, "expected {name} to be dropped");

        Ok(())
    }
}
