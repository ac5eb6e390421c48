//! Database provisioning for the Diesel suites.
//!
//! Database creation goes through `postgres` so `DROP DATABASE` runs outside
//! any Diesel transaction; the schema comes from the crate's embedded
//! migrations so tests never drift from production.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;
use warbler::outbound::persistence::run_pending_migrations;

use super::format_postgres_error;

/// Drop and recreate `name` on the cluster.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}

/// Create a uniquely named, fully migrated database and return its URL.
pub fn temporary_database_url(cluster: &TestCluster) -> Result<String, String> {
    let name = format!("warbler_test_{}", Uuid::new_v4().simple());
    reset_database(cluster, &name)?;
    let url = cluster.connection().database_url(&name);
    run_pending_migrations(&url).map_err(|err| err.to_string())?;
    Ok(url)
}

/// Count rows in `table` over a fresh connection (outside any test
/// transaction).
pub fn committed_rows(url: &str, table: &str) -> Result<i64, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let row = client
        .query_one(&format!("SELECT COUNT(*) FROM {table}"), &[])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
