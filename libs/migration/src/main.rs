//! `migration up|down|status|fresh` against `DATABASE_URL`, same as the
//! migrations the API applies on startup.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
