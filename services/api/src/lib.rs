mod cli;
mod infra;
mod loan;
mod routes;
mod server;

use dreamhome::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
