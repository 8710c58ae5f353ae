mod cli;
mod commands;
mod infra;
mod render;

use recesso::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
