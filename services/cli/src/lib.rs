mod cli;
mod commands;
mod report;

use field_checklist::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
