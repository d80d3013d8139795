//! Implementation of the `easy-commit last` command

use easy_commit_core::Config;

use super::{commit_service, report_error};
use crate::output::{JsonResponse, LastData};

/// Run the last command
pub fn run_last(config: &Config, json_output: bool) -> Result<i32, String> {
    let service = commit_service(config)?;

    match service.last_message() {
        Ok(message) => {
            if json_output {
                JsonResponse::ok("last", LastData { message }).print()?;
            } else {
                println!("{}", message);
            }
            Ok(0)
        }
        Err(e) => report_error("last", &e, json_output),
    }
}
