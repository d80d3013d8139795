//! Implementation of the `easy-commit init` command

use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;

use crate::colors::COLORS;
use crate::output::{InitData, JsonIssue, JsonResponse};

/// File written by `init`
pub const CONFIG_FILE: &str = ".easy-commit.toml";

/// Default .easy-commit.toml content
pub const DEFAULT_CONFIG: &str = r#"# easy-commit configuration

[commit]
# Maximum description length (characters)
max_description_length = 72

# Maximum body length (characters, newlines included)
max_body_length = 500

# Maximum scope length (characters)
max_scope_length = 30

# Column at which the body editor hard-wraps lines (0 disables wrapping)
body_line_width = 72

# Characters rejected in the description, e.g. ["`", "$"]
invalid_chars = []

# Commit types offered by the wizard and accepted by validation
allowed_types = ["feat", "fix", "docs", "style", "refactor", "test", "chore", "build", "ci", "perf"]

[validator]
# Worker threads used to evaluate validation rules (1-16)
workers = 4

[logger]
# error, warn, info, debug, trace, or off (overridden by -v, -q, and RUST_LOG)
level = "warn"
"#;

/// Run the init command
pub fn run_init(force: bool, json_output: bool, quiet: bool) -> Result<i32, String> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        let message = format!("{} already exists (use --force to overwrite)", CONFIG_FILE);
        if json_output {
            let response = JsonResponse::error(
                "init",
                InitData {
                    path: CONFIG_FILE.to_string(),
                    files_created: vec![],
                },
                vec![JsonIssue::error("E010", message)],
            );
            response.print()?;
        } else {
            eprintln!("error: {}", message);
        }
        return Ok(1);
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| format!("failed to write {}: {}", CONFIG_FILE, e))?;
    log::info!("wrote {}", CONFIG_FILE);

    if json_output {
        let response = JsonResponse::ok(
            "init",
            InitData {
                path: CONFIG_FILE.to_string(),
                files_created: vec![CONFIG_FILE.to_string()],
            },
        );
        response.print()?;
    } else if !quiet {
        println!("{} {}", "Created".style(COLORS.success), CONFIG_FILE);
    }

    Ok(0)
}
