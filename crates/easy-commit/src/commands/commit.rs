//! Default command: create a commit from flags or the interactive wizard

use owo_colors::OwoColorize;

use easy_commit_core::{CommitFields, CommitMessage, CommitService, Config, EasyCommitError, GitCli, WizardOutcome};

use super::{commit_service, report_error};
use crate::cli::CommitArgs;
use crate::colors::COLORS;
use crate::interaction;
use crate::output::{CommitData, CommitOutcome, JsonResponse};

/// How a commit run ended
enum Finished {
    Created { message: CommitMessage, text: String },
    DryRun(CommitMessage),
    Cancelled,
}

/// Run the commit command
pub fn run_commit(args: CommitArgs, config: &Config, json_output: bool, quiet: bool) -> Result<i32, String> {
    let service = commit_service(config)?;

    let result = if args.is_interactive() {
        run_wizard(&service, config, args.dry_run)
    } else {
        run_direct(&service, args)
    };

    match result {
        Ok(finished) => {
            print_finished(finished, json_output, quiet)?;
            Ok(0)
        }
        Err(e) => report_error("commit", &e, json_output),
    }
}

fn run_wizard(
    service: &CommitService<GitCli>,
    config: &Config,
    dry_run: bool,
) -> Result<Finished, EasyCommitError> {
    // Fail before prompting when the commit could not be created anyway
    if !dry_run {
        service.preflight()?;
    }

    match interaction::run_interactive(config)? {
        WizardOutcome::Cancelled => {
            log::info!("wizard cancelled");
            Ok(Finished::Cancelled)
        }
        WizardOutcome::Completed(message) => finish(service, message, dry_run),
    }
}

fn run_direct(service: &CommitService<GitCli>, args: CommitArgs) -> Result<Finished, EasyCommitError> {
    let fields = CommitFields::new(
        args.commit_type.unwrap_or_default(),
        args.message.unwrap_or_default().trim(),
        args.scope.map(|s| s.trim().to_string()),
        args.body.map(|b| b.trim().to_string()),
        args.breaking,
    );

    let message = service.finalize(fields)?;
    finish(service, message, args.dry_run)
}

fn finish(
    service: &CommitService<GitCli>,
    message: CommitMessage,
    dry_run: bool,
) -> Result<Finished, EasyCommitError> {
    if dry_run {
        return Ok(Finished::DryRun(message));
    }

    let text = service.create_commit(&message)?;
    Ok(Finished::Created { message, text })
}

fn print_finished(finished: Finished, json_output: bool, quiet: bool) -> Result<(), String> {
    if json_output {
        let data = match finished {
            Finished::Created { message, text } => CommitData {
                outcome: CommitOutcome::Created,
                message: Some(text),
                fields: Some(message.fields().clone()),
            },
            Finished::DryRun(message) => CommitData {
                outcome: CommitOutcome::DryRun,
                message: Some(message.format()),
                fields: Some(message.fields().clone()),
            },
            Finished::Cancelled => CommitData::cancelled(),
        };
        return JsonResponse::ok("commit", data).print();
    }

    match finished {
        Finished::Created { text, .. } => {
            if !quiet {
                println!("{}", "✓ Commit created successfully".style(COLORS.success));
                println!();
                println!("{}", text);
            }
        }
        // Printed even when quiet
        Finished::DryRun(message) => println!("{}", message),
        Finished::Cancelled => {
            if !quiet {
                println!("Commit cancelled");
            }
        }
    }
    Ok(())
}
