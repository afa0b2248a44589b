//! Runs effects against the git collaborator and feeds their completions back
//! into the state machine.

use crate::{
    effect::{Effect, SessionEnd},
    event::{Completion, Event},
    git::{GitProvider, MergeOutcome},
    state::BrowserState,
};

/// Execute one effect. `Err` means the session is over.
pub fn execute(effect: Effect, git: &dyn GitProvider) -> Result<Completion, SessionEnd> {
    let completion = match effect {
        Effect::Exit(end) => return Err(end),
        Effect::Checkout { name } => {
            log::info!("checking out {name}");
            let result = git.checkout(&name).map_err(|e| e.to_string());
            Completion::CheckedOut { name, result }
        }
        Effect::DeleteBranches { names } => {
            log::info!("deleting branches: {}", names.join(", "));
            let result = git.delete_branches(&names).map_err(|e| {
                log::warn!("delete failed: {e}");
                e.to_string()
            });
            Completion::Deleted(result)
        }
        Effect::Merge { source, target } => {
            log::info!("merging {source} into {target}");
            let outcome = git.merge(&source, &target);
            match &outcome {
                MergeOutcome::Success => log::info!("merged {source} into {target}"),
                MergeOutcome::Conflicts { count, .. } => {
                    log::info!("merge of {source} into {target} left {count} conflicted files");
                }
                MergeOutcome::Failure { message } => log::warn!("merge failed: {message}"),
            }
            Completion::Merged {
                source,
                target,
                outcome,
            }
        }
        Effect::AbortMerge => {
            log::info!("aborting merge");
            let result = git.abort_merge().map_err(|e| {
                log::warn!("abort failed: {e}");
                e.to_string()
            });
            Completion::Aborted(result)
        }
        Effect::Reload { kind } => {
            log::info!("reloading {kind:?}");
            let result = git.load(kind).map_err(|e| {
                log::warn!("reload failed: {e}");
                e.to_string()
            });
            Completion::Reloaded(result)
        }
        Effect::FetchDetail { reference } => {
            log::debug!("fetching detail for {reference}");
            let result = git.fetch_detail(&reference).map_err(|e| {
                log::warn!("detail fetch failed: {e}");
                e.to_string()
            });
            Completion::DetailFetched { reference, result }
        }
    };
    Ok(completion)
}

/// Apply an event and run every effect it triggers until the state settles.
/// Returns `Some` once the session has ended.
pub fn dispatch(
    mut state: BrowserState,
    event: Event,
    git: &dyn GitProvider,
) -> (BrowserState, Option<SessionEnd>) {
    let mut next = Some(event);
    while let Some(event) = next.take() {
        let (updated, effect) = state.update(event);
        state = updated;
        if let Some(effect) = effect {
            match execute(effect, git) {
                Ok(completion) => next = Some(Event::Completed(completion)),
                Err(end) => return (state, Some(end)),
            }
        }
    }
    (state, None)
}
