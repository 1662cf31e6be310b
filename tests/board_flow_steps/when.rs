//! When steps for kanban board BDD scenarios.

use super::world::{BoardWorld, operation_from_label, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use serde_json::json;
use taskdeck::board::domain::{FilterCriteria, TaskDraft, TaskId, TaskPriority};

#[when(r#"a task titled "{title}" is created with priority "{priority}""#)]
fn create_task(
    world: &mut BoardWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let level: TaskPriority = serde_json::from_value(json!(priority))
        .wrap_err("parse priority label in scenario text")?;
    let draft = TaskDraft::new(title)
        .wrap_err("build scenario draft")?
        .with_priority(level);

    match run_async(world.service.create_task(draft)) {
        Ok(created) => world.last_created = Some(created),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"deletion of task "{id}" is requested"#)]
fn request_deletion(world: &mut BoardWorld, id: String) {
    world.service.request_delete(TaskId::new(id));
}

#[when("the deletion is confirmed")]
fn confirm_deletion(world: &mut BoardWorld) {
    if let Err(err) = run_async(world.service.confirm_delete()) {
        world.last_error = Some(err);
    }
}

#[when(r#"an edit of task "{id}" begins"#)]
fn begin_edit(world: &mut BoardWorld, id: String) {
    let target = TaskId::new(id);
    if let Err(err) = run_async(world.service.begin_edit(&target)) {
        world.last_error = Some(err);
    }
}

#[when(r#"the next "{operation}" store call fails"#)]
fn arm_store_failure(world: &mut BoardWorld, operation: String) -> Result<(), eyre::Report> {
    let target = operation_from_label(&operation)
        .ok_or_else(|| eyre::eyre!("unknown store operation in scenario: {operation}"))?;
    world
        .store
        .fail_next(target)
        .wrap_err("arm store failure in scenario")
}

#[when(r#"the search filter "{term}" is applied"#)]
fn apply_search_filter(world: &mut BoardWorld, term: String) {
    world
        .service
        .set_filter(FilterCriteria::new().with_search(term));
}
