//! Then steps for kanban board BDD scenarios.

use super::world::{BoardWorld, status_from_label};
use rstest_bdd_macros::then;
use taskdeck::board::services::BoardError;

#[then("the board holds {count:usize} task records")]
fn board_holds_records(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.service.tasks().len();
    if held != count {
        return Err(eyre::eyre!("expected {count} task records, found {held}"));
    }
    Ok(())
}

#[then("the newest task is the store's canonical record")]
fn newest_task_is_canonical(world: &BoardWorld) -> Result<(), eyre::Report> {
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;
    let appended = world
        .service
        .tasks()
        .last()
        .ok_or_else(|| eyre::eyre!("board holds no tasks"))?;

    if appended != created {
        return Err(eyre::eyre!("appended entry differs from the store response"));
    }
    if created.id().as_str().is_empty() {
        return Err(eyre::eyre!("canonical record carries no identifier"));
    }
    Ok(())
}

#[then(r#"the newest task appears in the "{label}" column"#)]
fn newest_task_in_column(world: &BoardWorld, label: String) -> Result<(), eyre::Report> {
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;
    let status = status_from_label(&label);
    let columns = world.service.columns();

    let present = columns
        .column(&status)
        .iter()
        .any(|task| task.id() == created.id());
    if !present {
        return Err(eyre::eyre!("created task is not in the {label} column"));
    }
    Ok(())
}

#[then("the operation fails with a store error")]
fn operation_fails_with_store_error(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_error {
        Some(BoardError::Store(_)) => Ok(()),
        Some(ref other) => Err(eyre::eyre!("expected a store error, got {other:?}")),
        None => Err(eyre::eyre!("expected a recorded error, found none")),
    }
}

#[then("no deletion is pending")]
fn no_deletion_pending(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.service.pending_delete().is_some() {
        return Err(eyre::eyre!("a deletion is still pending"));
    }
    Ok(())
}

#[then("no task is under edit")]
fn no_task_under_edit(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.service.editing().is_some() {
        return Err(eyre::eyre!("a task is still under edit"));
    }
    Ok(())
}

#[then(r#"only task "{id}" is visible on the board"#)]
fn only_task_visible(world: &BoardWorld, id: String) -> Result<(), eyre::Report> {
    let columns = world.service.columns();
    if columns.visible_count() != 1 {
        return Err(eyre::eyre!(
            "expected exactly one visible task, found {}",
            columns.visible_count()
        ));
    }

    let mut visible = columns
        .iter()
        .flat_map(|(_, column)| column.to_vec());
    let only = visible
        .next()
        .ok_or_else(|| eyre::eyre!("no visible task found"))?;
    if only.id().as_str() != id {
        return Err(eyre::eyre!(
            "expected task {id} to be visible, found {}",
            only.id()
        ));
    }
    Ok(())
}
