//! Given steps for kanban board BDD scenarios.

use super::world::{BoardWorld, run_async, seeded_task, status_from_label};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdeck::board::domain::{ProjectId, ProjectSummary, UserId, UserSummary};

#[given("a seeded board directory")]
fn seeded_directory(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .store
        .seed_projects([
            ProjectSummary {
                id: ProjectId::new("p1"),
                name: "Website Redesign".to_owned(),
            },
            ProjectSummary {
                id: ProjectId::new("p2"),
                name: "Mobile App".to_owned(),
            },
        ])
        .wrap_err("seed projects into scenario store")?;
    world
        .store
        .seed_users([
            UserSummary {
                id: UserId::new("u1"),
                name: "Alice Admin".to_owned(),
                avatar: None,
            },
            UserSummary {
                id: UserId::new("u2"),
                name: "Bob User".to_owned(),
                avatar: None,
            },
        ])
        .wrap_err("seed users into scenario store")?;
    Ok(())
}

#[given(r#"a seeded task "{id}" titled "{title}" with status "{status}""#)]
fn seeded_task_record(
    world: &mut BoardWorld,
    id: String,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let record = seeded_task(&id, &title, status_from_label(&status));
    world
        .store
        .seed_tasks([record])
        .wrap_err("seed task into scenario store")
}

#[given("the board has loaded")]
fn board_has_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.service.load()).wrap_err("initial board load in scenario setup")
}
