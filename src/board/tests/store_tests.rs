//! Unit tests for the project store and its broadcast semantics.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use crate::board::adapters::RecordingObserver;
use crate::board::domain::{
    PeopleCount, Project, ProjectDescription, ProjectId, ProjectStatus, ProjectTitle,
};
use crate::board::ports::observer::MockProjectObserver;
use crate::board::services::ProjectStore;

#[fixture]
fn store() -> ProjectStore<DefaultClock> {
    ProjectStore::new(Arc::new(DefaultClock))
}

fn add_sample_project(store: &ProjectStore<DefaultClock>, title: &str) -> eyre::Result<Project> {
    Ok(store.add_project(
        ProjectTitle::new(title)?,
        ProjectDescription::new("sample description")?,
        PeopleCount::new(2)?,
    ))
}

#[rstest]
fn add_project_appends_and_broadcasts(store: ProjectStore<DefaultClock>) -> eyre::Result<()> {
    let recorder = RecordingObserver::new();
    store.add_listener(recorder.clone());

    let project = add_sample_project(&store, "Build API")?;

    let projects = store.projects();
    ensure!(projects.len() == 1);
    ensure!(project.status() == ProjectStatus::Active);
    ensure!(recorder.broadcast_count() == 1);

    let snapshot = recorder.last_snapshot().unwrap_or_default();
    ensure!(snapshot.iter().any(|item| item.id() == project.id()));
    Ok(())
}

#[rstest]
fn every_observer_receives_each_broadcast(store: ProjectStore<DefaultClock>) -> eyre::Result<()> {
    let first = RecordingObserver::new();
    let second = RecordingObserver::new();
    store.add_listener(first.clone());
    store.add_listener(second.clone());

    add_sample_project(&store, "Build API")?;

    ensure!(first.broadcast_count() == 1);
    ensure!(second.broadcast_count() == 1);
    Ok(())
}

#[rstest]
fn broadcast_order_matches_registration_order(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    let calls: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    for tag in 1..=3 {
        let sequence = Arc::clone(&calls);
        store.add_listener(move |_snapshot: Vec<Project>| {
            if let Ok(mut recorded) = sequence.lock() {
                recorded.push(tag);
            }
        });
    }

    let project = add_sample_project(&store, "Build API")?;
    store.move_project(project.id(), ProjectStatus::Finished);

    let recorded = calls.lock().map(|sequence| sequence.clone()).unwrap_or_default();
    ensure!(recorded == vec![1, 2, 3, 1, 2, 3]);
    Ok(())
}

#[rstest]
fn duplicate_registration_is_not_deduplicated(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    let recorder = RecordingObserver::new();
    store.add_listener(recorder.clone());
    store.add_listener(recorder.clone());

    add_sample_project(&store, "Build API")?;

    // The same recording backs both subscriptions, so one mutation lands
    // twice.
    ensure!(recorder.broadcast_count() == 2);
    Ok(())
}

#[rstest]
fn move_to_current_status_does_not_broadcast(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    let recorder = RecordingObserver::new();
    store.add_listener(recorder.clone());
    let project = add_sample_project(&store, "Build API")?;
    ensure!(recorder.broadcast_count() == 1);

    store.move_project(project.id(), ProjectStatus::Active);

    ensure!(recorder.broadcast_count() == 1);
    ensure!(
        store.find(project.id()).map(|found| found.status()) == Some(ProjectStatus::Active)
    );
    Ok(())
}

#[rstest]
fn move_with_unknown_id_does_not_broadcast(store: ProjectStore<DefaultClock>) -> eyre::Result<()> {
    let recorder = RecordingObserver::new();
    store.add_listener(recorder.clone());

    store.move_project(ProjectId::new(), ProjectStatus::Finished);

    ensure!(recorder.broadcast_count() == 0);
    ensure!(store.projects().is_empty());
    Ok(())
}

#[rstest]
fn move_round_trip_broadcasts_once_per_direction(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    let recorder = RecordingObserver::new();
    store.add_listener(recorder.clone());
    let project = add_sample_project(&store, "Build API")?;

    store.move_project(project.id(), ProjectStatus::Finished);
    ensure!(recorder.broadcast_count() == 2);
    ensure!(
        store.find(project.id()).map(|found| found.status()) == Some(ProjectStatus::Finished)
    );

    store.move_project(project.id(), ProjectStatus::Active);
    ensure!(recorder.broadcast_count() == 3);
    ensure!(
        store.find(project.id()).map(|found| found.status()) == Some(ProjectStatus::Active)
    );
    Ok(())
}

#[rstest]
fn snapshot_is_an_independent_copy(store: ProjectStore<DefaultClock>) -> eyre::Result<()> {
    let project = add_sample_project(&store, "Build API")?;

    let mut snapshot = store.projects();
    snapshot.clear();

    ensure!(store.projects().len() == 1);
    ensure!(store.find(project.id()).is_some());
    Ok(())
}

#[rstest]
fn observer_side_mutation_cannot_corrupt_the_store(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    store.add_listener(|mut snapshot: Vec<Project>| {
        snapshot.clear();
    });
    let recorder = RecordingObserver::new();
    store.add_listener(recorder.clone());

    add_sample_project(&store, "Build API")?;

    ensure!(store.projects().len() == 1);
    ensure!(recorder.last_snapshot().unwrap_or_default().len() == 1);
    Ok(())
}

#[rstest]
fn cloned_handle_shares_the_same_collection(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    let recorder = RecordingObserver::new();
    store.add_listener(recorder.clone());

    let handle = store.clone();
    let project = add_sample_project(&handle, "Build API")?;

    ensure!(store.projects().len() == 1);
    ensure!(store.find(project.id()).is_some());
    ensure!(recorder.broadcast_count() == 1);
    Ok(())
}

#[rstest]
fn mock_observer_sees_exactly_one_call_per_mutation(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    let mut observer = MockProjectObserver::new();
    observer
        .expect_projects_changed()
        .times(2)
        .returning(|_snapshot| ());
    store.add_listener(observer);

    let project = add_sample_project(&store, "Build API")?;
    store.move_project(project.id(), ProjectStatus::Finished);
    // A no-op move must not reach the observer.
    store.move_project(project.id(), ProjectStatus::Finished);

    drop(store);
    Ok(())
}

#[rstest]
fn project_id_round_trips_through_payload_text(
    store: ProjectStore<DefaultClock>,
) -> eyre::Result<()> {
    let project = add_sample_project(&store, "Build API")?;
    let parsed = ProjectId::from_str(&project.id().to_string())?;
    ensure!(parsed == project.id());
    Ok(())
}
