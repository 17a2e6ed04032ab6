//! Then steps for person record BDD scenarios.

use super::world::{PersonWorld, run_async};
use person_registry::person::services::{ErrorKind, PersonServiceError};
use rstest_bdd_macros::then;

fn expect_failure(
    result: Option<&Result<impl std::fmt::Debug, PersonServiceError>>,
    kind: ErrorKind,
    message: &str,
) -> Result<(), eyre::Report> {
    let outcome = result.ok_or_else(|| eyre::eyre!("missing result in scenario world"))?;
    let Err(err) = outcome else {
        return Err(eyre::eyre!("expected {kind:?} failure, got {outcome:?}"));
    };
    if err.kind() != kind {
        return Err(eyre::eyre!("expected {kind:?} failure, got {err:?}"));
    }
    if err.to_string() != message {
        return Err(eyre::eyre!("expected message '{message}', got '{err}'"));
    }
    Ok(())
}

#[then("registration succeeds with an assigned id")]
fn registration_succeeds(world: &PersonWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    let person = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected registration failure: {err}"))?;

    if person.id().into_inner() <= 0 {
        return Err(eyre::eyre!("expected a positive id, found {}", person.id()));
    }
    Ok(())
}

#[then("the person can be retrieved by that id")]
fn person_retrievable(world: &PersonWorld) -> Result<(), eyre::Report> {
    let created = world
        .registered
        .last()
        .ok_or_else(|| eyre::eyre!("no registered person in scenario world"))?;
    let fetched = run_async(world.service.find_one(created.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;

    if &fetched != created {
        return Err(eyre::eyre!("fetched person does not match registered person"));
    }
    Ok(())
}

#[then(r#"registration fails with a validation error "{message}""#)]
fn registration_validation_error(world: &PersonWorld, message: String) -> Result<(), eyre::Report> {
    expect_failure(
        world.last_create_result.as_ref(),
        ErrorKind::ValidationFailed,
        &message,
    )
}

#[then(r#"registration fails with a duplicate error "{message}""#)]
fn registration_duplicate_error(world: &PersonWorld, message: String) -> Result<(), eyre::Report> {
    expect_failure(
        world.last_create_result.as_ref(),
        ErrorKind::DuplicateField,
        &message,
    )
}

#[then(r#"the update fails with a duplicate error "{message}""#)]
fn update_duplicate_error(world: &PersonWorld, message: String) -> Result<(), eyre::Report> {
    expect_failure(
        world.last_update_result.as_ref(),
        ErrorKind::DuplicateField,
        &message,
    )
}

#[then("{count:usize} rows are affected")]
fn rows_affected(world: &PersonWorld, count: usize) -> Result<(), eyre::Report> {
    let result = world
        .last_remove_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing remove result in scenario world"))?;
    let affected = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected remove failure: {err}"))?;

    if affected.count() != count {
        return Err(eyre::eyre!(
            "expected {count} affected rows, found {}",
            affected.count()
        ));
    }
    Ok(())
}

#[then(r#"looking up the removed person reports "not found""#)]
fn removed_person_not_found(world: &PersonWorld) -> Result<(), eyre::Report> {
    let removed = world
        .registered
        .last()
        .ok_or_else(|| eyre::eyre!("no registered person in scenario world"))?;
    let result = run_async(world.service.find_one(removed.id()));

    if !matches!(result, Err(PersonServiceError::NotFound(id)) if id == removed.id()) {
        return Err(eyre::eyre!("expected not found error, got {result:?}"));
    }
    Ok(())
}

#[then("listing persons returns {count:usize} entries")]
fn listing_returns(world: &PersonWorld, count: usize) -> Result<(), eyre::Report> {
    let listed =
        run_async(world.service.find_all()).map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if listed.len() != count {
        return Err(eyre::eyre!(
            "expected {count} persons, found {}",
            listed.len()
        ));
    }
    Ok(())
}
