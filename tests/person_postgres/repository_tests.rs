//! Adapter behaviour against real `persons` table constraints.

use crate::person_postgres::helpers::{new_person, prepare_repo};
use person_registry::person::{
    domain::{PersonChanges, PersonId},
    ports::{PersonRepository, PersonRepositoryError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_returns_record_with_serial_id() {
    let Some(prepared) = prepare_repo().expect("repository setup") else {
        return;
    };

    let first = prepared
        .repo
        .save(&new_person("52998224725", "carla@example.com"))
        .await
        .expect("first save");
    let second = prepared
        .repo
        .save(&new_person("11144477735", "dias@example.com"))
        .await
        .expect("second save");

    assert_eq!(first.id(), PersonId::new(1));
    assert_eq!(second.id(), PersonId::new(2));
    assert_eq!(first.cpf(), "52998224725");
    let found = prepared
        .repo
        .find_by_id(first.id())
        .await
        .expect("lookup");
    assert_eq!(found, Some(first));

    prepared.cleanup().expect("cleanup schema");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_cpf_reports_constraint_and_detail() {
    let Some(prepared) = prepare_repo().expect("repository setup") else {
        return;
    };
    prepared
        .repo
        .save(&new_person("52998224725", "carla@example.com"))
        .await
        .expect("first save");

    let result = prepared
        .repo
        .save(&new_person("52998224725", "other@example.com"))
        .await;

    let Err(PersonRepositoryError::UniqueViolation(violation)) = result else {
        panic!("expected unique violation, got {result:?}");
    };
    assert_eq!(violation.constraint(), Some("persons_cpf_key"));
    assert!(
        violation.detail().is_some_and(|detail| detail.contains("(cpf)")),
        "unexpected detail: {violation}"
    );

    prepared.cleanup().expect("cleanup schema");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_keeps_long_punctuated_cpf() {
    let Some(prepared) = prepare_repo().expect("repository setup") else {
        return;
    };
    let cpf = "529 . 982 . 247 - 25 ( primary )";
    assert!(cpf.len() > 20);

    let saved = prepared
        .repo
        .save(&new_person(cpf, "carla@example.com"))
        .await
        .expect("long CPF save");
    let found = prepared
        .repo
        .find_by_id(saved.id())
        .await
        .expect("lookup")
        .expect("person stored");

    assert_eq!(found.cpf(), cpf);

    prepared.cleanup().expect("cleanup schema");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_lists_in_insertion_order() {
    let Some(prepared) = prepare_repo().expect("repository setup") else {
        return;
    };
    let mut saved = Vec::new();
    for (cpf, email) in [
        ("52998224725", "a@example.com"),
        ("11144477735", "b@example.com"),
        ("12345678909", "c@example.com"),
    ] {
        let person = prepared
            .repo
            .save(&new_person(cpf, email))
            .await
            .expect("save");
        saved.push(person);
    }

    let listed = prepared.repo.find_all().await.expect("list");
    assert_eq!(listed, saved);

    prepared.cleanup().expect("cleanup schema");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_report_affected_rows() {
    let Some(prepared) = prepare_repo().expect("repository setup") else {
        return;
    };
    let person = prepared
        .repo
        .save(&new_person("52998224725", "carla@example.com"))
        .await
        .expect("save");

    let changes = PersonChanges::new().with_name("Carla D. Souza");
    let updated = prepared
        .repo
        .update(person.id(), &changes)
        .await
        .expect("update existing");
    let missing = prepared
        .repo
        .update(PersonId::new(999), &changes)
        .await
        .expect("update missing");
    assert_eq!(updated.count(), 1);
    assert_eq!(missing.count(), 0);

    let reloaded = prepared
        .repo
        .find_by_id(person.id())
        .await
        .expect("lookup")
        .expect("person still stored");
    assert_eq!(reloaded.name(), "Carla D. Souza");
    assert_eq!(reloaded.email(), "carla@example.com");

    let deleted = prepared.repo.delete(person.id()).await.expect("delete");
    let deleted_again = prepared
        .repo
        .delete(person.id())
        .await
        .expect("delete again");
    assert_eq!(deleted.count(), 1);
    assert_eq!(deleted_again.count(), 0);

    prepared.cleanup().expect("cleanup schema");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_empty_change_set() {
    let Some(prepared) = prepare_repo().expect("repository setup") else {
        return;
    };

    let result = prepared
        .repo
        .update(PersonId::new(1), &PersonChanges::new())
        .await;
    assert!(matches!(result, Err(PersonRepositoryError::EmptyChangeSet)));

    prepared.cleanup().expect("cleanup schema");
}
