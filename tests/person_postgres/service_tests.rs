//! Service error translation against `PostgreSQL` constraint reports.

use crate::person_postgres::helpers::prepare_repo;
use chrono::NaiveDate;
use person_registry::person::{
    domain::PersonChanges,
    services::{CreatePersonRequest, DuplicateField, PersonRecordService, PersonServiceError},
};
use rstest::rstest;
use std::sync::Arc;

fn request(cpf: &str, email: &str) -> CreatePersonRequest {
    CreatePersonRequest::new(
        "Eduardo Reis",
        cpf,
        NaiveDate::from_ymd_opt(1979, 5, 2).expect("valid date"),
        email,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_columns_are_named_in_service_errors() {
    let Some(prepared) = prepare_repo().expect("repository setup") else {
        return;
    };
    let service = PersonRecordService::new(Arc::new(prepared.repo.clone()));
    let first = service
        .create(request("52998224725", "eduardo@example.com"))
        .await
        .expect("first create");
    let second = service
        .create(request("11144477735", "reis@example.com"))
        .await
        .expect("second create");

    let cpf_clash = service
        .create(request("52998224725", "new@example.com"))
        .await;
    let email_clash = service
        .update(
            second.id(),
            &PersonChanges::new().with_email(first.email()),
        )
        .await;

    assert!(matches!(
        cpf_clash,
        Err(PersonServiceError::DuplicateField(DuplicateField::Cpf))
    ));
    assert!(matches!(
        email_clash,
        Err(PersonServiceError::DuplicateField(DuplicateField::Email))
    ));
    assert_eq!(
        email_clash.map_err(|err| err.to_string()).err().as_deref(),
        Some("email already registered")
    );

    drop(service);
    prepared.cleanup().expect("cleanup schema");
}
