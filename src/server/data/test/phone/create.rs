use super::*;

/// Tests creating a phone for a student.
///
/// Expected: Ok with phone owned by the student at version 0
#[tokio::test]
async fn creates_phone_for_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = PhoneRepository::new(db);
    let phone = repo
        .create(
            student.id,
            PhoneFields {
                model: Some("Pixel".to_string()),
                number: Some("555-0100".to_string()),
            },
        )
        .await?;

    assert_eq!(phone.student_id, student.id);
    assert_eq!(phone.model.as_deref(), Some("Pixel"));
    assert_eq!(phone.number.as_deref(), Some("555-0100"));
    assert_eq!(phone.version, 0);

    Ok(())
}

/// Tests creating a phone for a student that does not exist.
///
/// Expected: Err from the student_id foreign key
#[tokio::test]
async fn rejects_phone_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PhoneRepository::new(db);
    let result = repo.create(404, PhoneFields::default()).await;

    assert!(result.is_err());

    Ok(())
}
