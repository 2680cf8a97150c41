use super::*;

/// Tests overwriting a phone at the expected version.
///
/// Expected: Ok(Some) with both fields replaced and version incremented
#[tokio::test]
async fn overwrites_phone_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let phone = factory::phone::PhoneFactory::new(db, student.id)
        .model("Pixel")
        .number("555-0100")
        .build()
        .await?;

    let repo = PhoneRepository::new(db);
    let updated = repo
        .update(
            phone.id,
            phone.version,
            PhoneFields {
                model: None,
                number: Some("555-0199".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.model, None);
    assert_eq!(updated.number.as_deref(), Some("555-0199"));
    assert_eq!(updated.version, phone.version + 1);
    assert_eq!(updated.student_id, student.id);

    Ok(())
}

/// Tests overwriting a phone with a stale version.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_update_at_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let phone = factory::phone::PhoneFactory::new(db, student.id)
        .version(1)
        .build()
        .await?;

    let repo = PhoneRepository::new(db);
    let updated = repo.update(phone.id, 0, PhoneFields::default()).await?;

    assert!(updated.is_none());
    assert_eq!(repo.get_by_student(student.id).await?, vec![phone]);

    Ok(())
}
