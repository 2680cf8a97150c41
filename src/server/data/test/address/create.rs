use super::*;

/// Tests creating an address for a student.
///
/// Verifies that the address references the student, stores every field and
/// starts at version 0.
///
/// Expected: Ok with address created
#[tokio::test]
async fn creates_address_for_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = AddressRepository::new(db);
    let address = repo
        .create(
            student.id,
            AddressFields {
                house_name: Some("Rose Cottage".to_string()),
                street_no: Some("12".to_string()),
                city: Some("Arlington".to_string()),
                state: None,
                country: Some("USA".to_string()),
            },
        )
        .await?;

    assert_eq!(address.student_id, student.id);
    assert_eq!(address.house_name.as_deref(), Some("Rose Cottage"));
    assert_eq!(address.state, None);
    assert_eq!(address.version, 0);

    let found = repo.find_by_student(student.id).await?;
    assert_eq!(found, Some(address));

    Ok(())
}

/// Tests that a student cannot own a second address.
///
/// Expected: Err from the unique student_id constraint
#[tokio::test]
async fn rejects_second_address_for_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::create_address(db, student.id).await?;

    let repo = AddressRepository::new(db);
    let result = repo.create(student.id, AddressFields::default()).await;

    assert!(result.is_err());

    Ok(())
}
