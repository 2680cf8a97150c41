use super::*;

/// Tests deleting the address of a student.
///
/// Expected: Ok(true) and no address left for the student
#[tokio::test]
async fn deletes_student_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::create_address(db, student.id).await?;

    let repo = AddressRepository::new(db);
    let deleted = repo.delete_by_student(student.id).await?;

    assert!(deleted);
    assert!(repo.find_by_student(student.id).await?.is_none());

    Ok(())
}

/// Tests deleting when the student has no address.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = AddressRepository::new(db);
    let deleted = repo.delete_by_student(student.id).await?;

    assert!(!deleted);

    Ok(())
}
