use super::*;

/// Tests listing students that have an address.
///
/// Expected: Ok with only the student owning an address
#[tokio::test]
async fn lists_students_with_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let housed = factory::create_student(db).await?;
    factory::create_address(db, housed.id).await?;
    factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.with_address().await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, housed.id);

    Ok(())
}

/// Tests listing students without an address.
///
/// Expected: Ok with only the students lacking an address
#[tokio::test]
async fn lists_students_without_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let housed = factory::create_student(db).await?;
    factory::create_address(db, housed.id).await?;
    let homeless = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.without_address().await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, homeless.id);

    Ok(())
}
