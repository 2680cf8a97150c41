use super::*;

/// Tests fetching the phones of a student.
///
/// Verifies that only the student's own phones are returned, ordered by id.
///
/// Expected: Ok with the two owned phones
#[tokio::test]
async fn returns_only_owned_phones_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    let first = factory::create_phone(db, student.id).await?;
    factory::create_phone(db, other.id).await?;
    let second = factory::create_phone(db, student.id).await?;

    let repo = PhoneRepository::new(db);
    let phones = repo.get_by_student(student.id).await?;

    assert_eq!(phones, vec![first, second]);

    Ok(())
}
