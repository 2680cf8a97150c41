use super::*;

/// Tests listing students that own phones.
///
/// Verifies that a student with two phones is listed once and a student
/// without phones is not listed.
///
/// Expected: Ok with only the phone owner
#[tokio::test]
async fn lists_phone_owners_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_student(db).await?;
    factory::create_phone(db, owner.id).await?;
    factory::create_phone(db, owner.id).await?;
    factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.with_phones().await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, owner.id);

    Ok(())
}

/// Tests listing students that own no phone.
///
/// Expected: Ok with only the students without phones, ordered by id
#[tokio::test]
async fn lists_students_without_phones() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let owner = factory::create_student(db).await?;
    let last = factory::create_student(db).await?;
    factory::create_phone(db, owner.id).await?;

    let repo = StudentRepository::new(db);
    let students = repo.without_phones().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, last.id]);

    Ok(())
}

/// Tests that the two phone queries partition all students.
///
/// Verifies that every student appears in exactly one of the two results.
///
/// Expected: disjoint results whose union is every student
#[tokio::test]
async fn phone_queries_partition_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student_graph(db).await?;
    factory::create_student(db).await?;
    let single = factory::create_student(db).await?;
    factory::create_phone(db, single.id).await?;
    factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let with: Vec<i32> = repo.with_phones().await?.iter().map(|s| s.id).collect();
    let without: Vec<i32> = repo.without_phones().await?.iter().map(|s| s.id).collect();
    let all: Vec<i32> = repo.get_all().await?.iter().map(|s| s.id).collect();

    assert!(with.iter().all(|id| !without.contains(id)));
    let mut union: Vec<i32> = with.into_iter().chain(without).collect();
    union.sort();
    assert_eq!(union, all);

    Ok(())
}
