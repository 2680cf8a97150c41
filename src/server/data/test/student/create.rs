use super::*;

/// Tests creating a student.
///
/// Verifies that the repository inserts the student with the given columns
/// and an initial version of 0.
///
/// Expected: Ok with student created at version 0
#[tokio::test]
async fn creates_student_at_version_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(StudentFields {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await?;

    assert_eq!(student.first_name, "Ada");
    assert_eq!(student.last_name, "Lovelace");
    assert_eq!(student.email, "ada@example.com");
    assert_eq!(student.version, 0);

    let stored = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(student));

    Ok(())
}
