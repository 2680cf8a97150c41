use super::*;

/// Tests loading a student with all of its associations.
///
/// Verifies that the address, both phones (ordered by id) and the linked
/// project are returned alongside the student.
///
/// Expected: Ok(Some) with every association populated
#[tokio::test]
async fn loads_full_student_graph() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, address, phones, project) = factory::create_student_graph(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.get_with_relations(student.id).await?.unwrap();

    assert_eq!(result.student, student);
    assert_eq!(result.address, Some(address));
    assert_eq!(result.phones, phones);
    assert_eq!(result.projects, vec![project]);

    Ok(())
}

/// Tests loading a student with no associations.
///
/// Expected: Ok(Some) with no address and empty collections
#[tokio::test]
async fn loads_student_without_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.get_with_relations(student.id).await?.unwrap();

    assert!(result.address.is_none());
    assert!(result.phones.is_empty());
    assert!(result.projects.is_empty());

    Ok(())
}

/// Tests that another student's associations are not included.
///
/// Expected: Ok(Some) with only the requested student's phones and projects
#[tokio::test]
async fn excludes_other_students_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _, _, _) = factory::create_student_graph(db).await?;
    let (_, _, _, _) = factory::create_student_graph(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.get_with_relations(student.id).await?.unwrap();

    assert_eq!(result.phones.len(), 2);
    assert!(result.phones.iter().all(|p| p.student_id == student.id));
    assert_eq!(result.projects.len(), 1);

    Ok(())
}

/// Tests loading a student that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.get_with_relations(42).await?;

    assert!(result.is_none());

    Ok(())
}
