use super::*;

/// Tests finding students by project name.
///
/// Verifies that only students linked to a project with the given name are
/// returned, ordered by id.
///
/// Expected: Ok with the two linked students
#[tokio::test]
async fn finds_students_linked_to_named_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let unlinked = factory::create_student(db).await?;
    let compiler = factory::project::ProjectFactory::new(db)
        .name("Compiler")
        .build()
        .await?;
    let other = factory::project::ProjectFactory::new(db)
        .name("Kernel")
        .build()
        .await?;
    factory::link_project(db, second.id, compiler.id).await?;
    factory::link_project(db, first.id, compiler.id).await?;
    factory::link_project(db, unlinked.id, other.id).await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_project_name("Compiler").await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that a student linked to two projects sharing a name is listed once.
///
/// Expected: Ok with a single entry for the student
#[tokio::test]
async fn lists_each_student_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    for _ in 0..2 {
        let project = factory::project::ProjectFactory::new(db)
            .name("Compiler")
            .build()
            .await?;
        factory::link_project(db, student.id, project.id).await?;
    }

    let repo = StudentRepository::new(db);
    let students = repo.find_by_project_name("Compiler").await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student.id);

    Ok(())
}

/// Tests searching for a project name nobody is linked to.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_student_graph(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_project_name("Nonexistent").await?;

    assert!(students.is_empty());

    Ok(())
}
