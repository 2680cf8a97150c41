use super::*;

/// Tests listing projects with at least one student.
///
/// Verifies that a project shared by two students is listed once.
///
/// Expected: Ok with only the linked project
#[tokio::test]
async fn lists_linked_projects_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let shared = factory::create_project(db).await?;
    factory::create_project(db).await?;
    factory::link_project(db, first.id, shared.id).await?;
    factory::link_project(db, second.id, shared.id).await?;

    let repo = ProjectRepository::new(db);
    let projects = repo.with_students().await?;

    assert_eq!(projects, vec![shared]);

    Ok(())
}

/// Tests listing projects nobody is linked to.
///
/// Verifies that a project becomes unlinked once its only student is removed
/// from it.
///
/// Expected: Ok with both orphaned projects
#[tokio::test]
async fn lists_projects_without_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let orphan = factory::create_project(db).await?;
    let dropped = factory::create_project(db).await?;
    let kept = factory::create_project(db).await?;
    factory::link_project(db, student.id, dropped.id).await?;
    factory::link_project(db, student.id, kept.id).await?;

    let repo = ProjectRepository::new(db);
    repo.unlink_all(student.id).await?;
    repo.link(student.id, kept.id).await?;

    let projects = repo.without_students().await?;

    assert_eq!(projects, vec![orphan, dropped]);

    Ok(())
}
