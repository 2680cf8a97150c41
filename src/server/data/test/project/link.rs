use super::*;

/// Tests linking a student to a project.
///
/// Expected: Ok and the link is reported by is_linked
#[tokio::test]
async fn links_student_to_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let project = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    assert!(!repo.is_linked(student.id, project.id).await?);

    repo.link(student.id, project.id).await?;

    assert!(repo.is_linked(student.id, project.id).await?);

    Ok(())
}

/// Tests linking the same pair twice.
///
/// Expected: Err from the composite primary key
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let project = factory::create_project(db).await?;
    factory::link_project(db, student.id, project.id).await?;

    let repo = ProjectRepository::new(db);
    let result = repo.link(student.id, project.id).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests removing every link of a student.
///
/// Verifies that the junction rows go away while the projects remain, and
/// that links of other students are kept.
///
/// Expected: Ok(2) with both projects still present
#[tokio::test]
async fn unlinks_all_projects_of_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    let first = factory::create_project(db).await?;
    let second = factory::create_project(db).await?;
    factory::link_project(db, student.id, first.id).await?;
    factory::link_project(db, student.id, second.id).await?;
    factory::link_project(db, other.id, first.id).await?;

    let repo = ProjectRepository::new(db);
    let removed = repo.unlink_all(student.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_student(student.id).await?.is_empty());
    assert!(repo.is_linked(other.id, first.id).await?);
    assert!(entity::prelude::Project::find_by_id(first.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Project::find_by_id(second.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
