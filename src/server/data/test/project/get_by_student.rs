use super::*;

/// Tests fetching the projects of a student.
///
/// Expected: Ok with the linked projects ordered by id
#[tokio::test]
async fn returns_linked_projects_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let first = factory::create_project(db).await?;
    let unlinked = factory::create_project(db).await?;
    let second = factory::create_project(db).await?;
    factory::link_project(db, student.id, second.id).await?;
    factory::link_project(db, student.id, first.id).await?;

    let repo = ProjectRepository::new(db);
    let projects = repo.get_by_student(student.id).await?;

    assert_eq!(projects, vec![first, second]);
    assert!(!projects.contains(&unlinked));

    Ok(())
}
