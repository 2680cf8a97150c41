use super::*;

/// Tests renaming a project at the expected version.
///
/// Expected: Ok(Some) with the new name and version incremented
#[tokio::test]
async fn renames_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .name("Compiler")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(project.id, project.version, Some("Linker".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("Linker"));
    assert_eq!(updated.version, project.version + 1);

    Ok(())
}

/// Tests renaming a project with a stale version.
///
/// Expected: Ok(None) and the name unchanged
#[tokio::test]
async fn skips_update_at_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .name("Compiler")
        .version(2)
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(project.id, 0, Some("Linker".to_string()))
        .await?;

    assert!(updated.is_none());
    assert_eq!(repo.find_by_id(project.id).await?, Some(project));

    Ok(())
}
