use super::*;

/// Tests deleting a student with a full graph.
///
/// Verifies that the phones, the address and the project links are removed
/// together with the student while the project itself survives.
///
/// Expected: Ok(true) with the project still present and unlinked
#[tokio::test]
async fn deletes_student_and_owned_rows_but_keeps_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _, _, project) = factory::create_student_graph(db).await?;

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(student.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(student.id).await?.is_none());

    let phones = entity::prelude::Phone::find()
        .filter(entity::phone::Column::StudentId.eq(student.id))
        .count(db)
        .await?;
    assert_eq!(phones, 0);

    let addresses = entity::prelude::Address::find()
        .filter(entity::address::Column::StudentId.eq(student.id))
        .count(db)
        .await?;
    assert_eq!(addresses, 0);

    let links = entity::prelude::StudentProject::find()
        .filter(entity::student_project::Column::ProjectId.eq(project.id))
        .count(db)
        .await?;
    assert_eq!(links, 0);

    let stored_project = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?;
    assert_eq!(stored_project, Some(project));

    Ok(())
}

/// Tests that deleting one student leaves another student's rows alone.
///
/// Expected: Ok(true) with the other student's phones intact
#[tokio::test]
async fn leaves_other_students_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _, _, _) = factory::create_student_graph(db).await?;
    let (other, _, _, _) = factory::create_student_graph(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(student.id).await?;

    let phones = entity::prelude::Phone::find()
        .filter(entity::phone::Column::StudentId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(phones, 2);
    assert!(repo.find_by_id(other.id).await?.is_some());

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(7).await?;

    assert!(!deleted);

    Ok(())
}
