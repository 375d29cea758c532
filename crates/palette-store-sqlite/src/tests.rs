//! Integration tests for `SqliteStore` against an in-memory database.

use palette_core::{
  color::NewColor,
  person::NewPerson,
  store::{ColorStore, PersonStore, StoreError, Violation},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_person(name: &str, color_id: i64) -> NewPerson {
  NewPerson {
    name:     name.into(),
    lastname: "Doe".into(),
    zipcode:  "12345".into(),
    city:     "TestCity".into(),
    color_id,
  }
}

// ─── Colors ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_color() {
  let s = store().await;

  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();
  assert_eq!(rot.name, "rot");

  let fetched = s.get_color(rot.id).await.unwrap();
  assert_eq!(fetched, Some(rot));
}

#[tokio::test]
async fn get_color_missing_returns_none() {
  let s = store().await;
  assert!(s.get_color(404).await.unwrap().is_none());
}

#[tokio::test]
async fn list_colors_in_id_order() {
  let s = store().await;
  let a = s.insert_color(NewColor::new("blau")).await.unwrap();
  let b = s.insert_color(NewColor::new("grün")).await.unwrap();
  let c = s.insert_color(NewColor::new("violett")).await.unwrap();

  let all = s.list_colors().await.unwrap();
  assert_eq!(all, vec![a, b, c]);
}

#[tokio::test]
async fn find_color_by_name_ignores_case() {
  let s = store().await;
  let gruen = s.insert_color(NewColor::new("grün")).await.unwrap();

  assert_eq!(s.find_color_by_name("GRÜN").await.unwrap(), Some(gruen.clone()));
  assert_eq!(s.find_color_by_name("Grün").await.unwrap(), Some(gruen));
  assert!(s.find_color_by_name("gruen").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_color_name_is_unique_violation() {
  let s = store().await;
  s.insert_color(NewColor::new("rot")).await.unwrap();

  let err = s.insert_color(NewColor::new("ROT")).await.unwrap_err();
  assert_eq!(err.violation(), Some(Violation::UniqueName));
  assert_eq!(s.list_colors().await.unwrap().len(), 1);
}

#[tokio::test]
async fn replace_color_overwrites_name() {
  let s = store().await;
  let blau = s.insert_color(NewColor::new("blau")).await.unwrap();

  let replaced = s
    .replace_color(blau.id, NewColor::new("BLAU"))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(replaced.id, blau.id);
  assert_eq!(replaced.name, "BLAU");
  assert_eq!(s.get_color(blau.id).await.unwrap(), Some(replaced));
}

#[tokio::test]
async fn replace_color_onto_other_name_is_unique_violation() {
  let s = store().await;
  let blau = s.insert_color(NewColor::new("blau")).await.unwrap();
  s.insert_color(NewColor::new("grün")).await.unwrap();

  let err = s
    .replace_color(blau.id, NewColor::new("grün"))
    .await
    .unwrap_err();
  assert_eq!(err.violation(), Some(Violation::UniqueName));
}

#[tokio::test]
async fn replace_missing_color_returns_none() {
  let s = store().await;
  let result = s.replace_color(9, NewColor::new("rot")).await.unwrap();
  assert!(result.is_none());
  assert!(s.list_colors().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_color_reports_whether_removed() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();

  assert!(s.delete_color(rot.id).await.unwrap());
  assert!(!s.delete_color(rot.id).await.unwrap());
  assert!(s.get_color(rot.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_referenced_color_is_foreign_key_violation() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();
  s.insert_person(new_person("John", rot.id)).await.unwrap();

  let err = s.delete_color(rot.id).await.unwrap_err();
  assert_eq!(err.violation(), Some(Violation::ForeignKey));
  assert!(s.get_color(rot.id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_referenced_color_reports_foreign_key_code() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();
  s.insert_person(new_person("John", rot.id)).await.unwrap();

  let Error::Database(tokio_rusqlite::Error::Rusqlite(
    rusqlite::Error::SqliteFailure(failure, _),
  )) = s.delete_color(rot.id).await.unwrap_err()
  else {
    panic!("expected an SQLite failure");
  };
  assert_eq!(failure.extended_code, rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY);
}

#[tokio::test]
async fn color_names_differing_only_by_final_sigma_collide() {
  let s = store().await;
  s.insert_color(NewColor::new("ΟΔΟΣ")).await.unwrap();

  let err = s.insert_color(NewColor::new("οδοσ")).await.unwrap_err();
  assert_eq!(err.violation(), Some(Violation::UniqueName));
  assert_eq!(s.list_colors().await.unwrap().len(), 1);

  let found = s.find_color_by_name("οδος").await.unwrap();
  assert_eq!(found.map(|c| c.name), Some("ΟΔΟΣ".to_string()));
}

// ─── Persons ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_person_joins_color() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();

  let john = s.insert_person(new_person("John", rot.id)).await.unwrap();
  assert_eq!(john.name, "John");
  assert_eq!(john.zipcode, "12345");
  assert_eq!(john.color, rot);

  let fetched = s.get_person(john.id).await.unwrap();
  assert_eq!(fetched, Some(john));
}

#[tokio::test]
async fn insert_person_with_missing_color_is_foreign_key_violation() {
  let s = store().await;

  let err = s.insert_person(new_person("John", 77)).await.unwrap_err();
  assert_eq!(err.violation(), Some(Violation::ForeignKey));
  assert!(s.list_persons().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_person_missing_returns_none() {
  let s = store().await;
  assert!(s.get_person(999).await.unwrap().is_none());
}

#[tokio::test]
async fn replace_person_overwrites_all_fields() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();
  let gelb = s.insert_color(NewColor::new("gelb")).await.unwrap();
  let john = s.insert_person(new_person("John", rot.id)).await.unwrap();

  let replacement = NewPerson {
    name:     "Jane".into(),
    lastname: "Roe".into(),
    zipcode:  "98765-432".into(),
    city:     "Elsewhere".into(),
    color_id: gelb.id,
  };
  let replaced = s
    .replace_person(john.id, replacement)
    .await
    .unwrap()
    .unwrap();

  assert_eq!(replaced.id, john.id);
  assert_eq!(replaced.name, "Jane");
  assert_eq!(replaced.lastname, "Roe");
  assert_eq!(replaced.zipcode, "98765-432");
  assert_eq!(replaced.city, "Elsewhere");
  assert_eq!(replaced.color, gelb);
  assert_eq!(s.get_person(john.id).await.unwrap(), Some(replaced));
}

#[tokio::test]
async fn replace_missing_person_returns_none() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();

  let result = s.replace_person(3, new_person("Ghost", rot.id)).await.unwrap();
  assert!(result.is_none());
  assert!(s.list_persons().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_person_reports_whether_removed() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();
  let john = s.insert_person(new_person("John", rot.id)).await.unwrap();

  assert!(s.delete_person(john.id).await.unwrap());
  assert!(!s.delete_person(john.id).await.unwrap());
  assert!(s.get_person(john.id).await.unwrap().is_none());
}

#[tokio::test]
async fn find_persons_by_color_name_matches_current_color() {
  let s = store().await;
  let rot = s.insert_color(NewColor::new("rot")).await.unwrap();
  let blau = s.insert_color(NewColor::new("blau")).await.unwrap();
  let john = s.insert_person(new_person("John", rot.id)).await.unwrap();
  s.insert_person(new_person("Jane", blau.id)).await.unwrap();
  let max = s.insert_person(new_person("Max", rot.id)).await.unwrap();

  let reds = s.find_persons_by_color_name("ROT").await.unwrap();
  assert_eq!(reds, vec![john, max.clone()]);

  // Renaming the color moves the match along with it.
  s.replace_color(rot.id, NewColor::new("karminrot")).await.unwrap();
  assert!(s.find_persons_by_color_name("rot").await.unwrap().is_empty());
  assert_eq!(
    s.find_persons_by_color_name("Karminrot").await.unwrap().len(),
    2
  );

  // Moving a person to another color changes its match.
  s.replace_person(max.id, new_person("Max", blau.id)).await.unwrap();
  let blues = s.find_persons_by_color_name("blau").await.unwrap();
  assert_eq!(blues.len(), 2);
  assert!(blues.iter().any(|p| p.id == max.id));
}

#[tokio::test]
async fn find_persons_by_unknown_color_is_empty() {
  let s = store().await;
  assert!(s.find_persons_by_color_name("purple").await.unwrap().is_empty());
}
