use hrm_domain::model::Normalizable;
use hrm_macros::{entity, model};
use serde_json::json;

#[entity]
pub struct Education {
    name: String,
    created_by: String,
}

/// 学历（管理端）
#[model(entity = Education, filters = ["id", "name"], schema = "Admin-EducationModel")]
#[derive(Clone, Copy)]
pub struct EducationModel;

#[model(entity = Education, filters = ["id"])]
pub struct EducationIdModel;

fn main() {
    let e = Education {
        id: 7,
        name: "BSc".to_string(),
        created_by: "admin".to_string(),
    };

    let model = EducationModel::new(&e);
    assert!(EducationModel::verify().is_ok());
    assert_eq!(EducationModel::SCHEMA, "Admin-EducationModel");
    assert_eq!(
        model.normalize().unwrap().into_value(),
        json!({"id": 7, "name": "BSc"})
    );
    let copied = model;
    assert_eq!(copied.normalize().unwrap(), model.normalize().unwrap());

    assert_eq!(EducationIdModel::SCHEMA, "EducationIdModel");
    assert_eq!(
        EducationIdModel::new(&e).normalize().unwrap().into_value(),
        json!({"id": 7})
    );
}
