use hrm_macros::model;

#[model(entity = Education, filters = ["id", "name", "id"])]
struct EducationModel;

fn main() {}
