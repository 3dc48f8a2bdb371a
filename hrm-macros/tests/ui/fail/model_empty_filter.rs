use hrm_macros::model;

#[model(entity = Education, filters = ["id", ""])]
struct EducationModel;

fn main() {}
