use hrm_domain::attribute::{AttributeKind, Attributes};
use hrm_macros::Attributes;
use serde_json::{Value, json};

#[derive(Attributes)]
struct Employee {
    emp_number: i64,
    first_name: String,
    middle_name: Option<String>,
    #[attribute(kind = "string")]
    joined_date: Vec<u8>,
    salary: f64,
    terminated: bool,
    #[attribute(skip)]
    ssn: String,
}

fn main() {
    let emp = Employee {
        emp_number: 1,
        first_name: "Odis".to_string(),
        middle_name: None,
        joined_date: vec![],
        salary: 1000.5,
        terminated: false,
        ssn: "secret".to_string(),
    };

    assert_eq!(Employee::ENTITY, "Employee");
    assert_eq!(
        Employee::attribute_names(),
        &["emp_number", "first_name", "middle_name", "joined_date", "salary", "terminated"]
    );
    assert!(!Employee::has_attribute("ssn"));
    assert!(emp.read_attribute("ssn").is_err());
    assert_eq!(emp.read_attribute("middle_name").unwrap(), Value::Null);
    assert_eq!(emp.read_attribute("salary").unwrap(), json!(1000.5));
    assert_eq!(emp.ssn, "secret");

    let middle = Employee::attribute_type("middle_name").unwrap();
    assert_eq!(middle.kind, AttributeKind::String);
    assert!(middle.nullable);
    assert_eq!(
        Employee::attribute_type("joined_date").unwrap().kind,
        AttributeKind::String
    );
    assert_eq!(
        Employee::attribute_type("terminated").unwrap().kind,
        AttributeKind::Boolean
    );
}
