use hrm_domain::attribute::{AttributeKind, AttributeType, Attributes};
use hrm_domain::entity::Entity;
use hrm_macros::entity;
use serde_json::json;

#[entity]
struct Education {
    name: String,
}

#[entity(id = String, debug = false)]
struct Nationality {
    #[attribute(rename = "title")]
    name: String,
    #[attribute(skip)]
    legacy_code: Option<String>,
}

#[entity]
struct Grade {
    name: String,
    id: u32,
}

impl std::fmt::Debug for Nationality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nationality({})", self.id)
    }
}

fn main() {
    // 默认 id 为 i64 并位于最前
    let e = Education {
        id: 7,
        name: "BSc".to_string(),
    };
    assert_eq!(*e.id(), 7);
    assert_eq!(Education::attribute_names(), &["id", "name"]);
    assert_eq!(e.read_attribute("name").unwrap(), json!("BSc"));
    assert_eq!(
        Education::attribute_type("id"),
        Some(AttributeType::new(AttributeKind::Integer, false))
    );
    let _ = format!("{:?}", e.clone());
    let _ = Education::default();

    // 自定义 id 类型、重命名与跳过
    let n = Nationality {
        id: "CN".to_string(),
        name: "Chinese".to_string(),
        legacy_code: Some("086".to_string()),
    };
    assert_eq!(n.id(), "CN");
    assert_eq!(Nationality::attribute_names(), &["id", "title"]);
    assert!(n.read_attribute("legacy_code").is_err());
    assert_eq!(format!("{:?}", n), "Nationality(CN)");

    // 已声明的 id 字段类型即标识类型
    let g = Grade {
        id: 3,
        name: "A".to_string(),
    };
    let id: &u32 = g.id();
    assert_eq!(*id, 3);
    assert_eq!(Grade::attribute_names(), &["id", "name"]);
}
