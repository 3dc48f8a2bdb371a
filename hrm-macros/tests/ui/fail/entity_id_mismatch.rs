use hrm_macros::entity;

#[entity(id = i64)]
struct Grade {
    id: u32,
    name: String,
}

fn main() {}
