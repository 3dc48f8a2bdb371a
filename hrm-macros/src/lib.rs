//! HRM 过程宏（hrm-macros）
//!
//! 在编译期为实体生成属性访问表、为 DTO 模型生成归一化实现，
//! 避免运行时按字符串反射读取字段。
//!
use proc_macro::TokenStream;
use syn::parse_macro_input;

mod attributes;
mod entity;
mod field_utils;
mod model;
mod utils;

/// 实体宏
/// - 追加字段：`id: IdType`（若缺失）并置于字段最前
/// - 合并派生：Debug（可通过 `debug = false` 关闭）、Clone、Default、Serialize、Deserialize
/// - 自动实现 `::hrm_domain::entity::Entity` 与 `::hrm_domain::attribute::Attributes`
/// - 支持参数：`#[entity(id = IdType)]`，默认 `i64`；已声明的 `id` 字段类型优先
/// - 字段可使用 `#[attribute(skip | rename = "..." | kind = "...")]` 调整属性访问表
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 属性访问表派生宏
///
/// 为具名字段结构体实现 `::hrm_domain::attribute::Attributes`：
/// - 属性名默认取字段名，按声明顺序排列；
/// - 属性类型由字段类型推断（`Option<T>` 视为可空），可用 `kind = "..."` 覆写；
/// - `#[attribute(skip)]` 的字段不可被任何模型读取。
#[proc_macro_derive(Attributes, attributes(attribute))]
pub fn derive_attributes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    attributes::derive(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// DTO 模型宏
///
/// ```ignore
/// #[model(entity = Education, filters = ["id", "name"], schema = "Admin-EducationModel")]
/// pub struct EducationModel;
///
/// let dto = EducationModel::new(&education).normalize()?;
/// ```
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model::expand(attr, item)
}
