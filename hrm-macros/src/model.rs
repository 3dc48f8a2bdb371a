use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Expr, ExprArray, Ident, Item, LitStr, Result, Token, Type, parse::Parse, parse::ParseStream,
    parse_macro_input,
};

/// #[model] 宏实现
/// - 仅用于单元结构体：`pub struct EducationModel;`
/// - 展开为 `pub struct EducationModel<'a> { entity: &'a Education }` 与构造函数 `new`
/// - 自动实现 `::hrm_domain::model::Normalizable`
/// - 参数：`#[model(entity = Type, filters = ["id", "name"], schema = "Admin-EducationModel")]`；
///   - `entity`、`filters` 必填；`schema` 默认为结构体名
///   - `filters` 中的重复字段或空字段名在编译期报错
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ModelAttrConfig);
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[model] only on struct")
                .to_compile_error()
                .into();
        }
    };

    if !matches!(st.fields, syn::Fields::Unit) || !st.generics.params.is_empty() {
        return syn::Error::new(
            st.span(),
            "#[model] requires a unit struct without generics, e.g., struct XxxModel;",
        )
        .to_compile_error()
        .into();
    }

    let Some(entity_ty) = cfg.entity else {
        return syn::Error::new(st.ident.span(), "missing required key 'entity' in #[model]")
            .to_compile_error()
            .into();
    };
    let Some(filters) = cfg.filters else {
        return syn::Error::new(st.ident.span(), "missing required key 'filters' in #[model]")
            .to_compile_error()
            .into();
    };

    let attrs = &st.attrs;
    let vis = &st.vis;
    let ident = &st.ident;
    let schema = cfg
        .schema
        .map(|lit| lit.value())
        .unwrap_or_else(|| ident.to_string());

    let expanded = quote! {
        #(#attrs)*
        #vis struct #ident<'a> {
            entity: &'a #entity_ty,
        }

        impl<'a> #ident<'a> {
            /// 绑定实体实例
            pub fn new(entity: &'a #entity_ty) -> Self {
                Self { entity }
            }
        }

        impl<'a> ::hrm_domain::model::Normalizable for #ident<'a> {
            type Entity = #entity_ty;

            const SCHEMA: &'static str = #schema;

            fn filters() -> &'static [&'static str] {
                &[#(#filters),*]
            }

            fn entity(&self) -> &Self::Entity {
                self.entity
            }
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct ModelAttrConfig {
    entity: Option<Type>,
    filters: Option<Vec<LitStr>>,
    schema: Option<LitStr>,
}

impl Parse for ModelAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = ModelAttrConfig {
            entity: None,
            filters: None,
            schema: None,
        };

        let pairs: Punctuated<ModelAttrKv, Token![,]> =
            Punctuated::<ModelAttrKv, Token![,]>::parse_terminated(input)?;

        for kv in pairs.into_iter() {
            match kv {
                ModelAttrKv::Entity(key, ty) => {
                    if cfg.entity.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'entity' in attribute",
                        ));
                    }
                    cfg.entity = Some(*ty);
                }
                ModelAttrKv::Filters(key, arr) => {
                    if cfg.filters.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'filters' in attribute",
                        ));
                    }
                    cfg.filters = Some(parse_filters(&arr)?);
                }
                ModelAttrKv::Schema(key, lit) => {
                    if cfg.schema.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'schema' in attribute",
                        ));
                    }
                    cfg.schema = Some(lit);
                }
            }
        }

        Ok(cfg)
    }
}

enum ModelAttrKv {
    Entity(Ident, Box<Type>),
    Filters(Ident, ExprArray),
    Schema(Ident, LitStr),
}

impl Parse for ModelAttrKv {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "entity" {
            Ok(ModelAttrKv::Entity(key, Box::new(input.parse()?)))
        } else if key == "filters" {
            Ok(ModelAttrKv::Filters(key, input.parse()?))
        } else if key == "schema" {
            Ok(ModelAttrKv::Schema(key, input.parse()?))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key; expected 'entity' | 'filters' | 'schema'",
            ))
        }
    }
}

// 字段列表只接受字符串字面量，保持声明顺序，拒绝空名与重复
fn parse_filters(arr: &ExprArray) -> Result<Vec<LitStr>> {
    let mut out: Vec<LitStr> = Vec::with_capacity(arr.elems.len());
    for elem in arr.elems.iter() {
        let lit = match elem {
            Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) => lit.clone(),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "expected string literal in 'filters'",
                ));
            }
        };
        let value = lit.value();
        if value.is_empty() {
            return Err(syn::Error::new(lit.span(), "empty field name in 'filters'"));
        }
        if out.iter().any(|l| l.value() == value) {
            return Err(syn::Error::new(
                lit.span(),
                format!("duplicate field '{value}' in 'filters'"),
            ));
        }
        out.push(lit);
    }
    Ok(out)
}
