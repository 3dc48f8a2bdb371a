use crate::attributes::{collect_fields, expand_impl, strip_field_attrs};
use crate::field_utils::ensure_leading_fields;
use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    FieldsNamed, Item, ItemStruct, Result, Token, Type, parse::Parse, parse::ParseStream,
    parse_macro_input,
};

/// #[entity] 宏实现
/// - 若缺失则追加字段 `id: IdType`（可见性与结构体一致），并置于字段最前
/// - 已声明 `id` 字段时以其类型作为标识类型
/// - 自动实现 `::hrm_domain::entity::Entity`（id）与 `::hrm_domain::attribute::Attributes`
/// - 支持参数：`#[entity(id = IdType, debug = true|false)]`；
///   - `id` 默认 `i64`
///   - `debug` 默认 `true`（派生 Debug）。当为 `false` 时不派生 Debug，便于用户自定义实现。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let vis = st.vis.clone();

    // 仅支持具名字段结构体
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let id_type = match resolve_id_type(cfg.id_ty, fields_named) {
        Ok(ty) => ty,
        Err(err) => return err.to_compile_error().into(),
    };
    ensure_leading_fields(fields_named, &[("id", &id_type)], &vis);

    let attr_fields = match collect_fields(fields_named) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };
    strip_field_attrs(fields_named);

    // 合并/规范 derive：默认添加 Debug（可通过 debug=false 关闭）、Clone、Default、Serialize、Deserialize
    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Default),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let out_struct = ItemStruct { ..st };

    let ident = &out_struct.ident;
    let generics = out_struct.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let attributes_impl = expand_impl(ident, &generics, &attr_fields);

    let expanded = quote! {
        #out_struct

        impl #impl_generics ::hrm_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn id(&self) -> &Self::Id { &self.id }
        }

        #attributes_impl
    };

    TokenStream::from(expanded)
}

/// 已声明的 id 字段决定标识类型；与 `id = ...` 参数不一致时报错
fn resolve_id_type(arg: Option<Type>, fields: &FieldsNamed) -> Result<Type> {
    let declared = fields
        .named
        .iter()
        .find(|f| f.ident.as_ref().is_some_and(|i| i == "id"))
        .map(|f| f.ty.clone());

    match (arg, declared) {
        (Some(arg), Some(field)) if arg != field => Err(syn::Error::new(
            field.span(),
            "type of field `id` does not match `#[entity(id = ...)]`",
        )),
        (Some(arg), _) => Ok(arg),
        (None, Some(field)) => Ok(field),
        (None, None) => Ok(syn::parse_quote! { i64 }),
    }
}

// -------- parsing --------

struct EntityAttrConfig {
    id_ty: Option<Type>,
    derive_debug: Option<bool>,
}

impl Parse for EntityAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut id_ty: Option<Type> = None;
        let mut derive_debug: Option<bool> = None;

        if input.is_empty() {
            return Ok(Self {
                id_ty,
                derive_debug,
            });
        }

        let elems: Punctuated<EntityAttrElem, Token![,]> =
            Punctuated::<EntityAttrElem, Token![,]>::parse_terminated(input)?;

        for elem in elems.into_iter() {
            match elem {
                EntityAttrElem::Id(ty) => {
                    if id_ty.is_some() {
                        return Err(syn::Error::new(
                            ty.span(),
                            "duplicate key 'id' in attribute",
                        ));
                    }
                    id_ty = Some(*ty);
                }
                EntityAttrElem::Debug(b) => {
                    if derive_debug.is_some() {
                        return Err(syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    derive_debug = Some(b);
                }
            }
        }

        Ok(Self {
            id_ty,
            derive_debug,
        })
    }
}

enum EntityAttrElem {
    Id(Box<Type>),
    Debug(bool),
}

impl Parse for EntityAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        if key == "id" {
            let _eq: Token![=] = input.parse()?;
            let ty: Type = input.parse()?;
            Ok(EntityAttrElem::Id(Box::new(ty)))
        } else if key == "debug" {
            let _eq: Token![=] = input.parse()?;
            let expr: syn::Expr = input.parse()?;
            match expr {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => Ok(EntityAttrElem::Debug(b.value())),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected boolean literal for 'debug'",
                )),
            }
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'id' or 'debug'",
            ))
        }
    }
}
