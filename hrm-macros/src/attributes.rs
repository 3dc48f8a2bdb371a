use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{
    Field, FieldsNamed, GenericArgument, Generics, Ident, LitStr, PathArguments, PathSegment,
    Type,
};

/// 字段级配置属性名：`#[attribute(skip | rename = "..." | kind = "...")]`
pub(crate) const FIELD_ATTR: &str = "attribute";

/// 参与属性访问表的字段
pub(crate) struct AttrField {
    member: Ident,
    name: String,
    kind: &'static str,
    nullable: bool,
}

/// #[derive(Attributes)] 实现
pub(crate) fn derive(input: syn::DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        syn::Data::Struct(s) => match &s.fields {
            syn::Fields::Named(f) => f,
            _ => {
                return Err(syn::Error::new(
                    s.fields.span(),
                    "#[derive(Attributes)] only supports named-field struct",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "#[derive(Attributes)] only supports struct",
            ));
        }
    };

    let collected = collect_fields(fields)?;
    Ok(expand_impl(&input.ident, &input.generics, &collected))
}

/// 收集字段并解析 `#[attribute(...)]` 配置；重复的属性名报错
pub(crate) fn collect_fields(fields: &FieldsNamed) -> syn::Result<Vec<AttrField>> {
    let mut out: Vec<AttrField> = Vec::new();

    for field in fields.named.iter() {
        let Some(member) = field.ident.clone() else {
            continue;
        };
        let opts = parse_field_options(field)?;
        if opts.skip {
            continue;
        }

        let name = match opts.rename {
            Some(lit) => lit.value(),
            None => member.to_string(),
        };
        if out.iter().any(|f| f.name == name) {
            return Err(syn::Error::new(
                field.span(),
                format!("duplicate attribute name '{name}'"),
            ));
        }

        let (inferred, nullable) = infer_kind(&field.ty);
        out.push(AttrField {
            member,
            name,
            kind: opts.kind.unwrap_or(inferred),
            nullable,
        });
    }

    Ok(out)
}

/// 移除字段上的 `#[attribute(...)]`（属性宏场景下没有 derive helper 注册）
pub(crate) fn strip_field_attrs(fields: &mut FieldsNamed) {
    for field in fields.named.iter_mut() {
        field.attrs.retain(|a| !a.path().is_ident(FIELD_ATTR));
    }
}

/// 生成 `::hrm_domain::attribute::Attributes` 实现
pub(crate) fn expand_impl(ident: &Ident, generics: &Generics, fields: &[AttrField]) -> TokenStream2 {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let entity_name = ident.to_string();

    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();

    let type_arms = fields.iter().map(|f| {
        let name = &f.name;
        let kind = format_ident!("{}", f.kind);
        let nullable = f.nullable;
        quote! {
            #name => ::std::option::Option::Some(::hrm_domain::attribute::AttributeType::new(
                ::hrm_domain::attribute::AttributeKind::#kind,
                #nullable,
            ))
        }
    });

    let read_arms = fields.iter().map(|f| {
        let name = &f.name;
        let member = &f.member;
        quote! { #name => ::hrm_domain::attribute::to_attribute(&self.#member) }
    });

    quote! {
        impl #impl_generics ::hrm_domain::attribute::Attributes for #ident #ty_generics #where_clause {
            const ENTITY: &'static str = #entity_name;

            fn attribute_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn attribute_type(
                name: &str,
            ) -> ::std::option::Option<::hrm_domain::attribute::AttributeType> {
                match name {
                    #(#type_arms,)*
                    _ => ::std::option::Option::None,
                }
            }

            fn read_attribute(
                &self,
                name: &str,
            ) -> ::hrm_domain::error::DomainResult<::hrm_domain::attribute::Value> {
                match name {
                    #(#read_arms,)*
                    _ => ::std::result::Result::Err(
                        ::hrm_domain::attribute::unknown_attribute::<Self>(name),
                    ),
                }
            }
        }
    }
}

// -------- parsing --------

#[derive(Default)]
struct FieldOptions {
    skip: bool,
    rename: Option<LitStr>,
    kind: Option<&'static str>,
}

fn parse_field_options(field: &Field) -> syn::Result<FieldOptions> {
    let mut opts = FieldOptions::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident(FIELD_ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                opts.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                if opts.rename.is_some() {
                    return Err(meta.error("duplicate key 'rename' in attribute"));
                }
                opts.rename = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("kind") {
                if opts.kind.is_some() {
                    return Err(meta.error("duplicate key 'kind' in attribute"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                opts.kind = Some(parse_kind(&lit)?);
                Ok(())
            } else {
                Err(meta.error("unknown key; expected 'skip' | 'rename' | 'kind'"))
            }
        })?;
    }

    Ok(opts)
}

fn parse_kind(lit: &LitStr) -> syn::Result<&'static str> {
    match lit.value().as_str() {
        "integer" => Ok("Integer"),
        "number" => Ok("Number"),
        "string" => Ok("String"),
        "boolean" => Ok("Boolean"),
        "array" => Ok("Array"),
        "object" => Ok("Object"),
        _ => Err(syn::Error::new(
            lit.span(),
            "expected one of 'integer' | 'number' | 'string' | 'boolean' | 'array' | 'object'",
        )),
    }
}

/// 由 Rust 字段类型推断 JSON 类型；`Option<T>` 视为可空
pub(crate) fn infer_kind(ty: &Type) -> (&'static str, bool) {
    match ty {
        Type::Reference(r) => infer_kind(&r.elem),
        Type::Paren(p) => infer_kind(&p.elem),
        Type::Group(g) => infer_kind(&g.elem),
        Type::Array(_) | Type::Slice(_) | Type::Tuple(_) => ("Array", false),
        Type::Path(p) => {
            let Some(last) = p.path.segments.last() else {
                return ("Object", false);
            };
            match last.ident.to_string().as_str() {
                "Option" => {
                    let (kind, _) = first_type_arg(last)
                        .map(infer_kind)
                        .unwrap_or(("Object", false));
                    (kind, true)
                }
                "Box" | "Rc" | "Arc" | "Cow" => first_type_arg(last)
                    .map(infer_kind)
                    .unwrap_or(("Object", false)),
                "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
                | "u128" | "usize" => ("Integer", false),
                "f32" | "f64" => ("Number", false),
                "bool" => ("Boolean", false),
                "String" | "str" | "char" | "NaiveDate" | "NaiveDateTime" | "DateTime"
                | "Uuid" => ("String", false),
                "Vec" | "VecDeque" | "HashSet" | "BTreeSet" => ("Array", false),
                _ => ("Object", false),
            }
        }
        _ => ("Object", false),
    }
}

fn first_type_arg(seg: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    args.args.iter().find_map(|a| match a {
        GenericArgument::Type(t) => Some(t),
        _ => None,
    })
}
