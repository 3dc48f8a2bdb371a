use syn::{Field, FieldsNamed, Token, Type, Visibility, punctuated::Punctuated};

/// 确保具名字段结构体包含所需字段，并按给定顺序置于最前
/// - required: (字段名, 字段类型) 列表；若已存在则复用原字段定义，否则以 `vis` 可见性新增
/// - 其余字段保持原有相对顺序
pub(crate) fn ensure_leading_fields(
    fields_named: &mut FieldsNamed,
    required: &[(&str, &Type)],
    vis: &Visibility,
) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    for (name, ty) in required.iter() {
        if let Some(existing) = old_named.iter().find(|f| field_is(f, name)) {
            new_named.push(existing.clone());
        } else {
            let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
            new_named.push(syn::parse_quote! { #vis #ident: #ty });
        }
    }

    for f in old_named.into_iter() {
        if !required.iter().any(|(n, _)| field_is(&f, n)) {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;
}

fn field_is(field: &Field, name: &str) -> bool {
    field.ident.as_ref().map(|i| i == name).unwrap_or(false)
}
