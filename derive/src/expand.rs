use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DataStruct, DeriveInput, Error, Fields, Ident, Result, Type};

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    if let Some(param) = input.generics.params.first() {
        return Err(Error::new_spanned(
            param,
            "`#[derive(Inspect)]` does not support generic types",
        ));
    }

    match &input.data {
        Data::Struct(data) => expand_struct(input, data),
        Data::Enum(data) => expand_enum(input, data),
        Data::Union(data) => Err(Error::new_spanned(
            data.union_token,
            "`#[derive(Inspect)]` does not support unions",
        )),
    }
}

// -----------------------------------------------------------------------------
// Structs

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> Result<TokenStream> {
    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(
            &input.ident,
            "`#[derive(Inspect)]` requires named fields; \
             tuple and unit structs have no printable members",
        ));
    };

    let ident = &input.ident;
    let name = ident.to_string();

    let field_idents: Vec<&Ident> = fields
        .named
        .iter()
        .map(|field| {
            field
                .ident
                .as_ref()
                .expect("named fields always carry identifiers")
        })
        .collect();
    let field_names: Vec<String> = field_idents.iter().map(ToString::to_string).collect();
    let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
    let indices: Vec<usize> = (0..field_idents.len()).collect();

    Ok(quote! {
        impl ::objprint::Inspect for #ident {
            #[inline]
            fn type_name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#name)
            }

            #[inline]
            fn classify(&self) -> ::objprint::ValueRef<'_> {
                ::objprint::ValueRef::Struct(self)
            }
        }

        impl ::objprint::value::StructValue for #ident {
            #[inline]
            fn descriptors(&self) -> &'static [::objprint::info::MemberDescriptor] {
                <Self as ::objprint::info::Members>::members()
            }

            fn member_at(
                &self,
                index: usize,
            ) -> ::std::option::Option<&dyn ::objprint::Inspect> {
                match index {
                    #( #indices => ::std::option::Option::Some(&self.#field_idents), )*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::objprint::info::Members for #ident {
            fn members() -> &'static [::objprint::info::MemberDescriptor] {
                static MEMBERS: &[::objprint::info::MemberDescriptor] = &[
                    #( ::objprint::info::MemberDescriptor::new::<#field_types>(#field_names), )*
                ];
                MEMBERS
            }
        }
    })
}

// -----------------------------------------------------------------------------
// Enums

fn expand_enum(input: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    let mut variant_idents = Vec::with_capacity(data.variants.len());
    let mut variant_names = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                &variant.ident,
                "`#[derive(Inspect)]` supports only unit variants; \
                 variants with fields are not atomic values",
            ));
        }
        variant_idents.push(&variant.ident);
        variant_names.push(variant.ident.to_string());
    }

    let ident = &input.ident;
    let name = ident.to_string();

    Ok(quote! {
        impl ::objprint::Inspect for #ident {
            #[inline]
            fn type_name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#name)
            }

            #[inline]
            fn classify(&self) -> ::objprint::ValueRef<'_> {
                ::objprint::ValueRef::Atom(self)
            }
        }

        impl ::objprint::value::AtomValue for #ident {
            fn literal(&self) -> ::std::string::String {
                ::std::string::String::from(match *self {
                    #( Self::#variant_idents => #variant_names, )*
                })
            }
        }
    })
}
