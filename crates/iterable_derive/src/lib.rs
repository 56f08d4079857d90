use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DataStruct, DeriveInput, Field, Fields, Generics, Index, Member, Path,
    parse_macro_input, parse_quote,
};

/// Implements `iterable::Iterable` for a struct, or only `iterable::Storage`
/// when its storage member is forwarded.
///
/// A field named `data`, or marked `#[iterable(storage)]`, selects the
/// delegation path: `begin`/`end` forward to that field, which must itself be
/// `Iterable`. Without such a field the struct must implement
/// `iterable::Indexed` and cursors are synthesized over it.
/// `#[iterable(contiguous)]` on the struct picks the contiguous category for
/// synthesized cursors.
///
/// A field marked `#[iterable(forward)]` is a storage member of any kind
/// (`BTreeSet`, `LinkedList`, ...): `Storage` is implemented and `&Struct`
/// iterates through the member's own iterator, without cursors.
///
/// Also implements `IntoIterator` for `&Struct`.
#[proc_macro_derive(Iterable, attributes(iterable))]
pub fn derive_iterable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(DataStruct { fields, .. }) => fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Iterable can only be derived for structs",
            ));
        }
    };

    let contiguous = struct_category(input)?;

    let mut ref_generics = input.generics.clone();
    ref_generics.params.insert(0, parse_quote!('__iterable));

    let storage = storage_field(fields)?;
    if contiguous && storage.is_some() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[iterable(contiguous)] only applies to synthesized cursors, \
             a storage field brings its own",
        ));
    }

    let (host_impls, into_iter) = match storage {
        Some(StorageField {
            member,
            field,
            forward,
        }) => {
            let target = &field.ty;

            let storage_impls = quote! {
                impl #impl_generics ::iterable::Storage for #struct_name #ty_generics #where_clause {
                    type Target = #target;

                    #[inline]
                    fn storage(&self) -> &Self::Target {
                        &self.#member
                    }
                }

                impl #impl_generics ::iterable::StorageMut for #struct_name #ty_generics #where_clause {
                    #[inline]
                    fn storage_mut(&mut self) -> &mut Self::Target {
                        &mut self.#member
                    }
                }
            };

            if forward {
                ref_generics
                    .make_where_clause()
                    .predicates
                    .push(parse_quote!(&'__iterable #target: ::core::iter::IntoIterator));
                let (ref_impl_generics, _, ref_where_clause) = ref_generics.split_for_impl();

                let into_iter = quote! {
                    impl #ref_impl_generics ::core::iter::IntoIterator for &'__iterable #struct_name #ty_generics #ref_where_clause {
                        type Item = <&'__iterable #target as ::core::iter::IntoIterator>::Item;
                        type IntoIter = <&'__iterable #target as ::core::iter::IntoIterator>::IntoIter;

                        #[inline]
                        fn into_iter(self) -> Self::IntoIter {
                            ::core::iter::IntoIterator::into_iter(&self.#member)
                        }
                    }
                };

                (storage_impls, into_iter)
            } else {
                let host_impls = quote! {
                    #storage_impls

                    impl #impl_generics ::iterable::Iterable for #struct_name #ty_generics #where_clause {
                        type Strategy = ::iterable::Delegate;
                    }
                };

                (host_impls, elements_into_iter(input, &ref_generics))
            }
        }
        None => {
            let category: Path = if contiguous {
                parse_quote!(::iterable::Contiguous)
            } else {
                parse_quote!(::iterable::Ordinary)
            };

            let host_impls = quote! {
                impl #impl_generics ::iterable::Iterable for #struct_name #ty_generics #where_clause {
                    type Strategy = ::iterable::Synthesize<#category>;
                }
            };

            (host_impls, elements_into_iter(input, &ref_generics))
        }
    };

    Ok(quote! {
        #host_impls

        #into_iter
    })
}

/// `IntoIterator for &Struct` over the cursor range `[begin, end)`.
fn elements_into_iter(input: &DeriveInput, ref_generics: &Generics) -> TokenStream2 {
    let struct_name = &input.ident;
    let (_, ty_generics, where_clause) = input.generics.split_for_impl();
    let (ref_impl_generics, _, _) = ref_generics.split_for_impl();

    quote! {
        impl #ref_impl_generics ::core::iter::IntoIterator for &'__iterable #struct_name #ty_generics #where_clause {
            type Item = ::iterable::ItemOf<'__iterable, #struct_name #ty_generics>;
            type IntoIter = ::iterable::IterOf<'__iterable, #struct_name #ty_generics>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                ::iterable::Iterable::elements(self)
            }
        }
    }
}

/// Whether the struct asks for contiguous cursors.
fn struct_category(input: &DeriveInput) -> syn::Result<bool> {
    let mut contiguous = false;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("iterable")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("contiguous") {
                contiguous = true;
                Ok(())
            } else if meta.path.is_ident("ordinary") {
                contiguous = false;
                Ok(())
            } else {
                Err(meta.error("expected `contiguous` or `ordinary`"))
            }
        })?;
    }

    Ok(contiguous)
}

struct StorageField<'a> {
    member: Member,
    field: &'a Field,
    /// Forward the member's own iterator instead of its cursors.
    forward: bool,
}

/// The field `begin`/`end` delegate to, if any.
///
/// An explicit `#[iterable(storage)]` or `#[iterable(forward)]` wins over a
/// field named `data`.
fn storage_field(fields: &Fields) -> syn::Result<Option<StorageField<'_>>> {
    let mut marked = None;
    let mut named_data = None;

    for (i, field) in fields.iter().enumerate() {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        };

        let mut kind = None;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("iterable")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("storage") {
                    kind = Some(false);
                    Ok(())
                } else if meta.path.is_ident("forward") {
                    kind = Some(true);
                    Ok(())
                } else {
                    Err(meta.error("expected `storage` or `forward`"))
                }
            })?;
        }

        if let Some(forward) = kind {
            if marked.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked #[iterable(storage)] or #[iterable(forward)]",
                ));
            }
            marked = Some(StorageField {
                member,
                field,
                forward,
            });
        } else if field.ident.as_ref().is_some_and(|ident| ident == "data") {
            named_data = Some(StorageField {
                member,
                field,
                forward: false,
            });
        }
    }

    Ok(marked.or(named_data))
}
