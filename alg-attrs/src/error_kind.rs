use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
struct ErrorArg {
    tag: Ident,
    value: Expr,
}

impl Parse for ErrorArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let tag = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { tag, value })
    }
}

/// The arguments that can be passed to the `error` attribute.
#[derive(Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
    note: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();
        for ErrorArg { tag, value } in Punctuated::<ErrorArg, Token![,]>::parse_terminated(input)? {
            let slot = match tag.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                "note" => &mut args.note,
                other => return Err(syn::Error::new_spanned(&tag, format!("unknown tag `{}`", other))),
            };
            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&tag, format!("duplicate tag `{}`", tag)));
            }
        }
        Ok(args)
    }
}

/// The target struct to derive `ErrorKind` for.
pub struct ErrorKindTarget {
    input: DeriveInput,
    args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let input: DeriveInput = input.parse()?;
        if !matches!(input.data, Data::Struct(_)) {
            return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
        }

        let mut args = None;
        for attr in &input.attrs {
            if attr.path().is_ident("error") {
                args = Some(attr.parse_args::<ErrorArgs>()?);
            }
        }
        let args = args.unwrap_or_default();
        if args.message.is_none() {
            return Err(syn::Error::new(input.ident.span(), "missing `message` tag in `error` attribute"));
        }

        Ok(Self { input, args })
    }
}

impl ErrorKindTarget {
    /// Creates a `let` statement that destructures `self` into its named fields, so that the
    /// attribute expressions can refer to them directly.
    fn destructure(&self) -> TokenStream2 {
        let Data::Struct(data) = &self.input.data else {
            unreachable!("checked while parsing")
        };
        match &data.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| field.ident.as_ref());
                quote! {
                    #[allow(unused_variables)]
                    let Self { #(#names),* } = self;
                }
            },
            Fields::Unnamed(fields) => quote_spanned! { fields.span() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => quote! {},
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.input.ident;
        let (impl_generics, ty_generics, where_clause) = self.input.generics.split_for_impl();
        let destructure = self.destructure();
        let message = &self.args.message;
        let labels = self.args.labels.as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { Vec::<String>::new() });
        let help = self.args.help.as_ref().map(|help| quote! { builder.set_help(#help); });
        let note = self.args.note.as_ref().map(|note| quote! { builder.set_note(#note); });

        tokens.extend(quote! {
            impl #impl_generics alg_error::ErrorKind for #name #ty_generics #where_clause {
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                fn message(&self) -> String {
                    #destructure
                    ToString::to_string(&(#message))
                }

                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[std::ops::Range<usize>],
                ) -> ariadne::Report<'_, (&'a str, std::ops::Range<usize>)> {
                    #destructure
                    let offset = spans.first().map_or(0, |span| span.start);
                    let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                        .with_message(alg_error::ErrorKind::message(self))
                        .with_labels(
                            #labels
                                .into_iter()
                                .zip(spans.iter())
                                .map(|(label_str, span)| {
                                    let label_str = ToString::to_string(&label_str);
                                    let label = ariadne::Label::new((src_id, span.clone()))
                                        .with_color(alg_error::EXPR);
                                    if label_str.is_empty() {
                                        label
                                    } else {
                                        label.with_message(label_str)
                                    }
                                })
                                .collect::<Vec<_>>()
                        );

                    #help
                    #note
                    builder.finish()
                }
            }
        });
    }
}
