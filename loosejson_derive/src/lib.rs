//! Procedural macros used by `loosejson`.
//!
//! The only macro is [`macro@context`], which attaches a formatted message to every error
//! returned from the annotated function:
//!
//! ```rust,ignore
//! #[context("while parsing tag '{}'", tag)]
//! fn parse_tag(cursor: &mut ByteCursor, tag: &str) -> anyhow::Result<()> { /* ... */ }
//! ```

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{ItemFn, ReturnType, parse_macro_input};

/// Wraps the body of a synchronous function returning `anyhow::Result` so that an error leaving
/// it is decorated with `.with_context(|| format!(...))`.
///
/// The message is only formatted when an error occurs. Format arguments may refer to the
/// function's parameters as long as the body does not move them.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as ContextArgs);
	let input = parse_macro_input!(input as ItemFn);
	expand(&args, input).into()
}

fn expand(args: &ContextArgs, mut input: ItemFn) -> TokenStream2 {
	if let Some(asyncness) = &input.sig.asyncness {
		return syn::Error::new_spanned(asyncness, "#[context] does not support async functions").to_compile_error();
	}
	let ReturnType::Type(_, return_type) = &input.sig.output else {
		return syn::Error::new_spanned(&input.sig, "#[context] requires a function returning anyhow::Result")
			.to_compile_error();
	};

	let body = &input.block;
	let message = &args.message;
	let values = &args.values;
	let wrapped = quote! {{
		let result: #return_type = (|| #body)();
		::anyhow::Context::with_context(result, || format!(#message #(, #values)*))
	}};
	input.block = Box::new(syn::parse_quote!(#wrapped));

	input.into_token_stream()
}
