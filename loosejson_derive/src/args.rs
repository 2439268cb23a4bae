use syn::{
	Expr, LitStr, Token,
	parse::{Parse, ParseStream, Result},
	punctuated::Punctuated,
};

/// Arguments of `#[context(...)]`: a format string literal followed by its format arguments.
pub struct ContextArgs {
	pub message: LitStr,
	pub values: Vec<Expr>,
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> Result<Self> {
		let message: LitStr = input.parse()?;
		let values = if input.is_empty() {
			Vec::new()
		} else {
			input.parse::<Token![,]>()?;
			Punctuated::<Expr, Token![,]>::parse_terminated(input)?
				.into_iter()
				.collect()
		};
		Ok(Self { message, values })
	}
}

#[cfg(test)]
mod tests {
	use super::ContextArgs;
	use quote::ToTokens;
	use syn::parse_str;

	#[test]
	fn message_only() {
		let args: ContextArgs = parse_str("\"while parsing a number\"").unwrap();
		assert_eq!(args.message.value(), "while parsing a number");
		assert!(args.values.is_empty());
	}

	#[test]
	fn message_with_values() {
		let args: ContextArgs = parse_str("\"while reading {:?} at {}\", path, offset + 1,").unwrap();
		assert_eq!(args.message.value(), "while reading {:?} at {}");
		let values: Vec<String> = args.values.iter().map(|v| v.to_token_stream().to_string()).collect();
		assert_eq!(values, vec!["path", "offset + 1"]);
	}

	#[test]
	fn message_must_be_a_string_literal() {
		assert!(parse_str::<ContextArgs>("path").is_err());
		assert!(parse_str::<ContextArgs>("\"a\" path").is_err());
	}
}
