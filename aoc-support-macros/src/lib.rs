//! Procedural macros for the `aoc-support` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// The properties accepted by `#[puzzle(...)]`.
#[derive(Default)]
struct PuzzleProperties {
    title: Option<Expr>,
    parser: Option<Type>,
    part_one: Option<Type>,
    part_two: Option<Type>,
}

/// Store a property value, rejecting a second occurrence of the same key.
fn set_once<T: syn::parse::Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta<'_>,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

impl PuzzleProperties {
    fn parse_property(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("title") {
            set_once(&mut self.title, meta, "title")
        } else if meta.path.is_ident("parser") {
            set_once(&mut self.parser, meta, "parser")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, meta, "part_two")
        } else {
            Err(meta.error("unsupported puzzle property"))
        }
    }
}

/// Attribute implementing `aoc_support::runner::Puzzle` for a struct or an impl block's type.
///
/// # Properties
///
/// - `title` (required): an expression evaluating to `&str`, reported before running.
/// - `part_one` (required): the type implementing `Solution<PartOne>`.
/// - `part_two` (optional): the type implementing `Solution<PartTwo>`.
/// - `parser` (optional): a `ParseData` type parsed once and passed to both parts. Without it the
///   parts receive the raw input `str`.
///
/// # Examples
///
/// ```ignore
/// #[puzzle(title = "Day 5: Cafeteria", parser = Inventory, part_one = Day05, part_two = Day05)]
/// impl super::AdventOfCode2025<5> {}
/// ```
///
/// A missing required property, a repeated property, an unknown property, or an item other than a
/// struct or impl block is a compile error.
#[proc_macro_attribute]
pub fn puzzle(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = PuzzleProperties::default();
    let property_parser = syn::meta::parser(|meta| properties.parse_property(&meta));
    parse_macro_input!(args with property_parser);

    let Some(title) = properties.title else {
        return Error::new(Span::call_site(), "missing required property: 'title'")
            .to_compile_error()
            .into();
    };
    let Some(part_one) = properties.part_one else {
        return Error::new(Span::call_site(), "missing required property: 'part_one'")
            .to_compile_error()
            .into();
    };

    let parse_input = match &properties.parser {
        Some(parser) => quote! {
            let parsed = aoc_support::runner::parse_step::<#parser>(input, reporter, timed)?;
            let parsed = &parsed;
        },
        None => quote! {
            let parsed: &str = input;
        },
    };
    let solve_part_two = properties.part_two.map(|part_two| {
        quote! {
            aoc_support::runner::part_step::<#part_two, aoc_support::PartTwo>(
                parsed, reporter, timed
            )?;
        }
    });

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let self_ty = match parse_macro_input!(input as Item) {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                Span::call_site(),
                "#[puzzle] can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl aoc_support::runner::Puzzle for #self_ty {
            fn run(
                input: &str,
                reporter: &mut dyn aoc_support::runner::Reporter,
                timed: bool,
            ) -> aoc_support::DynamicResult<()> {
                reporter.puzzle_title(#title);
                #parse_input
                aoc_support::runner::part_step::<#part_one, aoc_support::PartOne>(
                    parsed, reporter, timed
                )?;
                #solve_part_two
                Ok(())
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use syn::parse::Parser;

    use super::*;

    fn parse_properties(args: proc_macro2::TokenStream) -> syn::Result<PuzzleProperties> {
        let mut properties = PuzzleProperties::default();
        syn::meta::parser(|meta| properties.parse_property(&meta)).parse2(args)?;
        Ok(properties)
    }

    #[test]
    fn parses_every_property() -> syn::Result<()> {
        let properties = parse_properties(quote! {
            title = "Day 5: Cafeteria",
            parser = Inventory,
            part_one = Day05,
            part_two = Day05
        })?;
        assert!(properties.title.is_some());
        assert!(properties.parser.is_some());
        assert!(properties.part_one.is_some());
        assert!(properties.part_two.is_some());
        Ok(())
    }

    #[test]
    fn optional_properties_can_be_left_out() -> syn::Result<()> {
        let properties = parse_properties(quote! { title = "Day 1", part_one = Day01 })?;
        assert!(properties.parser.is_none());
        assert!(properties.part_two.is_none());
        Ok(())
    }

    #[test]
    fn repeated_property_is_rejected() {
        let Err(error) = parse_properties(quote! {
            title = "Day 1",
            title = "Day 1 again",
            part_one = Day01
        }) else {
            panic!("a repeated title should not parse");
        };
        assert_eq!(error.to_string(), "duplicate 'title' property");
    }

    #[test]
    fn unknown_property_is_rejected() {
        let Err(error) = parse_properties(quote! { title = "Day 1", part_three = Day01 }) else {
            panic!("an unknown property should not parse");
        };
        assert_eq!(error.to_string(), "unsupported puzzle property");
    }

    #[test]
    fn property_needs_a_value() {
        assert!(parse_properties(quote! { title }).is_err());
    }
}
