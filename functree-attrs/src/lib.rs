mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use functree_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not a valid height", self.height),
///     labels = ["this height"],
///     help = "the height of a tree must be at least 1",
/// )]
/// pub struct InvalidHeight {
///     pub height: i64,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                   |
/// | --------- | ----------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error when it is displayed.           |
/// | `labels`  | An array of label texts, one for each span the error is reported with.        |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.  |
///
/// Each tag accepts an expression that should evaluate to something convertible into a
/// [`String`]. For structs with named fields, the expression is evaluated with the members of
/// the struct in scope (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl functree_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
