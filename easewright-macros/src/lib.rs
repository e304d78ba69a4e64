use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{LitStr, parse_macro_input};

/// Creates a `TimingCurve` at compile time from a string literal.
///
/// The string is resolved while compiling and expands to a
/// `TimingCurve::new()` call with the control points filled in, so the result
/// can be used in `const` items.
///
/// # Format
///
/// Either one of the preset identifiers:
/// - `linear`, `ease-in`, `ease-out`, `ease-in-ease-out`, `default`
///
/// or a CSS-style expression `cubic-bezier(x1, y1, x2, y2)` with four finite
/// numbers.
///
/// # Examples
///
/// ```ignore
/// use easewright::{TimingCurve, timing};
///
/// // Preset
/// const EASE_IN: TimingCurve = timing!("ease-in");
///
/// // Explicit control points
/// let bounce = timing!("cubic-bezier(0.5, -0.5, 0.5, 1.5)");
/// ```
#[proc_macro]
pub fn timing(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let curve_str = input.value();

    match parse_curve(&curve_str) {
        Ok(points) => {
            let [x1, y1, x2, y2] = points.map(float_tokens);
            let expanded = quote! {
                easewright::TimingCurve::new(#x1, #y1, #x2, #y2)
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid timing curve '{}': {}", curve_str, e);
            compile_error(input.span(), &error_msg)
        }
    }
}

/// Emits a float literal, with a separate minus token for negative values.
fn float_tokens(value: f64) -> proc_macro2::TokenStream {
    let literal = proc_macro2::Literal::f64_suffixed(value.abs());
    if value < 0.0 {
        quote! { -#literal }
    } else {
        quote! { #literal }
    }
}

fn compile_error(span: proc_macro2::Span, message: &str) -> TokenStream {
    TokenStream::from(quote_spanned! {span=>
        compile_error!(#message)
    })
}

fn preset_points(name: &str) -> Option<[f64; 4]> {
    match name {
        "linear" => Some([0.0, 0.0, 1.0, 1.0]),
        "ease-in" => Some([0.42, 0.0, 1.0, 1.0]),
        "ease-out" => Some([0.0, 0.0, 0.58, 1.0]),
        "ease-in-ease-out" => Some([0.42, 0.0, 0.58, 1.0]),
        "default" => Some([0.25, 0.1, 0.25, 1.0]),
        _ => None,
    }
}

fn parse_curve(s: &str) -> Result<[f64; 4], String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let Some(args) = s
        .strip_prefix("cubic-bezier(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return preset_points(s).ok_or_else(|| format!("unknown preset '{}'", s));
    };

    let mut points = [0.0; 4];
    let mut count = 0;
    for part in args.split(',') {
        if count == 4 {
            return Err("expected 4 control point values".to_string());
        }
        let part = part.trim();
        let value = part
            .parse::<f64>()
            .map_err(|_| format!("invalid number '{}'", part))?;
        if !value.is_finite() {
            return Err(format!("non-finite value '{}'", part));
        }
        points[count] = value;
        count += 1;
    }

    if count != 4 {
        return Err("expected 4 control point values".to_string());
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        assert_eq!(parse_curve("linear"), Ok([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(parse_curve("default"), Ok([0.25, 0.1, 0.25, 1.0]));
        assert_eq!(parse_curve(" ease-in-ease-out "), Ok([0.42, 0.0, 0.58, 1.0]));
        assert!(parse_curve("bogus").is_err());
        assert!(parse_curve("").is_err());
    }

    #[test]
    fn test_parse_cubic_bezier() {
        assert_eq!(
            parse_curve("cubic-bezier(0.1, 0.7, 1.0, 0.1)"),
            Ok([0.1, 0.7, 1.0, 0.1])
        );
        assert_eq!(
            parse_curve("cubic-bezier(0.5,-0.5,0.5,1.5)"),
            Ok([0.5, -0.5, 0.5, 1.5])
        );
    }

    #[test]
    fn test_parse_cubic_bezier_errors() {
        assert!(parse_curve("cubic-bezier(0.1, 0.7, 1.0)").is_err());
        assert!(parse_curve("cubic-bezier(0.1, 0.7, 1.0, 0.1, 0.2)").is_err());
        assert!(parse_curve("cubic-bezier(0.1, x, 1.0, 0.1)").is_err());
        assert!(parse_curve("cubic-bezier(0.1, NaN, 1.0, 0.1)").is_err());
        assert!(parse_curve("cubic-bezier(0.1, 0.7, 1.0, 0.1").is_err());
    }
}
