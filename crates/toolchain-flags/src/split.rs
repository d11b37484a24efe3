//! Splitting of a compiler's configured option string into arguments.

/// Split an option string into individual arguments.
///
/// Arguments are separated by whitespace. Single quotes keep their content
/// verbatim; double quotes keep their content but still honour `\` escapes;
/// outside quotes `\` escapes the next character. An unterminated quote runs
/// to the end of the input, so every string splits to something.
///
/// # Examples
///
/// ```
/// use toolchain_flags::split::split_arguments;
///
/// assert_eq!(
///     split_arguments("-O2  --gcc-toolchain='/opt/my gcc' -DX=\"a b\""),
///     vec!["-O2", "--gcc-toolchain=/opt/my gcc", "-DX=a b"]
/// );
/// ```
pub fn split_arguments(options: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;
    let mut chars = options.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_arg = true;
                }
                '\\' => {
                    in_arg = true;
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                c if c.is_whitespace() => {
                    if in_arg {
                        args.push(std::mem::take(&mut current));
                        in_arg = false;
                    }
                }
                c => {
                    current.push(c);
                    in_arg = true;
                }
            },
        }
    }

    if in_arg {
        args.push(current);
    }
    args
}
