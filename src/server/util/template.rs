/// Fills the `{}` placeholders of `template` with `args` in order.
///
/// `{{` and `}}` produce literal braces. Placeholders without a matching argument are left
/// untouched and surplus arguments are ignored.
pub fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                result.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                match args.next() {
                    Some(arg) => result.push_str(arg),
                    None => result.push_str("{}"),
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Formats a money amount, keeping one decimal place for whole numbers (`100.0`)
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}
