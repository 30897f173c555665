/// Groups the digits of `n` in threes, separated by `sep`
///
/// Used for currency cells in the front end and sizes in the access log.
pub fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result
}
