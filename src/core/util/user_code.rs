use uuid::Uuid;

const CODE_MIN: u128 = 100_000;
const CODE_SPAN: u128 = 900_000;

/// Random six-digit code in `100000..=999999`, drawn from a v4 UUID's random bits.
pub fn generate_user_code() -> String {
    let n = CODE_MIN + Uuid::new_v4().as_u128() % CODE_SPAN;
    n.to_string()
}

#[cfg(test)]
pub(crate) fn is_well_formed(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit()) && !code.starts_with('0')
}
