use smallvec::SmallVec;

/// Add two ASCII binary strings, returning their sum as a binary string.
///
/// Ripple add from the least significant end with a carry, collecting output
/// digits into an inline buffer that only spills for results past 64 bits.
/// Inputs must consist of `0` and `1` only; anything else is a precondition
/// violation with unspecified output.
pub fn add_binary(a: &str, b: &str) -> String {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    // digits accumulate least-significant first
    let mut digits: SmallVec<[u8; 64]> = SmallVec::new();
    let mut carry = 0u8;
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 || carry > 0 {
        let mut total = carry;
        if i > 0 {
            i -= 1;
            total += a[i] - b'0';
        }
        if j > 0 {
            j -= 1;
            total += b[j] - b'0';
        }
        digits.push(b'0' + total % 2);
        carry = total / 2;
    }

    digits.iter().rev().map(|&d| char::from(d)).collect()
}
