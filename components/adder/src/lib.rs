//! The `adder` component.
//!
//! On traditional platforms, printing goes to the process's stdout file descriptor. A
//! component has no file descriptors: when this crate is built for `wasm32-wasip2`, the
//! standard library implements [`std::io::stdout`] on top of `wasi:cli/stdout` and
//! `wasi:io/streams`, so the host decides where the sum ends up.
//!
//! Build with:
//!
//! ```text
//! cargo build --target wasm32-wasip2 --release
//! ```

use std::io::{self, Write};

wit_bindgen::generate!({
    path: "../../wit/adder",
    world: "adder",
});

use self::exports::docs::adder::add::Guest;

struct Adder;

impl Guest for Adder {
    fn add(x: u32, y: u32) -> u32 {
        let sum = sum(x, y);
        // There is no error path out of `add`, a lost write is not reported
        let _ = print_sum(&mut io::stdout().lock(), sum);
        sum
    }
}

/// `x + y` modulo 2^32.
fn sum(x: u32, y: u32) -> u32 {
    x.wrapping_add(y)
}

/// Writes the decimal digits of `sum`, with no prefix or trailing newline.
///
/// Stdout is line-buffered and we never emit a newline, so the write must be flushed
/// before returning to the host.
fn print_sum<W: Write>(out: &mut W, sum: u32) -> io::Result<()> {
    write!(out, "{sum}")?;
    out.flush()
}

export!(Adder);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn two_plus_two() {
        assert_eq!(sum(2, 2), 4);
    }

    #[test]
    fn sum_wraps_around() {
        assert_eq!(sum(u32::MAX, 1), 0);
        assert_eq!(sum(u32::MAX, u32::MAX), u32::MAX - 1);
    }

    #[test]
    fn prints_only_the_digits() {
        let mut out = Vec::new();
        print_sum(&mut out, 4).unwrap();
        assert_eq!(out, b"4");

        let mut out = Vec::new();
        print_sum(&mut out, 0).unwrap();
        assert_eq!(out, b"0");

        let mut out = Vec::new();
        print_sum(&mut out, u32::MAX).unwrap();
        assert_eq!(out, b"4294967295");
    }

    proptest! {
        #[test]
        fn add_is_modular(x in any::<u32>(), y in any::<u32>()) {
            let expected = ((u64::from(x) + u64::from(y)) % (1u64 << 32)) as u32;
            prop_assert_eq!(sum(x, y), expected);
        }

        #[test]
        fn printed_digits_round_trip(sum in any::<u32>()) {
            let mut out = Vec::new();
            print_sum(&mut out, sum).unwrap();
            let text = String::from_utf8(out).unwrap();
            prop_assert!(text.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(text.parse::<u32>().unwrap(), sum);
        }
    }
}
