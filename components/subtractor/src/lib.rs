//! The `subtractor` component, plugged into the calculator's `docs:subtractor/sub` import.

wit_bindgen::generate!({
    path: "../../wit/subtractor",
    world: "subtractor",
});

use self::exports::docs::subtractor::sub::Guest;

struct Subtractor;

impl Guest for Subtractor {
    fn sub(x: u32, y: u32) -> u32 {
        x.wrapping_sub(y)
    }
}

export!(Subtractor);
