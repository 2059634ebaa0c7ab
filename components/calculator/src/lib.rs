//! The `calculator` component.
//!
//! Arithmetic is delegated to whatever satisfies the `docs:adder/add` and
//! `docs:subtractor/sub` imports, so this component only runs once it has been composed with
//! an adder and a subtractor:
//!
//! ```text
//! wac plug calculator.wasm --plug adder.wasm --plug subtractor.wasm -o composed.wasm
//! ```

wit_bindgen::generate!({
    path: "../../wit/calculator",
    world: "calculator",
});

use self::{
    docs::{adder::add::add, subtractor::sub::sub},
    exports::docs::calculator::calculate::{Guest, Op},
};

struct Calculator;

impl Guest for Calculator {
    fn eval_expression(op: Op, x: u32, y: u32) -> u32 {
        match op {
            Op::Add => add(x, y),
            Op::Sub => sub(x, y),
        }
    }
}

export!(Calculator);
