pub mod inspect;
pub mod wat2wasm;

pub use inspect::inspect_command;
pub use wat2wasm::wat2wasm_command;
