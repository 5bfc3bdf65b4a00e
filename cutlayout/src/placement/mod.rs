mod scanner;

#[doc(inline)]
pub use scanner::find_slot;
